use crate::core::error::BruError;

/// Exit codes for the brux CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Syntax error in a Bru file (also used for usage errors)
    SyntaxError = 2,
    /// Configuration error (dotenv, invalid settings)
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// The file defines no request
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Variable resolution error
    VariableError = 8,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&BruError> for ExitCode {
    fn from(error: &BruError) -> Self {
        match error {
            BruError::Io(_) => ExitCode::FileError,
            BruError::Syntax(_) => ExitCode::SyntaxError,
            BruError::Template(_) => ExitCode::VariableError,
            BruError::Dotenv { .. } => ExitCode::ConfigError,
            BruError::Http(_) => ExitCode::NetworkError,
            BruError::EmptyBruFilePath => ExitCode::ConfigError,
            BruError::FileNotFound(_) => ExitCode::FileError,
            BruError::RequestNotFound(_) => ExitCode::NotFoundError,
            BruError::Validation(_) => ExitCode::ConfigError,
        }
    }
}
