use crate::core::error::BruError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct BruConfig {
    pub bru_file_path: String,
    pub environment: Option<String>,
    pub save_output: bool,
    pub output_file_path: Option<PathBuf>,
    pub pretty_print: bool,
}

impl BruConfig {
    pub fn new(
        bru_file_path: impl Into<String>,
        environment: Option<String>,
        save_output: bool,
        output_file_path: Option<PathBuf>,
        pretty_print: bool,
    ) -> Result<Self, BruError> {
        let bru_file_path = bru_file_path.into();
        if bru_file_path.is_empty() {
            return Err(BruError::EmptyBruFilePath);
        }
        if !Path::new(&bru_file_path).is_file() {
            return Err(BruError::FileNotFound(bru_file_path));
        }
        Ok(Self {
            bru_file_path,
            environment: environment.filter(|e| !e.is_empty()),
            save_output,
            output_file_path,
            pretty_print,
        })
    }

    /// Config for resolving a file without sending or saving anything.
    pub fn for_show(bru_file_path: impl Into<String>, environment: Option<String>) -> Result<Self, BruError> {
        Self::new(bru_file_path, environment, false, None, false)
    }
}

// Fields are kept in alphabetical order so text and JSON output list them
// the same way.

#[derive(Debug, Clone, Serialize)]
pub struct RunResultView {
    pub elapsed_ms: u64,
    pub method: String,
    pub output_file: Option<String>,
    pub status: u16,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestShowView {
    pub body: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub method: String,
    pub name: Option<String>,
    pub seq: Option<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            BruConfig::new("", None, true, None, true),
            Err(BruError::EmptyBruFilePath)
        ));
    }

    #[test]
    fn test_missing_or_directory_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bru");
        assert!(matches!(
            BruConfig::for_show(missing.to_string_lossy(), None),
            Err(BruError::FileNotFound(_))
        ));
        assert!(matches!(
            BruConfig::for_show(dir.path().to_string_lossy(), None),
            Err(BruError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_empty_environment_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("req.bru");
        std::fs::write(&path, "get {\n  url: http://x/\n}\n").unwrap();
        let config = BruConfig::for_show(path.to_string_lossy(), Some(String::new())).unwrap();
        assert!(config.environment.is_none());
        assert!(!config.save_output);
    }
}
