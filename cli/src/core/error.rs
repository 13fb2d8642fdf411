use crate::environment::dotenv::DotenvError;
use crate::syntax::error::{SyntaxError, UnresolvedTemplate};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BruError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Template(#[from] UnresolvedTemplate),

    #[error("could not parse {}: {source}", crate::core::paths::display_path(.path))]
    Dotenv {
        path: std::path::PathBuf,
        #[source]
        source: DotenvError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("empty bru file path")]
    EmptyBruFilePath,

    #[error("file does not exist: {}", crate::core::paths::clean_path_str(.0))]
    FileNotFound(String),

    #[error("no request section (get, head or post) found in {}", crate::core::paths::clean_path_str(.0))]
    RequestNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, BruError>;
