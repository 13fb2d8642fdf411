//! Upward search for the variable sources of a Bru file.
//!
//! Two independent walks start at the directory holding the Bru file:
//! one looks for `environments/<name>.bru`, the other for a `.env` file.
//! Both stop at the collection root (the directory containing
//! `bruno.json`), at the filesystem root, or after [`MAX_WALK_DEPTH`]
//! levels. Finding nothing is not an error.

use super::dotenv;
use crate::core::error::BruError;
use crate::syntax::BruFile;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const ENVIRONMENTS_DIR_NAME: &str = "environments";
pub const COLLECTION_ROOT_MARKER: &str = "bruno.json";
pub const DOTENV_FILE_NAME: &str = ".env";
pub const ENVIRONMENT_FILE_EXTENSION: &str = "bru";
pub const MAX_WALK_DEPTH: usize = 64;

pub fn is_collection_root(dir: &Path) -> bool {
    dir.join(COLLECTION_ROOT_MARKER).is_file()
}

/// Absolute directory containing `bru_file_path`.
fn start_dir(bru_file_path: &Path) -> Result<PathBuf, BruError> {
    let parent = match bru_file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    parent.canonicalize().map_err(|e| {
        BruError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "could not get absolute path of '{}': {e}",
                crate::core::paths::clean_path(parent)
            ),
        ))
    })
}

/// Visits `start` and its ancestors until `visit` yields a value or a stop
/// condition is reached. Directories above the collection root are never
/// visited.
fn walk_up<T, F>(
    start: &Path,
    what: &str,
    warn_at_root: bool,
    mut visit: F,
) -> Result<Option<T>, BruError>
where
    F: FnMut(&Path) -> Result<Option<T>, BruError>,
{
    let mut dir = Some(start);
    let mut depth = 0;
    while let Some(current) = dir {
        tracing::debug!(dir = %current.display(), what, "searching");
        if let Some(found) = visit(current)? {
            return Ok(Some(found));
        }
        if is_collection_root(current) {
            if warn_at_root {
                tracing::warn!(dir = %current.display(), what, "reached top of bruno collection dir without a match");
            } else {
                tracing::info!(dir = %current.display(), what, "reached top of bruno collection dir without a match");
            }
            return Ok(None);
        }
        depth += 1;
        if depth >= MAX_WALK_DEPTH {
            tracing::warn!(dir = %current.display(), what, depth, "search depth limit reached");
            return Ok(None);
        }
        dir = current.parent();
    }
    tracing::info!(what, "reached filesystem root without a match");
    Ok(None)
}

pub fn find_environment_file(start: &Path, environment: &str) -> Result<Option<PathBuf>, BruError> {
    let file_name = format!("{environment}.{ENVIRONMENT_FILE_EXTENSION}");
    walk_up(start, ENVIRONMENTS_DIR_NAME, true, |dir| {
        let env_dir = dir.join(ENVIRONMENTS_DIR_NAME);
        if !env_dir.is_dir() {
            return Ok(None);
        }
        let candidate = env_dir.join(&file_name);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        tracing::debug!(dir = %env_dir.display(), environment, "environment file not in this dir");
        Ok(None)
    })
}

pub fn find_dotenv_file(start: &Path) -> Result<Option<PathBuf>, BruError> {
    walk_up(start, DOTENV_FILE_NAME, false, |dir| {
        let candidate = dir.join(DOTENV_FILE_NAME);
        Ok(candidate.is_file().then_some(candidate))
    })
}

/// Variables of `environment` for the Bru file at `bru_file_path`, empty
/// when the environment file cannot be found.
pub fn environment_variables(
    bru_file_path: &Path,
    environment: &str,
) -> Result<BTreeMap<String, String>, BruError> {
    let start = start_dir(bru_file_path)?;
    match find_environment_file(&start, environment)? {
        Some(path) => {
            let bru_file = BruFile::from_path(&path)?;
            tracing::info!(
                file = %path.display(),
                variables = bru_file.variables().len(),
                "Loading environment variables"
            );
            Ok(bru_file.variables().clone())
        }
        None => {
            tracing::info!(environment, "environment file not found");
            Ok(BTreeMap::new())
        }
    }
}

/// Entries of the nearest `.env` file, empty when there is none.
pub fn dotenv_variables(bru_file_path: &Path) -> Result<BTreeMap<String, String>, BruError> {
    let start = start_dir(bru_file_path)?;
    match find_dotenv_file(&start)? {
        Some(path) => {
            let vars = dotenv::load_file(&path)?;
            tracing::info!(
                file = %path.display(),
                variables = vars.len(),
                "Loading environment variables"
            );
            Ok(vars)
        }
        None => {
            tracing::info!("'.env' file not found");
            Ok(BTreeMap::new())
        }
    }
}

/// Environment-file variables overlaid with `.env` entries, which win on
/// conflicts.
pub fn collect_variables(
    bru_file_path: &Path,
    environment: Option<&str>,
) -> Result<BTreeMap<String, String>, BruError> {
    let mut variables = match environment {
        Some(name) if !name.is_empty() => environment_variables(bru_file_path, name)?,
        _ => BTreeMap::new(),
    };
    variables.extend(dotenv_variables(bru_file_path)?);
    Ok(variables)
}
