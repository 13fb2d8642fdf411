use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

const MAX_NAME_LEN: usize = 50;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_/-]*$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_name(name: &str) -> Result<String, String> {
    if name.len() > MAX_NAME_LEN {
        return Err(format!("Name must be {MAX_NAME_LEN} characters or less"));
    }
    if !NAME_REGEX.is_match(name) {
        return Err("Name must match pattern: ^[a-zA-Z_][a-zA-Z0-9_/-]*$".to_string());
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("local").is_ok());
        assert!(validate_name("staging-eu").is_ok());
        assert!(validate_name("team/dev").is_ok());
        assert!(validate_name("_private").is_ok());

        assert!(validate_name("1local").is_err());
        assert!(validate_name("-local").is_err());
        assert!(validate_name("/local").is_err());
        assert!(validate_name("my env").is_err());
        assert!(validate_name("../secrets").is_err());
    }

    #[test]
    fn test_validate_name_length() {
        assert!(validate_name(&"a".repeat(50)).is_ok());
        assert!(validate_name(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().to_string();
        assert_eq!(validate_path_exists(&path).unwrap(), path);
        assert!(validate_path_exists(&format!("{path}/missing.bru")).is_err());
    }
}
