use std::path::Path;

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

pub fn clean_path(path: &Path) -> String {
    let s = path.display().to_string();
    clean_path_str(&s).to_string()
}

/// Shows `path` relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(stripped) = path.strip_prefix(&cwd) {
            return stripped.display().to_string();
        }
    }
    clean_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let nested = cwd.join("collection").join("req.bru");
        assert_eq!(
            display_path(&nested),
            Path::new("collection").join("req.bru").display().to_string()
        );
    }

    #[test]
    fn test_display_path_keeps_relative_paths() {
        assert_eq!(display_path(Path::new("a/b.bru")), "a/b.bru");
    }
}
