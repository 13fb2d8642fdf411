//! Persisting response bodies.

use super::models::BruConfig;
use crate::core::error::BruError;
use content_inspector::{inspect, ContentType};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

lazy_static! {
    static ref UNSAFE_FILE_NAME_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9-]+").unwrap();
}

const OUTPUT_FILE_PREFIX: &str = "bru-output";

/// Writes `data` as configured and returns where it went, `None` when
/// saving is disabled.
pub fn maybe_save_output(config: &BruConfig, data: &[u8]) -> Result<Option<PathBuf>, BruError> {
    if !config.save_output {
        return Ok(None);
    }

    let path = match &config.output_file_path {
        Some(path) => path.clone(),
        None => default_output_path(
            Path::new(&config.bru_file_path),
            config.environment.as_deref(),
            data,
        ),
    };

    let pretty;
    let data = if config.pretty_print {
        pretty = maybe_pretty_print(data);
        pretty.as_slice()
    } else {
        data
    };

    write_private(&path, data).map_err(|e| {
        BruError::Io(io::Error::new(
            e.kind(),
            format!("could not write {}: {e}", crate::core::paths::clean_path(&path)),
        ))
    })?;
    tracing::info!(output_file_path = %path.display(), "output saved");
    Ok(Some(path))
}

/// `<temp dir>/bru-output-<stem>-<env>-<hash><ext>`, empty parts omitted.
pub fn default_output_path(bru_file_path: &Path, environment: Option<&str>, data: &[u8]) -> PathBuf {
    let stem = bru_file_path
        .file_stem()
        .map(|s| sanitize_file_name(&s.to_string_lossy()))
        .unwrap_or_default();
    let suffix = format!("{}{}", short_hash(data), sniff_extension(data));

    let name = [
        OUTPUT_FILE_PREFIX,
        stem.as_str(),
        environment.unwrap_or(""),
        suffix.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("-");
    std::env::temp_dir().join(name)
}

pub fn sanitize_file_name(name: &str) -> String {
    let replaced = UNSAFE_FILE_NAME_CHARS.replace_all(name, "-");
    replaced.replace("--", "-").trim_matches('-').to_string()
}

/// First 8 hex digits of the SHA-256 of `data`.
pub fn short_hash(data: &[u8]) -> String {
    let mut digest = hex::encode(Sha256::digest(data));
    digest.truncate(8);
    digest
}

/// File extension for saved output, leading dot included. Binary bodies are
/// named after their magic number when it is recognised.
pub fn sniff_extension(data: &[u8]) -> String {
    if is_json(data) {
        return ".json".to_string();
    }
    if matches!(inspect(data), ContentType::BINARY) {
        return infer::get(data)
            .map(|kind| format!(".{}", kind.extension()))
            .unwrap_or_else(|| ".bin".to_string());
    }
    let text = String::from_utf8_lossy(data);
    let head = text.trim_start().to_ascii_lowercase();
    let ext = if head.starts_with("<!doctype html") || head.starts_with("<html") {
        ".html"
    } else if head.starts_with("<?xml") {
        ".xml"
    } else {
        ".txt"
    };
    ext.to_string()
}

fn is_json(data: &[u8]) -> bool {
    !data.is_empty() && serde_json::from_slice::<serde_json::Value>(data).is_ok()
}

/// Re-indents JSON bodies; anything else is returned unchanged.
pub fn maybe_pretty_print(data: &[u8]) -> Vec<u8> {
    crate::core::json::pretty_print(data).unwrap_or_else(|| data.to_vec())
}

#[cfg(unix)]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &Path, output_file: Option<PathBuf>, pretty: bool) -> BruConfig {
        let bru = dir.join("req.bru");
        fs::write(&bru, "get {\n  url: http://x/\n}\n").unwrap();
        BruConfig::new(bru.to_string_lossy(), Some("local".into()), true, output_file, pretty).unwrap()
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Get Users (v2)"), "Get-Users-v2");
        assert_eq!(sanitize_file_name("__weird__name__"), "weird-name");
        assert_eq!(sanitize_file_name("a-_b"), "a-b");
        assert_eq!(sanitize_file_name("***"), "");
    }

    #[test]
    fn test_short_hash() {
        // sha256("") = e3b0c442...
        assert_eq!(short_hash(b""), "e3b0c442");
        assert_eq!(short_hash(b"abc").len(), 8);
    }

    #[test]
    fn test_sniff_extension() {
        assert_eq!(sniff_extension(br#"{"a": 1}"#), ".json");
        assert_eq!(sniff_extension(b"[1, 2]"), ".json");
        assert_eq!(sniff_extension(b"<!DOCTYPE html><html></html>"), ".html");
        assert_eq!(sniff_extension(b"  <html><body/></html>"), ".html");
        assert_eq!(sniff_extension(b"<?xml version=\"1.0\"?><a/>"), ".xml");
        assert_eq!(sniff_extension(b"plain text\n"), ".txt");
        assert_eq!(sniff_extension(b""), ".txt");
        assert_eq!(sniff_extension(&[0x00, 0xff, 0x10]), ".bin");
    }

    #[test]
    fn test_sniff_extension_names_binary_by_magic_number() {
        let png = [
            0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48,
            0x44, 0x52,
        ];
        assert_eq!(sniff_extension(&png), ".png");

        let path = default_output_path(Path::new("logo.bru"), None, &png);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, format!("bru-output-logo-{}.png", short_hash(&png)));
    }

    #[test]
    fn test_default_output_path() {
        let data = br#"{"ok":true}"#;
        let path = default_output_path(Path::new("dir/Get User.bru"), Some("dev"), data);
        assert_eq!(path.parent().unwrap(), std::env::temp_dir());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, format!("bru-output-Get-User-dev-{}.json", short_hash(data)));

        let path = default_output_path(Path::new("ping.bru"), None, b"pong");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, format!("bru-output-ping-{}.txt", short_hash(b"pong")));
    }

    #[test]
    fn test_pretty_print_only_json() {
        assert_eq!(maybe_pretty_print(br#"{"a":1}"#), b"{\n  \"a\": 1\n}".to_vec());
        assert_eq!(maybe_pretty_print(b"{broken"), b"{broken".to_vec());
    }

    #[test]
    fn test_save_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(dir.path(), None, true);
        cfg.save_output = false;
        assert!(maybe_save_output(&cfg, b"data").unwrap().is_none());
    }

    #[test]
    fn test_save_to_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.json");
        let cfg = config(dir.path(), Some(target.clone()), true);

        let saved = maybe_save_output(&cfg, br#"{"id":7}"#).unwrap();
        assert_eq!(saved.as_deref(), Some(target.as_path()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "{\n  \"id\": 7\n}");
    }

    #[test]
    fn test_save_without_pretty_print_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.json");
        let cfg = config(dir.path(), Some(target.clone()), false);

        maybe_save_output(&cfg, br#"{"id":7}"#).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), r#"{"id":7}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.txt");
        let cfg = config(dir.path(), Some(target.clone()), false);

        maybe_save_output(&cfg, b"secret").unwrap();
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
