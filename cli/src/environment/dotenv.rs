//! `.env` parsing: one `KEY=VALUE` per line.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::error::BruError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid .env syntax at line {line}: '{text}'")]
pub struct DotenvError {
    pub line: usize,
    pub text: String,
}

pub fn load_file(path: &Path) -> Result<BTreeMap<String, String>, BruError> {
    let content = fs::read_to_string(path)?;
    parse(&content).map_err(|source| BruError::Dotenv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str) -> Result<BTreeMap<String, String>, DotenvError> {
    let mut vars = BTreeMap::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (key, value) = parse_line(trimmed).ok_or_else(|| DotenvError {
            line: index + 1,
            text: trimmed.to_string(),
        })?;
        vars.insert(key, value);
    }
    Ok(vars)
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);
    let (key, raw_value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key.to_string(), parse_value(raw_value.trim())?))
}

fn parse_value(raw: &str) -> Option<String> {
    if let Some(inner) = raw.strip_prefix('"') {
        let end = closing_quote(inner, '"')?;
        trailing_is_comment(&inner[end + 1..]).then(|| unescape_double_quoted(&inner[..end]))
    } else if let Some(inner) = raw.strip_prefix('\'') {
        let end = closing_quote(inner, '\'')?;
        trailing_is_comment(&inner[end + 1..]).then(|| inner[..end].to_string())
    } else {
        let value = match raw.find(" #").or_else(|| raw.find("\t#")) {
            Some(pos) => &raw[..pos],
            None if raw.starts_with('#') => "",
            None => raw,
        };
        Some(value.trim().to_string())
    }
}

fn closing_quote(s: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' && quote == '"' {
            escaped = true;
        } else if c == quote {
            return Some(i);
        }
    }
    None
}

fn trailing_is_comment(rest: &str) -> bool {
    let rest = rest.trim();
    rest.is_empty() || rest.starts_with('#')
}

fn unescape_double_quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('$') => result.push('$'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let vars = parse("KEY=value\nOTHER = spaced out \n").unwrap();
        assert_eq!(vars["KEY"], "value");
        assert_eq!(vars["OTHER"], "spaced out");
    }

    #[test]
    fn test_parse_quoted() {
        let vars = parse("A=\"hello world\"\nB='single $quoted'\n").unwrap();
        assert_eq!(vars["A"], "hello world");
        assert_eq!(vars["B"], "single $quoted");
    }

    #[test]
    fn test_parse_escape_sequences() {
        let vars = parse(r#"KEY="line1\nline2 \"q\" \\ \x""#).unwrap();
        assert_eq!(vars["KEY"], "line1\nline2 \"q\" \\ \\x");
    }

    #[test]
    fn test_single_quotes_are_literal() {
        let vars = parse(r"KEY='a\nb'").unwrap();
        assert_eq!(vars["KEY"], r"a\nb");
    }

    #[test]
    fn test_comments() {
        let content = "# full line comment\nKEY=value # inline\nURL=http://x/#frag\nQ=\"a # b\" # c\n";
        let vars = parse(content).unwrap();
        assert_eq!(vars["KEY"], "value");
        assert_eq!(vars["URL"], "http://x/#frag");
        assert_eq!(vars["Q"], "a # b");
    }

    #[test]
    fn test_export_prefix_and_empty_value() {
        let vars = parse("export TOKEN=abc\nEMPTY=\n").unwrap();
        assert_eq!(vars["TOKEN"], "abc");
        assert_eq!(vars["EMPTY"], "");
    }

    #[test]
    fn test_later_keys_override() {
        let vars = parse("A=1\nA=2\n").unwrap();
        assert_eq!(vars["A"], "2");
    }

    #[test]
    fn test_invalid_lines() {
        assert_eq!(
            parse("A=1\nnot a pair\n").unwrap_err(),
            DotenvError {
                line: 2,
                text: "not a pair".into()
            }
        );
        assert!(parse("=value").is_err());
        assert!(parse("A=\"unterminated").is_err());
        assert!(parse("A=\"x\" trailing").is_err());
    }

    #[test]
    fn test_load_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "BROKEN\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, BruError::Dotenv { .. }));
        assert!(err.to_string().contains("line 1"));
    }
}
