use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("invalid section start: '{0}'")]
    InvalidSectionStart(String),
    #[error("invalid key value pair: '{0}'")]
    InvalidKeyValuePair(String),
    #[error("unknown section name: '{0}'")]
    UnknownSectionName(String),
    #[error("unsupported request type: '{0}'")]
    UnsupportedRequestType(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    pub file_path: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize) -> Self {
        Self {
            kind,
            line,
            file_path: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file_path {
            write!(
                f,
                "Syntax error in {} at line {}: {}",
                crate::core::paths::display_path(std::path::Path::new(file)),
                self.line,
                self.kind
            )
        } else {
            write!(f, "Syntax error at line {}: {}", self.line, self.kind)
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// The part of a request a placeholder was left in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Url,
    HeaderName,
    HeaderValue,
    Body,
}

impl std::fmt::Display for TemplateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TemplateField::Url => "URL",
            TemplateField::HeaderName => "header name",
            TemplateField::HeaderValue => "header value",
            TemplateField::Body => "body",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Variable resolution failed: template variables found in {field}: '{value}'")]
pub struct UnresolvedTemplate {
    pub field: TemplateField,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_file() {
        let err = SyntaxError::new(SyntaxErrorKind::InvalidSectionStart("get".into()), 3);
        assert_eq!(
            err.to_string(),
            "Syntax error at line 3: invalid section start: 'get'"
        );
    }

    #[test]
    fn test_display_with_file() {
        let err = SyntaxError::new(SyntaxErrorKind::UnknownSectionName("put".into()), 7)
            .with_file("/tmp/collection/req.bru");
        assert_eq!(
            err.to_string(),
            "Syntax error in /tmp/collection/req.bru at line 7: unknown section name: 'put'"
        );
    }

    #[test]
    fn test_unresolved_template_message() {
        let err = UnresolvedTemplate {
            field: TemplateField::HeaderValue,
            value: "Bearer {{token}}".into(),
        };
        assert!(err.to_string().contains("header value"));
        assert!(err.to_string().contains("Bearer {{token}}"));
    }
}
