use super::keywords::{SECTION_GET, SECTION_HEAD, SECTION_POST};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum HttpMethod {
    GET,
    HEAD,
    POST,
}

impl HttpMethod {
    /// Maps a request section name (`get`, `head`, `post`) to its method.
    pub fn from_section_name(name: &str) -> Option<Self> {
        match name {
            SECTION_GET => Some(Self::GET),
            SECTION_HEAD => Some(Self::HEAD),
            SECTION_POST => Some(Self::POST),
            _ => None,
        }
    }

    pub fn section_name(&self) -> &'static str {
        match self {
            Self::GET => SECTION_GET,
            Self::HEAD => SECTION_HEAD,
            Self::POST => SECTION_POST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
        }
    }

    pub fn to_reqwest_method(&self) -> reqwest::Method {
        match self {
            Self::GET => reqwest::Method::GET,
            Self::HEAD => reqwest::Method::HEAD,
            Self::POST => reqwest::Method::POST,
        }
    }
}
