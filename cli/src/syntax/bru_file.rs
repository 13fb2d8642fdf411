use super::{
    error::{SyntaxError, SyntaxErrorKind, TemplateField, UnresolvedTemplate},
    http_method::HttpMethod,
    keywords::{
        BODY_KIND_JSON, KEY_AUTH, KEY_BODY, KEY_NAME, KEY_SEQ, KEY_TYPE, KEY_URL,
        REQUEST_TYPE_HTTP, SECTION_BODY_JSON, SECTION_HEADERS, SECTION_META, SECTION_VARS,
    },
    lines::CleanLines,
    section::{Section, SectionScanner},
    template,
};
use crate::core::error::BruError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub name: String,
    pub req_type: String,
    pub seq: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub url: String,
    pub body_kind: String,
    pub auth: String,
}

/// A section after its name has been checked, carrying the typed payload
/// for that kind of section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Meta(Meta),
    Request(RequestLine),
    Headers(BTreeMap<String, String>),
    Vars(BTreeMap<String, String>),
    BodyJson(String),
}

impl TryFrom<Section> for SectionKind {
    type Error = SyntaxError;

    fn try_from(section: Section) -> Result<Self, Self::Error> {
        let Section {
            name,
            line,
            mut values,
            raw_data,
        } = section;

        if let Some(method) = HttpMethod::from_section_name(&name) {
            return Ok(SectionKind::Request(RequestLine {
                method,
                url: take(&mut values, KEY_URL),
                body_kind: take(&mut values, KEY_BODY),
                auth: take(&mut values, KEY_AUTH),
            }));
        }

        match name.as_str() {
            SECTION_META => {
                let meta = Meta {
                    name: take(&mut values, KEY_NAME),
                    req_type: take(&mut values, KEY_TYPE),
                    seq: take(&mut values, KEY_SEQ),
                };
                if meta.req_type != REQUEST_TYPE_HTTP {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnsupportedRequestType(meta.req_type),
                        line,
                    ));
                }
                Ok(SectionKind::Meta(meta))
            }
            SECTION_HEADERS => Ok(SectionKind::Headers(values)),
            SECTION_VARS => Ok(SectionKind::Vars(values)),
            SECTION_BODY_JSON => Ok(SectionKind::BodyJson(raw_data)),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::UnknownSectionName(name),
                line,
            )),
        }
    }
}

fn take(values: &mut BTreeMap<String, String>, key: &str) -> String {
    values.remove(key).unwrap_or_default()
}

/// A parsed Bru file. Everything but the variables is fixed once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BruFile {
    meta: Option<Meta>,
    request: Option<RequestLine>,
    headers: BTreeMap<String, String>,
    body_json: Option<String>,
    vars: BTreeMap<String, String>,
}

impl BruFile {
    pub fn from_path(path: &Path) -> Result<Self, BruError> {
        let file = File::open(path).map_err(|e| {
            BruError::Io(std::io::Error::new(
                e.kind(),
                format!("could not open {}: {e}", crate::core::paths::clean_path(path)),
            ))
        })?;
        Self::parse(BufReader::new(file)).map_err(|e| match e {
            BruError::Syntax(err) => {
                BruError::Syntax(err.with_file(path.to_string_lossy().to_string()))
            }
            other => other,
        })
    }

    pub fn parse<R: BufRead>(reader: R) -> Result<Self, BruError> {
        let mut bru_file = BruFile::default();
        for section in SectionScanner::new(CleanLines::new(reader)) {
            let section = section?;
            tracing::debug!(
                section = %section.name,
                values = ?section.values,
                "section"
            );
            bru_file.apply(SectionKind::try_from(section)?);
        }
        Ok(bru_file)
    }

    fn apply(&mut self, kind: SectionKind) {
        match kind {
            SectionKind::Meta(meta) => self.meta = Some(meta),
            SectionKind::Request(request) => self.request = Some(request),
            SectionKind::Headers(headers) => self.headers.extend(headers),
            SectionKind::Vars(vars) => self.vars.extend(vars),
            SectionKind::BodyJson(body) => self.body_json = Some(body),
        }
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn request(&self) -> Option<&RequestLine> {
        self.request.as_ref()
    }

    /// Header templates as written, before substitution.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The `body:json` block as written, before substitution.
    pub fn body_template(&self) -> Option<&str> {
        self.body_json.as_deref()
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Merges `variables` into the file's own, overriding same-named entries.
    pub fn set_variables(&mut self, variables: BTreeMap<String, String>) {
        self.vars.extend(variables);
        tracing::debug!(variables = self.vars.len(), "variables set");
    }

    /// `None` when the file has no `get`/`head`/`post` section.
    pub fn request_view(&self) -> Option<RequestView<'_>> {
        self.request.as_ref().map(|request| RequestView {
            file: self,
            request,
        })
    }
}

/// The request of a [`BruFile`], resolved field by field against the
/// file's variables.
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    file: &'a BruFile,
    request: &'a RequestLine,
}

impl<'a> RequestView<'a> {
    pub fn method(&self) -> HttpMethod {
        self.request.method
    }

    pub fn url(&self) -> Result<String, UnresolvedTemplate> {
        template::resolve(&self.request.url, &self.file.vars, TemplateField::Url)
    }

    pub fn headers(&self) -> Result<BTreeMap<String, String>, UnresolvedTemplate> {
        let vars = &self.file.vars;
        self.file
            .headers
            .iter()
            .map(|(k, v)| {
                Ok((
                    template::resolve(k, vars, TemplateField::HeaderName)?,
                    template::resolve(v, vars, TemplateField::HeaderValue)?,
                ))
            })
            .collect()
    }

    /// Only a `body: json` request with a `body:json` section has a body.
    pub fn body(&self) -> Result<Option<String>, UnresolvedTemplate> {
        match (&self.request.body_kind, &self.file.body_json) {
            (kind, Some(body)) if kind.as_str() == BODY_KIND_JSON => {
                template::resolve(body, &self.file.vars, TemplateField::Body).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn build(&self) -> Result<ResolvedRequest, UnresolvedTemplate> {
        Ok(ResolvedRequest {
            method: self.method(),
            url: self.url()?,
            headers: self.headers()?,
            body: self.body()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}
