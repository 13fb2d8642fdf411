use super::{
    error::{SyntaxError, SyntaxErrorKind},
    keywords::{PUNC_COLON, PUNC_LBRACE, PUNC_RBRACE},
    lines::Line,
};
use crate::core::error::BruError;
use std::collections::BTreeMap;
use std::io;

/// A brace-delimited block of a Bru file, e.g.
///
/// ```text
/// get {
///   url: https://example.com
///   body: json
///   auth: none
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    /// Line the section header appeared on.
    pub line: usize,
    pub values: BTreeMap<String, String>,
    pub raw_data: String,
}

impl Section {
    fn open(name: String, line: usize) -> Self {
        Self {
            name,
            line,
            values: BTreeMap::new(),
            raw_data: String::new(),
        }
    }
}

#[derive(Debug)]
enum ScanState {
    AwaitingSectionStart,
    InSection(Section),
    Failed,
}

impl ScanState {
    fn label(&self) -> &'static str {
        match self {
            ScanState::AwaitingSectionStart => "awaitingSectionStart",
            ScanState::InSection(_) => "inSection",
            ScanState::Failed => "failed",
        }
    }
}

/// Groups cleaned lines into sections, yielding each one as soon as its
/// closing brace is seen. Stops after the first error.
pub struct SectionScanner<I> {
    lines: I,
    state: ScanState,
}

impl<I> SectionScanner<I>
where
    I: Iterator<Item = io::Result<Line>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: ScanState::AwaitingSectionStart,
        }
    }

    fn step(&mut self, line: Line) -> Result<Option<Section>, SyntaxError> {
        let trimmed = line.text.trim();
        let state = std::mem::replace(&mut self.state, ScanState::Failed);
        let (next, emitted) = match state {
            ScanState::AwaitingSectionStart => {
                let name = trimmed.strip_suffix(PUNC_LBRACE).ok_or_else(|| {
                    SyntaxError::new(
                        SyntaxErrorKind::InvalidSectionStart(line.text.clone()),
                        line.number,
                    )
                })?;
                let section = Section::open(name.trim().to_string(), line.number);
                (ScanState::InSection(section), None)
            }
            ScanState::InSection(mut section) => {
                if trimmed == PUNC_RBRACE && line.text.starts_with(PUNC_RBRACE) {
                    (ScanState::AwaitingSectionStart, Some(section))
                } else if trimmed == PUNC_LBRACE || !section.raw_data.is_empty() {
                    // Once a block opens with a bare `{`, everything up to the
                    // unindented `}` is data, whatever the section kind.
                    section.raw_data.push_str(&line.text);
                    section.raw_data.push('\n');
                    (ScanState::InSection(section), None)
                } else {
                    let (key, value) = line.text.split_once(PUNC_COLON).ok_or_else(|| {
                        SyntaxError::new(
                            SyntaxErrorKind::InvalidKeyValuePair(line.text.clone()),
                            line.number,
                        )
                    })?;
                    section
                        .values
                        .insert(key.trim().to_string(), value.trim().to_string());
                    (ScanState::InSection(section), None)
                }
            }
            ScanState::Failed => return Ok(None),
        };
        self.state = next;

        tracing::trace!(
            line = line.number,
            text = %line.text,
            state = self.state.label(),
            "scanned line"
        );
        Ok(emitted)
    }
}

impl<I> Iterator for SectionScanner<I>
where
    I: Iterator<Item = io::Result<Line>>,
{
    type Item = Result<Section, BruError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if matches!(self.state, ScanState::Failed) {
                return None;
            }
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.state = ScanState::Failed;
                    return Some(Err(BruError::Io(e)));
                }
                None => {
                    if let ScanState::InSection(section) = &self.state {
                        tracing::warn!(
                            section = %section.name,
                            line = section.line,
                            "input ended inside an unterminated section; section ignored"
                        );
                    }
                    self.state = ScanState::Failed;
                    return None;
                }
            };
            match self.step(line) {
                Ok(Some(section)) => return Some(Ok(section)),
                Ok(None) => continue,
                Err(e) => {
                    self.state = ScanState::Failed;
                    return Some(Err(BruError::Syntax(e)));
                }
            }
        }
    }
}
