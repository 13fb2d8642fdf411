use super::keywords::{ANNOTATION_PREFIX, COMMENT_PREFIX};
use std::io::{self, BufRead};

/// A meaningful source line, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// Streams the lines of a Bru source that carry content, skipping blank
/// lines, `#` comments and `@` annotations.
pub struct CleanLines<R> {
    reader: R,
    line_number: usize,
    buf: String,
}

impl<R: BufRead> CleanLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for CleanLines<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => {
                    tracing::trace!(lines = self.line_number, "EOF");
                    return None;
                }
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line_number += 1;

            let text = strip_line_terminator(&self.buf);
            if is_ignorable(text) {
                continue;
            }
            return Some(Ok(Line {
                number: self.line_number,
                text: text.to_string(),
            }));
        }
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with(COMMENT_PREFIX)
        || trimmed.starts_with(ANNOTATION_PREFIX)
}
