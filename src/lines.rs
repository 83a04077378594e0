//! Line model: the pre-pass that turns source text into indented line
//! records for the parser. Blank lines never carry structure and are dropped
//! here.

use crate::error::{Error, Result};

/// Spaces per nesting level.
pub(crate) const INDENT_SIZE: usize = 2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Line<'a> {
    /// The line with its leading spaces removed.
    pub content: &'a str,
    /// Nesting level, `indent / 2` rounded down.
    pub depth: usize,
    /// One-based source line number, counting blank lines.
    pub number: usize,
}

pub(crate) fn split_lines(input: &str, strict: bool) -> Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (index, raw) in input.split('\n').enumerate() {
        let number = index + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if raw.trim().is_empty() {
            continue;
        }
        let indent = raw.bytes().take_while(|b| *b == b' ').count();
        let content = &raw[indent..];
        if strict {
            if content.starts_with('\t') {
                return Err(Error::syntax_at(number, indent + 1, "tab in indentation"));
            }
            if indent % INDENT_SIZE != 0 {
                return Err(Error::syntax(
                    number,
                    format!("indent of {indent} is not a multiple of {INDENT_SIZE}"),
                ));
            }
        }
        lines.push(Line {
            content,
            depth: indent / INDENT_SIZE,
            number,
        });
    }
    Ok(lines)
}
