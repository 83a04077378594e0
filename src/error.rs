//! Error types for CON encoding and decoding.
//!
//! Two families exist: encode-time errors, raised before any output is
//! produced, and decode-time errors, which carry the line (and where
//! available, column) of the fault. Malformed quoted tokens, malformed array
//! headers, and unknown escape sequences are hard errors regardless of strict
//! mode; count assertions and indentation-regularity checks only fire when
//! [`DecodeOptions::strict`](crate::DecodeOptions) is set.

use std::fmt;

use thiserror::Error;

/// Which quantity a strict-mode count assertion was checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    /// Array elements (inline values or list items).
    Items,
    /// Tabular data rows.
    Rows,
    /// Cells within a single tabular row.
    Cells,
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CountKind::Items => "items",
            CountKind::Rows => "rows",
            CountKind::Cells => "cells",
        })
    }
}

/// Errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `deserialize` was called on empty or whitespace-only text.
    #[error("input is empty")]
    EmptyInput,

    /// Malformed input: bad quoting, bad escapes, malformed headers, or
    /// structurally impossible indentation.
    #[error("syntax error at line {line}{}: {msg}", column_suffix(.column))]
    Syntax {
        line: usize,
        column: Option<usize>,
        msg: String,
    },

    /// A strict-mode count assertion failed.
    #[error("expected {expected} {kind}, found {actual} (line {line})")]
    CountMismatch {
        expected: usize,
        actual: usize,
        kind: CountKind,
        line: usize,
    },

    /// Value nesting exceeded the encoder's recursion limit. An owned value
    /// tree cannot be cyclic, so in practice this means a pathologically deep
    /// or self-feeding `Serialize` implementation.
    #[error("recursion limit exceeded")]
    RecursionLimit,

    /// Reading or writing an underlying stream failed.
    #[error("io error: {0}")]
    Io(String),

    /// A message produced through the serde error traits.
    #[error("{0}")]
    Message(String),
}

fn column_suffix(column: &Option<usize>) -> String {
    match column {
        Some(column) => format!(", column {column}"),
        None => String::new(),
    }
}

impl Error {
    /// Creates a syntax error located by line number only.
    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column: None,
            msg: msg.into(),
        }
    }

    /// Creates a syntax error with a column position.
    pub fn syntax_at(line: usize, column: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            column: Some(column),
            msg: msg.into(),
        }
    }

    /// Creates a strict-mode count mismatch.
    pub fn count_mismatch(expected: usize, actual: usize, kind: CountKind, line: usize) -> Self {
        Error::CountMismatch {
            expected,
            actual,
            kind,
            line,
        }
    }

    /// Creates an I/O error from a display message.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates an error with a free-form message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

/// Alias for `std::result::Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
