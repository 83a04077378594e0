//! Configuration for encoding and decoding.
//!
//! [`EncodeOptions`] controls the emitted text (delimiter choice, tabular
//! threshold, count markers); [`DecodeOptions`] controls how forgiving the
//! parser is. Both use builder-style `with_*` methods.

/// The delimiter separating values in inline arrays, tabular rows, and field
/// lists.
///
/// Comma is the default and most compact. Tab suits TSV-shaped data; pipe
/// reads well for markdown-adjacent tables. Non-comma delimiters are
/// advertised inside the bracket segment of array headers (`[3|]`, `[3\t]`)
/// so the decoder needs no out-of-band configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// The delimiter as a single character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The delimiter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Options for [`to_string_with_options`](crate::to_string_with_options).
///
/// # Examples
///
/// ```rust
/// use serde_con::{Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_min_tabular_length(3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOptions {
    /// Active delimiter for inline values, rows, and field lists.
    pub delimiter: Delimiter,
    /// Reserved. Output is always pretty-printed with two-space indentation.
    pub pretty: bool,
    /// Reserved. Array counts are derived from actual lengths on the encode
    /// path, so there is nothing to validate yet.
    pub strict_arrays: bool,
    /// Minimum element count for an array to use the tabular form. Eligible
    /// arrays below the threshold are emitted as lists instead; both forms
    /// decode to the same value.
    pub min_tabular_length: usize,
    /// When set, array counts are written with a `#` prefix (`[#3]`). The
    /// decoder accepts the marker either way.
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            delimiter: Delimiter::default(),
            pretty: true,
            strict_arrays: false,
            min_tabular_length: 2,
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    /// Creates the default options (comma delimiter, tabular threshold 2).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the minimum length for tabular emission.
    #[must_use]
    pub fn with_min_tabular_length(mut self, min_tabular_length: usize) -> Self {
        self.min_tabular_length = min_tabular_length;
        self
    }

    /// Enables the `#` count-marker prefix in array headers.
    #[must_use]
    pub fn with_length_marker(mut self, length_marker: bool) -> Self {
        self.length_marker = length_marker;
        self
    }

    /// Sets the reserved `strict_arrays` switch.
    #[must_use]
    pub fn with_strict_arrays(mut self, strict_arrays: bool) -> Self {
        self.strict_arrays = strict_arrays;
        self
    }
}

/// Options for [`from_str_with_options`](crate::from_str_with_options).
///
/// Strict mode turns on the checks that hand-edited input tends to violate:
/// indentation must be an exact multiple of two spaces with no tabs, declared
/// array counts must match the body, tabular rows must have exactly one cell
/// per column, and unquoted keys must match the key grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Enables count assertions and indentation/key checks.
    pub strict: bool,
}

impl DecodeOptions {
    /// Creates the default (lenient) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
