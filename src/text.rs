//! Lexical building blocks shared by the emitter and the parser: string
//! escaping, quote-aware scanning, and literal classification.

use crate::error::{Error, Result};
use crate::value::Number;

/// Appends `value` with the five escape sequences the format defines:
/// `\\`, `\"`, `\n`, `\r`, `\t`.
pub(crate) fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
}

/// Decodes the interior of a quoted string. Only the five known escapes are
/// accepted; anything else, including a trailing backslash, is a syntax
/// error.
pub(crate) fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => {
                return Err(Error::syntax(
                    line,
                    format!("unknown escape sequence '\\{other}'"),
                ))
            }
            None => return Err(Error::syntax(line, "trailing backslash in quoted string")),
        }
    }
    Ok(out)
}

/// Finds the closing quote matching the `"` at byte offset `open`. A
/// backslash consumes the following character without inspecting it.
pub(crate) fn find_closing_quote(s: &str, open: usize) -> Option<usize> {
    let mut chars = s[open + 1..].char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => return Some(open + 1 + i),
            _ => {}
        }
    }
    None
}

/// Finds the first occurrence of `target` at or after `from` that lies
/// outside any quoted span.
pub(crate) fn find_unquoted(s: &str, target: char, from: usize) -> Option<usize> {
    let mut in_quotes = false;
    let mut skip = false;
    for (i, ch) in s[from..].char_indices() {
        if skip {
            skip = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => skip = true,
            '"' => in_quotes = !in_quotes,
            ch if ch == target && !in_quotes => return Some(from + i),
            _ => {}
        }
    }
    None
}

/// Splits `s` on `delimiter`, honoring quoted spans. Always yields at least
/// one (possibly empty) part.
pub(crate) fn split_delimited(s: &str, delimiter: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut skip = false;
    for (i, ch) in s.char_indices() {
        if skip {
            skip = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => skip = true,
            '"' => in_quotes = !in_quotes,
            ch if ch == delimiter && !in_quotes => {
                parts.push(&s[start..i]);
                start = i + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Decodes a complete scalar token that begins with a quote. The closing
/// quote must be the final character of the token.
pub(crate) fn parse_quoted(token: &str, line: usize) -> Result<String> {
    let Some(close) = find_closing_quote(token, 0) else {
        return Err(Error::syntax(line, "unterminated quoted string"));
    };
    if close != token.len() - 1 {
        return Err(Error::syntax(line, "unexpected text after closing quote"));
    }
    unescape(&token[1..close], line)
}

/// A key may be written without quotes iff it matches
/// `[A-Za-z_][A-Za-z0-9_.]*`.
pub(crate) fn is_unquoted_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != b'_' {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'.')
}

/// Whether a token reads as a number: an optional sign, digits, an optional
/// fraction, an optional exponent. Leading-zero integers count as numeric so
/// the emitter quotes them.
pub(crate) fn is_numeric_like(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = usize::from(bytes.first() == Some(&b'-'));
    let integer_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == integer_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let fraction_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == fraction_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Decodes a token as a number under the parser-side rule: the token must be
/// numeric-shaped, finite, and free of leading zeros (so `007` survives a
/// round trip as a string).
pub(crate) fn parse_number(s: &str) -> Option<Number> {
    if !is_numeric_like(s) {
        return None;
    }
    let digits = s.strip_prefix('-').unwrap_or(s).as_bytes();
    if digits.len() > 1 && digits[0] == b'0' && digits[1].is_ascii_digit() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() {
        return None;
    }
    Some(Number::from_f64(f))
}

/// Decides how a string value must be written for the active delimiter.
/// Returns `(needs_quote, needs_escape)`.
pub(crate) fn analyze_string(value: &str, delimiter: char) -> (bool, bool) {
    let mut needs_quote = value.is_empty()
        || value.trim() != value
        || value.starts_with('-')
        || matches!(value, "true" | "false" | "null")
        || is_numeric_like(value);
    let mut needs_escape = false;
    for ch in value.chars() {
        match ch {
            '\\' | '"' | '\n' | '\r' | '\t' => {
                needs_quote = true;
                needs_escape = true;
            }
            ':' | '[' | ']' | '{' | '}' => needs_quote = true,
            ch if ch == delimiter => needs_quote = true,
            _ => {}
        }
    }
    (needs_quote, needs_escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trip() {
        let mut out = String::new();
        escape_into(&mut out, "a\"b\\c\nd\te\r");
        assert_eq!(out, "a\\\"b\\\\c\\nd\\te\\r");
        assert_eq!(unescape(&out, 1).unwrap(), "a\"b\\c\nd\te\r");
    }

    #[test]
    fn unescape_rejects_unknown_and_trailing() {
        assert!(unescape("\\u0041", 1).is_err());
        assert!(unescape("\\b", 1).is_err());
        assert!(unescape("oops\\", 1).is_err());
    }

    #[test]
    fn closing_quote_skips_escapes() {
        assert_eq!(find_closing_quote("\"a\\\"b\"", 0), Some(5));
        assert_eq!(find_closing_quote("\"open", 0), None);
    }

    #[test]
    fn unquoted_search_ignores_quoted_spans() {
        assert_eq!(find_unquoted("\"a:b\": c", ':', 0), Some(5));
        assert_eq!(find_unquoted("\"a:b\"", ':', 0), None);
    }

    #[test]
    fn split_honors_quotes() {
        assert_eq!(split_delimited("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_delimited("\"a,b\",c", ','), vec!["\"a,b\"", "c"]);
        assert_eq!(split_delimited("John,,Doe", ','), vec!["John", "", "Doe"]);
        assert_eq!(split_delimited("", ','), vec![""]);
    }

    #[test]
    fn quoted_token_must_end_at_quote() {
        assert_eq!(parse_quoted("\"hi\"", 1).unwrap(), "hi");
        assert!(parse_quoted("\"hi\" there", 1).is_err());
        assert!(parse_quoted("\"hi", 1).is_err());
    }

    #[test]
    fn key_grammar() {
        assert!(is_unquoted_key("userName"));
        assert!(is_unquoted_key("_tag"));
        assert!(is_unquoted_key("user.email"));
        assert!(!is_unquoted_key("2nd"));
        assert!(!is_unquoted_key("user-id"));
        assert!(!is_unquoted_key("a b"));
        assert!(!is_unquoted_key(""));
    }

    #[test]
    fn numeric_shapes() {
        for token in ["0", "42", "-3", "3.5", "-0.25", "1e6", "2E-4", "007"] {
            assert!(is_numeric_like(token), "{token}");
        }
        for token in ["", "-", "1.", ".5", "+1", "1e", "1e+", "abc", "4x"] {
            assert!(!is_numeric_like(token), "{token}");
        }
    }

    #[test]
    fn number_decoding() {
        assert_eq!(parse_number("42"), Some(Number::Integer(42)));
        assert_eq!(parse_number("-3.5"), Some(Number::Float(-3.5)));
        assert_eq!(parse_number("1e3"), Some(Number::Integer(1000)));
        assert_eq!(parse_number("0"), Some(Number::Integer(0)));
        assert_eq!(parse_number("0.5"), Some(Number::Float(0.5)));
        // leading zeros and overflow stay strings
        assert_eq!(parse_number("007"), None);
        assert_eq!(parse_number("-012"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn string_analysis() {
        assert_eq!(analyze_string("hello world", ','), (false, false));
        assert_eq!(analyze_string("", ','), (true, false));
        assert_eq!(analyze_string(" padded ", ','), (true, false));
        assert_eq!(analyze_string("a,b", ','), (true, false));
        assert_eq!(analyze_string("a,b", '|'), (false, false));
        assert_eq!(analyze_string("a:b", ','), (true, false));
        assert_eq!(analyze_string("true", ','), (true, false));
        assert_eq!(analyze_string("42", ','), (true, false));
        assert_eq!(analyze_string("-dash", ','), (true, false));
        assert_eq!(analyze_string("say \"hi\"", ','), (true, true));
        assert_eq!(analyze_string("tab\there", ','), (true, true));
        assert_eq!(analyze_string("[5]", ','), (true, false));
    }
}
