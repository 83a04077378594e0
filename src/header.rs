//! Array-header recognition: `key[N]:`, `key[N]{a,b}:`, `[N|]: 1|2`, with an
//! optional `#` count marker and an optional in-bracket delimiter hint.

use crate::error::{Error, Result};
use crate::options::Delimiter;
use crate::text::{find_unquoted, is_unquoted_key, parse_quoted, split_delimited};

#[derive(Debug, PartialEq)]
pub(crate) struct ArrayHeader {
    pub key: Option<String>,
    pub count: usize,
    pub delimiter: Delimiter,
    pub fields: Option<Vec<String>>,
}

/// Recognizes an array header in `content`, returning the descriptor and the
/// inline tail after the colon. `Ok(None)` means the line is not shaped like
/// a header and should be read as a key-value line; a header-shaped line with
/// a malformed interior is a hard error.
pub(crate) fn parse_header(content: &str, line: usize) -> Result<Option<(ArrayHeader, &str)>> {
    // a leading quote is a quoted key, never a header
    if content.starts_with('"') {
        return Ok(None);
    }
    let Some(open) = content.find('[') else {
        return Ok(None);
    };
    if let Some(colon) = find_unquoted(content, ':', 0) {
        if colon < open {
            return Ok(None);
        }
    }
    let key_text = content[..open].trim();
    let key = if key_text.is_empty() {
        None
    } else if is_unquoted_key(key_text) {
        Some(key_text.to_string())
    } else {
        return Ok(None);
    };

    let Some(close) = content[open..].find(']').map(|i| open + i) else {
        return Err(Error::syntax(line, "unclosed '[' in array header"));
    };
    let mut interior = &content[open + 1..close];
    // a '#' count marker is accepted; it never changes the meaning of N
    if let Some(rest) = interior.strip_prefix('#') {
        interior = rest;
    }
    let delimiter = if let Some(rest) = interior.strip_suffix('\t') {
        interior = rest;
        Delimiter::Tab
    } else if let Some(rest) = interior.strip_suffix('|') {
        interior = rest;
        Delimiter::Pipe
    } else {
        Delimiter::Comma
    };
    if interior.is_empty() || !interior.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::syntax(
            line,
            format!("invalid array count '{}'", &content[open + 1..close]),
        ));
    }
    let count: usize = interior
        .parse()
        .map_err(|_| Error::syntax(line, "array count out of range"))?;

    let mut rest = &content[close + 1..];
    let fields = match rest.strip_prefix('{') {
        Some(after_brace) => {
            let Some(end) = find_unquoted(after_brace, '}', 0) else {
                return Err(Error::syntax(line, "unclosed '{' in array header"));
            };
            let mut fields = Vec::new();
            for raw in split_delimited(&after_brace[..end], delimiter.as_char()) {
                fields.push(parse_field_token(raw, line)?);
            }
            rest = &after_brace[end + 1..];
            Some(fields)
        }
        None => None,
    };

    let tail = if let Some(tail) = rest.strip_prefix(':') {
        tail
    } else if rest.is_empty() {
        // bracket-terminal header; tolerated so CSV-shaped documents decode
        ""
    } else {
        return Err(Error::syntax(line, "expected ':' after array header"));
    };

    Ok(Some((
        ArrayHeader {
            key,
            count,
            delimiter,
            fields,
        },
        tail,
    )))
}

/// Decodes one field of a tabular field list: a quoted string literal or the
/// bare trimmed text.
pub(crate) fn parse_field_token(raw: &str, line: usize) -> Result<String> {
    let token = raw.trim();
    if token.starts_with('"') {
        parse_quoted(token, line)
    } else {
        Ok(token.to_string())
    }
}
