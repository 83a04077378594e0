//! Parser: recursive descent over the line model, dispatching on line shape
//! (key-value, array header, list item, tabular row).

use crate::error::{CountKind, Error, Result};
use crate::header::{parse_field_token, parse_header, ArrayHeader};
use crate::lines::{split_lines, Line};
use crate::map::ConMap;
use crate::options::DecodeOptions;
use crate::text::{
    find_closing_quote, find_unquoted, is_unquoted_key, parse_number, parse_quoted,
    split_delimited, unescape,
};
use crate::value::Value;

pub(crate) fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    let lines = split_lines(input, options.strict)?;
    if lines.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut parser = Parser {
        lines,
        idx: 0,
        strict: options.strict,
    };
    let value = parser.parse_document()?;
    if let Some(line) = parser.peek() {
        return Err(Error::syntax(line.number, "unexpected content after document"));
    }
    Ok(value)
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    idx: usize,
    strict: bool,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.idx).copied()
    }

    fn bump(&mut self) -> Line<'a> {
        let line = self.lines[self.idx];
        self.idx += 1;
        line
    }

    fn parse_document(&mut self) -> Result<Value> {
        let first = self.lines[0];
        if first.depth == 0 {
            if let Some((header, tail)) = parse_header(first.content, first.number)? {
                if header.key.is_none() {
                    self.idx = 1;
                    return self.parse_array(header, tail, 0, first.number);
                }
            }
        }
        if self.lines.len() == 1 && find_unquoted(first.content, ':', 0).is_none() {
            self.idx = 1;
            return self.parse_primitive(first.content, first.number);
        }
        let mut map = ConMap::new();
        self.parse_object_entries(&mut map, 0)?;
        Ok(Value::Object(map))
    }

    /// Consumes key-value and keyed-header lines at exactly `depth` into
    /// `map`, stopping at shallower lines and at lines that belong to an
    /// enclosing construct (list items, keyless headers).
    fn parse_object_entries(&mut self, map: &mut ConMap, depth: usize) -> Result<()> {
        while let Some(line) = self.peek() {
            if line.depth < depth {
                break;
            }
            if line.depth > depth {
                return Err(Error::syntax(line.number, "unexpected indentation"));
            }
            if is_list_item(line.content) {
                break;
            }
            if let Some((mut header, tail)) = parse_header(line.content, line.number)? {
                let Some(key) = header.key.take() else {
                    break;
                };
                self.idx += 1;
                let value = self.parse_array(header, tail, depth, line.number)?;
                map.insert(key, value);
                continue;
            }
            self.idx += 1;
            let (key, rest) = self.split_key_value(line)?;
            let value = if rest.trim().is_empty() {
                self.parse_nested_value(depth)?
            } else {
                self.parse_primitive(rest, line.number)?
            };
            map.insert(key, value);
        }
        Ok(())
    }

    /// Value of a `key:` line with nothing after the colon: a deeper keyless
    /// array header, a nested object, or — with no deeper lines — the empty
    /// object.
    fn parse_nested_value(&mut self, depth: usize) -> Result<Value> {
        match self.peek() {
            Some(next) if next.depth > depth => {
                if let Some((header, tail)) = parse_header(next.content, next.number)? {
                    if header.key.is_none() {
                        self.idx += 1;
                        return self.parse_array(header, tail, next.depth, next.number);
                    }
                }
                let mut map = ConMap::new();
                self.parse_object_entries(&mut map, depth + 1)?;
                Ok(Value::Object(map))
            }
            _ => Ok(Value::Object(ConMap::new())),
        }
    }

    /// Splits a key-value line at the first unquoted colon. The key is a
    /// quoted or bare token; strict mode holds bare keys to the key grammar.
    fn split_key_value(&self, line: Line<'a>) -> Result<(String, &'a str)> {
        let content = line.content;
        if content.starts_with('"') {
            let Some(close) = find_closing_quote(content, 0) else {
                return Err(Error::syntax(line.number, "unterminated quoted key"));
            };
            let key = unescape(&content[1..close], line.number)?;
            let after = content[close + 1..].trim_start();
            let Some(rest) = after.strip_prefix(':') else {
                return Err(Error::syntax(line.number, "expected ':' after quoted key"));
            };
            return Ok((key, rest));
        }
        let Some(colon) = find_unquoted(content, ':', 0) else {
            return Err(Error::syntax(line.number, "expected ':' in key-value line"));
        };
        let key = content[..colon].trim();
        if self.strict && !is_unquoted_key(key) {
            return Err(Error::syntax(
                line.number,
                format!("key '{key}' must be quoted"),
            ));
        }
        Ok((key.to_string(), &content[colon + 1..]))
    }

    fn parse_array(
        &mut self,
        header: ArrayHeader,
        tail: &str,
        depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let delimiter = header.delimiter.as_char();
        if let Some(fields) = &header.fields {
            if !tail.trim().is_empty() {
                return Err(Error::syntax(
                    header_line,
                    "tabular header cannot carry inline values",
                ));
            }
            return self.parse_tabular_rows(fields, header.count, delimiter, depth, header_line);
        }
        let tail = tail.trim();
        if !tail.is_empty() {
            let cells = split_delimited(tail, delimiter);
            if self.strict && cells.len() != header.count {
                return Err(Error::count_mismatch(
                    header.count,
                    cells.len(),
                    CountKind::Items,
                    header_line,
                ));
            }
            let mut items = Vec::with_capacity(cells.len());
            for cell in cells {
                items.push(self.parse_primitive(cell, header_line)?);
            }
            return Ok(Value::Array(items));
        }
        // a fieldless header followed by a data row is the CSV-shaped form:
        // the first body line names the columns
        if header.count > 0 {
            if let Some(next) = self.peek() {
                if next.depth == depth + 1
                    && !is_list_item(next.content)
                    && is_data_row(next.content, delimiter)
                {
                    let column_line = self.bump();
                    let mut columns = Vec::new();
                    for raw in split_delimited(column_line.content, delimiter) {
                        columns.push(parse_field_token(raw, column_line.number)?);
                    }
                    return self.parse_tabular_rows(
                        &columns,
                        header.count,
                        delimiter,
                        depth,
                        header_line,
                    );
                }
            }
        }
        self.parse_list_items(header.count, depth, header_line)
    }

    fn parse_tabular_rows(
        &mut self,
        columns: &[String],
        count: usize,
        delimiter: char,
        depth: usize,
        header_line: usize,
    ) -> Result<Value> {
        let mut rows = Vec::new();
        while let Some(line) = self.peek() {
            if line.depth != depth + 1
                || is_list_item(line.content)
                || !is_data_row(line.content, delimiter)
            {
                break;
            }
            let row = self.bump();
            let cells = split_delimited(row.content, delimiter);
            if self.strict && cells.len() != columns.len() {
                return Err(Error::count_mismatch(
                    columns.len(),
                    cells.len(),
                    CountKind::Cells,
                    row.number,
                ));
            }
            let mut object = ConMap::with_capacity(columns.len());
            for (i, column) in columns.iter().enumerate() {
                let value = match cells.get(i) {
                    Some(cell) => self.parse_primitive(cell, row.number)?,
                    None => Value::Null,
                };
                object.insert(column.clone(), value);
            }
            rows.push(Value::Object(object));
        }
        if self.strict && rows.len() != count {
            return Err(Error::count_mismatch(
                count,
                rows.len(),
                CountKind::Rows,
                header_line,
            ));
        }
        Ok(Value::Array(rows))
    }

    fn parse_list_items(&mut self, count: usize, depth: usize, header_line: usize) -> Result<Value> {
        let mut items = Vec::new();
        while let Some(line) = self.peek() {
            if line.depth != depth + 1 || !is_list_item(line.content) {
                break;
            }
            self.idx += 1;
            items.push(self.parse_list_item(line)?);
        }
        if self.strict && items.len() != count {
            return Err(Error::count_mismatch(
                count,
                items.len(),
                CountKind::Items,
                header_line,
            ));
        }
        Ok(Value::Array(items))
    }

    /// Decodes one already-consumed `- ` line. The item is an array (keyless
    /// header), an object (key-value shape, continuation keys at depth+1), or
    /// a primitive.
    fn parse_list_item(&mut self, line: Line<'a>) -> Result<Value> {
        let depth = line.depth;
        if line.content == "-" {
            return Ok(Value::Object(ConMap::new()));
        }
        let rest = &line.content[2..];
        if let Some((mut header, tail)) = parse_header(rest, line.number)? {
            match header.key.take() {
                None => return self.parse_array(header, tail, depth, line.number),
                Some(key) => {
                    let value = self.parse_array(header, tail, depth + 1, line.number)?;
                    return self.parse_item_continuation(key, value, depth);
                }
            }
        }
        if find_unquoted(rest, ':', 0).is_some() {
            let pair = Line {
                content: rest,
                depth,
                number: line.number,
            };
            let (key, after) = self.split_key_value(pair)?;
            let value = if after.trim().is_empty() {
                self.parse_nested_value(depth + 1)?
            } else {
                self.parse_primitive(after, line.number)?
            };
            return self.parse_item_continuation(key, value, depth);
        }
        self.parse_primitive(rest, line.number)
    }

    fn parse_item_continuation(&mut self, key: String, value: Value, depth: usize) -> Result<Value> {
        let mut map = ConMap::new();
        map.insert(key, value);
        self.parse_object_entries(&mut map, depth + 1)?;
        Ok(Value::Object(map))
    }

    /// Decodes a primitive token: quoted string, keyword, canonical number,
    /// or the trimmed text itself.
    fn parse_primitive(&self, token: &str, line: usize) -> Result<Value> {
        let token = token.trim();
        if token.starts_with('"') {
            return Ok(Value::String(parse_quoted(token, line)?));
        }
        Ok(match token {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            "null" => Value::Null,
            _ => match parse_number(token) {
                Some(number) => Value::Number(number),
                None => Value::String(token.to_string()),
            },
        })
    }
}

fn is_list_item(content: &str) -> bool {
    content == "-" || content.starts_with("- ")
}

/// A tabular data row has no unquoted colon at all, or its first unquoted
/// delimiter comes before the first unquoted colon. This keeps colons legal
/// inside quoted cells while object-member lines stay recognizable.
fn is_data_row(content: &str, delimiter: char) -> bool {
    match find_unquoted(content, ':', 0) {
        None => true,
        Some(colon) => matches!(find_unquoted(content, delimiter, 0), Some(d) if d < colon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::con;
    use crate::options::DecodeOptions;

    fn decode_default(input: &str) -> Value {
        decode(input, &DecodeOptions::default()).unwrap()
    }

    fn decode_strict(input: &str) -> Result<Value> {
        decode(input, &DecodeOptions::new().with_strict(true))
    }

    #[test]
    fn flat_object() {
        let value = decode_default("name: John\nage: 30\nactive: true");
        assert_eq!(
            value,
            con!({ "name": "John", "age": 30, "active": true })
        );
    }

    #[test]
    fn nested_objects_and_empties() {
        let value = decode_default("a:\n  b:\n    c: 1\nd:");
        assert_eq!(
            value,
            con!({ "a": { "b": { "c": 1 } }, "d": {} })
        );
    }

    #[test]
    fn inline_tabular_and_mixed_arrays() {
        assert_eq!(
            decode_default("tags[3]: a,b,c"),
            con!({ "tags": ["a", "b", "c"] })
        );
        assert_eq!(
            decode_default("users[2]{name,age}:\n  Alice,30\n  Bob,25"),
            con!({ "users": [
                { "name": "Alice", "age": 30 },
                { "name": "Bob", "age": 25 }
            ]})
        );
        assert_eq!(
            decode_default("mixed[3]:\n  - 1\n  - x\n  - k: true"),
            con!({ "mixed": [1, "x", { "k": true }] })
        );
    }

    #[test]
    fn document_roots() {
        assert_eq!(decode_default("[3]: 1,2,3"), con!([1, 2, 3]));
        assert_eq!(decode_default("42"), con!(42));
        assert_eq!(decode_default("hello world"), con!("hello world"));
        assert_eq!(decode_default("\"true\""), con!("true"));
        assert!(matches!(
            decode("   \n  ", &DecodeOptions::default()),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn csv_shaped_document_takes_columns_from_first_row() {
        let value = decode_default("[2]\n  first,middle,last\n  John,,Doe\n  Jane,M,Smith");
        assert_eq!(
            value,
            con!([
                { "first": "John", "middle": "", "last": "Doe" },
                { "first": "Jane", "middle": "M", "last": "Smith" }
            ])
        );
    }

    #[test]
    fn list_items_with_continuation_keys() {
        let value = decode_default("people[2]:\n  - name: Ada\n    born: 1815\n  - name: Grace");
        assert_eq!(
            value,
            con!({ "people": [
                { "name": "Ada", "born": 1815 },
                { "name": "Grace" }
            ]})
        );
    }

    #[test]
    fn bare_dash_is_an_empty_object() {
        assert_eq!(
            decode_default("items[2]:\n  -\n  -"),
            con!({ "items": [{}, {}] })
        );
    }

    #[test]
    fn quoted_key_array_nests_headless() {
        let value = decode_default("\"my key\":\n  [2]: 1,2");
        assert_eq!(value, con!({ "my key": [1, 2] }));
    }

    #[test]
    fn colons_in_quoted_cells_stay_data_rows() {
        let value = decode_default("rows[1]{url,ok}:\n  \"http://x:1\",true");
        assert_eq!(
            value,
            con!({ "rows": [{ "url": "http://x:1", "ok": true }] })
        );
    }

    #[test]
    fn strict_count_assertions() {
        assert!(matches!(
            decode_strict("tags[3]: a,b"),
            Err(Error::CountMismatch {
                expected: 3,
                actual: 2,
                kind: CountKind::Items,
                ..
            })
        ));
        assert!(matches!(
            decode_strict("users[2]{a,b}:\n  1,2"),
            Err(Error::CountMismatch {
                kind: CountKind::Rows,
                ..
            })
        ));
        assert!(matches!(
            decode_strict("users[1]{a,b}:\n  1,2,3"),
            Err(Error::CountMismatch {
                kind: CountKind::Cells,
                ..
            })
        ));
        assert!(decode_strict("tags[2]: a,b").is_ok());
    }

    #[test]
    fn lenient_mode_ignores_count_drift() {
        assert_eq!(
            decode_default("tags[5]: a,b"),
            con!({ "tags": ["a", "b"] })
        );
        assert_eq!(
            decode_default("items[1]:\n  - 1\n  - 2"),
            con!({ "items": [1, 2] })
        );
    }

    #[test]
    fn strict_key_grammar() {
        assert!(decode_strict("user-id: 1").is_err());
        assert!(decode_strict("\"user-id\": 1").is_ok());
        decode_default("user-id: 1");
    }

    #[test]
    fn hard_errors_regardless_of_mode() {
        // malformed quoted token
        assert!(decode("k: \"oops", &DecodeOptions::default()).is_err());
        // trailing text after a closing quote
        assert!(decode("k: \"a\" b", &DecodeOptions::default()).is_err());
        // unknown escape
        assert!(decode("k: \"\\x\"", &DecodeOptions::default()).is_err());
        // malformed header
        assert!(decode("k[nope]: 1", &DecodeOptions::default()).is_err());
        // over-indented line with no parent
        assert!(decode("a: 1\n    b: 2", &DecodeOptions::default()).is_err());
    }

    #[test]
    fn empty_strings_round_trip_forms() {
        assert_eq!(decode_default("k: \"\""), con!({ "k": "" }));
        assert_eq!(
            decode_default("cells[1]{a,b}:\n  ,x"),
            con!({ "cells": [{ "a": "", "b": "x" }] })
        );
    }
}
