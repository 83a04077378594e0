//! Emitter: recursive descent over a value tree, writing depth-indented
//! lines. Callers are expected to normalize first; the primitive writer still
//! lowers host variants it meets so output never leaves the wire grammar.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::map::ConMap;
use crate::options::EncodeOptions;
use crate::shape::{classify, ArrayShape};
use crate::text::{analyze_string, escape_into, is_unquoted_key};
use crate::value::{Number, Value, MAX_SAFE_INTEGER};

const INDENT: &str = "  ";

/// Nesting ceiling; a tree deeper than this is either adversarial or fed by
/// a self-referential `Serialize` impl.
const RECURSION_LIMIT: usize = 128;

pub(crate) fn encode(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut emitter = Emitter {
        out: String::with_capacity(256),
        options,
    };
    emitter.encode_document(value)?;
    Ok(emitter.out)
}

struct Emitter<'a> {
    out: String,
    options: &'a EncodeOptions,
}

impl Emitter<'_> {
    fn encode_document(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Object(map) => self.encode_object(map, 0),
            Value::Array(items) => self.encode_array(None, items, 0, false),
            primitive => {
                self.begin_line(0, false);
                self.push_primitive(primitive)
            }
        }
    }

    fn encode_object(&mut self, map: &ConMap, depth: usize) -> Result<()> {
        if depth > RECURSION_LIMIT {
            return Err(Error::RecursionLimit);
        }
        for (key, value) in map.iter() {
            self.encode_entry(key, value, depth)?;
        }
        Ok(())
    }

    fn encode_entry(&mut self, key: &str, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Array(items) => {
                if is_unquoted_key(key) {
                    self.encode_array(Some(key), items, depth, false)
                } else {
                    // quoted keys cannot introduce a header, so the array
                    // nests headless one level down
                    self.begin_line(depth, false);
                    self.push_key(key);
                    self.out.push(':');
                    self.encode_array(None, items, depth + 1, false)
                }
            }
            Value::Object(map) => {
                self.begin_line(depth, false);
                self.push_key(key);
                self.out.push(':');
                if map.is_empty() {
                    Ok(())
                } else {
                    self.encode_object(map, depth + 1)
                }
            }
            primitive => {
                self.begin_line(depth, false);
                self.push_key(key);
                self.out.push_str(": ");
                self.push_primitive(primitive)
            }
        }
    }

    fn encode_array(
        &mut self,
        key: Option<&str>,
        items: &[Value],
        depth: usize,
        dash: bool,
    ) -> Result<()> {
        if depth > RECURSION_LIMIT {
            return Err(Error::RecursionLimit);
        }
        let shape = match classify(items) {
            ArrayShape::Tabular(_) if items.len() < self.options.min_tabular_length => {
                ArrayShape::MixedList
            }
            shape => shape,
        };
        // a keyed array inside a list item indents its body one extra level
        // so continuation keys at depth+1 stay unambiguous
        let body_depth = depth + 1 + usize::from(dash && key.is_some());
        let delimiter = self.options.delimiter.as_char();
        match shape {
            ArrayShape::Empty => {
                self.begin_line(depth, dash);
                self.push_header(key, 0, None);
                Ok(())
            }
            ArrayShape::InlinePrimitive => {
                self.begin_line(depth, dash);
                self.push_header(key, items.len(), None);
                self.out.push(' ');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(delimiter);
                    }
                    self.push_primitive(item)?;
                }
                Ok(())
            }
            ArrayShape::Tabular(columns) => {
                self.begin_line(depth, dash);
                self.push_header(key, items.len(), Some(columns.as_slice()));
                for item in items {
                    let Value::Object(row) = item else {
                        return Err(Error::custom("tabular row is not an object"));
                    };
                    self.begin_line(body_depth, false);
                    for (i, &column) in columns.iter().enumerate() {
                        if i > 0 {
                            self.out.push(delimiter);
                        }
                        let Some(cell) = row.get(column) else {
                            return Err(Error::custom("tabular row missing a column"));
                        };
                        self.push_primitive(cell)?;
                    }
                }
                Ok(())
            }
            ArrayShape::ListOfPrimArrays | ArrayShape::MixedList => {
                self.begin_line(depth, dash);
                self.push_header(key, items.len(), None);
                for item in items {
                    self.encode_list_item(item, body_depth)?;
                }
                Ok(())
            }
        }
    }

    fn encode_list_item(&mut self, item: &Value, depth: usize) -> Result<()> {
        match item {
            Value::Array(items) => self.encode_array(None, items, depth, true),
            Value::Object(map) => self.encode_object_item(map, depth),
            primitive => {
                self.begin_line(depth, true);
                self.push_primitive(primitive)
            }
        }
    }

    /// An object list item carries its first pair on the `- ` line;
    /// continuation keys follow at depth+1, and any nested body of the first
    /// pair sits at depth+2 to stay clear of them.
    fn encode_object_item(&mut self, map: &ConMap, depth: usize) -> Result<()> {
        let mut entries = map.iter();
        let Some((first_key, first_value)) = entries.next() else {
            self.begin_line(depth, false);
            self.out.push('-');
            return Ok(());
        };
        match first_value {
            Value::Array(items) => {
                if is_unquoted_key(first_key) {
                    self.encode_array(Some(first_key), items, depth, true)?;
                } else {
                    self.begin_line(depth, true);
                    self.push_key(first_key);
                    self.out.push(':');
                    self.encode_array(None, items, depth + 2, false)?;
                }
            }
            Value::Object(nested) => {
                self.begin_line(depth, true);
                self.push_key(first_key);
                self.out.push(':');
                if !nested.is_empty() {
                    self.encode_object(nested, depth + 2)?;
                }
            }
            primitive => {
                self.begin_line(depth, true);
                self.push_key(first_key);
                self.out.push_str(": ");
                self.push_primitive(primitive)?;
            }
        }
        for (key, value) in entries {
            self.encode_entry(key, value, depth + 1)?;
        }
        Ok(())
    }

    fn begin_line(&mut self, depth: usize, dash: bool) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        if dash {
            self.out.push_str("- ");
        }
    }

    fn push_header(&mut self, key: Option<&str>, len: usize, columns: Option<&[&str]>) {
        if let Some(key) = key {
            self.push_key(key);
        }
        self.out.push('[');
        if self.options.length_marker {
            self.out.push('#');
        }
        let _ = write!(self.out, "{len}");
        let delimiter = self.options.delimiter.as_char();
        if delimiter != ',' {
            self.out.push(delimiter);
        }
        self.out.push(']');
        if let Some(columns) = columns {
            self.out.push('{');
            for (i, &column) in columns.iter().enumerate() {
                if i > 0 {
                    self.out.push(delimiter);
                }
                self.push_key(column);
            }
            self.out.push('}');
        }
        self.out.push(':');
    }

    fn push_key(&mut self, key: &str) {
        if is_unquoted_key(key) {
            self.out.push_str(key);
        } else {
            self.out.push('"');
            escape_into(&mut self.out, key);
            self.out.push('"');
        }
    }

    fn push_primitive(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(number) => self.push_number(number),
            Value::String(s) => self.push_string(s),
            Value::Date(dt) => {
                let iso = dt.to_rfc3339();
                self.push_string(&iso);
            }
            Value::BigInt(big) => match i64::try_from(big) {
                Ok(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => {
                    let _ = write!(self.out, "{i}");
                }
                _ => self.push_string(&big.to_string()),
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::custom("container in primitive position"));
            }
        }
        Ok(())
    }

    fn push_number(&mut self, number: &Number) {
        match number {
            Number::Integer(i) => {
                let _ = write!(self.out, "{i}");
            }
            Number::Float(f) if f.is_finite() => {
                if *f == 0.0 {
                    self.out.push('0');
                } else {
                    let _ = write!(self.out, "{f}");
                }
            }
            // non-finite numbers lower to null
            _ => self.out.push_str("null"),
        }
    }

    fn push_string(&mut self, value: &str) {
        let (needs_quote, needs_escape) =
            analyze_string(value, self.options.delimiter.as_char());
        if !needs_quote {
            self.out.push_str(value);
            return;
        }
        self.out.push('"');
        if needs_escape {
            escape_into(&mut self.out, value);
        } else {
            self.out.push_str(value);
        }
        self.out.push('"');
    }
}
