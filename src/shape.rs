//! Array shape classification, shared by the emitter and (through header
//! recognition) the parser.

use crate::value::Value;

/// The body form an array will take on the wire. Classification is tried top
/// to bottom; the first matching shape wins.
#[derive(Debug, PartialEq)]
pub(crate) enum ArrayShape<'a> {
    /// No elements; the header stands alone.
    Empty,
    /// Every element is primitive; values join the header line.
    InlinePrimitive,
    /// Uniform objects with primitive fields; one delimited row per element.
    /// Column order is the first element's key insertion order.
    Tabular(Vec<&'a str>),
    /// Every element is itself an inline-primitive array.
    ListOfPrimArrays,
    /// Anything else; one `- ` item per element.
    MixedList,
}

pub(crate) fn classify(items: &[Value]) -> ArrayShape<'_> {
    if items.is_empty() {
        return ArrayShape::Empty;
    }
    if items.iter().all(Value::is_primitive) {
        return ArrayShape::InlinePrimitive;
    }
    if let Some(columns) = tabular_columns(items) {
        return ArrayShape::Tabular(columns);
    }
    let all_primitive_arrays = items.iter().all(|item| {
        matches!(item, Value::Array(inner) if inner.iter().all(Value::is_primitive))
    });
    if all_primitive_arrays {
        return ArrayShape::ListOfPrimArrays;
    }
    ArrayShape::MixedList
}

fn tabular_columns(items: &[Value]) -> Option<Vec<&str>> {
    let Value::Object(first) = &items[0] else {
        return None;
    };
    if first.is_empty() {
        return None;
    }
    let columns: Vec<&str> = first.keys().map(String::as_str).collect();
    for item in items {
        let Value::Object(row) = item else {
            return None;
        };
        if row.len() != columns.len() {
            return None;
        }
        for &column in &columns {
            if !row.get(column).is_some_and(Value::is_primitive) {
                return None;
            }
        }
    }
    Some(columns)
}
