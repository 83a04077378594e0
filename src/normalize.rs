//! Normalization of host values into the canonical JSON data model.

use num_bigint::BigInt;

use crate::value::{Number, Value, MAX_SAFE_INTEGER};

/// Lowers a value into the canonical JSON model applied before emission:
///
/// - `-0` becomes `0`, and whole floats that fit `i64` exactly become
///   integers;
/// - non-finite numbers become `Null`;
/// - big integers become numbers when they fit the safe-integer range and
///   decimal strings otherwise;
/// - dates become RFC 3339 strings;
/// - arrays and objects are rebuilt with normalized children, preserving key
///   order.
///
/// The result is a new owned tree and the function is idempotent:
/// `normalize(normalize(v)) == normalize(v)`.
///
/// # Examples
///
/// ```rust
/// use serde_con::{normalize, Number, Value};
///
/// let spiky = Value::Number(Number::Float(f64::INFINITY));
/// assert_eq!(normalize(&spiky), Value::Null);
///
/// let whole = Value::Number(Number::Float(30.0));
/// assert_eq!(normalize(&whole), Value::Number(Number::Integer(30)));
/// ```
#[must_use]
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => normalize_number(n),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect(),
        ),
        Value::Date(dt) => Value::String(dt.to_rfc3339()),
        Value::BigInt(big) => normalize_bigint(big),
    }
}

fn normalize_number(number: &Number) -> Value {
    match number {
        Number::Integer(i) => Value::Number(Number::Integer(*i)),
        Number::Float(f) if !f.is_finite() => Value::Null,
        Number::Float(f) => Value::Number(Number::from_f64(*f)),
        Number::Infinity | Number::NegativeInfinity | Number::NaN => Value::Null,
    }
}

fn normalize_bigint(big: &BigInt) -> Value {
    match i64::try_from(big) {
        Ok(i) if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 => {
            Value::Number(Number::Integer(i))
        }
        _ => Value::String(big.to_string()),
    }
}
