//! # serde_con
//!
//! A Serde-compatible encoder/decoder for CON (Compact Object Notation), a
//! lossless, indentation-structured text form of the JSON data model. CON
//! drops the braces, brackets, and most of the quotes JSON needs, and folds
//! arrays of uniform objects into delimited tables — which makes it markedly
//! cheaper to ship as a token-billed LLM prompt payload.
//!
//! See the [`format`] module for the full syntax reference.
//!
//! ## Encoding and decoding
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u32,
//!     active: bool,
//! }
//!
//! let user = User {
//!     name: "John".to_string(),
//!     age: 30,
//!     active: true,
//! };
//!
//! let con = serde_con::to_string(&user)?;
//! assert_eq!(con, "name: John\nage: 30\nactive: true");
//!
//! let back: User = serde_con::from_str(&con)?;
//! assert_eq!(back, user);
//! # Ok::<(), serde_con::Error>(())
//! ```
//!
//! Uniform object arrays come out tabular:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct City {
//!     name: String,
//!     pop: u32,
//! }
//!
//! let cities = vec![
//!     City { name: "Oslo".to_string(), pop: 709 },
//!     City { name: "Bergen".to_string(), pop: 291 },
//! ];
//! let con = serde_con::to_string(&cities)?;
//! assert_eq!(con, "[2]{name,pop}:\n  Oslo,709\n  Bergen,291");
//! # Ok::<(), serde_con::Error>(())
//! ```
//!
//! ## Untyped values
//!
//! ```rust
//! use serde_con::{con, decode_to_value};
//!
//! let value = decode_to_value("tags[3]: a,b,c")?;
//! assert_eq!(value, con!({ "tags": ["a", "b", "c"] }));
//! # Ok::<(), serde_con::Error>(())
//! ```
//!
//! ## Options
//!
//! ```rust
//! use serde_con::{DecodeOptions, Delimiter, EncodeOptions};
//!
//! let encode = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let con = serde_con::to_string_with_options(&vec![1, 2, 3], &encode)?;
//! assert_eq!(con, "[3|]: 1|2|3");
//!
//! let strict = DecodeOptions::new().with_strict(true);
//! let back: Vec<i32> = serde_con::from_str_with_options(&con, &strict)?;
//! assert_eq!(back, vec![1, 2, 3]);
//! # Ok::<(), serde_con::Error>(())
//! ```

pub mod de;
mod emit;
pub mod error;
pub mod format;
mod header;
mod lines;
mod macros;
pub mod map;
mod normalize;
pub mod options;
mod parse;
pub mod ser;
mod shape;
mod text;
pub mod tokens;
pub mod value;

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use crate::de::ValueDeserializer;
pub use crate::error::{CountKind, Error, Result};
pub use crate::map::ConMap;
pub use crate::normalize::normalize;
pub use crate::options::{DecodeOptions, Delimiter, EncodeOptions};
pub use crate::ser::ValueSerializer;
pub use crate::tokens::{count_tokens, count_tokens_with, estimate_tokens, Savings, TokenReport};
pub use crate::value::{Number, Value};

/// Encodes any `T: Serialize` to a CON string with default options.
///
/// # Errors
///
/// Fails if the value cannot be serialized, or if nesting exceeds the
/// recursion limit.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Encodes any `T: Serialize` to a CON string.
///
/// The value is first converted to a [`Value`] tree, normalized into the
/// canonical JSON model, then emitted. Nothing is written on error.
///
/// # Errors
///
/// Fails if the value cannot be serialized, or if nesting exceeds the
/// recursion limit.
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    emit::encode(&normalize(&tree), options)
}

/// Encodes any `T: Serialize` into a writer.
///
/// # Errors
///
/// Fails if serialization fails or the writer does.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &EncodeOptions::default())
}

/// Encodes any `T: Serialize` into a writer with custom options.
///
/// # Errors
///
/// Fails if serialization fails or the writer does.
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: &EncodeOptions) -> Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|err| Error::io(err.to_string()))
}

/// Converts any `T: Serialize` into a [`Value`] tree.
///
/// # Errors
///
/// Fails if the value cannot be represented (for example a map with a
/// non-primitive key).
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Decodes a CON string into any `T: DeserializeOwned` with default
/// (lenient) options.
///
/// # Errors
///
/// Fails on malformed input ([`Error::Syntax`]), empty input
/// ([`Error::EmptyInput`]), or a shape mismatch with `T`.
pub fn from_str<T>(input: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(input, &DecodeOptions::default())
}

/// Decodes a CON string into any `T: DeserializeOwned`.
///
/// # Errors
///
/// As [`from_str`]; strict mode additionally raises
/// [`Error::CountMismatch`] when declared array counts disagree with the
/// body.
pub fn from_str_with_options<T>(input: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_to_value_with_options(input, options)?)
}

/// Decodes CON from a reader.
///
/// # Errors
///
/// Fails if reading fails or the text does not decode.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| Error::io(err.to_string()))?;
    from_str(&text)
}

/// Converts a [`Value`] tree into any `T: DeserializeOwned`.
///
/// # Errors
///
/// Fails when the tree's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Decodes a CON string into an untyped [`Value`] with default options.
///
/// # Errors
///
/// As [`from_str`].
pub fn decode_to_value(input: &str) -> Result<Value> {
    decode_to_value_with_options(input, &DecodeOptions::default())
}

/// Decodes a CON string into an untyped [`Value`].
///
/// # Errors
///
/// As [`from_str_with_options`].
pub fn decode_to_value_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    parse::decode(input, options)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn point_round_trip() {
        let point = Point { x: 1, y: -2 };
        let con = to_string(&point).unwrap();
        assert_eq!(con, "x: 1\ny: -2");
        let back: Point = from_str(&con).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn user_round_trip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };
        let con = to_string(&user).unwrap();
        let back: User = from_str(&con).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn to_value_builds_trees() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("x"), Some(&Value::Number(Number::Integer(1))));
        assert_eq!(map.get("y"), Some(&Value::Number(Number::Integer(2))));
    }

    #[test]
    fn writer_and_reader() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &Point { x: 5, y: 6 }).unwrap();
        let back: Point = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, Point { x: 5, y: 6 });
    }

    #[test]
    fn delimiter_options_round_trip() {
        let numbers = vec![1, 2, 3];
        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            let options = EncodeOptions::new().with_delimiter(delimiter);
            let con = to_string_with_options(&numbers, &options).unwrap();
            let back: Vec<i32> = from_str(&con).unwrap();
            assert_eq!(back, numbers);
        }
    }
}
