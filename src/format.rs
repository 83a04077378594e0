//! CON format reference.
//!
//! CON (Compact Object Notation) is a lossless, text-based rendering of the
//! JSON data model. Structure comes from two-space indentation instead of
//! braces, strings are unquoted whenever that is unambiguous, and arrays of
//! uniform objects collapse into delimited tables. The target use is prompt
//! payloads for language-model endpoints, where every delimiter character is
//! billed.
//!
//! # Objects
//!
//! One `key: value` pair per line; nested objects indent by two spaces:
//!
//! ```text
//! name: John
//! age: 30
//! address:
//!   city: Oslo
//!   zip: "0150"
//! ```
//!
//! Keys matching `[A-Za-z_][A-Za-z0-9_.]*` are written bare; anything else is
//! quoted (`"user-id": 1`). A key whose line ends right after the colon holds
//! either the empty object (no deeper lines) or the object formed by the
//! deeper lines that follow.
//!
//! # Primitives
//!
//! `null`, `true`, `false`, numbers in plain decimal notation, and strings.
//! A string is quoted only when it would otherwise be misread: it is empty,
//! carries leading/trailing whitespace, spells a keyword or a number, starts
//! with `-`, or contains a colon, quote, backslash, bracket, brace, control
//! character, or the active delimiter. Quoted strings know exactly five
//! escapes: `\\`, `\"`, `\n`, `\r`, `\t`.
//!
//! Host values are lowered before emission: dates to RFC 3339 strings, big
//! integers to numbers (inside ±2⁵³−1) or decimal strings, non-finite
//! numbers to `null`, `-0` to `0`.
//!
//! # Arrays
//!
//! Every array is introduced by a header carrying its length. Three body
//! forms exist, chosen by shape:
//!
//! All-primitive arrays stay inline:
//!
//! ```text
//! tags[3]: a,b,c
//! ```
//!
//! Arrays of uniform, primitive-valued objects become tables — the header
//! lists the columns (first element's key order), each element becomes one
//! delimited row:
//!
//! ```text
//! users[2]{name,age,city}:
//!   Alice,30,NYC
//!   Bob,25,SF
//! ```
//!
//! Everything else is a list, one `- ` item per element. An object item puts
//! its first pair on the dash line and its remaining keys directly below:
//!
//! ```text
//! mixed[3]:
//!   - 1
//!   - x
//!   - k: true
//! ```
//!
//! An empty array is just its header (`items[0]:`), and an empty object item
//! is a bare `-`.
//!
//! # Delimiters and count markers
//!
//! The delimiter is comma by default; tab and pipe are available through
//! [`EncodeOptions`](crate::EncodeOptions) and are advertised inside the
//! header brackets so documents stay self-describing:
//!
//! ```text
//! nums[3|]: 1|2|3
//! ```
//!
//! A `#` before the count (`[#3]`) is accepted everywhere and emitted when
//! the `length_marker` option is on.
//!
//! # Strict decoding
//!
//! By default the decoder is lenient: declared counts are advisory, any
//! indentation rounds down to a depth, and unquoted keys may contain
//! arbitrary text up to the colon. With
//! [`DecodeOptions::strict`](crate::DecodeOptions) set, declared counts must
//! match the body exactly, rows must have one cell per column, indentation
//! must be tab-free multiples of two spaces, and bare keys must match the key
//! grammar. Malformed quoting, unknown escapes, and malformed headers are
//! errors in both modes.

// documentation only
