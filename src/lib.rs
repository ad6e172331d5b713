//! # toon-codec
//!
//! A bidirectional codec between dynamic JSON-like values and TOON
//! (Token-Oriented Object Notation), a compact, human-readable,
//! indentation-based text format.
//!
//! ## What is TOON?
//!
//! TOON trades JSON's braces, brackets and ubiquitous quoting for
//! indentation and per-node structural headers, which makes typical
//! structured data markedly shorter, which helps when text is billed by
//! the token, as with Large Language Models.
//!
//! ## Key Features
//!
//! - **Tabular arrays**: uniform object arrays collapse into a header line
//!   plus one CSV-style row per element
//! - **Inline primitives**: scalar arrays serialize on one line
//!   (e.g., `[3]: 1,2,3`)
//! - **Quote minimization**: strings are quoted only when their content
//!   would be ambiguous
//! - **Dynamic and typed**: work with [`Value`] trees directly or bridge to
//!   any type with `#[derive(Serialize, Deserialize)]`
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let value = toon!({
//!     "name": "Ann",
//!     "age": 30,
//! });
//!
//! let text = encode(&value);
//! assert_eq!(text, "name: Ann\nage: 30");
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ### Tabular Arrays
//!
//! Arrays of objects sharing one key set serialize as tables:
//!
//! ```rust
//! use toon_codec::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//!     price: f64,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string(), price: 9.99 },
//!     Product { id: 2, name: "Gadget".to_string(), price: 14.99 },
//! ];
//!
//! let text = to_string(&products).unwrap();
//! assert_eq!(text, "table[2]{id,name,price}:\n  1,Widget,9.99\n  2,Gadget,14.99");
//! ```
//!
//! ### Size Comparison
//!
//! ```rust
//! use toon_codec::{encode, stats, toon};
//!
//! let value = toon!({"xs": [{"a": 1, "b": 2}, {"a": 3, "b": 4}]});
//! let json = serde_json::to_string(&value).unwrap();
//! let toon_text = encode(&value);
//!
//! let s = stats(&json, &toon_text);
//! assert!(s.toon_chars < s.json_chars);
//! assert!(s.savings_percent > 0);
//! ```
//!
//! ## Known Limitations
//!
//! The decoder reconstructs every form the encoder emits except generic
//! `- ` list blocks (mixed-shape arrays), which are reported as
//! [`Error::Unsupported`]. Strings whose text reads as `true`, `false`,
//! `null` or a number are emitted unquoted and decode as that scalar type;
//! [`round_trips`] checks a value against both limitations.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod macros;
pub mod map;
pub mod scalar;
pub mod ser;
pub mod stats;
pub mod value;

pub use de::ValueDeserializer;
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use map::ToonMap;
pub use ser::ValueSerializer;
pub use stats::{stats, Stats};
pub use value::{Number, Value};

use serde::{de::DeserializeOwned, Serialize};

/// Converts any `T: Serialize` into a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error for shapes the value model cannot hold, such as maps
/// with non-string keys.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserializes a [`Value`] tree into any `T: Deserialize`.
///
/// # Errors
///
/// Returns an error when the tree does not match the target type.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serializes any `T: Serialize` to TOON text.
///
/// # Examples
///
/// ```rust
/// use toon_codec::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode(&to_value(value)?))
}

/// Deserializes an instance of `T` from TOON text.
///
/// # Examples
///
/// ```rust
/// use toon_codec::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid TOON or does not match `T`.
/// Decode errors carry 1-based line numbers.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Integrity check: encodes `value`, decodes the text back, and compares.
///
/// A `false` result is a signal, not a failure; it flags values the text
/// format cannot carry faithfully (mixed-shape arrays, strings that read as
/// other scalar types).
///
/// ```rust
/// use toon_codec::{round_trips, toon};
///
/// assert!(round_trips(&toon!({"a": [1, 2], "b": "text"})));
/// assert!(!round_trips(&toon!({"s": "123"})));
/// ```
#[must_use]
pub fn round_trips(value: &Value) -> bool {
    matches!(decode(&encode(value)), Ok(decoded) if decoded == *value)
}
