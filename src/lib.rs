//! A small JSON document model.
//!
//! - [`Value`] is a tagged union over the seven JSON variants. Arrays and objects are ordered
//!   containers that own their children.
//! - [`decode`] is a strict recursive-descent decoder. Every failure carries one [`ErrorCode`] and
//!   the line and column where it was detected.
//! - [`to_string`] and friends produce canonical compact text, so `decode(stringify(v)) == v`.
//! - [`Json`] is a document handle with checked, index-based accessors.
//!
//! ```
//! use tagged_json::{decode, object, JsonValueTrait, Value};
//!
//! let value = decode(r#" {"name": "tagged", "list": [1, 2.5, null]} "#).unwrap();
//! assert_eq!(value.get("list").get_index(1).as_f64(), Some(2.5));
//! assert_eq!(value.stringify(), r#"{"name":"tagged","list":[1,2.5,null]}"#);
//!
//! let built = Value::from(object! {"name": "tagged"});
//! assert_eq!(built.get("name"), value.get("name"));
//! ```

mod config;
mod error;
mod input;
mod json;
mod parser;
mod reader;
mod util;

pub mod format;
pub mod prelude;
pub mod value;
pub mod writer;

pub use crate::config::{DecodeOptions, DuplicateKeys, DEFAULT_MAX_DEPTH};
pub use crate::error::*;
pub use crate::input::JsonInput;
pub use crate::json::Json;
pub use crate::parser::{decode, decode_with, from_slice, from_str};
pub use crate::value::*;
pub use crate::writer::{to_bytes, to_string, to_vec, to_writer};
