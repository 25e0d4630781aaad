// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `leptjson` is a strict [RFC 8259](https://datatracker.ietf.org/doc/html/rfc8259) `JSON` parser and serializer built around an owned tree of values.
//!
//! ## Features
//!
//! - Strict grammar: leading zeros, hex numbers, trailing commas, comments and unescaped control characters are all rejected.
//! - Precise errors: every failure reports a specific [`ParseErrorCode`] and the byte offset where it was detected.
//! - Full string decoding: all escapes are resolved at parse time, including `\uXXXX` escapes and UTF-16 surrogate pairs.
//! - Round-trip numbers: numbers are stored as `f64` and written back in the shortest form that parses to the same value.
//!
//! ## Value model
//!
//! A [`Value`] is one of `null`, `true`, `false`, a number, a string, an array or an object.
//! Object members keep their insertion order, duplicate keys are allowed and lookups return the first match.
//! Two objects are equal when they hold the same set of members, regardless of order.
//!
//! ```rust
//! use leptjson::{parse_value, to_string, Value};
//!
//! let value = parse_value(r#" {"a": [1, 2.5, "\u00A2"], "b": null} "#.as_bytes()).unwrap();
//! assert_eq!(value.get("a").and_then(Value::array_length), Some(3));
//! assert_eq!(to_string(&value), r#"{"a":[1,2.5,"¢"],"b":null}"#);
//! ```
//!
//! ## Limitations
//!
//! Integers and floats share the `f64` representation, so integers beyond 2^53 lose precision.
//! Parsing recurses once per nesting level and does not limit depth.

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod from;
mod parser;
mod ser;
mod util;
mod value;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use parser::parse_value;
pub use ser::to_string;
pub use value::*;
