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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde::Serialize;
use serde::Serializer;

use crate::constants::MAX_PLAIN_INTEGER;
use crate::util::escape_string;
use crate::value::Value;

/// Serialize a [`Value`] into compact JSON text.
pub fn to_string(value: &Value) -> String {
    let mut buf = Vec::new();
    value.write_to_vec(&mut buf);
    // Only valid UTF-8 strings and ASCII punctuation are written.
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

impl Value {
    /// Serialize the Value into compact JSON text, appending to `buf`.
    pub fn write_to_vec(&self, buf: &mut Vec<u8>) {
        match self {
            Value::Null => buf.extend_from_slice(b"null"),
            Value::Bool(true) => buf.extend_from_slice(b"true"),
            Value::Bool(false) => buf.extend_from_slice(b"false"),
            Value::Number(n) => write_number(*n, buf),
            Value::String(s) => escape_string(s, buf),
            Value::Array(values) => {
                buf.push(b'[');
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        buf.push(b',');
                    }
                    v.write_to_vec(buf);
                }
                buf.push(b']');
            }
            Value::Object(obj) => {
                buf.push(b'{');
                for (i, member) in obj.iter().enumerate() {
                    if i > 0 {
                        buf.push(b',');
                    }
                    escape_string(&member.key, buf);
                    buf.push(b':');
                    member.value.write_to_vec(buf);
                }
                buf.push(b'}');
            }
        }
    }

    /// Serialize the Value into compact JSON text.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.write_to_vec(&mut buf);
        buf
    }
}

/// Writes the shortest text that parses back to the same `f64`.
///
/// Integral values below 1e16 are written without a fraction, negative zero
/// keeps its sign. Non-finite values have no JSON form and are written as
/// `null`.
pub(crate) fn write_number(n: f64, buf: &mut Vec<u8>) {
    if !n.is_finite() {
        buf.extend_from_slice(b"null");
    } else if n == 0.0 {
        if n.is_sign_negative() {
            buf.extend_from_slice(b"-0");
        } else {
            buf.push(b'0');
        }
    } else if n.fract() == 0.0 && n.abs() < MAX_PLAIN_INTEGER {
        let mut buffer = itoa::Buffer::new();
        buf.extend_from_slice(buffer.format(n as i64).as_bytes());
    } else {
        let mut buffer = ryu::Buffer::new();
        buf.extend_from_slice(buffer.format_finite(n).as_bytes());
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_string(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < MAX_PLAIN_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for v in values {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for member in obj {
                    map.serialize_entry(&member.key, &member.value)?;
                }
                map.end()
            }
        }
    }
}
