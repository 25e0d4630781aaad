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

// JSON text constants
pub(crate) const UNICODE_LEN: usize = 4;

// JSON text escape characters constants
pub(crate) const BS: u8 = b'\x5C'; // \\ Backslash
pub(crate) const QU: u8 = b'\x22'; // \" Double quotation mark
pub(crate) const SD: u8 = b'\x2F'; // \/ Slash or divide
pub(crate) const BB: u8 = b'\x08'; // \b Backspace
pub(crate) const FF: u8 = b'\x0C'; // \f Formfeed Page Break
pub(crate) const NN: u8 = b'\x0A'; // \n Newline
pub(crate) const RR: u8 = b'\x0D'; // \r Carriage Return
pub(crate) const TT: u8 = b'\x09'; // \t Horizontal Tab

// UTF-16 surrogate ranges
pub(crate) const HIGH_SURROGATE_MIN: u16 = 0xD800;
pub(crate) const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
pub(crate) const LOW_SURROGATE_MIN: u16 = 0xDC00;
pub(crate) const LOW_SURROGATE_MAX: u16 = 0xDFFF;

// Largest magnitude below which every integral f64 is exact.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// Integral values below this magnitude are written without an exponent.
pub(crate) const MAX_PLAIN_INTEGER: f64 = 1e16;

pub(crate) const TYPE_STRING: &str = "string";
pub(crate) const TYPE_NULL: &str = "null";
pub(crate) const TYPE_BOOLEAN: &str = "boolean";
pub(crate) const TYPE_NUMBER: &str = "number";
pub(crate) const TYPE_ARRAY: &str = "array";
pub(crate) const TYPE_OBJECT: &str = "object";
