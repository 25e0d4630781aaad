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

use super::constants::*;

#[allow(clippy::zero_prefixed_literal)]
static HEX: [u8; 256] = {
    const __: u8 = 255; // not a hex digit
    [
        //   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 0
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 1
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 2
        00, 01, 02, 03, 04, 05, 06, 07, 08, 09, __, __, __, __, __, __, // 3
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 4
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 5
        __, 10, 11, 12, 13, 14, 15, __, __, __, __, __, __, __, __, __, // 6
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 7
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 8
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // 9
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // A
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // B
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // C
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // D
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // E
        __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, __, // F
    ]
};

static HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Maps a simple escape character (the byte after `\`) to the byte it stands for.
#[inline]
pub(crate) fn unescape_char(byte: u8) -> Option<u8> {
    match byte {
        b'"' => Some(QU),
        b'\\' => Some(BS),
        b'/' => Some(SD),
        b'b' => Some(BB),
        b'f' => Some(FF),
        b'n' => Some(NN),
        b'r' => Some(RR),
        b't' => Some(TT),
        _ => None,
    }
}

#[inline]
fn decode_hex_val(val: u8) -> Option<u16> {
    let n = HEX[val as usize] as u16;
    if n == 255 {
        None
    } else {
        Some(n)
    }
}

/// Decodes the four hex digits of a `\uXXXX` escape.
///
/// Returns `None` if fewer than four bytes remain or any of them is not a
/// hex digit.
#[inline]
pub(crate) fn decode_hex_escape(data: &[u8]) -> Option<u16> {
    if data.len() < UNICODE_LEN {
        return None;
    }
    let mut n = 0;
    for number in &data[..UNICODE_LEN] {
        n = (n << 4) + decode_hex_val(*number)?;
    }
    Some(n)
}

#[inline]
pub(crate) fn is_high_surrogate(n: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&n)
}

#[inline]
pub(crate) fn is_low_surrogate(n: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&n)
}

#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    ((((high - HIGH_SURROGATE_MIN) as u32) << 10) | (low - LOW_SURROGATE_MIN) as u32) + 0x1_0000
}

/// Appends the UTF-8 encoding of a code point.
///
/// The caller guarantees `cp` is at most `0x10FFFF` and not a surrogate.
pub(crate) fn encode_utf8(cp: u32, buf: &mut Vec<u8>) {
    if cp <= 0x7F {
        buf.push(cp as u8);
    } else if cp <= 0x7FF {
        buf.push(0xC0 | ((cp >> 6) & 0xFF) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    } else if cp <= 0xFFFF {
        buf.push(0xE0 | ((cp >> 12) & 0xFF) as u8);
        buf.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    } else {
        debug_assert!(cp <= 0x10FFFF);
        buf.push(0xF0 | ((cp >> 18) & 0xFF) as u8);
        buf.push(0x80 | ((cp >> 12) & 0x3F) as u8);
        buf.push(0x80 | ((cp >> 6) & 0x3F) as u8);
        buf.push(0x80 | (cp & 0x3F) as u8);
    }
}

/// Writes `s` as a quoted JSON string.
///
/// Only the quotation mark, the reverse solidus and control characters are
/// escaped, all other bytes are copied verbatim.
pub(crate) fn escape_string(s: &str, buf: &mut Vec<u8>) {
    buf.push(b'"');
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escaped: &[u8] = match byte {
            QU => b"\\\"",
            BS => b"\\\\",
            BB => b"\\b",
            FF => b"\\f",
            NN => b"\\n",
            RR => b"\\r",
            TT => b"\\t",
            0x00..=0x1F => b"",
            _ => continue,
        };
        buf.extend_from_slice(&bytes[start..i]);
        if escaped.is_empty() {
            buf.extend_from_slice(b"\\u00");
            buf.push(HEX_DIGITS[(byte >> 4) as usize]);
            buf.push(HEX_DIGITS[(byte & 0xF) as usize]);
        } else {
            buf.extend_from_slice(escaped);
        }
        start = i + 1;
    }
    buf.extend_from_slice(&bytes[start..]);
    buf.push(b'"');
}
