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

use std::str::FromStr;

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::util::*;
use super::value::Object;
use super::value::Value;

/// Parse JSON text into a [`Value`].
///
/// The input must contain exactly one JSON value, optionally surrounded by
/// whitespace. Only the strict RFC 8259 grammar is accepted.
pub fn parse_value(buf: &[u8]) -> Result<Value> {
    let mut parser = Parser::new(buf);
    parser.parse()
}

impl Value {
    /// Parse JSON text into this value in place.
    ///
    /// The value is reset to `Null` before parsing and remains `Null` if
    /// the input is invalid.
    pub fn parse(&mut self, buf: &[u8]) -> Result<()> {
        self.set_null();
        *self = parse_value(buf)?;
        Ok(())
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_value(s.as_bytes())
    }
}

struct Parser<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8]) -> Parser<'a> {
        Self { buf, idx: 0 }
    }

    fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace();
        if self.eof() {
            return Err(self.error(ParseErrorCode::ExpectValue));
        }
        let val = self.parse_json_value()?;
        self.skip_whitespace();
        if !self.eof() {
            return Err(self.error(ParseErrorCode::RootNotSingular));
        }
        Ok(val)
    }

    fn parse_json_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'n') => self.parse_json_literal(b"null", Value::Null),
            Some(b't') => self.parse_json_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_json_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.parse_json_string().map(Value::String),
            Some(b'[') => self.parse_json_array(),
            Some(b'{') => self.parse_json_object(),
            Some(_) => self.parse_json_number(),
            None => Err(self.error(ParseErrorCode::ExpectValue)),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    #[inline]
    fn eof(&self) -> bool {
        self.idx >= self.buf.len()
    }

    /// Consumes a byte the caller has already dispatched on.
    ///
    /// # Panics
    ///
    /// Panics if the next byte is not `c` or the input is exhausted.
    #[inline]
    fn expect(&mut self, c: u8) {
        assert_eq!(
            self.peek(),
            Some(c),
            "expected {:?} at pos {}",
            c as char,
            self.idx
        );
        self.step();
    }

    #[inline]
    fn check_next(&self, c: u8) -> bool {
        self.peek() == Some(c)
    }

    #[inline]
    fn check_next_either(&self, c1: u8, c2: u8) -> bool {
        matches!(self.peek(), Some(v) if v == c1 || v == c2)
    }

    #[inline]
    fn check_digit(&self) -> bool {
        matches!(self.peek(), Some(v) if v.is_ascii_digit())
    }

    #[inline]
    fn step_digits(&mut self) -> usize {
        let mut len = 0;
        while self.check_digit() {
            len += 1;
            self.step();
        }
        len
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    fn error(&self, code: ParseErrorCode) -> Error {
        let pos = self.idx;
        Error::Syntax(code, pos)
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.step();
        }
    }

    fn parse_json_literal(&mut self, literal: &[u8], value: Value) -> Result<Value> {
        self.expect(literal[0]);
        let rest = &literal[1..];
        if !self.buf[self.idx..].starts_with(rest) {
            return Err(self.error(ParseErrorCode::InvalidValue));
        }
        self.step_by(rest.len());
        Ok(value)
    }

    /// Parse a JSON number.
    ///
    /// The span is validated against the grammar
    /// `["-"] int ["." 1*digit] [("e"|"E") ["-"|"+"] 1*digit]`, where `int`
    /// is either `0` or a digit sequence without leading zeros, and then
    /// converted with `fast_float2`. Bytes after the span are left untouched
    /// for the enclosing production to reject.
    fn parse_json_number(&mut self) -> Result<Value> {
        let start_idx = self.idx;

        if self.check_next(b'-') {
            self.step();
        }

        if self.check_next(b'0') {
            self.step();
            // No leading zeros and no hex literals
            if self.check_digit() || self.check_next(b'x') {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
        } else if self.step_digits() == 0 {
            return Err(self.error(ParseErrorCode::InvalidValue));
        }

        if self.check_next(b'.') {
            self.step();
            if self.step_digits() == 0 {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
        }

        if self.check_next_either(b'e', b'E') {
            self.step();
            if self.check_next_either(b'+', b'-') {
                self.step();
            }
            if self.step_digits() == 0 {
                return Err(self.error(ParseErrorCode::InvalidValue));
            }
        }

        let span = &self.buf[start_idx..self.idx];
        match fast_float2::parse::<f64, _>(span) {
            Ok(v) if v.is_finite() => Ok(Value::Number(v)),
            Ok(_) => Err(Error::Syntax(ParseErrorCode::NumberTooBig, start_idx)),
            Err(_) => Err(Error::Syntax(ParseErrorCode::InvalidValue, start_idx)),
        }
    }

    /// Parse a quoted JSON string, resolving all escape sequences.
    ///
    /// Runs of plain bytes are copied as whole slices and validated as
    /// UTF-8, escapes are decoded one at a time.
    fn parse_json_string(&mut self) -> Result<String> {
        self.expect(b'"');

        let mut buf = Vec::new();
        let mut run_start = self.idx;
        loop {
            let Some(c) = self.peek() else {
                return Err(self.error(ParseErrorCode::MissQuotationMark));
            };
            match c {
                b'"' | b'\\' | 0x00..=0x1F => {
                    self.push_run(run_start, &mut buf)?;
                    match c {
                        b'"' => {
                            self.step();
                            break;
                        }
                        b'\\' => {
                            self.step();
                            self.parse_escaped(&mut buf)?;
                            run_start = self.idx;
                        }
                        _ => return Err(self.error(ParseErrorCode::InvalidStringChar)),
                    }
                }
                _ => self.step(),
            }
        }

        String::from_utf8(buf).map_err(|_| self.error(ParseErrorCode::InvalidStringChar))
    }

    /// Copies the unescaped bytes between `run_start` and the cursor.
    #[inline]
    fn push_run(&self, run_start: usize, buf: &mut Vec<u8>) -> Result<()> {
        let run = &self.buf[run_start..self.idx];
        match std::str::from_utf8(run) {
            Ok(s) => {
                buf.extend_from_slice(s.as_bytes());
                Ok(())
            }
            Err(e) => Err(Error::Syntax(
                ParseErrorCode::InvalidStringChar,
                run_start + e.valid_up_to(),
            )),
        }
    }

    /// Decodes the escape sequence following a `\`.
    fn parse_escaped(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        let Some(c) = self.peek() else {
            return Err(self.error(ParseErrorCode::InvalidStringEscape));
        };
        if c != b'u' {
            return match unescape_char(c) {
                Some(b) => {
                    buf.push(b);
                    self.step();
                    Ok(())
                }
                None => Err(self.error(ParseErrorCode::InvalidStringEscape)),
            };
        }
        self.step();

        let n1 = self.parse_hex4()?;
        let cp = if is_high_surrogate(n1) {
            // Non-BMP characters are encoded as a sequence of two hex
            // escapes, representing UTF-16 surrogates.
            if !(self.check_next(b'\\') && self.buf.get(self.idx + 1) == Some(&b'u')) {
                return Err(self.error(ParseErrorCode::InvalidUnicodeSurrogate));
            }
            self.step_by(2);
            let n2 = self.parse_hex4()?;
            if !is_low_surrogate(n2) {
                return Err(Error::Syntax(
                    ParseErrorCode::InvalidUnicodeSurrogate,
                    self.idx - UNICODE_LEN,
                ));
            }
            combine_surrogates(n1, n2)
        } else if is_low_surrogate(n1) {
            return Err(Error::Syntax(
                ParseErrorCode::InvalidUnicodeSurrogate,
                self.idx - UNICODE_LEN,
            ));
        } else {
            n1 as u32
        };
        encode_utf8(cp, buf);
        Ok(())
    }

    #[inline]
    fn parse_hex4(&mut self) -> Result<u16> {
        match decode_hex_escape(&self.buf[self.idx..]) {
            Some(n) => {
                self.step_by(UNICODE_LEN);
                Ok(n)
            }
            None => Err(self.error(ParseErrorCode::InvalidUnicodeHex)),
        }
    }

    /// Parse a JSON array.
    ///
    /// `array = "[" ws [ value *( ws "," ws value ) ] ws "]"`
    fn parse_json_array(&mut self) -> Result<Value> {
        self.expect(b'[');
        self.skip_whitespace();

        let mut values = Vec::new();
        if self.check_next(b']') {
            self.step();
            return Ok(Value::Array(values));
        }

        loop {
            if self.eof() {
                return Err(self.error(ParseErrorCode::MissCommaOrSquareBracket));
            }
            let value = self.parse_json_value()?;
            values.push(value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.step();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.step();
                    return Ok(Value::Array(values));
                }
                _ => return Err(self.error(ParseErrorCode::MissCommaOrSquareBracket)),
            }
        }
    }

    /// Parse a JSON object.
    ///
    /// `object = "{" ws [ member *( ws "," ws member ) ] ws "}"` with
    /// `member = string ws ":" ws value`. Keys are decoded like string
    /// values, empty and duplicate keys are kept.
    fn parse_json_object(&mut self) -> Result<Value> {
        self.expect(b'{');
        self.skip_whitespace();

        let mut obj = Object::new();
        match self.peek() {
            Some(b'}') => {
                self.step();
                return Ok(Value::Object(obj));
            }
            None => return Err(self.error(ParseErrorCode::MissCommaOrCurlyBracket)),
            Some(_) => {}
        }

        loop {
            if !self.check_next(b'"') {
                return Err(self.error(ParseErrorCode::MissKey));
            }
            let key = self.parse_json_string()?;

            self.skip_whitespace();
            if !self.check_next(b':') {
                return Err(self.error(ParseErrorCode::MissColon));
            }
            self.step();
            self.skip_whitespace();

            if self.eof() {
                return Err(self.error(ParseErrorCode::MissCommaOrCurlyBracket));
            }
            let value = self.parse_json_value()?;
            obj.push(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.step();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.step();
                    return Ok(Value::Object(obj));
                }
                _ => return Err(self.error(ParseErrorCode::MissCommaOrCurlyBracket)),
            }
        }
    }
}
