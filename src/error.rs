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

use core::fmt::Display;

/// The kind of grammar violation found while parsing JSON text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorCode {
    /// The input is empty or contains only whitespace.
    ExpectValue,
    /// A malformed literal or number.
    InvalidValue,
    /// Non-whitespace bytes follow the root value.
    RootNotSingular,
    /// A number overflows the range of `f64`.
    NumberTooBig,

    MissQuotationMark,
    InvalidStringEscape,
    InvalidStringChar,
    InvalidUnicodeHex,
    InvalidUnicodeSurrogate,

    MissCommaOrSquareBracket,

    MissKey,
    MissColon,
    MissCommaOrCurlyBracket,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            ParseErrorCode::ExpectValue => f.write_str("expect value"),
            ParseErrorCode::InvalidValue => f.write_str("invalid value"),
            ParseErrorCode::RootNotSingular => f.write_str("root not singular"),
            ParseErrorCode::NumberTooBig => f.write_str("number too big"),
            ParseErrorCode::MissQuotationMark => f.write_str("miss quotation mark"),
            ParseErrorCode::InvalidStringEscape => f.write_str("invalid string escape"),
            ParseErrorCode::InvalidStringChar => f.write_str("invalid string char"),
            ParseErrorCode::InvalidUnicodeHex => f.write_str("invalid unicode hex"),
            ParseErrorCode::InvalidUnicodeSurrogate => f.write_str("invalid unicode surrogate"),
            ParseErrorCode::MissCommaOrSquareBracket => {
                f.write_str("miss comma or square bracket")
            }
            ParseErrorCode::MissKey => f.write_str("miss key"),
            ParseErrorCode::MissColon => f.write_str("miss colon"),
            ParseErrorCode::MissCommaOrCurlyBracket => f.write_str("miss comma or curly bracket"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A syntax error and the byte offset where it was detected.
    Syntax(ParseErrorCode, usize),
}

impl Error {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Error::Syntax(code, _) => *code,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::Syntax(_, pos) => *pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
