// Copyright (c) 2024 Zensical <contributors@zensical.org>

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Codec error.

use std::str::Utf8Error;
use std::result;
use thiserror::Error;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Codec error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input is not text.
    #[error("input is not text: {0}")]
    Input(#[source] Utf8Error),

    /// Invalid escape sequence.
    #[error("invalid escape sequence at position {position}")]
    Escape {
        /// Byte offset of the offending `%`.
        position: usize,
    },

    /// Unescaped bytes are not text.
    #[error("unescaped bytes are not valid UTF-8: {0}")]
    Utf8(#[source] Utf8Error),
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Error {
    /// Returns whether the error denotes malformed percent-encoding.
    ///
    /// Malformed percent-encoding is absorbed by [`decode`][], which returns
    /// the input unchanged, while input errors are always surfaced.
    ///
    /// [`decode`]: crate::decode
    ///
    /// # Examples
    ///
    /// ```
    /// use urlx_codec::{try_decode, Error};
    ///
    /// // Decode truncated escape sequence
    /// let err = try_decode("Hello%2").unwrap_err();
    /// assert!(err.is_malformed());
    /// assert_eq!(err, Error::Escape { position: 5 });
    /// ```
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Escape { .. } | Error::Utf8(_))
    }
}

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Codec result.
pub type Result<T = ()> = result::Result<T, Error>;
