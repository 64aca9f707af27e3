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

//! Codec.

use std::str::from_utf8;

pub mod charset;
mod decoding;
mod encoding;
mod error;
pub mod options;
mod query;
mod rewrite;

pub use charset::Mode;
pub use decoding::{decode, decode_with, try_decode, try_decode_with};
pub use encoding::{encode, encode_with};
pub use error::{Error, Result};
pub use options::{DecodeOptions, EncodeOptions, Space};
pub use query::{
    decode_query, decode_query_with, encode_query, encode_query_with, Query,
};
pub use rewrite::encode_url;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Ensure that the given value is text.
///
/// All public functions accept byte slices, so that callers can hand over
/// whatever they received from the outside world. Anything that is not valid
/// UTF-8 is rejected with [`Error::Input`], which is the only error that is
/// ever surfaced to callers of the lenient functions.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`] is returned.
#[inline]
fn text(value: &[u8]) -> Result<&str> {
    from_utf8(value).map_err(Error::Input)
}
