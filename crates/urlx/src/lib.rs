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

//! URL-safe text and query string encoding.
//!
//! This crate percent-encodes text for use in URLs and query strings. Unlike
//! most implementations, `!`, `'`, `(`, `)` and `*` are always escaped, and a
//! strict mode restricts the output to alphanumerics, `-`, `_` and `%`.
//!
//! # Examples
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use urlx::{decode_query, encode, encode_query, encode_url};
//!
//! // Encode text
//! assert_eq!(encode("it's (1)")?, "it%27s%20%281%29");
//!
//! // Encode and decode query strings
//! let query = encode_query([("q", "rust"), ("page", "2")]);
//! assert_eq!(decode_query(&query)?["page"], "2");
//!
//! // Encode query and fragment of URL
//! let url = encode_url("https://example.com/#a b")?;
//! assert_eq!(url, "https://example.com/#a%20b");
//! # Ok(())
//! # }
//! ```

pub use urlx_codec as codec;

#[doc(inline)]
pub use urlx_codec::{
    decode, decode_query, decode_query_with, decode_with, encode, encode_query,
    encode_query_with, encode_url, encode_with, try_decode, try_decode_with,
    DecodeOptions, EncodeOptions, Error, Mode, Query, Result, Space,
};
