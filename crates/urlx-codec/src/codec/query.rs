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

//! Query strings.

use indexmap::IndexMap;
use std::fmt::Display;

use super::decoding::decode_str;
use super::encoding::encode_str;
use super::error::Result;
use super::options::{DecodeOptions, EncodeOptions};
use super::text;

// ----------------------------------------------------------------------------
// Type aliases
// ----------------------------------------------------------------------------

/// Query.
///
/// Queries retain the order in which keys were first inserted. When a query
/// string contains a key more than once, the last value wins, but the key
/// keeps the position of its first occurrence.
pub type Query = IndexMap<String, String>;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes key-value pairs into a query string with default options.
///
/// Values are converted to strings with their [`Display`] implementation, so
/// numbers and booleans can be passed directly. The query string doesn't
/// include a leading `?`, and is empty if there are no pairs.
///
/// # Examples
///
/// ```
/// use urlx_codec::encode_query;
///
/// // Encode pairs into query string
/// let query = encode_query([("q", "rust (lang)"), ("page", "2")]);
/// assert_eq!(query, "q=rust%20%28lang%29&page=2");
/// ```
#[inline]
#[must_use]
pub fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    encode_query_with(pairs, &EncodeOptions::default())
}

/// Encodes key-value pairs into a query string with the given options.
///
/// Keys and values are encoded independently, so that `&` and `=` inside of
/// them are always escaped. Pairs are emitted in iteration order, including
/// duplicate keys.
///
/// # Examples
///
/// ```
/// use std::fmt::Display;
/// use urlx_codec::{encode_query_with, EncodeOptions};
///
/// // Encode pairs into form-encoded query string
/// let options = EncodeOptions::form();
/// let query = encode_query_with([("a", 1), ("b", 2)], &options);
/// assert_eq!(query, "a=1&b=2");
///
/// // Encode pairs with mixed values
/// let pairs: [(&str, &dyn Display); 2] = [("q", &"a b"), ("exact", &true)];
/// let query = encode_query_with(pairs, &options);
/// assert_eq!(query, "q=a+b&exact=true");
/// ```
#[must_use]
pub fn encode_query_with<I, K, V>(pairs: I, options: &EncodeOptions) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut buffer = String::new();
    for (index, (key, value)) in pairs.into_iter().enumerate() {
        if index > 0 {
            buffer.push('&');
        }

        // Encode key and value independently
        buffer.push_str(&encode_str(key.as_ref(), options));
        buffer.push('=');
        buffer.push_str(&encode_str(&value.to_string(), options));
    }
    buffer
}

/// Decodes a query string into a [`Query`] with default options.
///
/// A single leading `?` is ignored. Each pair is split at the first `=`, and
/// a pair without `=` yields an empty value. Malformed percent-encoding is
/// handled leniently, just like in [`decode`][].
///
/// [`decode`]: crate::decode
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`][] is returned.
///
/// [`Error::Input`]: crate::Error::Input
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::decode_query;
///
/// // Decode query string
/// let query = decode_query("?key1&key2=value2")?;
/// assert_eq!(query["key1"], "");
/// assert_eq!(query["key2"], "value2");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn decode_query<T>(value: &T) -> Result<Query>
where
    T: AsRef<[u8]> + ?Sized,
{
    decode_query_with(value, &DecodeOptions::default())
}

/// Decodes a query string into a [`Query`] with the given options.
///
/// Empty pairs, e.g., resulting from `&&` or a trailing `&`, are skipped.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`][] is returned.
///
/// [`Error::Input`]: crate::Error::Input
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::{decode_query_with, DecodeOptions};
///
/// // Decode form-encoded query string
/// let query = decode_query_with("q=a+b&q=c+d", &DecodeOptions::form())?;
/// assert_eq!(query["q"], "c d");
/// # Ok(())
/// # }
/// ```
pub fn decode_query_with<T>(value: &T, options: &DecodeOptions) -> Result<Query>
where
    T: AsRef<[u8]> + ?Sized,
{
    let value = text(value.as_ref())?;
    let value = value.strip_prefix('?').unwrap_or(value);

    // Split into pairs, and each pair at the first separator
    let mut query = Query::new();
    for pair in value.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        query.insert(
            decode_str(key, options).into_owned(),
            decode_str(value, options).into_owned(),
        );
    }

    // Return query
    Ok(query)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
