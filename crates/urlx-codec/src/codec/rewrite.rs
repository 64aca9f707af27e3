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

//! URL rewriting.

use log::debug;
use url::{Position, Url};

use super::decoding::unescape;
use super::encoding::encode_str;
use super::error::Result;
use super::options::EncodeOptions;
use super::query::encode_query_with;
use super::text;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes the query and fragment of a URL.
///
/// The URL is parsed, and everything up to and including the path is kept
/// exactly as the parser serializes it, as those parts are already encoded.
/// Query parameters are decoded and re-encoded with [`encode`][], so that
/// reserved characters like `'` and `*` are always escaped, no matter how
/// the URL was encoded originally. Duplicate parameters are retained.
///
/// The parser returns the fragment in its percent-encoded form, which is why
/// it's unescaped before it's encoded again, or it would be double-encoded,
/// e.g., `%20` would become `%2520`. If the fragment cannot be unescaped, it
/// is encoded as is. Note that this only applies to fragments of parsed URLs,
/// as [`encode`][] never treats `%` specially.
///
/// If the value cannot be parsed as an absolute URL, e.g., because it is a
/// relative reference, the entire value is encoded with [`encode`][].
///
/// [`encode`]: crate::encode
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
/// use urlx_codec::encode_url;
///
/// // Encode URL with query and fragment
/// let url = encode_url("https://example.com/search?q=it's#top section")?;
/// assert_eq!(url, "https://example.com/search?q=it%27s#top%20section");
/// # Ok(())
/// # }
/// ```
pub fn encode_url<T>(value: &T) -> Result<String>
where
    T: AsRef<[u8]> + ?Sized,
{
    let value = text(value.as_ref())?;
    let options = EncodeOptions::default();

    // Fall back to encoding the value as text, if it isn't a URL
    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(err) => {
            debug!("Could not parse {value:?} as URL: {err}");
            return Ok(encode_str(value, &options).into_owned());
        }
    };

    // Keep scheme, authority and path as serialized by the parser
    let mut buffer = String::from(&url[..Position::AfterPath]);

    // Re-encode query parameters
    let query = encode_query_with(url.query_pairs(), &options);
    if !query.is_empty() {
        buffer.push('?');
        buffer.push_str(&query);
    }

    // Re-encode fragment, unescaping it first to avoid double-encoding
    if let Some(fragment) = url.fragment() {
        let fragment = match unescape(fragment) {
            Ok(value) => encode_str(&value, &options).into_owned(),
            Err(err) => {
                debug!("Could not unescape fragment {fragment:?}: {err}");
                encode_str(fragment, &options).into_owned()
            }
        };
        if !fragment.is_empty() {
            buffer.push('#');
            buffer.push_str(&fragment);
        }
    }

    // Return URL
    Ok(buffer)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
