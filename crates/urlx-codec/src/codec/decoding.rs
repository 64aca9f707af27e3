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

//! Decoding.

use log::warn;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

use super::error::{Error, Result};
use super::options::DecodeOptions;
use super::text;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Decodes a value with default options.
///
/// Decoding never fails on malformed percent-encoding. If the value contains
/// a `%` that is not followed by two hex digits, or if the unescaped bytes
/// are not valid UTF-8, the value is returned unchanged and a warning is
/// logged. Use [`try_decode`] to tell both cases apart.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`] is returned.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::decode;
///
/// // Decode value
/// let value = decode("Hello%20World%21")?;
/// assert_eq!(value, "Hello World!");
///
/// // Decode truncated value
/// let value = decode("Hello%2")?;
/// assert_eq!(value, "Hello%2");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn decode<T>(value: &T) -> Result<Cow<'_, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    decode_with(value, &DecodeOptions::default())
}

/// Decodes a value with the given options.
///
/// If `+` should be decoded as a space, it's substituted before unescaping,
/// so `%2B` still yields a literal `+`. When unescaping fails, the value is
/// returned after substitution.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`] is returned.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::{decode_with, DecodeOptions};
///
/// // Decode form-encoded value
/// let value = decode_with("Hello+World", &DecodeOptions::form())?;
/// assert_eq!(value, "Hello World");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn decode_with<'a, T>(
    value: &'a T,
    options: &DecodeOptions,
) -> Result<Cow<'a, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    text(value.as_ref()).map(|value| decode_str(value, options))
}

/// Attempts to decode a value with default options.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`] is returned. If the
/// percent-encoding is malformed, [`Error::Escape`] or [`Error::Utf8`] is
/// returned, see [`Error::is_malformed`].
///
/// # Examples
///
/// ```
/// use urlx_codec::{try_decode, Error};
///
/// // Decode value with invalid escape sequence
/// let res = try_decode("100%");
/// assert_eq!(res, Err(Error::Escape { position: 3 }));
/// ```
#[inline]
pub fn try_decode<T>(value: &T) -> Result<Cow<'_, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    try_decode_with(value, &DecodeOptions::default())
}

/// Attempts to decode a value with the given options.
///
/// # Errors
///
/// If the value is not valid UTF-8, [`Error::Input`] is returned. If the
/// percent-encoding is malformed, [`Error::Escape`] or [`Error::Utf8`] is
/// returned, see [`Error::is_malformed`].
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::{try_decode_with, DecodeOptions};
///
/// // Decode form-encoded value
/// let value = try_decode_with("1%2B1+=+2", &DecodeOptions::form())?;
/// assert_eq!(value, "1+1 = 2");
/// # Ok(())
/// # }
/// ```
pub fn try_decode_with<'a, T>(
    value: &'a T,
    options: &DecodeOptions,
) -> Result<Cow<'a, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    match substitute(text(value.as_ref())?, options) {
        Cow::Borrowed(value) => unescape(value),
        Cow::Owned(value) => {
            unescape(&value).map(|value| Cow::Owned(value.into_owned()))
        }
    }
}

/// Decodes a string, falling back to the string on malformed input.
pub(crate) fn decode_str<'a>(
    value: &'a str,
    options: &DecodeOptions,
) -> Cow<'a, str> {
    let value = substitute(value, options);
    match unescape(&value) {
        Ok(Cow::Owned(decoded)) => return Cow::Owned(decoded),
        Ok(Cow::Borrowed(_)) => {}
        Err(err) => warn!("Could not decode {value:?}: {err}"),
    }

    // Nothing was unescaped, or the value is malformed
    value
}

/// Unescapes a string.
///
/// Every `%` must be followed by two hex digits, and the unescaped bytes must
/// be valid UTF-8. If no `%` is present, a borrowed reference is returned.
///
/// # Errors
///
/// This function returns [`Error::Escape`] for a `%` that does not start a
/// valid escape sequence, and [`Error::Utf8`] for invalid UTF-8.
pub(crate) fn unescape(value: &str) -> Result<Cow<'_, str>> {
    let bytes = value.as_bytes();
    for (position, _) in value.match_indices('%') {
        match bytes.get(position + 1..position + 3) {
            Some(&[b1, b2])
                if b1.is_ascii_hexdigit() && b2.is_ascii_hexdigit() => {}
            _ => return Err(Error::Escape { position }),
        }
    }

    // All escape sequences are valid, so only the encoding can be off
    percent_decode_str(value).decode_utf8().map_err(Error::Utf8)
}

/// Substitutes `+` with spaces, if requested by the given options.
fn substitute<'a>(value: &'a str, options: &DecodeOptions) -> Cow<'a, str> {
    if options.plus_as_space() && value.contains('+') {
        Cow::Owned(value.replace('+', " "))
    } else {
        Cow::Borrowed(value)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
