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

//! Encoding.

use percent_encoding::{percent_encode_byte, utf8_percent_encode};
use std::borrow::Cow;

use super::charset::Mode;
use super::error::Result;
use super::options::{EncodeOptions, Space};
use super::text;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes a value with default options.
///
/// All characters except `A-Z`, `a-z`, `0-9`, `-`, `_`, `.` and `~` are
/// percent-encoded, including `!`, `'`, `(`, `)` and `*`, which are left as
/// is by most implementations. Non-ASCII characters are encoded as UTF-8, and
/// each byte is written as a `%XX` triplet with uppercase hex digits.
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
/// use urlx_codec::encode;
///
/// // Encode value
/// let value = encode("100% sure!")?;
/// assert_eq!(value, "100%25%20sure%21");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn encode<T>(value: &T) -> Result<Cow<'_, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    encode_with(value, &EncodeOptions::default())
}

/// Encodes a value with the given options.
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
/// use urlx_codec::{encode_with, EncodeOptions, Mode};
///
/// // Encode value in strict mode
/// let options = EncodeOptions::default().with_mode(Mode::Strict);
/// let value = encode_with("file.tar~1", &options)?;
/// assert_eq!(value, "file%2Etar%7E1");
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn encode_with<'a, T>(
    value: &'a T,
    options: &EncodeOptions,
) -> Result<Cow<'a, str>>
where
    T: AsRef<[u8]> + ?Sized,
{
    text(value.as_ref()).map(|value| encode_str(value, options))
}

/// Encodes a string.
///
/// In default mode without allowed characters, which is by far the common
/// case, the string is encoded in one pass with the character set of the
/// [`Mode`], and is only allocated if at least one character needs encoding.
/// Otherwise, each character must be classified individually.
pub(crate) fn encode_str<'a>(
    value: &'a str,
    options: &EncodeOptions,
) -> Cow<'a, str> {
    let mode = options.mode();
    let value = if mode == Mode::Default && options.allowed().is_empty() {
        utf8_percent_encode(value, mode.set()).into()
    } else {
        classify(value, options)
    };

    // Spaces were encoded as `%20` above, and literal `+` as `%2B`, so the
    // only `%20` triplets in the encoded string stem from spaces, unless `%`
    // was explicitly allowed by the caller
    match options.space() {
        Space::Plus if value.contains("%20") => {
            Cow::Owned(value.replace("%20", "+"))
        }
        _ => value,
    }
}

/// Encodes a string, classifying each character individually.
fn classify<'a>(value: &'a str, options: &EncodeOptions) -> Cow<'a, str> {
    let mut buffer = String::with_capacity(value.len());
    let mut bytes = [0; 4];
    for char in value.chars() {
        if options.is_safe(char) {
            buffer.push(char);
        } else {
            for &byte in char.encode_utf8(&mut bytes).as_bytes() {
                buffer.push_str(percent_encode_byte(byte));
            }
        }
    }

    // Encoding always grows the string, so equal lengths mean that no
    // character was encoded, and we can return the original value
    if buffer.len() == value.len() {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(buffer)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{encode, encode_with};
    use crate::{EncodeOptions, Error, Mode, Space};

    #[test]
    fn empty() {
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn reserved_marks() {
        assert_eq!(encode("it's").unwrap(), "it%27s");
        assert_eq!(encode("test(1)").unwrap(), "test%281%29");
        assert_eq!(encode("asterisk*here").unwrap(), "asterisk%2Ahere");
        assert_eq!(encode("wow!").unwrap(), "wow%21");
    }

    #[test]
    fn spaces() {
        let options = EncodeOptions::default().with_space(Space::Plus);
        assert_eq!(encode("Hello World").unwrap(), "Hello%20World");
        assert_eq!(encode_with("Hello World", &options).unwrap(), "Hello+World");
        assert_eq!(encode_with("1+1 = 2", &options).unwrap(), "1%2B1+%3D+2");
    }

    #[test]
    fn multi_byte() {
        assert_eq!(
            encode("你好世界").unwrap(),
            "%E4%BD%A0%E5%A5%BD%E4%B8%96%E7%95%8C"
        );
        assert_eq!(encode("🎉").unwrap(), "%F0%9F%8E%89");
        assert_eq!(encode("café").unwrap(), "caf%C3%A9");
    }

    #[test]
    fn unreserved_is_borrowed() {
        let value = encode("hello-world_123.txt~").unwrap();
        assert!(matches!(value, Cow::Borrowed("hello-world_123.txt~")));

        let options = EncodeOptions::default().with_mode(Mode::Strict);
        let value = encode_with("abc_XYZ-09", &options).unwrap();
        assert!(matches!(value, Cow::Borrowed(_)));
    }

    #[test]
    fn strict_mode() {
        let options = EncodeOptions::default().with_mode(Mode::Strict);
        let value = "Hello, World! It's (really) *fun* ~ 100.5% 🎉";
        let encoded = encode_with(value, &options).unwrap();
        assert!(encoded
            .chars()
            .all(|char| char.is_ascii_alphanumeric() || "-_%".contains(char)));
        assert_eq!(encode_with(".~", &options).unwrap(), "%2E%7E");
    }

    #[test]
    fn allowed_in_default_mode() {
        let options = EncodeOptions::default().with_allowed(['/', '*']);
        assert_eq!(encode_with("a/b*c d", &options).unwrap(), "a/b*c%20d");
    }

    #[test]
    fn allowed_non_ascii() {
        let options = EncodeOptions::default().with_allowed(['é']);
        assert_eq!(encode_with("café ü", &options).unwrap(), "café%20%C3%BC");
    }

    #[test]
    fn input_must_be_text() {
        let err = encode(&[0x66, 0x6F, 0xFF][..]).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(!err.is_malformed());
    }
}
