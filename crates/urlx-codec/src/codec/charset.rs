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

//! Character sets.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Baseline character set to be percent-encoded.
///
/// This is the conventional set for URI components, which leaves the marks
/// `!`, `'`, `(`, `)` and `*` unescaped. They are not part of the unreserved
/// characters of RFC 3986, and some consumers treat them as delimiters.
#[rustfmt::skip]
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-').remove(b'_').remove(b'.').remove(b'~')
    .remove(b'!').remove(b'\'').remove(b'(').remove(b')').remove(b'*');

/// Character set to be percent-encoded in [`Mode::Default`].
#[rustfmt::skip]
pub const DEFAULT: &AsciiSet = &COMPONENT
    .add(b'!').add(b'\'').add(b'(').add(b')').add(b'*');

/// Character set to be percent-encoded in [`Mode::Strict`].
pub const STRICT: &AsciiSet = &DEFAULT.add(b'.').add(b'~');

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Character mode.
///
/// The mode determines which characters are considered safe, i.e., are left
/// unescaped by the encoder. Non-ASCII characters are never safe.
///
/// - [`Mode::Default`]: `A-Z`, `a-z`, `0-9`, `-`, `_`, `.` and `~`.
/// - [`Mode::Strict`]: `A-Z`, `a-z`, `0-9`, `-` and `_`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Unreserved characters of RFC 3986.
    #[default]
    Default,
    /// Alphanumerics, hyphen and underscore.
    Strict,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Mode {
    /// Returns the character set to be percent-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use percent_encoding::utf8_percent_encode;
    /// use urlx_codec::Mode;
    ///
    /// // Encode with character set of strict mode
    /// let value = utf8_percent_encode("a.b", Mode::Strict.set());
    /// assert_eq!(value.to_string(), "a%2Eb");
    /// ```
    #[inline]
    #[must_use]
    pub const fn set(self) -> &'static AsciiSet {
        match self {
            Mode::Default => DEFAULT,
            Mode::Strict => STRICT,
        }
    }

    /// Returns whether the given character is left unescaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlx_codec::Mode;
    ///
    /// // Check characters in both modes
    /// assert!(Mode::Default.is_safe('~'));
    /// assert!(!Mode::Strict.is_safe('~'));
    /// assert!(!Mode::Default.is_safe('*'));
    /// ```
    #[must_use]
    pub fn is_safe(self, char: char) -> bool {
        match char {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' => true,
            '.' | '~' => self == Mode::Default,
            _ => false,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use percent_encoding::utf8_percent_encode;

    use super::{Mode, COMPONENT};

    #[test]
    fn set_agrees_with_is_safe() {
        for mode in [Mode::Default, Mode::Strict] {
            for char in (0u8..128).map(char::from) {
                let value = char.to_string();
                let encoded = utf8_percent_encode(&value, mode.set());
                assert_eq!(
                    encoded.to_string() == value,
                    mode.is_safe(char),
                    "{mode:?} disagrees on {char:?}"
                );
            }
        }
    }

    #[test]
    fn component_leaves_marks_unescaped() {
        let encoded = utf8_percent_encode("!'()*", COMPONENT).to_string();
        assert_eq!(encoded, "!'()*");
    }

    #[test]
    fn non_ascii_is_never_safe() {
        for char in ['é', 'ß', '你', '🎉', '\u{80}'] {
            assert!(!Mode::Default.is_safe(char));
            assert!(!Mode::Strict.is_safe(char));
        }
    }
}
