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

//! Options.

use super::charset::Mode;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Space convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Space {
    /// Spaces are encoded as `%20`.
    #[default]
    Percent,
    /// Spaces are encoded as `+`, as in form-encoded data.
    Plus,
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Encoding options.
///
/// Options are immutable once built, and are passed by reference to all of
/// the encoding functions, so they can be shared freely between threads. The
/// allowed characters are exempt from encoding regardless of the [`Mode`],
/// which allows to keep selected characters readable in strict mode.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::{encode_with, EncodeOptions, Mode, Space};
///
/// // Create options for strict mode, keeping dots
/// let options = EncodeOptions::default()
///     .with_mode(Mode::Strict)
///     .with_space(Space::Plus)
///     .with_allowed(['.']);
///
/// // Encode value
/// let value = encode_with("index.md ~", &options)?;
/// assert_eq!(value, "index.md+%7E");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Space convention.
    space: Space,
    /// Character mode.
    mode: Mode,
    /// Characters exempt from encoding.
    allowed: Vec<char>,
}

/// Decoding options.
///
/// # Examples
///
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use urlx_codec::{decode_with, DecodeOptions};
///
/// // Create options treating `+` as space
/// let options = DecodeOptions::default().with_plus_as_space(true);
///
/// // Decode value
/// let value = decode_with("a+b%2Bc", &options)?;
/// assert_eq!(value, "a b+c");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Whether `+` is decoded as a space.
    plus_as_space: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl EncodeOptions {
    /// Creates encoding options for form-encoded data.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlx_codec::{EncodeOptions, Space};
    ///
    /// // Create options for form-encoded data
    /// let options = EncodeOptions::form();
    /// assert_eq!(options.space(), Space::Plus);
    /// ```
    #[must_use]
    pub fn form() -> Self {
        Self::default().with_space(Space::Plus)
    }

    /// Sets the space convention.
    #[must_use]
    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    /// Sets the character mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Adds characters that are exempt from encoding.
    ///
    /// Characters are kept sorted and deduplicated, so that equivalent sets
    /// of characters yield equal options, regardless of insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlx_codec::EncodeOptions;
    ///
    /// // Create options with allowed characters
    /// let options = EncodeOptions::default().with_allowed("/:/".chars());
    /// assert_eq!(options.allowed(), ['/', ':']);
    /// ```
    #[must_use]
    pub fn with_allowed<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.allowed.extend(chars);
        self.allowed.sort_unstable();
        self.allowed.dedup();
        self
    }

    /// Returns whether the given character is left unescaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlx_codec::{EncodeOptions, Mode};
    ///
    /// // Create options and check characters
    /// let options = EncodeOptions::default()
    ///     .with_mode(Mode::Strict)
    ///     .with_allowed(['*']);
    /// assert!(options.is_safe('*'));
    /// assert!(!options.is_safe('.'));
    /// ```
    #[must_use]
    pub fn is_safe(&self, char: char) -> bool {
        self.mode.is_safe(char) || self.allowed.binary_search(&char).is_ok()
    }
}

#[allow(clippy::must_use_candidate)]
impl EncodeOptions {
    /// Returns the space convention.
    #[inline]
    pub fn space(&self) -> Space {
        self.space
    }

    /// Returns the character mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the characters exempt from encoding.
    #[inline]
    pub fn allowed(&self) -> &[char] {
        &self.allowed
    }
}

// ----------------------------------------------------------------------------

impl DecodeOptions {
    /// Creates decoding options for form-encoded data.
    #[must_use]
    pub const fn form() -> Self {
        Self { plus_as_space: true }
    }

    /// Sets whether `+` is decoded as a space.
    #[must_use]
    pub const fn with_plus_as_space(mut self, plus_as_space: bool) -> Self {
        self.plus_as_space = plus_as_space;
        self
    }

    /// Returns whether `+` is decoded as a space.
    #[inline]
    #[must_use]
    pub const fn plus_as_space(&self) -> bool {
        self.plus_as_space
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
