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

//! Facade re-exports.

use pretty_assertions::assert_eq;
use urlx::{encode_with, try_decode, DecodeOptions, EncodeOptions, Mode};

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[test]
fn strict_mode_through_facade() {
    let options = EncodeOptions::default().with_mode(Mode::Strict);
    assert_eq!(encode_with("a.b~c", &options).unwrap(), "a%2Eb%7Ec");
    assert!(urlx::codec::charset::Mode::Strict.is_safe('_'));
}

#[test]
fn try_decode_through_facade() {
    assert!(try_decode("%").unwrap_err().is_malformed());
    let options = DecodeOptions::form();
    assert_eq!(urlx::decode_with("a+b", &options).unwrap(), "a b");
}
