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

//! Properties of encoding and decoding.

use pretty_assertions::assert_eq;
use urlx_codec::{
    decode, decode_query, encode, encode_query, encode_query_with, encode_url,
    encode_with, EncodeOptions, Error, Mode, Query, Space,
};

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[test]
fn encodes_known_values() {
    for (value, expected) in [
        ("", ""),
        ("Hello World", "Hello%20World"),
        ("100% sure!", "100%25%20sure%21"),
        ("it's", "it%27s"),
        ("test(1)", "test%281%29"),
        ("asterisk*here", "asterisk%2Ahere"),
        ("你好世界", "%E4%BD%A0%E5%A5%BD%E4%B8%96%E7%95%8C"),
        ("🎉", "%F0%9F%8E%89"),
    ] {
        assert_eq!(encode(value).unwrap(), expected);
    }
}

#[test]
fn encodes_spaces_as_plus() {
    let options = EncodeOptions::default().with_space(Space::Plus);
    assert_eq!(encode_with("Hello World", &options).unwrap(), "Hello+World");
    assert_eq!(encode_with("a+b c", &options).unwrap(), "a%2Bb+c");
}

#[test]
fn round_trips_text() {
    let mut value = String::new();
    for char in (0u32..0x300).chain([0x4F60, 0xFFFD, 0x1F389]) {
        value.extend(char::from_u32(char));
    }
    let encoded = encode(&value).unwrap();
    assert!(encoded.is_ascii());
    assert_eq!(decode(&*encoded).unwrap(), value);
}

#[test]
fn strict_mode_output_is_restricted() {
    let options = EncodeOptions::default().with_mode(Mode::Strict);
    let value: String = (0u32..0x200).filter_map(char::from_u32).collect();
    let encoded = encode_with(&value, &options).unwrap();
    assert!(encoded
        .chars()
        .all(|char| char.is_ascii_alphanumeric() || matches!(char, '-' | '_' | '%')));
    assert_eq!(decode(&*encoded).unwrap(), value);
}

#[test]
fn decode_falls_back_on_malformed_input() {
    assert_eq!(decode("Hello%2").unwrap(), "Hello%2");
}

#[test]
fn non_text_is_rejected() {
    let value: &[u8] = &[0xF0, 0x9F];
    assert!(matches!(encode(value), Err(Error::Input(_))));
    assert!(matches!(decode(value), Err(Error::Input(_))));
    assert!(matches!(encode_url(value), Err(Error::Input(_))));
    assert!(matches!(decode_query(value), Err(Error::Input(_))));
}

#[test]
fn query_round_trips() {
    let mut query = Query::new();
    query.insert("name".into(), "Jane Doe".into());
    query.insert("note".into(), "it's 100% (true)!".into());
    query.insert("emoji".into(), "🎉".into());
    query.insert("empty".into(), String::new());
    assert_eq!(decode_query(&encode_query(&query)).unwrap(), query);

    // Form-encoded query strings use `+` for spaces
    let encoded = encode_query_with(&query, &EncodeOptions::form());
    assert_eq!(
        encoded,
        "name=Jane+Doe&note=it%27s+100%25+%28true%29%21&emoji=%F0%9F%8E%89&empty="
    );
}

#[test]
fn query_stringifies_values() {
    let query = decode_query(&encode_query([("n", 7)])).unwrap();
    assert_eq!(query["n"], "7");
    let query = decode_query(&encode_query([("b", true)])).unwrap();
    assert_eq!(query["b"], "true");
}

#[test]
fn query_valueless_key() {
    let query = decode_query("key1&key2=value2").unwrap();
    let expected: Query = [("key1", ""), ("key2", "value2")]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
    assert_eq!(query, expected);
}

#[test]
fn url_without_query_and_fragment_is_unchanged() {
    let url = "https://example.com:8080/path/to/resource";
    assert_eq!(encode_url(url).unwrap(), url);
}

#[test]
fn url_fragment_is_encoded_once() {
    let url = encode_url("https://example.com/page#section name").unwrap();
    assert!(url.contains("#section%20name"));
    assert!(!url.contains("%2520"));
}
