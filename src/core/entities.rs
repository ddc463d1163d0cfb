//! SSML Entity Codec
//!
//! Only the three entities `&lt;` `&gt;` `&amp;` exist in the dialect.
//! Numeric character references and any other `&name;` sequence are plain
//! text and are kept as-is.
//!
//! Uses Cow for zero-copy when nothing needs rewriting.

use crate::config::EntityMode;
use memchr::{memchr, memchr3};
use std::borrow::Cow;

/// Decode entities in text content (single left-to-right pass)
///
/// Each entity is decoded exactly once, so `unescape(escape(s)) == s`.
pub fn unescape(input: &str) -> Cow<'_, str> {
    // Fast path: no '&' means nothing to decode
    let Some(first) = memchr(b'&', input.as_bytes()) else {
        return Cow::Borrowed(input);
    };

    let mut result = String::with_capacity(input.len());
    result.push_str(&input[..first]);
    let mut rest = &input[first..];

    while let Some(amp) = memchr(b'&', rest.as_bytes()) {
        result.push_str(&rest[..amp]);
        rest = &rest[amp..];

        match decode_entity(rest) {
            Some((decoded, len)) => {
                result.push(decoded);
                rest = &rest[len..];
            }
            None => {
                // Not one of ours, keep the ampersand
                result.push('&');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Match an entity at the start of `input` (which begins with '&')
#[inline]
fn decode_entity(input: &str) -> Option<(char, usize)> {
    if input.starts_with("&lt;") {
        Some(('<', 4))
    } else if input.starts_with("&gt;") {
        Some(('>', 4))
    } else if input.starts_with("&amp;") {
        Some(('&', 5))
    } else {
        None
    }
}

/// Encode text for SSML output (single pass)
pub fn escape(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    // Fast path: check if any escaping needed
    if memchr3(b'<', b'>', b'&', bytes).is_none() {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Legacy decoding: replace `&lt;`, then `&gt;`, then `&amp;` over the whole string
///
/// Not lossless: `&amp;lt;` decodes to `<` rather than `&lt;`.
pub fn unescape_sequential(input: &str) -> Cow<'_, str> {
    if memchr(b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Legacy encoding: replace `<`, then `>`, then `&` over the whole string
///
/// Not lossless: the ampersands introduced for `<` and `>` are escaped again,
/// so `<` becomes `&amp;lt;`.
pub fn escape_sequential(input: &str) -> Cow<'_, str> {
    if memchr3(b'<', b'>', b'&', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('&', "&amp;"),
    )
}

/// Decode with the given mode
#[inline]
pub fn unescape_with(input: &str, mode: EntityMode) -> Cow<'_, str> {
    match mode {
        EntityMode::SinglePass => unescape(input),
        EntityMode::Sequential => unescape_sequential(input),
    }
}

/// Encode with the given mode
#[inline]
pub fn escape_with(input: &str, mode: EntityMode) -> Cow<'_, str> {
    match mode {
        EntityMode::SinglePass => escape(input),
        EntityMode::Sequential => escape_sequential(input),
    }
}
