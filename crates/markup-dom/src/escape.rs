//! Escaping shared by the tree renderer and the streaming encoders.
//!
//! The entity set is fixed: `&lt;`, `&gt;` and `&amp;` in every context, plus
//! `&apos;` and `&quot;` where a value is written inside quotes. No numeric
//! character references are ever produced.

use std::borrow::Cow;

/// Escapes text content: `<`, `>` and `&`.
pub fn escape_text(unescaped: &str) -> Cow<'_, str> {
    html_escape::encode_text(unescaped)
}

/// Escapes a value for an attribute or a text literal in a tree: `<`, `>`,
/// `&`, `'` and `"`.
pub fn escape_attribute(unescaped: &str) -> Cow<'_, str> {
    let Some(first) = unescaped.find(['<', '>', '&', '\'', '"']) else {
        return Cow::Borrowed(unescaped);
    };

    let mut escaped = String::with_capacity(unescaped.len() + 8);
    escaped.push_str(&unescaped[..first]);
    for ch in unescaped[first..].chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Returns the entity replacing a single UTF-8 code unit in text context, or
/// `None` if the code unit passes through unchanged.
///
/// Bytes of multi-byte UTF-8 sequences are never ASCII, so escaping a string
/// one code unit at a time is equivalent to escaping it by characters.
#[inline]
pub fn escape_byte(codeunit: u8) -> Option<&'static [u8]> {
    match codeunit {
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        b'&' => Some(b"&amp;"),
        _ => None,
    }
}

/// Same as [`escape_byte`], for attribute values.
#[inline]
pub fn escape_attribute_byte(codeunit: u8) -> Option<&'static [u8]> {
    match codeunit {
        b'\'' => Some(b"&apos;"),
        b'"' => Some(b"&quot;"),
        other => escape_byte(other),
    }
}

/// Appends `text` to `out`, escaping it in text context.
pub fn extend_escaped(out: &mut Vec<u8>, text: &str) {
    html_escape::encode_text_to_vec(text, out);
}

/// Appends `utf8` to `out`, escaping each code unit as an attribute value.
pub fn extend_escaped_attribute(out: &mut Vec<u8>, utf8: &[u8]) {
    for &codeunit in utf8 {
        match escape_attribute_byte(codeunit) {
            Some(entity) => out.extend_from_slice(entity),
            None => out.push(codeunit),
        }
    }
}

/// Returns true if `name` can be written as an attribute name without
/// breaking out of the tag.
pub fn is_safe_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-' | '.'))
}
