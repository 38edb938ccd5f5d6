//! The attribute encoder shared by every dialect.

use std::fmt;
use std::marker::PhantomData;

use super::{Dialect, StreamingEncoder};
use crate::domain::TagDomain;
use crate::escape::extend_escaped_attribute;

/// Appends attributes to an opening tag of the dialect `L`.
///
/// An attribute encoder only ever exists while a tag is being opened: it
/// holds the buffer of the [`ContentEncoder`](super::ContentEncoder) that
/// lent it. Values are written in double quotes with `<`, `>`, `&`, `'` and
/// `"` replaced by entities.
pub struct AttributeEncoder<L> {
    utf8: Vec<u8>,
    dialect: PhantomData<fn() -> L>,
}

impl<L> fmt::Debug for AttributeEncoder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeEncoder")
            .field("utf8", &String::from_utf8_lossy(&self.utf8))
            .finish()
    }
}

impl<L> StreamingEncoder for AttributeEncoder<L> {
    fn from_utf8(utf8: Vec<u8>) -> Self {
        Self {
            utf8,
            dialect: PhantomData,
        }
    }

    fn utf8_mut(&mut self) -> &mut Vec<u8> {
        &mut self.utf8
    }

    fn into_utf8(self) -> Vec<u8> {
        self.utf8
    }
}

impl<L: Dialect> AttributeEncoder<L> {
    fn emit(&mut self, prefix: &str, name: &str, value: &str) {
        self.utf8.push(b' ');
        self.utf8.extend_from_slice(prefix.as_bytes());
        self.utf8.extend_from_slice(name.as_bytes());
        self.utf8.extend_from_slice(b"=\"");
        extend_escaped_attribute(&mut self.utf8, value.as_bytes());
        self.utf8.push(b'"');
    }

    /// Writes `name="value"`.
    pub fn set(&mut self, name: L::Attribute, value: &str) {
        self.emit("", name.name(), value);
    }

    /// Writes `name="value"` if there is a value.
    pub fn set_optional(&mut self, name: L::Attribute, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Writes the empty attribute `name=""` if `enabled` is true.
    pub fn flag(&mut self, name: L::Attribute, enabled: bool) {
        if enabled {
            self.set(name, "");
        }
    }

    /// Writes a custom `data-{suffix}="value"` attribute if there is a value.
    ///
    /// The suffix is written verbatim and must not include the `data-`
    /// prefix.
    pub fn data(&mut self, suffix: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.emit("data-", suffix, value);
        }
    }
}
