//! The content encoder shared by every dialect.

use std::fmt;
use std::marker::PhantomData;
use std::ops::AddAssign;

use super::{AttributeEncoder, Dialect, OutputStreamable, StreamingEncoder};
use crate::domain::TagDomain;
use crate::escape::{escape_byte, extend_escaped};
use crate::options::EncoderOptions;

/// Appends element markup and text for the dialect `L`.
///
/// Text is escaped one code unit at a time as it is appended. Raw bytes only
/// enter the stream through [`Self::append_escaped`] and
/// [`Self::append_unsafe`].
pub struct ContentEncoder<L> {
    utf8: Vec<u8>,
    dialect: PhantomData<fn() -> L>,
}

impl<L> fmt::Debug for ContentEncoder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentEncoder")
            .field("utf8", &String::from_utf8_lossy(&self.utf8))
            .finish()
    }
}

impl<L> Clone for ContentEncoder<L> {
    fn clone(&self) -> Self {
        Self::from_utf8(self.utf8.clone())
    }
}

impl<L> PartialEq for ContentEncoder<L> {
    fn eq(&self, other: &Self) -> bool {
        self.utf8 == other.utf8
    }
}

impl<L> Default for ContentEncoder<L> {
    fn default() -> Self {
        Self::from_utf8(Vec::new())
    }
}

impl<L> StreamingEncoder for ContentEncoder<L> {
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

impl<L> ContentEncoder<L> {
    /// Creates an encoder with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder whose buffer can hold `capacity` bytes without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_utf8(Vec::with_capacity(capacity))
    }

    /// Creates an encoder configured by `options`. The preamble, if any, is
    /// written verbatim.
    pub fn with_options(options: &EncoderOptions) -> Self {
        let mut utf8 = Vec::with_capacity(options.capacity);
        if let Some(preamble) = &options.preamble {
            utf8.extend_from_slice(preamble.as_bytes());
        }
        Self::from_utf8(utf8)
    }

    /// The bytes written so far.
    pub fn utf8(&self) -> &[u8] {
        &self.utf8
    }

    /// Appends a raw code unit.
    #[inline]
    pub fn append_escaped(&mut self, codeunit: u8) {
        self.utf8.push(codeunit);
    }

    /// Appends a code unit, replacing `<`, `>` and `&` with entities.
    #[inline]
    pub fn append_unescaped(&mut self, codeunit: u8) {
        match escape_byte(codeunit) {
            Some(entity) => self.utf8.extend_from_slice(entity),
            None => self.utf8.push(codeunit),
        }
    }

    /// Appends text, replacing `<`, `>` and `&` with entities.
    pub fn push_str(&mut self, text: &str) {
        extend_escaped(&mut self.utf8, text);
    }

    /// Appends `raw` without any escaping.
    ///
    /// Nothing is validated, not even that `raw` is UTF-8, so the bytes must
    /// come from a trusted source.
    pub fn append_unsafe<B: AsRef<[u8]> + ?Sized>(&mut self, raw: &B) {
        self.utf8.extend_from_slice(raw.as_ref());
    }
}

impl<L: Dialect> ContentEncoder<L> {
    pub(crate) fn emit_opening<A>(&mut self, name: &str, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<L>),
    {
        self.utf8.push(b'<');
        self.utf8.extend_from_slice(name.as_bytes());
        {
            let mut nested = self.nested::<AttributeEncoder<L>>();
            attributes(&mut *nested);
        }
        self.utf8.push(b'>');
    }

    pub(crate) fn emit_void<A>(&mut self, name: &str, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<L>),
    {
        self.utf8.push(b'<');
        self.utf8.extend_from_slice(name.as_bytes());
        {
            let mut nested = self.nested::<AttributeEncoder<L>>();
            attributes(&mut *nested);
        }
        self.utf8.extend_from_slice(L::VOID_TERMINATOR.as_bytes());
    }

    pub(crate) fn emit_closing(&mut self, name: &str) {
        self.utf8.extend_from_slice(b"</");
        self.utf8.extend_from_slice(name.as_bytes());
        self.utf8.push(b'>');
    }

    /// Writes an opening tag. Prefer [`Self::element_with`], which cannot
    /// leave the tag unclosed.
    pub fn open<A>(&mut self, tag: L::Container, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<L>),
    {
        self.emit_opening(tag.name(), attributes);
    }

    /// Writes a closing tag.
    pub fn close(&mut self, tag: L::Container) {
        self.emit_closing(tag.name());
    }

    /// Writes an element without attributes around whatever `content`
    /// appends.
    pub fn element<C>(&mut self, tag: L::Container, content: C)
    where
        C: FnOnce(&mut Self),
    {
        self.element_with(tag, |_| {}, content);
    }

    /// Writes an element with attributes around whatever `content` appends.
    pub fn element_with<A, C>(&mut self, tag: L::Container, attributes: A, content: C)
    where
        A: FnOnce(&mut AttributeEncoder<L>),
        C: FnOnce(&mut Self),
    {
        self.emit_opening(tag.name(), attributes);
        content(self);
        self.emit_closing(tag.name());
    }

    /// Writes `value` wrapped in `tag`, if there is a value.
    ///
    /// The wrapper receives the value's own attributes first, then those
    /// added by `attributes`. If `value` is `None`, nothing is written and
    /// `attributes` is never called.
    pub fn optional<R, A>(&mut self, tag: L::Container, attributes: A, value: Option<&R>)
    where
        R: OutputStreamable<L> + ?Sized,
        A: FnOnce(&mut AttributeEncoder<L>),
    {
        let Some(value) = value else {
            return;
        };
        self.element_with(
            tag,
            |wrapper| {
                value.encode_attributes(wrapper);
                attributes(wrapper);
            },
            |content| value.encode(content),
        );
    }

    /// Writes `value` through several levels of wrappers, if there is a
    /// value. `exterior` is outermost and carries the attributes; the
    /// `interiors` are opened in order and closed in reverse.
    pub fn optional_nested<R, A>(
        &mut self,
        exterior: L::Container,
        interiors: &[L::Container],
        attributes: A,
        value: Option<&R>,
    ) where
        R: OutputStreamable<L> + ?Sized,
        A: FnOnce(&mut AttributeEncoder<L>),
    {
        let Some(value) = value else {
            return;
        };
        self.element_with(
            exterior,
            |wrapper| {
                value.encode_attributes(wrapper);
                attributes(wrapper);
            },
            |content| {
                for interior in interiors {
                    content.emit_opening(interior.name(), |_| {});
                }
                value.encode(content);
                for interior in interiors.iter().rev() {
                    content.emit_closing(interior.name());
                }
            },
        );
    }
}

impl<L: Dialect, T: OutputStreamable<L> + ?Sized> AddAssign<&T> for ContentEncoder<L> {
    fn add_assign(&mut self, value: &T) {
        value.encode(self);
    }
}
