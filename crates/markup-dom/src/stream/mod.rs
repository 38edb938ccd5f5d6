//! Streaming encoders.
//!
//! Instead of building a tree, a streaming encoder appends markup straight
//! into a byte buffer. Exactly one encoder owns the buffer at any time: when
//! a slot needs a differently typed encoder (attributes of a tag, an SVG
//! fragment inside HTML), the buffer is moved into it through
//! [`StreamingEncoder::nested`] and moved back when the returned [`Nested`]
//! guard is dropped.

mod attribute;
mod content;

#[cfg(test)]
mod tests;

use std::any::type_name;
use std::convert::Infallible;
use std::mem;
use std::ops::{Deref, DerefMut};

use ecow::EcoString;

use crate::domain::TagDomain;

pub use self::attribute::AttributeEncoder;
pub use self::content::ContentEncoder;

/// A value that owns an output buffer.
pub trait StreamingEncoder: Sized {
    /// Creates an encoder that appends to `utf8`.
    fn from_utf8(utf8: Vec<u8>) -> Self;

    /// The buffer being appended to.
    fn utf8_mut(&mut self) -> &mut Vec<u8>;

    /// Consumes the encoder, returning its buffer.
    fn into_utf8(self) -> Vec<u8>;

    /// Moves this encoder's buffer into a new encoder of type `E`.
    ///
    /// `self` holds an empty buffer until the guard is dropped, at which
    /// point everything `E` appended is moved back. The move happens on every
    /// exit path, including unwinding.
    fn nested<E: StreamingEncoder>(&mut self) -> Nested<'_, E> {
        log::debug!(
            "moving buffer from {} into {}",
            type_name::<Self>(),
            type_name::<E>()
        );
        let home = self.utf8_mut();
        let encoder = E::from_utf8(mem::take(home));
        Nested { home, encoder }
    }
}

/// An encoder borrowing another encoder's buffer. See
/// [`StreamingEncoder::nested`].
#[derive(Debug)]
pub struct Nested<'a, E: StreamingEncoder> {
    home: &'a mut Vec<u8>,
    encoder: E,
}

impl<E: StreamingEncoder> Deref for Nested<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.encoder
    }
}

impl<E: StreamingEncoder> DerefMut for Nested<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.encoder
    }
}

impl<E: StreamingEncoder> Drop for Nested<'_, E> {
    fn drop(&mut self) {
        *self.home = mem::take(self.encoder.utf8_mut());
    }
}

/// The vocabulary a streaming encoder is specialised for.
pub trait Dialect: 'static {
    /// Tags that wrap content.
    type Container: TagDomain;
    /// Attribute names.
    type Attribute: TagDomain;
    /// How an element without content is terminated: `>` in HTML, `/>` in
    /// XML dialects.
    const VOID_TERMINATOR: &'static str;
}

/// A value that knows how to write itself to a [`ContentEncoder`].
///
/// Implement this for domain types that appear in many documents, then
/// stream them with `+=` or through the optional slots of the encoder.
///
/// ```rust
/// use markup_dom::html::{Attribute, ContainerElement, Html};
/// use markup_dom::{AttributeEncoder, ContentEncoder, OutputStreamable};
///
/// struct Badge(&'static str);
///
/// impl OutputStreamable<Html> for Badge {
///     fn encode(&self, html: &mut ContentEncoder<Html>) {
///         *html += self.0;
///     }
///
///     fn encode_attributes(&self, attributes: &mut AttributeEncoder<Html>) {
///         attributes.set(Attribute::Class, "badge");
///     }
/// }
///
/// let html = Html::with(|html| {
///     html.optional(ContainerElement::Span, |_| {}, Some(&Badge("new")));
///     html.optional(ContainerElement::Span, |_| {}, None::<&Badge>);
/// });
/// assert_eq!(html.to_string(), r#"<span class="badge">new</span>"#);
/// ```
pub trait OutputStreamable<L: Dialect> {
    /// Writes the value as content.
    fn encode(&self, encoder: &mut ContentEncoder<L>);

    /// Adds attributes to the tag wrapping this value when it fills an
    /// optional slot. Ignored when the value is streamed with `+=`.
    fn encode_attributes(&self, _attributes: &mut AttributeEncoder<L>) {}
}

impl<L: Dialect> OutputStreamable<L> for str {
    fn encode(&self, encoder: &mut ContentEncoder<L>) {
        encoder.push_str(self);
    }
}

impl<L: Dialect> OutputStreamable<L> for String {
    fn encode(&self, encoder: &mut ContentEncoder<L>) {
        encoder.push_str(self);
    }
}

impl<L: Dialect> OutputStreamable<L> for EcoString {
    fn encode(&self, encoder: &mut ContentEncoder<L>) {
        encoder.push_str(self);
    }
}

impl<L: Dialect, T: OutputStreamable<L> + ?Sized> OutputStreamable<L> for &T {
    fn encode(&self, encoder: &mut ContentEncoder<L>) {
        (**self).encode(encoder);
    }

    fn encode_attributes(&self, attributes: &mut AttributeEncoder<L>) {
        (**self).encode_attributes(attributes);
    }
}

impl<L: Dialect, T: OutputStreamable<L>> OutputStreamable<L> for Option<T> {
    fn encode(&self, encoder: &mut ContentEncoder<L>) {
        if let Some(value) = self {
            value.encode(encoder);
        }
    }

    fn encode_attributes(&self, attributes: &mut AttributeEncoder<L>) {
        if let Some(value) = self {
            value.encode_attributes(attributes);
        }
    }
}

impl<L: Dialect> OutputStreamable<L> for Infallible {
    fn encode(&self, _: &mut ContentEncoder<L>) {
        match *self {}
    }
}
