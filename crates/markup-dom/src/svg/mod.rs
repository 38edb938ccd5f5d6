//! The SVG dialect.
//!
//! [`Svg`] mirrors [`Html`](crate::Html): a streamed document that also
//! serves as the dialect marker. Unlike HTML, every element without content
//! self-closes, so SVG output is well-formed XML.

mod element;
mod point;

#[cfg(test)]
mod tests;

use std::fmt;
use std::io;

use crate::domain::{DocumentDomain, TagDomain};
use crate::error::MarkupResult;
use crate::options::EncoderOptions;
use crate::stream::{AttributeEncoder, ContentEncoder, Dialect, StreamingEncoder};

pub use self::element::{Attribute, ContainerElement, LeafElement};
pub use self::point::Point;

/// The declaration [`Svg::document`] starts with.
pub const PROLOG: &str = "<?xml version='1.0' encoding='UTF-8' standalone='no'?>";

/// An SVG document or fragment, encoded as UTF-8.
///
/// ```rust
/// use markup_dom::svg::{Attribute, ContainerElement, LeafElement, Point, Svg};
///
/// let corner = Point::new(4, 2);
/// let drawing = Svg::with(|svg| {
///     svg.element(ContainerElement::G, |svg| {
///         svg.leaf(LeafElement::Polyline, |a| {
///             a.set(Attribute::Points, &format!("0,0 {corner}"))
///         });
///     });
/// });
///
/// assert_eq!(drawing.to_string(), r#"<g><polyline points="0,0 4,2"/></g>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Svg {
    encoder: ContentEncoder<Svg>,
}

impl Svg {
    /// Creates a completely empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes a fragment with the provided closure.
    ///
    /// To encode a complete document, use [`Svg::document`].
    pub fn with<F>(encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Svg>),
    {
        Self::with_options(EncoderOptions::default(), encode)
    }

    /// Encodes a standalone document with the provided closure, prefixed
    /// with the XML declaration.
    pub fn document<F>(encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Svg>),
    {
        Self::with_options(
            EncoderOptions::default().preamble(Some(PROLOG.into())),
            encode,
        )
    }

    /// Encodes with the provided closure, configured by `options`.
    pub fn with_options<F>(options: EncoderOptions, encode: F) -> Self
    where
        F: FnOnce(&mut ContentEncoder<Svg>),
    {
        let mut encoder = ContentEncoder::with_options(&options);
        encode(&mut encoder);
        Self { encoder }
    }

    /// Creates a document containing exactly `raw`, without escaping or
    /// validation.
    pub fn from_unsafe<B: AsRef<[u8]> + ?Sized>(raw: &B) -> Self {
        Self::with(|svg| svg.append_unsafe(raw))
    }

    /// The encoder, for appending more content.
    pub fn encoder_mut(&mut self) -> &mut ContentEncoder<Svg> {
        &mut self.encoder
    }

    /// The encoded bytes.
    pub fn utf8(&self) -> &[u8] {
        self.encoder.utf8()
    }

    /// Consumes the document, returning its bytes.
    pub fn into_utf8(self) -> Vec<u8> {
        self.encoder.into_utf8()
    }

    /// Consumes the document, returning it as a string.
    pub fn into_string(self) -> MarkupResult<String> {
        Ok(String::from_utf8(self.into_utf8())?)
    }

    /// Writes the encoded bytes to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> MarkupResult<()> {
        out.write_all(self.utf8())?;
        Ok(())
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.utf8()))
    }
}

impl Dialect for Svg {
    type Container = ContainerElement;
    type Attribute = Attribute;

    const VOID_TERMINATOR: &'static str = "/>";
}

impl DocumentDomain for Svg {
    type Container = ContainerElement;
    type Leaf = LeafElement;
}

impl ContentEncoder<Svg> {
    /// Writes a self-closing element.
    pub fn leaf<A>(&mut self, tag: LeafElement, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<Svg>),
    {
        self.emit_void(tag.name(), attributes);
    }
}
