//! HTML-specific encoder slots.

use super::{Attribute, ContainerElement, Html, Property, Rel, UnsafeElement, VoidElement};
use crate::domain::TagDomain;
use crate::stream::{AttributeEncoder, ContentEncoder, OutputStreamable, StreamingEncoder};
use crate::svg::{self, Svg};

impl ContentEncoder<Html> {
    /// Writes a void element: an opening tag with no content and no closing
    /// tag.
    pub fn void<A>(&mut self, tag: VoidElement, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<Html>),
    {
        self.emit_void(tag.name(), attributes);
    }

    /// Writes an empty `script` or `style` element, typically one that loads
    /// its content from a `src` or `href`.
    pub fn unsafe_element<A>(&mut self, tag: UnsafeElement, attributes: A)
    where
        A: FnOnce(&mut AttributeEncoder<Html>),
    {
        self.emit_opening(tag.name(), attributes);
        self.emit_closing(tag.name());
    }

    /// Writes a `script` or `style` element around `raw`, which is not
    /// escaped.
    pub fn unsafe_content<A, B>(&mut self, tag: UnsafeElement, attributes: A, raw: &B)
    where
        A: FnOnce(&mut AttributeEncoder<Html>),
        B: AsRef<[u8]> + ?Sized,
    {
        self.emit_opening(tag.name(), attributes);
        self.append_unsafe(raw);
        self.emit_closing(tag.name());
    }

    /// Writes an `a` element pointing to `target`, or a `span` if there is no
    /// target.
    pub fn link<A, C>(&mut self, target: Option<&str>, attributes: A, content: C)
    where
        A: FnOnce(&mut AttributeEncoder<Html>),
        C: FnOnce(&mut Self),
    {
        match target {
            Some(target) => self.element_with(
                ContainerElement::A,
                |a| {
                    a.href(target);
                    attributes(a);
                },
                content,
            ),
            None => self.element_with(ContainerElement::Span, attributes, content),
        }
    }

    /// Writes `value` as a [`link`](Self::link), if there is a value.
    pub fn link_optional<R, A>(&mut self, target: Option<&str>, attributes: A, value: Option<&R>)
    where
        R: OutputStreamable<Html> + ?Sized,
        A: FnOnce(&mut AttributeEncoder<Html>),
    {
        let Some(value) = value else {
            return;
        };
        self.link(
            target,
            |wrapper| {
                value.encode_attributes(wrapper);
                attributes(wrapper);
            },
            |content| value.encode(content),
        );
    }

    /// Embeds an `svg` element. The buffer is handed to an SVG encoder for
    /// the duration of the call, so `content` writes SVG markup directly into
    /// this document.
    pub fn svg<A, C>(&mut self, attributes: A, content: C)
    where
        A: FnOnce(&mut AttributeEncoder<Svg>),
        C: FnOnce(&mut ContentEncoder<Svg>),
    {
        log::debug!("embedding svg fragment at byte {}", self.utf8().len());
        let mut fragment = self.nested::<ContentEncoder<Svg>>();
        fragment.element_with(svg::ContainerElement::Svg, attributes, content);
    }

    /// Embeds `value` as an `svg` element, if there is a value.
    pub fn svg_optional<R, A>(&mut self, attributes: A, value: Option<&R>)
    where
        R: OutputStreamable<Svg> + ?Sized,
        A: FnOnce(&mut AttributeEncoder<Svg>),
    {
        if value.is_none() {
            return;
        }
        log::debug!("embedding svg fragment at byte {}", self.utf8().len());
        let mut fragment = self.nested::<ContentEncoder<Svg>>();
        fragment.optional(svg::ContainerElement::Svg, attributes, value);
    }
}

impl AttributeEncoder<Html> {
    /// Writes `href`.
    pub fn href(&mut self, target: &str) {
        self.set(Attribute::Href, target);
    }

    /// Writes `class`.
    pub fn class(&mut self, class: &str) {
        self.set(Attribute::Class, class);
    }

    /// Writes `id`.
    pub fn id(&mut self, id: &str) {
        self.set(Attribute::Id, id);
    }

    /// Writes `rel`.
    pub fn rel(&mut self, rel: Rel) {
        self.set(Attribute::Rel, rel.as_ref());
    }

    /// Writes an Open Graph `property`.
    pub fn property(&mut self, property: Property) {
        self.set(Attribute::Property, property.as_ref());
    }
}
