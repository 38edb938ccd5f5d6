//! Inline prose: literal text interleaved with elements.

use std::convert::Infallible;
use std::fmt::Display;

use ecow::eco_format;

use super::element::DocumentElement;
use crate::domain::DocumentDomain;

/// A run of inline content assembled piece by piece.
///
/// Literal text is escaped into text nodes, displayable values are escaped
/// through their `Display` output, and elements are kept as they are. Pieces
/// appear in the order they were appended.
///
/// ```rust
/// use markup_dom::html::{ContainerElement, Html};
/// use markup_dom::{DocumentElement, Prose};
///
/// let prose = Prose::<Html>::new()
///     .text("found ")
///     .value_as(3, ContainerElement::Strong)
///     .text(" results for <query>");
///
/// let paragraph = DocumentElement::<Html>::container(ContainerElement::P).with_content(prose);
/// assert_eq!(
///     paragraph.rendered(),
///     "<p>found <strong>3</strong> results for &lt;query&gt;</p>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Prose<D: DocumentDomain, I = Infallible> {
    elements: Vec<DocumentElement<D, I>>,
}

impl<D: DocumentDomain, I> Default for Prose<D, I> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<D: DocumentDomain, I> Prose<D, I> {
    /// Creates empty prose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends literal text.
    pub fn text(mut self, unescaped: &str) -> Self {
        self.elements.push(DocumentElement::text(unescaped));
        self
    }

    /// Appends the textual form of a value.
    pub fn value<T: Display>(self, value: T) -> Self {
        self.text(&eco_format!("{value}"))
    }

    /// Appends an element.
    pub fn element(mut self, element: DocumentElement<D, I>) -> Self {
        self.elements.push(element);
        self
    }

    /// Appends literal text wrapped in `container`.
    pub fn text_as(self, unescaped: &str, container: D::Container) -> Self {
        self.element_as(DocumentElement::text(unescaped), container)
    }

    /// Appends the textual form of a value wrapped in `container`.
    pub fn value_as<T: Display>(self, value: T, container: D::Container) -> Self {
        self.text_as(&eco_format!("{value}"), container)
    }

    /// Appends an element wrapped in `container`.
    pub fn element_as(mut self, element: DocumentElement<D, I>, container: D::Container) -> Self {
        self.elements
            .push(DocumentElement::container(container).with_content(element));
        self
    }

    /// The pieces appended so far.
    pub fn elements(&self) -> &[DocumentElement<D, I>] {
        &self.elements
    }

    /// Consumes the prose, returning its pieces.
    pub fn into_elements(self) -> Vec<DocumentElement<D, I>> {
        self.elements
    }
}

impl<D: DocumentDomain, I> From<&str> for Prose<D, I> {
    fn from(literal: &str) -> Self {
        Self::new().text(literal)
    }
}
