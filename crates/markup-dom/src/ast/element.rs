//! Element definitions for the document tree.

use std::convert::Infallible;

use ecow::EcoString;

use super::builder::{AttributeBuilder, Attributes, ContentBuilder, IntoAttributes, IntoContent};
use super::root::AnyDocumentRoot;
use crate::domain::DocumentDomain;
use crate::escape::escape_attribute;

/// A node of a document tree in the domain `D`, with element identities of
/// type `I`.
///
/// Containers own their children by value, so a tree is a strict hierarchy.
/// Static documents use the default `I = Infallible`, which makes anchors and
/// ids unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement<D: DocumentDomain, I = Infallible> {
    /// A sealed tree built in another domain, rendered through its own
    /// renderer.
    Root(Box<dyn AnyDocumentRoot>),
    /// An element with children.
    Container {
        /// The element's tag.
        tag: D::Container,
        /// Optional identity, never rendered.
        id: Option<I>,
        /// Attribute map.
        attributes: Attributes,
        /// Child elements, in document order.
        content: Vec<Self>,
    },
    /// An element without children.
    Leaf {
        /// The element's tag.
        tag: D::Leaf,
        /// Optional identity, never rendered.
        id: Option<I>,
        /// Attribute map.
        attributes: Attributes,
    },
    /// Text that has already been escaped.
    Text(EcoString),
    /// A placeholder carrying only an identity. Renders to nothing.
    Anchor(I),
}

impl<D: DocumentDomain, I> DocumentElement<D, I> {
    /// Creates a text node, escaping `unescaped`.
    pub fn text(unescaped: &str) -> Self {
        DocumentElement::Text(EcoString::from(escape_attribute(unescaped).as_ref()))
    }

    /// Creates a text node from text that is already escaped.
    ///
    /// The text is emitted verbatim, so it must come from a trusted source.
    pub fn escaped<S: Into<EcoString>>(escaped: S) -> Self {
        DocumentElement::Text(escaped.into())
    }

    /// Creates an empty container element.
    pub fn container(tag: D::Container) -> Self {
        DocumentElement::Container {
            tag,
            id: None,
            attributes: Attributes::new(),
            content: Vec::new(),
        }
    }

    /// Creates a leaf element without attributes.
    pub fn leaf(tag: D::Leaf) -> Self {
        DocumentElement::Leaf {
            tag,
            id: None,
            attributes: Attributes::new(),
        }
    }

    /// Creates an anchor.
    pub fn anchor(id: I) -> Self {
        DocumentElement::Anchor(id)
    }

    /// Embeds a document built in another domain.
    pub fn root<R: AnyDocumentRoot + 'static>(foreign: R) -> Self {
        DocumentElement::Root(Box::new(foreign))
    }

    /// Sets the identity of a container or leaf. Other elements are returned
    /// unchanged.
    pub fn with_id(mut self, new_id: I) -> Self {
        match &mut self {
            DocumentElement::Container { id, .. } | DocumentElement::Leaf { id, .. } => {
                *id = Some(new_id);
            }
            _ => {}
        }
        self
    }

    /// Replaces the attributes of a container or leaf.
    ///
    /// Duplicate keys are resolved as in [`AttributeBuilder::build_final_result`].
    pub fn with_attributes<A: IntoAttributes>(mut self, expression: A) -> Self {
        match &mut self {
            DocumentElement::Container { attributes, .. }
            | DocumentElement::Leaf { attributes, .. } => {
                *attributes = AttributeBuilder::build_final_result(
                    AttributeBuilder::build_expression(expression),
                );
            }
            _ => {}
        }
        self
    }

    /// Replaces the children of a container.
    pub fn with_content<C: IntoContent<D, I>>(mut self, expression: C) -> Self {
        if let DocumentElement::Container { content, .. } = &mut self {
            *content = ContentBuilder::build_expression(expression);
        }
        self
    }

    /// The element's identity, if it has one.
    pub fn id(&self) -> Option<&I> {
        match self {
            DocumentElement::Container { id, .. } | DocumentElement::Leaf { id, .. } => {
                id.as_ref()
            }
            DocumentElement::Anchor(id) => Some(id),
            DocumentElement::Root(_) | DocumentElement::Text(_) => None,
        }
    }

    /// The element's attributes, if it can carry any.
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            DocumentElement::Container { attributes, .. }
            | DocumentElement::Leaf { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// The children of a container; empty for every other element.
    pub fn content(&self) -> &[Self] {
        match self {
            DocumentElement::Container { content, .. } => content,
            _ => &[],
        }
    }
}
