//! Document roots and type-erased foreign roots.

use std::any::Any;
use std::convert::Infallible;
use std::fmt;

use ecow::EcoString;

use super::builder::{AttributeBuilder, Attributes, ContentBuilder, IntoAttributes, IntoContent};
use super::element::DocumentElement;
use crate::domain::{ContainerDomain, DocumentDomain};

/// Requirements on element identities for a tree to be embeddable as a
/// foreign root.
pub trait DocumentId: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {}

impl<T: fmt::Debug + Clone + PartialEq + Send + Sync + 'static> DocumentId for T {}

/// A finished document of some unknown domain.
///
/// Only the rendered forms are reachable through this trait; the tree itself
/// stays sealed. [`DocumentRoot`] is the implementation provided by this
/// crate, and the one the content builders wrap into
/// [`DocumentElement::Root`].
pub trait AnyDocumentRoot: fmt::Debug + Send + Sync {
    /// The document rendered as markup.
    fn rendered(&self) -> EcoString;

    /// The document's text content without any markup.
    fn plain(&self) -> EcoString;

    /// Clone the root
    fn clone_box(&self) -> Box<dyn AnyDocumentRoot>;

    /// Check if two roots are equal
    fn eq_box(&self, other: &dyn AnyDocumentRoot) -> bool;

    /// Convert to Any for type casting
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn AnyDocumentRoot> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for Box<dyn AnyDocumentRoot> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_box(&**other)
    }
}

/// The top level of a document: an implicit container pinned to the domain's
/// root tag.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRoot<D: DocumentDomain, I = Infallible> {
    /// Optional identity of the root element.
    pub id: Option<I>,
    /// Attributes of the root element.
    pub attributes: Attributes,
    /// Top-level elements.
    pub content: Vec<DocumentElement<D, I>>,
}

/// A document root whose elements carry no identities.
pub type StaticDocumentRoot<D> = DocumentRoot<D, Infallible>;

impl<D: DocumentDomain, I> Default for DocumentRoot<D, I> {
    fn default() -> Self {
        Self {
            id: None,
            attributes: Attributes::new(),
            content: Vec::new(),
        }
    }
}

impl<D: DocumentDomain, I> DocumentRoot<D, I> {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity of the root element.
    pub fn with_id(mut self, id: I) -> Self {
        self.id = Some(id);
        self
    }

    /// Replaces the attributes of the root element.
    pub fn with_attributes<A: IntoAttributes>(mut self, expression: A) -> Self {
        self.attributes =
            AttributeBuilder::build_final_result(AttributeBuilder::build_expression(expression));
        self
    }

    /// Replaces the top-level elements.
    pub fn with_content<C: IntoContent<D, I>>(mut self, expression: C) -> Self {
        self.content = ContentBuilder::build_expression(expression);
        self
    }
}

impl<D: DocumentDomain, I: Clone> DocumentRoot<D, I> {
    /// The root as a container element tagged with the domain's root tag.
    pub fn element(&self) -> DocumentElement<D, I> {
        DocumentElement::Container {
            tag: D::Container::root(),
            id: self.id.clone(),
            attributes: self.attributes.clone(),
            content: self.content.clone(),
        }
    }
}

impl<D: DocumentDomain, I: DocumentId> AnyDocumentRoot for DocumentRoot<D, I> {
    fn rendered(&self) -> EcoString {
        DocumentRoot::rendered(self)
    }

    fn plain(&self) -> EcoString {
        DocumentRoot::plain(self)
    }

    fn clone_box(&self) -> Box<dyn AnyDocumentRoot> {
        Box::new(self.clone())
    }

    fn eq_box(&self, other: &dyn AnyDocumentRoot) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
