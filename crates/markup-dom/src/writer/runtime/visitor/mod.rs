//! Traversal of document trees.
//!
//! [`walk_element`] is the single dispatch table over [`DocumentElement`], so
//! the renderer, the plain-text collector and user-defined passes implement
//! [`ElementHandler`] instead of matching on elements themselves.

use ecow::EcoString;

use crate::ast::{AnyDocumentRoot, Attributes, DocumentElement, DocumentRoot};
use crate::domain::{ContainerDomain, DocumentDomain};

/// Consumer of a document tree.
///
/// Every method has a default that descends into children and otherwise does
/// nothing, so a handler only overrides the variants it cares about.
pub trait ElementHandler<D: DocumentDomain, I> {
    /// Error type produced during traversal.
    type Error;

    /// Dispatch a single element.
    fn visit_element(&mut self, element: &DocumentElement<D, I>) -> Result<(), Self::Error> {
        walk_element(self, element)
    }

    /// Visit a sequence of elements in document order.
    fn visit_elements(&mut self, elements: &[DocumentElement<D, I>]) -> Result<(), Self::Error> {
        for element in elements {
            self.visit_element(element)?;
        }
        Ok(())
    }

    /// A container element.
    fn container(
        &mut self,
        _tag: &D::Container,
        _id: Option<&I>,
        _attributes: &Attributes,
        content: &[DocumentElement<D, I>],
    ) -> Result<(), Self::Error> {
        self.visit_elements(content)
    }

    /// A leaf element.
    fn leaf(
        &mut self,
        _tag: &D::Leaf,
        _id: Option<&I>,
        _attributes: &Attributes,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Escaped text.
    fn text(&mut self, _escaped: &EcoString) -> Result<(), Self::Error> {
        Ok(())
    }

    /// An anchor.
    fn anchor(&mut self, _id: &I) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A sealed foreign root.
    fn root(&mut self, _root: &dyn AnyDocumentRoot) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Dispatch a single element to the provided handler.
pub fn walk_element<D, I, H>(handler: &mut H, element: &DocumentElement<D, I>) -> Result<(), H::Error>
where
    D: DocumentDomain,
    H: ElementHandler<D, I> + ?Sized,
{
    match element {
        DocumentElement::Root(root) => handler.root(root.as_ref()),
        DocumentElement::Container {
            tag,
            id,
            attributes,
            content,
        } => handler.container(tag, id.as_ref(), attributes, content),
        DocumentElement::Leaf {
            tag,
            id,
            attributes,
        } => handler.leaf(tag, id.as_ref(), attributes),
        DocumentElement::Text(escaped) => handler.text(escaped),
        DocumentElement::Anchor(id) => handler.anchor(id),
    }
}

/// Dispatch a document root to the provided handler, as a container tagged
/// with the domain's root tag.
pub fn walk_root<D, I, H>(handler: &mut H, root: &DocumentRoot<D, I>) -> Result<(), H::Error>
where
    D: DocumentDomain,
    H: ElementHandler<D, I> + ?Sized,
{
    handler.container(
        &D::Container::root(),
        root.id.as_ref(),
        &root.attributes,
        &root.content,
    )
}
