//! Removal of wrapper containers.

use crate::ast::{DocumentElement, DocumentRoot};
use crate::domain::DocumentDomain;

impl<D: DocumentDomain, I: Clone> DocumentElement<D, I> {
    /// Removes every container whose tag satisfies `predicate`, splicing its
    /// children into its parent in place. Containers are visited bottom-up,
    /// so the predicate sees every container of the subtree exactly once.
    ///
    /// Elements that are not containers come back unchanged, and so does a
    /// tree in which nothing matches.
    ///
    /// ```rust
    /// use markup_dom::html::{ContainerElement, Html};
    /// use markup_dom::DocumentElement;
    ///
    /// type Element = DocumentElement<Html>;
    ///
    /// let paragraph = Element::container(ContainerElement::P).with_content(
    ///     Element::container(ContainerElement::Em).with_content("important"),
    /// );
    /// let stripped = paragraph.stripping_tag(&ContainerElement::Em);
    ///
    /// assert_eq!(stripped.len(), 1);
    /// assert_eq!(stripped[0].rendered(), "<p>important</p>");
    /// ```
    pub fn stripping<F>(&self, mut predicate: F) -> Vec<Self>
    where
        F: FnMut(&D::Container) -> bool,
    {
        self.stripping_with(&mut predicate)
    }

    /// Removes every container tagged `tag`.
    pub fn stripping_tag(&self, tag: &D::Container) -> Vec<Self> {
        self.stripping(|container| container == tag)
    }

    fn stripping_with<F>(&self, predicate: &mut F) -> Vec<Self>
    where
        F: FnMut(&D::Container) -> bool,
    {
        let DocumentElement::Container {
            tag,
            id,
            attributes,
            content,
        } = self
        else {
            return vec![self.clone()];
        };

        let stripped: Vec<Self> = content
            .iter()
            .flat_map(|child| child.stripping_with(predicate))
            .collect();
        if predicate(tag) {
            stripped
        } else {
            vec![DocumentElement::Container {
                tag: tag.clone(),
                id: id.clone(),
                attributes: attributes.clone(),
                content: stripped,
            }]
        }
    }
}

impl<D: DocumentDomain, I: Clone> DocumentRoot<D, I> {
    /// Applies [`DocumentElement::stripping`] to the top-level elements. The
    /// root wrapper itself is never removed.
    pub fn stripping<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&D::Container) -> bool,
    {
        Self {
            id: self.id.clone(),
            attributes: self.attributes.clone(),
            content: self
                .content
                .iter()
                .flat_map(|element| element.stripping_with(&mut predicate))
                .collect(),
        }
    }

    /// Removes every container tagged `tag` below the root.
    pub fn stripping_tag(&self, tag: &D::Container) -> Self {
        self.stripping(|container| container == tag)
    }
}
