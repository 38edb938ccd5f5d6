//! Tag domains.
//!
//! A markup dialect describes its vocabulary through these traits. The core
//! never inspects a tag beyond its name, its void classification and whether
//! it is the dialect's root container.

use std::fmt;

/// A tag or attribute name belonging to some markup dialect.
///
/// Tags are compared by value, which is how [`crate::DocumentElement::stripping_tag`]
/// decides which wrappers to remove.
pub trait TagDomain: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The name written into the markup.
    fn name(&self) -> &str;
}

/// A tag that never has children.
pub trait LeafDomain: TagDomain {
    /// Whether the element self-closes (`<br/>`). A non-void leaf is written
    /// as a bare opening tag.
    fn is_void(&self) -> bool;
}

/// A tag that wraps content and requires a closing tag.
pub trait ContainerDomain: TagDomain {
    /// The element that implicitly wraps a whole document.
    fn root() -> Self;
}

/// Pairs the container and leaf vocabularies of a dialect.
///
/// The supertraits exist so that trees parametrised over a domain can derive
/// `Debug`, `Clone` and `PartialEq`; implementors are usually uninhabited or
/// zero-sized marker types.
pub trait DocumentDomain: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Tags that may have children.
    type Container: ContainerDomain;
    /// Tags that never have children.
    type Leaf: LeafDomain;
}
