//! Values that stream as links.

use ecow::{eco_format, EcoString};

use super::{ContainerElement, Html};
use crate::stream::{AttributeEncoder, ContentEncoder, OutputStreamable};

/// Display content together with an optional link target.
///
/// Streams as `<a href="target">display</a>`, or as
/// `<span>display</span>` when there is no target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<D> {
    /// What the link shows.
    pub display: D,
    /// Where the link points to.
    pub target: Option<EcoString>,
}

impl<D> Link<D> {
    /// Creates a link.
    pub fn new(display: D, target: Option<EcoString>) -> Self {
        Self { display, target }
    }
}

impl<D: OutputStreamable<Html>> OutputStreamable<Html> for Link<D> {
    fn encode(&self, html: &mut ContentEncoder<Html>) {
        html.link_optional(self.target.as_deref(), |_| {}, Some(&self.display));
    }
}

/// A heading that links to itself.
///
/// Streams as `<a href="#id">display</a>`. When it fills an optional slot,
/// it also gives the wrapping tag its `id`, so that
/// `html.optional(ContainerElement::H2, |_| {}, Some(&heading))` produces a
/// self-referencing anchor target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<D> {
    /// The fragment identifier, without `#`.
    pub id: EcoString,
    /// What the heading shows.
    pub display: D,
}

impl<D> Heading<D> {
    /// Creates a heading.
    pub fn new<S: Into<EcoString>>(id: S, display: D) -> Self {
        Self {
            id: id.into(),
            display,
        }
    }
}

impl<D: OutputStreamable<Html>> OutputStreamable<Html> for Heading<D> {
    fn encode(&self, html: &mut ContentEncoder<Html>) {
        let fragment = eco_format!("#{}", self.id);
        html.optional(
            ContainerElement::A,
            |a| a.href(&fragment),
            Some(&self.display),
        );
    }

    fn encode_attributes(&self, attributes: &mut AttributeEncoder<Html>) {
        attributes.id(&self.id);
    }
}
