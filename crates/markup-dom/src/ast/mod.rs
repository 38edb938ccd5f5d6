//! Document tree model.
//!
//! This module defines the immutable element tree, the document root that
//! wraps it, and the builders used to assemble both from ordinary control
//! flow.

pub mod builder;
mod element;
mod prose;
mod root;

pub use self::builder::{
    ArrayBuilder, AttributeBuilder, AttributeList, Attributes, ContentBuilder, IntoAttributes,
    IntoContent,
};
pub use self::element::DocumentElement;
pub use self::prose::Prose;
pub use self::root::{AnyDocumentRoot, DocumentId, DocumentRoot, StaticDocumentRoot};

#[cfg(test)]
mod tests;
