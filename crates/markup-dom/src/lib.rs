#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

// Tag domain contract
pub use crate::domain::{ContainerDomain, DocumentDomain, LeafDomain, TagDomain};

// AST related exports
pub use crate::ast::{
    AnyDocumentRoot, ArrayBuilder, AttributeBuilder, AttributeList, Attributes, ContentBuilder,
    DocumentElement, DocumentId, DocumentRoot, IntoAttributes, IntoContent, Prose,
    StaticDocumentRoot,
};

// Error types
pub use crate::error::{MarkupError, MarkupResult};

// Options
pub use crate::options::{EncoderOptions, EncoderOptionsBuilder};

// Streaming encoders
pub use crate::stream::{
    AttributeEncoder, ContentEncoder, Dialect, Nested, OutputStreamable, StreamingEncoder,
};

// Tree renderer
pub use crate::writer::{
    walk_element, walk_root, Diagnostic, DiagnosticSeverity, DiagnosticSink, ElementHandler,
    NullSink, SharedVecSink, TreeWriter,
};

// Dialects
pub use crate::html::Html;
pub use crate::svg::Svg;

pub mod ast;
pub mod domain;
pub mod error;
pub mod escape;
pub mod html;
pub mod options;
pub mod stream;
pub mod svg;
pub mod writer;
