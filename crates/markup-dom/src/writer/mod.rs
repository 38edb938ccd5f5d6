//! Tree renderer and the traversal machinery it is built on.

pub mod runtime;
pub mod tree;

pub use self::runtime::diagnostics::{
    Diagnostic, DiagnosticSeverity, DiagnosticSink, NullSink, SharedVecSink,
};
pub use self::runtime::visitor::{walk_element, walk_root, ElementHandler};
pub use self::tree::TreeWriter;
