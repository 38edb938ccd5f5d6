//! Runtime utilities shared by the tree renderer and custom handlers.

pub mod diagnostics;
pub mod visitor;
