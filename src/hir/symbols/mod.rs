//! Symbol extraction from raw text — pure functions that return symbols.
//!
//! # Module structure
//!
//! - [`types`] — Node types (DeclarationNode, UsageNode) and handles
//! - [`extract`] — Declaration extraction by tag marker
//! - [`usages`] — Usage linking by call marker

mod extract;
mod types;
mod usages;

pub use extract::{ExtractedDeclaration, extract_declarations};
pub use types::{
    Category, DeclId, DeclarationKind, DeclarationNode, FunctionKind, NodeId, NodeRef, UsageId,
    UsageKind, UsageNode,
};
pub use usages::link_usages;
