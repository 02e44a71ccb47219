//! High-level IR (HIR) — the outline's symbol model.
//!
//! ## Key Types
//!
//! - [`DeclarationNode`] — A declared storage variable, function or event
//! - [`UsageNode`] — A read, write or emit call referencing a declaration
//! - [`NodeId`] / [`NodeRef`] — Handles into one snapshot
//! - [`SymbolIndex`] — Immutable snapshot: roots plus line map
//!
//! ## Build Pipeline
//!
//! ```text
//! document text
//!     │
//!     ▼
//! extract_declarations   ← split on tag markers (per category)
//!     │
//!     ▼
//! link_usages            ← scan for name.read( / name.write( / name.emit(
//!     │
//!     ▼
//! SymbolIndex::build     ← roots + line map + name tables
//! ```

mod index;
mod symbols;

pub use index::SymbolIndex;
pub use symbols::{
    Category, DeclId, DeclarationKind, DeclarationNode, ExtractedDeclaration, FunctionKind,
    NodeId, NodeRef, UsageId, UsageKind, UsageNode, extract_declarations, link_usages,
};
