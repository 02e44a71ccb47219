//! # cairo-outline
//!
//! Symbol outline for Cairo contract documents: storage variables, tagged
//! functions and events, with their read/write/emit sites, kept in sync with
//! the editor cursor.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → Host API (AnalysisHost, cursor sync, activation, outline items)
//!   ↓
//! hir        → Symbol model, declaration extraction, usage linking, SymbolIndex
//!   ↓
//! text_utils → Pattern scanning, word-at-cursor
//! config     → Declaration markers, call suffixes, recognized extensions
//!   ↓
//! base       → Primitives (FileId, LineIndex, Position/Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → config/text_utils → hir → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, Position/Span
pub mod base;

/// Declaration markers and document recognition
pub mod config;

/// Pattern scanning and identifier utilities
pub mod text_utils;

/// Symbol model and snapshot index
pub mod hir;

/// Host-facing features: snapshots, cursor sync, outline rendering
pub mod ide;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, Position, Span, TextSize};
pub use config::{ConfigError, OutlineConfig};
pub use hir::SymbolIndex;
pub use ide::{Analysis, AnalysisHost, OutlineError};
