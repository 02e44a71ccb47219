//! Foundation types for the outline index.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Opaque document identity handed in by the host
//! - [`TextSize`] - Source offsets (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Offset to line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for navigation targets
//!
//! This module has NO dependencies on other crate modules.

mod file_id;
mod position;
mod span;

pub use file_id::FileId;
pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextSize, line_of};

// Re-export text-size types for convenience
pub use text_size;
