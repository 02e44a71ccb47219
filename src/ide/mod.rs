//! IDE features — host-facing API for the outline view.
//!
//! This module is the interface between the symbol model (HIR) and the
//! editor host that renders the outline and moves the cursor.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take a snapshot in, return data out
//! 2. **No host types**: Uses our own types, converted at the host boundary
//! 3. **Whole snapshots**: Every rebuild replaces the index in one swap
//!
//! ## Usage
//!
//! ```ignore
//! use cairo_outline::ide::{AnalysisHost, SelectionChangeKind};
//!
//! let host = AnalysisHost::new();
//! host.rebuild_path(file_id, Path::new("token.cairo"), &text);
//!
//! if let Some(node) = host.on_cursor_moved(line, SelectionChangeKind::Mouse) {
//!     let target = host.analysis().activate(node)?;
//! }
//! ```

mod analysis;
mod error;
mod navigation;
mod outline;

pub use analysis::{Analysis, AnalysisHost, Document};
pub use error::OutlineError;
pub use navigation::{ActivationTarget, SelectionChangeKind, activate, reveal_at_cursor};
pub use outline::{Collapsible, OutlineItem, outline};

#[cfg(feature = "json")]
pub use outline::outline_json;
