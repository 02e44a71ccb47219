//! AnalysisHost and Analysis — snapshot state for the outline.
//!
//! The `AnalysisHost` owns the current snapshot and swaps in a new one on
//! every rebuild. `Analysis` holds an `Arc` to one snapshot, so a reader
//! never observes a half-built index even while the host rebuilds.
//!
//! ## Usage
//!
//! ```
//! use cairo_outline::base::FileId;
//! use cairo_outline::ide::AnalysisHost;
//!
//! let host = AnalysisHost::new();
//! host.rebuild(FileId::new(0), "@storage_var\nfunc supply() -> (s: felt):\nend\n", true);
//!
//! let analysis = host.analysis();
//! assert_eq!(analysis.roots()[0].name, "supply");
//! assert!(analysis.lookup(1).is_some());
//! ```

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::base::FileId;
use crate::config::OutlineConfig;
use crate::hir::{Category, DeclarationNode, NodeId, NodeRef, SymbolIndex};

use super::navigation::{self, ActivationTarget, SelectionChangeKind};
use super::outline::{self, OutlineItem};
use super::OutlineError;

/// A document handed in by the host.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub file: FileId,
    pub path: &'a Path,
    pub text: &'a str,
}

/// Owns the current snapshot.
///
/// Rebuilds take `&self` so one host can be shared between the editor
/// callbacks that feed it and the views that read from it.
pub struct AnalysisHost {
    config: OutlineConfig,
    current: RwLock<Arc<SymbolIndex>>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host with the default markers and an empty snapshot.
    pub fn new() -> Self {
        Self {
            config: OutlineConfig::default(),
            current: RwLock::new(Arc::new(SymbolIndex::new())),
        }
    }

    /// Create a host with custom markers.
    pub fn with_config(config: OutlineConfig) -> Result<Self, OutlineError> {
        config.validate()?;
        Ok(Self {
            config,
            current: RwLock::new(Arc::new(SymbolIndex::new())),
        })
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Re-extract the outline from the full document text.
    ///
    /// Documents the host does not recognize leave the previous snapshot in
    /// place. Returns whether a new snapshot was installed.
    pub fn rebuild(&self, file: FileId, text: &str, is_recognized: bool) -> bool {
        if !is_recognized {
            tracing::debug!("[HOST] {} not recognized, keeping previous outline", file);
            return false;
        }

        let snapshot = Arc::new(SymbolIndex::build(file, text, &self.config));
        *self.current.write() = snapshot;
        true
    }

    /// [`AnalysisHost::rebuild`], recognizing the document by its path.
    pub fn rebuild_path(&self, file: FileId, path: &Path, text: &str) -> bool {
        self.rebuild(file, text, self.config.recognizes_path(path))
    }

    /// Drop back to the empty snapshot.
    pub fn clear(&self) {
        *self.current.write() = Arc::new(SymbolIndex::new());
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<SymbolIndex> {
        self.current.read().clone()
    }

    /// A consistent view of the current snapshot.
    pub fn analysis(&self) -> Analysis {
        Analysis {
            index: self.snapshot(),
        }
    }

    // ==================== Editor events ====================

    /// Initial load or switch to another editor.
    pub fn on_document_activated(&self, document: Document<'_>) -> bool {
        self.rebuild_path(document.file, document.path, document.text)
    }

    /// Any edit to the active document.
    pub fn on_document_changed(&self, document: Document<'_>) -> bool {
        self.rebuild_path(document.file, document.path, document.text)
    }

    /// The cursor moved to `line`; returns the node to reveal, if any.
    ///
    /// Selection changes made by a command (including our own activation)
    /// are ignored so revealing does not feed back into the editor.
    pub fn on_cursor_moved(&self, line: u32, kind: SelectionChangeKind) -> Option<NodeId> {
        if kind == SelectionChangeKind::Command {
            return None;
        }
        self.analysis().reveal_at_cursor(line)
    }
}

/// An immutable snapshot of the outline state.
///
/// All queries go through this struct to ensure consistent results.
#[derive(Clone, Debug)]
pub struct Analysis {
    index: Arc<SymbolIndex>,
}

impl Analysis {
    pub fn file(&self) -> Option<FileId> {
        self.index.file()
    }

    /// All roots, in category order.
    pub fn roots(&self) -> &[DeclarationNode] {
        self.index.roots()
    }

    /// Roots of one category.
    pub fn roots_of(&self, category: Category) -> Vec<&DeclarationNode> {
        self.index.roots_of(category).collect()
    }

    /// The node anchored exactly at `line`.
    pub fn lookup(&self, line: u32) -> Option<NodeRef<'_>> {
        self.index.lookup(line)
    }

    /// The node to reveal for a cursor on `line`.
    pub fn reveal_at_cursor(&self, line: u32) -> Option<NodeId> {
        navigation::reveal_at_cursor(&self.index, line)
    }

    /// Where to move the cursor when `node` is activated.
    pub fn activate(&self, node: NodeId) -> Result<ActivationTarget, OutlineError> {
        navigation::activate(&self.index, node)
    }

    pub fn outline(&self) -> Vec<OutlineItem> {
        outline::outline(&self.index)
    }

    #[cfg(feature = "json")]
    pub fn outline_json(&self) -> Result<String, OutlineError> {
        outline::outline_json(&self.index)
    }

    pub fn symbol_index(&self) -> &SymbolIndex {
        &self.index
    }
}
