//! Cursor ↔ outline synchronisation.

use crate::base::{FileId, Span};
use crate::hir::{NodeId, SymbolIndex};

use super::OutlineError;

/// Why the editor selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChangeKind {
    Keyboard,
    Mouse,
    /// Caused by a command, including our own node activation.
    Command,
}

/// Where the host should move the cursor when a node is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationTarget {
    pub file: Option<FileId>,
    pub line: u32,
    /// The whole target line, to select and scroll into view.
    pub selection: Span,
}

/// Node to reveal for a cursor on `line`.
///
/// Uses the line map first. If nothing is anchored on the line, falls back to
/// the first storage variable mentioned in the line's text.
pub fn reveal_at_cursor(index: &SymbolIndex, line: u32) -> Option<NodeId> {
    if let Some(node) = index.lookup(line) {
        return Some(node.id());
    }
    let line_text = index.line_index().line_text(index.text(), line)?;
    index
        .declaration_mentioned_in(line_text)
        .map(NodeId::Declaration)
}

/// Resolve an activated node to its cursor target.
pub fn activate(index: &SymbolIndex, node: NodeId) -> Result<ActivationTarget, OutlineError> {
    let line = index
        .resolve(node)
        .ok_or(OutlineError::UnknownNode(node))?
        .target_line();
    let len = index
        .line_index()
        .line_text(index.text(), line)
        .map_or(0, |text| text.len() as u32);

    Ok(ActivationTarget {
        file: index.file(),
        line,
        selection: Span::whole_line(line, len),
    })
}
