//! Outline rendering adapter.
//!
//! Maps a snapshot's pure nodes to tree items a host UI can display. This is
//! the only place labels and glyphs are decided.

use crate::hir::{
    DeclId, DeclarationKind, DeclarationNode, FunctionKind, NodeId, SymbolIndex, UsageId,
    UsageKind,
};

/// Expansion state of a tree item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Collapsible {
    /// Leaf item.
    None,
    Expanded,
}

/// One row of the outline tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct OutlineItem {
    pub label: String,
    pub node: NodeId,
    /// Argument for the host's "select line" command.
    pub target_line: u32,
    pub collapsible: Collapsible,
    pub children: Vec<OutlineItem>,
}

fn declaration_glyph(kind: DeclarationKind) -> &'static str {
    match kind {
        DeclarationKind::StorageVariable => "⚪",
        DeclarationKind::Function(FunctionKind::External) => "🅧",
        DeclarationKind::Function(FunctionKind::View) => "👁",
        DeclarationKind::Function(FunctionKind::L1Handler) => "✉",
        DeclarationKind::Event => "💡",
    }
}

fn usage_glyph(kind: UsageKind) -> &'static str {
    match kind {
        UsageKind::Read => "📘",
        UsageKind::Write => "🖋",
        UsageKind::Emit => "🚨",
    }
}

fn declaration_item(id: DeclId, decl: &DeclarationNode) -> OutlineItem {
    let children = decl
        .children
        .iter()
        .enumerate()
        .map(|(child, usage)| OutlineItem {
            label: format!("{} {}", usage_glyph(usage.kind), usage.rendered_text),
            node: NodeId::Usage(UsageId {
                decl: id,
                child: child as u32,
            }),
            target_line: usage.source_line,
            collapsible: Collapsible::None,
            children: Vec::new(),
        })
        .collect();

    // Functions never have usages; everything else can grow children.
    let collapsible = match decl.kind {
        DeclarationKind::Function(_) => Collapsible::None,
        _ => Collapsible::Expanded,
    };

    OutlineItem {
        label: format!("{} {}", declaration_glyph(decl.kind), decl.name),
        node: NodeId::Declaration(id),
        target_line: decl.declaration_line,
        collapsible,
        children,
    }
}

/// The full two-level outline of a snapshot, in root order.
pub fn outline(index: &SymbolIndex) -> Vec<OutlineItem> {
    index
        .declarations()
        .map(|(id, decl)| declaration_item(id, decl))
        .collect()
}

/// The outline as a JSON array, for hosts that render out of process.
#[cfg(feature = "json")]
pub fn outline_json(index: &SymbolIndex) -> Result<String, super::OutlineError> {
    Ok(serde_json::to_string(&outline(index))?)
}
