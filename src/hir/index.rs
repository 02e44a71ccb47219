//! Symbol index — one immutable snapshot of a document's outline.
//!
//! A snapshot owns the declaration hierarchy, a line → node map covering every
//! declaration line and usage line, and per-category name tables. It is built
//! in one pass from the full document text and never mutated afterwards;
//! hosts replace the whole snapshot when the document changes.
//!
//! ## Line map collisions
//!
//! At most one node is anchored per line. Nodes are inserted in root order
//! (each declaration, then its usages) and later entries overwrite earlier
//! ones, so the last-built node wins a shared line.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::symbols::{
    Category, DeclId, DeclarationKind, DeclarationNode, NodeId, NodeRef, UsageId, UsageKind,
    UsageNode, extract_declarations, link_usages,
};
use crate::base::{FileId, LineIndex};
use crate::config::OutlineConfig;
use crate::text_utils::{contains_word, extract_word_at_cursor};

/// Immutable outline of one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    /// Document this snapshot was built from; `None` for the empty snapshot.
    file: Option<FileId>,
    /// Text the snapshot was built from.
    text: Arc<str>,
    line_index: LineIndex,
    /// Roots in category order, source order within a category.
    declarations: Vec<DeclarationNode>,
    /// Line → the single node anchored there.
    by_line: FxHashMap<u32, NodeId>,
    /// Per-category name → declaration (last declaration with a name wins).
    by_name: FxHashMap<Category, IndexMap<SmolStr, DeclId>>,
}

impl SymbolIndex {
    /// The empty snapshot: no document, no roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the full text of `file`.
    ///
    /// Never fails. Malformed declarations are skipped and everything else
    /// is indexed.
    pub fn build(file: FileId, text: &str, config: &OutlineConfig) -> Self {
        let line_index = LineIndex::new(text);
        let extracted = extract_declarations(text, &line_index, config);

        let mut declarations = Vec::with_capacity(extracted.len());
        let mut by_line = FxHashMap::default();
        let mut by_name: FxHashMap<Category, IndexMap<SmolStr, DeclId>> = FxHashMap::default();

        for decl in extracted {
            let id = DeclId(declarations.len() as u32);

            let usage_kinds: &[UsageKind] = match decl.kind {
                DeclarationKind::StorageVariable => &[UsageKind::Read, UsageKind::Write],
                DeclarationKind::Event => &[UsageKind::Emit],
                DeclarationKind::Function(_) => &[],
            };
            let children: Vec<UsageNode> = usage_kinds
                .iter()
                .flat_map(|&kind| link_usages(id, &decl.name, kind, text, &line_index, config))
                .collect();

            by_line.insert(decl.declaration_line, NodeId::Declaration(id));
            for (child, usage) in children.iter().enumerate() {
                let usage_id = UsageId {
                    decl: id,
                    child: child as u32,
                };
                by_line.insert(usage.source_line, NodeId::Usage(usage_id));
            }

            let names = by_name.entry(decl.kind.category()).or_default();
            if let Some(previous) = names.insert(decl.name.clone(), id) {
                tracing::trace!(
                    "[INDEX] '{}' redeclared, {:?} replaces {:?} in name table",
                    decl.name,
                    id,
                    previous
                );
            }

            declarations.push(DeclarationNode {
                name: decl.name,
                kind: decl.kind,
                declaration_line: decl.declaration_line,
                children,
            });
        }

        let index = Self {
            file: Some(file),
            text: Arc::from(text),
            line_index,
            declarations,
            by_line,
            by_name,
        };

        tracing::debug!(
            "[INDEX] built {}: {} declarations, {} usages, {} anchored lines",
            file,
            index.declarations.len(),
            index.usage_count(),
            index.by_line.len()
        );

        index
    }

    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// All roots in category order.
    pub fn roots(&self) -> &[DeclarationNode] {
        &self.declarations
    }

    /// Roots of one category, in document order.
    pub fn roots_of(&self, category: Category) -> impl Iterator<Item = &DeclarationNode> {
        self.declarations
            .iter()
            .filter(move |decl| decl.category() == category)
    }

    /// Roots paired with their handles.
    pub fn declarations(&self) -> impl Iterator<Item = (DeclId, &DeclarationNode)> {
        self.declarations
            .iter()
            .enumerate()
            .map(|(idx, decl)| (DeclId(idx as u32), decl))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn usage_count(&self) -> usize {
        self.declarations.iter().map(|d| d.children.len()).sum()
    }

    /// Lines that have a node anchored to them.
    pub fn anchored_lines(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_line.keys().copied()
    }

    // ==================== Lookups ====================

    /// The node anchored at `line`, if any.
    pub fn lookup(&self, line: u32) -> Option<NodeRef<'_>> {
        self.by_line.get(&line).and_then(|&id| self.resolve(id))
    }

    /// Resolve a handle against this snapshot.
    pub fn resolve(&self, id: NodeId) -> Option<NodeRef<'_>> {
        match id {
            NodeId::Declaration(decl) => self
                .declaration(decl)
                .map(|node| NodeRef::Declaration { id: decl, node }),
            NodeId::Usage(usage) => {
                let parent = self.declaration(usage.decl)?;
                let node = parent.children.get(usage.child_index())?;
                Some(NodeRef::Usage {
                    id: usage,
                    node,
                    parent,
                })
            }
        }
    }

    pub fn declaration(&self, id: DeclId) -> Option<&DeclarationNode> {
        self.declarations.get(id.index())
    }

    pub fn usage(&self, id: UsageId) -> Option<&UsageNode> {
        self.declaration(id.decl)?.children.get(id.child_index())
    }

    /// Declaration named `name` in `category`.
    ///
    /// When a name is declared more than once, the last declaration wins.
    pub fn find_declaration(&self, category: Category, name: &str) -> Option<DeclId> {
        self.by_name.get(&category)?.get(name).copied()
    }

    /// First storage variable whose name appears as a word in `line_text`.
    ///
    /// Fallback for cursor lines that carry no anchored node, e.g. a line
    /// that mentions a storage variable outside a read or write call.
    pub fn declaration_mentioned_in(&self, line_text: &str) -> Option<DeclId> {
        self.declarations()
            .filter(|(_, decl)| decl.category() == Category::StorageVariable)
            .find(|(_, decl)| contains_word(line_text, &decl.name))
            .map(|(id, _)| id)
    }

    /// Declaration named by the identifier under (`line`, `column`).
    ///
    /// `column` is a character index. Categories are searched in root order.
    pub fn declaration_at(&self, line: u32, column: usize) -> Option<DeclId> {
        let line_text = self.line_index.line_text(&self.text, line)?;
        let word = extract_word_at_cursor(line_text, column)?;
        Category::ALL
            .into_iter()
            .find_map(|category| self.find_declaration(category, &word))
    }
}
