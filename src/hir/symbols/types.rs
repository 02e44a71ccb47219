//! Symbol model: declarations, their usage sites, and handles into a snapshot.
//!
//! Nodes are plain data. Rendering lives in `crate::ide` and only looks at
//! these types at the boundary.

use smol_str::SmolStr;

// ============================================================================
// CATEGORIES
// ============================================================================

/// Qualifier tag on a callable function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum FunctionKind {
    External,
    View,
    L1Handler,
}

/// What a declaration node was extracted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum DeclarationKind {
    StorageVariable,
    Function(FunctionKind),
    Event,
}

/// Coarse grouping used for name tables and filtered root listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    StorageVariable,
    Function,
    Event,
}

impl Category {
    /// Fixed order in which categories appear among the roots.
    pub const ALL: [Category; 3] = [Category::StorageVariable, Category::Function, Category::Event];
}

impl DeclarationKind {
    pub fn category(self) -> Category {
        match self {
            DeclarationKind::StorageVariable => Category::StorageVariable,
            DeclarationKind::Function(_) => Category::Function,
            DeclarationKind::Event => Category::Event,
        }
    }
}

/// The kind of call a usage site makes on its declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum UsageKind {
    Read,
    Write,
    Emit,
}

// ============================================================================
// NODE HANDLES
// ============================================================================

/// Position of a declaration among a snapshot's roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DeclId(pub(crate) u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A usage site: the owning declaration plus the child position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct UsageId {
    pub decl: DeclId,
    pub(crate) child: u32,
}

impl UsageId {
    pub fn child_index(self) -> usize {
        self.child as usize
    }
}

/// Handle to any node in the two-level hierarchy.
///
/// Handles are only meaningful against the snapshot that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum NodeId {
    Declaration(DeclId),
    Usage(UsageId),
}

// ============================================================================
// NODES
// ============================================================================

/// One declared symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    /// Identifier text exactly as it appears at the declaration site.
    pub name: SmolStr,
    pub kind: DeclarationKind,
    /// Zero-based line holding the identifier (storage variables, events)
    /// or the `func` keyword (functions).
    pub declaration_line: u32,
    /// Reads before writes for storage variables, emits for events,
    /// empty for functions.
    pub children: Vec<UsageNode>,
}

impl DeclarationNode {
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn reads(&self) -> impl Iterator<Item = &UsageNode> {
        self.children_of(UsageKind::Read)
    }

    pub fn writes(&self) -> impl Iterator<Item = &UsageNode> {
        self.children_of(UsageKind::Write)
    }

    pub fn emits(&self) -> impl Iterator<Item = &UsageNode> {
        self.children_of(UsageKind::Emit)
    }

    fn children_of(&self, kind: UsageKind) -> impl Iterator<Item = &UsageNode> {
        self.children.iter().filter(move |usage| usage.kind == kind)
    }
}

/// One read, write or emit call referencing a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageNode {
    pub kind: UsageKind,
    /// Zero-based line of the call.
    pub source_line: u32,
    /// Byte column of the call within its line.
    pub column: u32,
    /// The whole source line, trimmed.
    pub rendered_text: String,
    /// Owning declaration (non-owning back reference).
    pub parent: DeclId,
}

/// A node resolved against a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Declaration {
        id: DeclId,
        node: &'a DeclarationNode,
    },
    Usage {
        id: UsageId,
        node: &'a UsageNode,
        parent: &'a DeclarationNode,
    },
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        match *self {
            NodeRef::Declaration { id, .. } => NodeId::Declaration(id),
            NodeRef::Usage { id, .. } => NodeId::Usage(id),
        }
    }

    /// Line the host should move the cursor to when this node is activated.
    pub fn target_line(&self) -> u32 {
        match self {
            NodeRef::Declaration { node, .. } => node.declaration_line,
            NodeRef::Usage { node, .. } => node.source_line,
        }
    }

    /// The declaration itself, or the declaration owning a usage.
    pub fn declaration(&self) -> &'a DeclarationNode {
        match *self {
            NodeRef::Declaration { node, .. } => node,
            NodeRef::Usage { parent, .. } => parent,
        }
    }

    pub fn as_usage(&self) -> Option<&'a UsageNode> {
        match *self {
            NodeRef::Usage { node, .. } => Some(node),
            NodeRef::Declaration { .. } => None,
        }
    }
}
