//! Assertion helpers for outline tests.

use cairo_outline::hir::{DeclarationNode, SymbolIndex, UsageKind};

/// Assert the usage children of a declaration, as (kind, line) pairs.
pub fn assert_children(decl: &DeclarationNode, expected: &[(UsageKind, u32)]) {
    let actual: Vec<_> = decl
        .children
        .iter()
        .map(|usage| (usage.kind, usage.source_line))
        .collect();
    assert_eq!(
        actual, expected,
        "Unexpected children for '{}'",
        decl.name
    );
}

/// Assert every anchored line resolves to a node targeting that line.
pub fn assert_navigation_round_trips(index: &SymbolIndex) {
    for line in index.anchored_lines() {
        let node = index
            .lookup(line)
            .unwrap_or_else(|| panic!("Anchored line {} has no node", line));
        assert_eq!(
            node.target_line(),
            line,
            "Node at line {} targets line {}",
            line,
            node.target_line()
        );
    }
}
