//! Usage linking tests.

use crate::helpers::index_helpers::*;
use crate::helpers::outline_assertions::*;
use crate::helpers::source_fixtures::*;
use cairo_outline::hir::UsageKind;
use cairo_outline::text_utils::find_all;

// =============================================================================
// PATTERN SCANNING
// =============================================================================

#[test]
fn test_scan_is_non_overlapping() {
    assert_eq!(find_all("x.read(", "x.read(x.read("), vec![0, 7]);
}

#[test]
fn test_scan_empty_marker() {
    assert!(find_all("", BALANCE_CONTRACT).is_empty());
}

// =============================================================================
// STORAGE VARIABLES
// =============================================================================

#[test]
fn test_balance_scenario() {
    let index = index_from_source(BALANCE_CONTRACT);
    assert_eq!(index.len(), 2);

    let balance = get_root(&index, "balance");
    assert_eq!(balance.declaration_line, 1);
    assert_children(balance, &[(UsageKind::Read, 4), (UsageKind::Write, 9)]);
    assert_eq!(balance.children[0].rendered_text, "let (res) = balance.read(user)");
    assert_eq!(balance.children[1].rendered_text, "balance.write(user, amount)");

    let set_balance = get_root(&index, "set_balance");
    assert_eq!(set_balance.declaration_line, 8);
    assert!(set_balance.children.is_empty());
}

#[test]
fn test_reads_precede_writes_regardless_of_source_order() {
    let index = index_from_source(FULL_CONTRACT);
    let supply = get_root(&index, "supply");
    assert_children(
        supply,
        &[
            (UsageKind::Read, 20),
            (UsageKind::Read, 26),
            (UsageKind::Read, 41),
            (UsageKind::Write, 27),
            (UsageKind::Write, 42),
        ],
    );
    assert_eq!(supply.reads().count(), 3);
    assert_eq!(supply.writes().count(), 2);
}

#[test]
fn test_usages_are_document_global() {
    // The read sits outside any function that mentions the variable.
    let source = "@storage_var\nfunc flag() -> (f: felt):\nend\nlet (f) = flag.read()\n";
    let index = index_from_source(source);
    assert_children(get_root(&index, "flag"), &[(UsageKind::Read, 3)]);
}

#[test]
fn test_usage_column() {
    let index = index_from_source(BALANCE_CONTRACT);
    let read = &get_root(&index, "balance").children[0];
    assert_eq!(read.column, 16);
}

// =============================================================================
// EVENTS AND FUNCTIONS
// =============================================================================

#[test]
fn test_event_emits_in_source_order() {
    let index = index_from_source(FULL_CONTRACT);
    assert_children(get_root(&index, "Transfer"), &[(UsageKind::Emit, 28)]);
    assert_children(get_root(&index, "OwnerChanged"), &[(UsageKind::Emit, 35)]);
    assert_eq!(get_root(&index, "Transfer").emits().count(), 1);
}

#[test]
fn test_functions_have_no_children() {
    let index = index_from_source(FULL_CONTRACT);
    for name in ["mint", "get_supply", "transfer_ownership", "deposit"] {
        assert!(get_root(&index, name).children.is_empty(), "{} has children", name);
    }
}

#[test]
fn test_usage_parent_points_at_owner() {
    let index = index_from_source(FULL_CONTRACT);
    for (id, decl) in index.declarations() {
        for usage in &decl.children {
            assert_eq!(usage.parent, id);
        }
    }
}
