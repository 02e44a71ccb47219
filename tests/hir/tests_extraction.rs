//! Declaration extraction tests.

use crate::helpers::index_helpers::*;
use crate::helpers::source_fixtures::*;
use cairo_outline::hir::{Category, DeclarationKind, FunctionKind};
use rstest::rstest;

// =============================================================================
// CATEGORIES
// =============================================================================

#[rstest]
#[case(Category::StorageVariable)]
#[case(Category::Function)]
#[case(Category::Event)]
fn test_absent_marker_yields_no_roots(#[case] category: Category) {
    let index = index_from_source(UNTAGGED);
    assert!(root_names(&index, category).is_empty());
}

#[test]
fn test_full_contract_roots_in_category_order() {
    let index = index_from_source(FULL_CONTRACT);
    let names: Vec<_> = index.roots().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "owner",
            "supply",
            "mint",
            "transfer_ownership",
            "get_supply",
            "deposit",
            "Transfer",
            "OwnerChanged",
        ]
    );
}

#[test]
fn test_function_sub_kinds() {
    let index = index_from_source(FULL_CONTRACT);
    let kind_of = |name: &str| get_root(&index, name).kind;

    assert_eq!(kind_of("mint"), DeclarationKind::Function(FunctionKind::External));
    assert_eq!(kind_of("get_supply"), DeclarationKind::Function(FunctionKind::View));
    assert_eq!(kind_of("deposit"), DeclarationKind::Function(FunctionKind::L1Handler));
}

// =============================================================================
// DECLARATION LINES
// =============================================================================

#[rstest]
#[case("owner", "func owner()")]
#[case("supply", "func supply()")]
#[case("Transfer", "func Transfer(")]
#[case("OwnerChanged", "func OwnerChanged(")]
#[case("get_supply", "func get_supply{")]
#[case("mint", "func mint{")]
#[case("deposit", "func deposit{")]
fn test_declaration_line_is_identifier_line(#[case] name: &str, #[case] line_text: &str) {
    let index = index_from_source(FULL_CONTRACT);
    assert_eq!(
        get_root(&index, name).declaration_line,
        line_containing(FULL_CONTRACT, line_text)
    );
}

#[test]
fn test_storage_var_declaration() {
    let index = index_from_source("\n\n@storage_var\nfunc foo(a: felt) -> (b: felt):\nend\n");
    let foo = get_root(&index, "foo");
    assert_eq!(foo.kind, DeclarationKind::StorageVariable);
    assert_eq!(foo.declaration_line, 3);
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[rstest]
#[case("@storage_var\nfunc ")]
#[case("@event\nfunc ")]
#[case("@external")]
#[case("@view\n")]
#[case("@l1_handler\nfunc")]
#[case("@external\nfunc broken\nend\n")]
#[case("@storage_var\nfunc (x: felt):\nend\n")]
fn test_malformed_declaration_skipped(#[case] source: &str) {
    let index = index_from_source(source);
    assert!(index.is_empty(), "Expected no roots for {:?}", source);
}

#[test]
fn test_malformed_declaration_does_not_hide_others() {
    let source = "@external\nfunc ok(x: felt):\nend\n@view\n";
    let index = index_from_source(source);
    assert_eq!(root_names(&index, Category::Function), vec!["ok"]);
}

#[test]
fn test_name_kept_verbatim() {
    let index = index_from_source("@external\nfunc  spaced (x: felt):\nend\n");
    assert_eq!(root_names(&index, Category::Function), vec![" spaced "]);
}

#[test]
fn test_duplicate_declaration_relocates_to_first() {
    let index = index_from_source(DUPLICATE_STORAGE);
    let lines: Vec<_> = index.roots().iter().map(|d| d.declaration_line).collect();
    assert_eq!(lines, vec![1, 1]);
}

#[test]
fn test_crlf_document() {
    let source = BALANCE_CONTRACT.replace('\n', "\r\n");
    let index = index_from_source(&source);
    // The storage marker contains a bare `\n`, so CRLF documents only
    // expose the tag-only function markers.
    assert!(root_names(&index, Category::StorageVariable).is_empty());
    assert_eq!(root_names(&index, Category::Function), vec!["set_balance"]);
    assert_eq!(get_root(&index, "set_balance").declaration_line, 8);
}
