//! Helpers for building snapshots and hosts from source text.

use cairo_outline::base::FileId;
use cairo_outline::hir::{Category, DeclarationNode, SymbolIndex};
use cairo_outline::ide::AnalysisHost;
use cairo_outline::OutlineConfig;

pub const TEST_FILE: FileId = FileId::new(0);

/// Build a snapshot with the default markers.
pub fn index_from_source(source: &str) -> SymbolIndex {
    SymbolIndex::build(TEST_FILE, source, &OutlineConfig::default())
}

/// Create a host holding a snapshot of `source`.
pub fn host_from_source(source: &str) -> AnalysisHost {
    let host = AnalysisHost::new();
    assert!(
        host.rebuild(TEST_FILE, source, true),
        "recognized document should install a snapshot"
    );
    host
}

/// Names of the roots of one category, in order.
pub fn root_names(index: &SymbolIndex, category: Category) -> Vec<String> {
    index
        .roots_of(category)
        .map(|decl| decl.name.to_string())
        .collect()
}

/// The single root named `name`, panicking if missing.
pub fn get_root<'a>(index: &'a SymbolIndex, name: &str) -> &'a DeclarationNode {
    index
        .roots()
        .iter()
        .find(|decl| decl.name == name)
        .unwrap_or_else(|| panic!("Expected a root named '{}'", name))
}

/// Zero-based line of the first line in `source` containing `needle`.
pub fn line_containing(source: &str, needle: &str) -> u32 {
    source
        .lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("No line contains '{}'", needle)) as u32
}
