//! HIR layer tests
//!
//! Tests for the symbol model:
//! - Declaration extraction per category
//! - Usage linking (reads, writes, emits)
//! - Snapshot line map and name tables

pub mod tests_extraction;
pub mod tests_usages;
