//! Usage linking: locate `<name>.read(`-style calls anywhere in the document.
//!
//! Discovery is document-global per name. There is no block structure, so a
//! call is linked to a declaration purely by the literal `name + suffix`.

use super::types::{DeclId, UsageKind, UsageNode};
use crate::base::{LineIndex, TextSize};
use crate::config::OutlineConfig;
use crate::text_utils::find_all;

/// One usage node per occurrence of `name` followed by `kind`'s call suffix,
/// in left-to-right order.
pub fn link_usages(
    parent: DeclId,
    name: &str,
    kind: UsageKind,
    text: &str,
    line_index: &LineIndex,
    config: &OutlineConfig,
) -> Vec<UsageNode> {
    let suffix = match kind {
        UsageKind::Read => &config.read_call,
        UsageKind::Write => &config.write_call,
        UsageKind::Emit => &config.emit_call,
    };
    if name.is_empty() || suffix.is_empty() {
        return Vec::new();
    }

    find_all(&format!("{name}{suffix}"), text)
        .into_iter()
        .map(|offset| {
            let at = line_index.line_col(TextSize::from(offset as u32));
            let rendered_text = line_index
                .line_text(text, at.line)
                .map(|line| line.trim().to_string())
                .unwrap_or_default();
            UsageNode {
                kind,
                source_line: at.line,
                column: at.col,
                rendered_text,
                parent,
            }
        })
        .collect()
}
