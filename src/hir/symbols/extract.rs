//! Declaration extraction by splitting document text on tag markers.
//!
//! This is a best-effort scan, not a parser. Known limitations:
//! - a declaration's name is whatever precedes the first delimiter in its
//!   partition, so a malformed tag swallows text up to the next `(`;
//! - storage variables and events are re-located through the *first*
//!   occurrence of `marker + name`, so a verbatim duplicate declaration
//!   reports the line of the first one;
//! - there is no nesting or comment awareness.

use smol_str::SmolStr;

use super::types::{DeclarationKind, FunctionKind};
use crate::base::LineIndex;
use crate::config::OutlineConfig;
use crate::text_utils::{find_all, first_delimiter};

/// A declaration found in the text, before usage linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDeclaration {
    pub name: SmolStr,
    pub kind: DeclarationKind,
    pub declaration_line: u32,
}

/// Extract every declaration, grouped by category in the fixed root order:
/// storage variables, functions (external, view, l1 handler), events.
pub fn extract_declarations(
    text: &str,
    line_index: &LineIndex,
    config: &OutlineConfig,
) -> Vec<ExtractedDeclaration> {
    let mut declarations = extract_tagged(
        text,
        &config.storage_marker,
        DeclarationKind::StorageVariable,
        line_index,
    );

    let function_markers = [
        (FunctionKind::External, Some(&config.external_marker)),
        (FunctionKind::View, Some(&config.view_marker)),
        (FunctionKind::L1Handler, config.l1_handler_marker.as_ref()),
    ];
    for (kind, marker) in function_markers {
        if let Some(marker) = marker {
            declarations.extend(extract_functions(
                text,
                marker,
                &config.function_keyword,
                kind,
                line_index,
            ));
        }
    }

    declarations.extend(extract_tagged(
        text,
        &config.event_marker,
        DeclarationKind::Event,
        line_index,
    ));

    declarations
}

/// Storage variables and events: `marker` ends with the declaration keyword,
/// so the name runs from the start of each partition to the first `(`.
fn extract_tagged(
    text: &str,
    marker: &str,
    kind: DeclarationKind,
    line_index: &LineIndex,
) -> Vec<ExtractedDeclaration> {
    if marker.is_empty() {
        return Vec::new();
    }

    let mut declarations = Vec::new();
    for partition in text.split(marker).skip(1) {
        let Some(open) = partition.find('(') else {
            tracing::trace!("[EXTRACT] {:?} tag without '(' skipped", kind);
            continue;
        };
        let name = &partition[..open];
        if name.is_empty() {
            tracing::trace!("[EXTRACT] {:?} tag with empty name skipped", kind);
            continue;
        }

        // Partitions lose their absolute offsets; find the declaration again.
        let Some(at) = text.find(&format!("{marker}{name}")) else {
            continue;
        };

        declarations.push(ExtractedDeclaration {
            name: SmolStr::new(name),
            kind,
            declaration_line: line_index.line_of(at + marker.len()),
        });
    }
    declarations
}

/// Functions: the tag is followed by the keyword somewhere in its block, and
/// the name runs to whichever of `(` or `{` comes first.
fn extract_functions(
    text: &str,
    marker: &str,
    keyword: &str,
    kind: FunctionKind,
    line_index: &LineIndex,
) -> Vec<ExtractedDeclaration> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let starts = find_all(marker, text);
    let mut declarations = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let block_start = start + marker.len();
        let block_end = starts.get(i + 1).copied().unwrap_or(text.len());
        let block = &text[block_start..block_end];

        let Some(keyword_at) = block.find(keyword) else {
            tracing::trace!("[EXTRACT] {:?} tag at {} has no '{}'", kind, start, keyword);
            continue;
        };
        let rest = &block[keyword_at + keyword.len()..];
        let Some(end) = first_delimiter(rest, &['(', '{']) else {
            tracing::trace!("[EXTRACT] {:?} function at {} has no delimiter", kind, start);
            continue;
        };
        let name = &rest[..end];
        if name.is_empty() {
            continue;
        }

        declarations.push(ExtractedDeclaration {
            name: SmolStr::new(name),
            kind: DeclarationKind::Function(kind),
            declaration_line: line_index.line_of(block_start + keyword_at),
        });
    }
    declarations
}
