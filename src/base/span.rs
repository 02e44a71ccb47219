//! Offset ↔ line/column conversion.
//!
//! Offsets are byte offsets into the document text. Lines are zero-based and
//! end at a `\n` (or at the end of the text).

pub use text_size::TextSize;

/// A zero-based line/column pair. `col` is a byte column within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Precomputed line starts for one document snapshot.
///
/// Built once per rebuild so every usage site resolves its line with a binary
/// search instead of rescanning the text prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line. Always starts with `0`.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::from((idx + 1) as u32)),
        );

        Self {
            line_starts,
            len: TextSize::from(text.len() as u32),
        }
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Convert an offset to a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        LineCol {
            line: line as u32,
            col: u32::from(offset - self.line_starts[line]),
        }
    }

    /// Line-only form of [`LineIndex::line_col`] for `usize` offsets.
    pub fn line_of(&self, offset: usize) -> u32 {
        self.line_col(TextSize::from(offset.min(u32::MAX as usize) as u32))
            .line
    }

    /// Text of `line` without its line terminator, or `None` past the last line.
    ///
    /// `text` must be the same text this index was built from.
    pub fn line_text<'t>(&self, text: &'t str, line: u32) -> Option<&'t str> {
        let line = line as usize;
        let start = usize::from(*self.line_starts.get(line)?);
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| usize::from(next) - 1)
            .unwrap_or(text.len());
        let raw = text.get(start..end)?;
        Some(raw.strip_suffix('\r').unwrap_or(raw))
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        LineIndex::new("")
    }
}

/// Count the line containing `offset` without building a [`LineIndex`].
///
/// Counts `\n` bytes in `text[..offset]`. Never fails: offsets beyond the
/// text clamp to the last line, and offsets inside a multi-byte character
/// are counted on raw bytes so they never split a character.
pub fn line_of(offset: usize, text: &str) -> u32 {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u32
}
