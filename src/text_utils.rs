//! Text scanning utilities for working with raw document text.

/// Return every byte offset at which `marker` starts in `text`.
///
/// Scans left to right without overlap: after a match at `start` the next
/// search resumes at `start + marker.len()`. An empty marker matches nothing.
///
/// # Example
/// ```
/// use cairo_outline::text_utils::find_all;
///
/// assert_eq!(find_all("x.read(", "x.read(x.read("), vec![0, 7]);
/// assert!(find_all("", "anything").is_empty());
/// ```
pub fn find_all(marker: &str, text: &str) -> Vec<usize> {
    if marker.is_empty() {
        return Vec::new();
    }
    text.match_indices(marker).map(|(idx, _)| idx).collect()
}

/// Offset of the earliest of `delimiters` in `text`, or `None` if none occur.
///
/// A delimiter that is absent is ignored rather than winning the comparison.
pub fn first_delimiter(text: &str, delimiters: &[char]) -> Option<usize> {
    delimiters.iter().filter_map(|&d| text.find(d)).min()
}

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Whether `needle` occurs in `haystack` as a whole word.
///
/// `balance` matches in `balance.read(x)` but not in `get_balance(x)`.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(is_word_character) && !after.is_some_and(is_word_character)
    })
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if !chars.get(position).copied().is_some_and(is_word_character) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the identifier under a cursor column (character index) in a line.
///
/// # Example
/// ```
/// use cairo_outline::text_utils::extract_word_at_cursor;
///
/// let line = "    balance.write(user, amount)";
/// assert_eq!(extract_word_at_cursor(line, 6), Some("balance".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 11), None); // the dot
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, position)?;
    Some(chars[start..end].iter().collect())
}
