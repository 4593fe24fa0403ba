//! Leading-whitespace normalization.
//!
//! The core of the fix pipeline: converts an arbitrary mix of tabs and
//! spaces at the start of each line into a canonical form (all spaces, or
//! tabs with a space remainder) occupying the identical visual width, so
//! no visible character moves.
//!
//! The invariant that matters:
//! `visual_width(normalize_leading(w, t, _), t) == visual_width(w, t)`
//! for every whitespace run `w` and every tab size `t >= 1`.

use crate::editor::{EditorOptions, Position, Range, TextEdit};
use crate::process::Snapshot;

/// Maximal prefix of a line consisting only of spaces and tabs.
#[must_use]
pub fn leading_whitespace(text: &str) -> &str {
    let end = text
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(text.len());
    &text[..end]
}

/// Visual width of a whitespace run under the given tab-stop size.
///
/// A space advances one column; a tab advances to the next multiple of
/// `tab_size` (a full `tab_size` when already on a stop).
#[must_use]
pub fn visual_width(whitespace: &str, tab_size: usize) -> usize {
    debug_assert!(tab_size >= 1);
    let mut column = 0;
    for ch in whitespace.chars() {
        if ch == '\t' {
            column += tab_size - column % tab_size;
        } else {
            column += 1;
        }
    }
    column
}

/// Canonical whitespace occupying the same visual width as `whitespace`.
///
/// Spaces mode emits only spaces. Tabs mode emits one tab per full stop
/// and spaces for the remainder; each tab starts stop-aligned, so the
/// width is exact by construction.
#[must_use]
pub fn normalize_leading(whitespace: &str, tab_size: usize, insert_spaces: bool) -> String {
    let width = visual_width(whitespace, tab_size);
    if insert_spaces {
        " ".repeat(width)
    } else {
        let mut normalized = "\t".repeat(width / tab_size);
        normalized.push_str(&" ".repeat(width % tab_size));
        normalized
    }
}

/// Compute normalization edits for every line of the snapshot.
///
/// Lines with no leading whitespace, or already in canonical form, submit
/// no edit.
#[must_use]
pub fn normalize_edits(snapshot: &Snapshot, options: &EditorOptions) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    for index in 0..snapshot.line_count() {
        let text = snapshot.text(index);
        let whitespace = leading_whitespace(text);
        if whitespace.is_empty() {
            continue;
        }
        let normalized = normalize_leading(whitespace, options.tab_size, options.insert_spaces);
        if normalized != whitespace {
            // Leading whitespace is ASCII, so byte length == column count.
            let range = Range::new(
                Position::new(index, 0),
                Position::new(index, whitespace.len()),
            );
            edits.push(TextEdit::replace(range, normalized));
        }
    }
    edits
}
