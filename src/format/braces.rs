//! Brace placement passes.
//!
//! Two regex rules computed against one snapshot and submitted as one
//! batch: splitting a trailing opening brace onto its own line after a
//! block header, and collapsing the indentation of a closing brace that
//! follows such a header. Pattern matches only; no grammar awareness.

use crate::editor::{Position, TextEdit};
use crate::format::patterns::{BRACE_SPLIT_RE, CLOSING_LINE_RE, TRAILING_BRACE_RE};
use crate::process::Snapshot;

/// Compute brace-split and closing-brace-collapse edits.
///
/// For every brace-split candidate the trailing `{` is stripped and a new
/// line holding only `{` is inserted after it; if the following line
/// starts with optional whitespace then `}`, that line's content becomes
/// exactly `}`. The last line is never a candidate (it has no successor).
///
/// A line that is simultaneously a collapse target and a split candidate
/// (e.g. `} else if (x) {`) produces two edits claiming the same range;
/// the host rejects such a batch and the command reports the failure.
#[must_use]
pub fn brace_edits(snapshot: &Snapshot) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    for index in 0..snapshot.line_count().saturating_sub(1) {
        let text = snapshot.text(index);
        if !BRACE_SPLIT_RE.is_match(text) {
            continue;
        }

        let stripped = TRAILING_BRACE_RE.replace(text, "").into_owned();
        edits.push(TextEdit::replace(snapshot.line_range(index), stripped));
        edits.push(TextEdit::insert(Position::new(index + 1, 0), "{\n"));

        if CLOSING_LINE_RE.is_match(snapshot.text(index + 1)) {
            edits.push(TextEdit::replace(snapshot.line_range(index + 1), "}"));
        }
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{BufferEditor, Editor, EditorOptions};

    fn apply(text: &str) -> String {
        let mut buffer = BufferEditor::from_text(text, EditorOptions::default());
        let edits = brace_edits(&Snapshot::capture(&buffer));
        buffer.apply_edits(edits).unwrap();
        buffer.to_text()
    }

    #[test]
    fn test_brace_split() {
        assert_eq!(apply("if (x > 0) {\n    y = 1;\n"), "if (x > 0)\n{\n    y = 1;\n");
    }

    #[test]
    fn test_closing_brace_collapse_after_candidate() {
        assert_eq!(apply("if (x > 0) {\n    }\n"), "if (x > 0)\n{\n}\n");
    }

    #[test]
    fn test_closing_brace_untouched_without_candidate() {
        assert_eq!(apply("x = 1;\n    }\n"), "x = 1;\n    }\n");
    }

    #[test]
    fn test_last_line_never_splits() {
        assert_eq!(apply("if (x > 0) {"), "if (x > 0) {");
    }

    #[test]
    fn test_typed_declaration_splits() {
        assert_eq!(
            apply("int main(void) {\n    return 0;\n}\n"),
            "int main(void)\n{\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_non_candidate_lines_untouched() {
        let text = "x = call(a);\ny++;\n";
        assert_eq!(apply(text), text);
    }

    #[test]
    fn test_conflicting_rules_reject_batch() {
        let text = "if (a) {\n} else if (b) {\n    y = 1;\n";
        let mut buffer = BufferEditor::from_text(text, EditorOptions::default());
        let edits = brace_edits(&Snapshot::capture(&buffer));
        assert!(buffer.apply_edits(edits).is_err());
        assert_eq!(buffer.to_text(), text);
    }
}
