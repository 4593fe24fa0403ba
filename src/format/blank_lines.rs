//! Blank-line insertion passes.
//!
//! Two regex rules, each its own pipeline stage: a blank line before
//! block constructs, and a blank line before function declarations. Both
//! only fire when the previous line is non-blank.

use crate::editor::{Position, TextEdit};
use crate::format::patterns::{BLOCK_START_RE, CALL_WITH_BRACE_RE, FUNC_DECL_RE, NON_DECL_RE};
use crate::process::Snapshot;

/// Insert a blank line before block keywords and brace-carrying calls.
#[must_use]
pub fn blank_before_blocks(snapshot: &Snapshot) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    for index in 1..snapshot.line_count() {
        let text = snapshot.text(index);
        if !BLOCK_START_RE.is_match(text) && !CALL_WITH_BRACE_RE.is_match(text) {
            continue;
        }
        if snapshot.text(index - 1).trim().is_empty() {
            continue;
        }
        edits.push(TextEdit::insert(Position::new(index, 0), "\n"));
    }
    edits
}

/// Insert a blank line before function-declaration shapes.
///
/// Assignments, type aliases, returns and block-keyword lines are
/// excluded; `else if (x)` otherwise reads as a type followed by a name.
#[must_use]
pub fn blank_before_functions(snapshot: &Snapshot) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    for index in 1..snapshot.line_count() {
        let text = snapshot.text(index);
        if !FUNC_DECL_RE.is_match(text)
            || text.contains('=')
            || NON_DECL_RE.is_match(text)
            || BLOCK_START_RE.is_match(text)
        {
            continue;
        }
        if snapshot.text(index - 1).trim().is_empty() {
            continue;
        }
        edits.push(TextEdit::insert(Position::new(index, 0), "\n"));
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{BufferEditor, Editor, EditorOptions};

    fn apply(text: &str, stage: fn(&Snapshot) -> Vec<TextEdit>) -> String {
        let mut buffer = BufferEditor::from_text(text, EditorOptions::default());
        let edits = stage(&Snapshot::capture(&buffer));
        buffer.apply_edits(edits).unwrap();
        buffer.to_text()
    }

    #[test]
    fn test_blank_before_block_keyword() {
        assert_eq!(
            apply("x = 1;\nfor (;;)\n", blank_before_blocks),
            "x = 1;\n\nfor (;;)\n"
        );
    }

    #[test]
    fn test_no_blank_after_blank() {
        let text = "x = 1;\n\nwhile (1)\n";
        assert_eq!(apply(text, blank_before_blocks), text);
    }

    #[test]
    fn test_block_keyword_on_first_line_untouched() {
        let text = "if (x)\n    y();\n";
        assert_eq!(apply(text, blank_before_blocks), text);
    }

    #[test]
    fn test_blank_before_call_with_brace() {
        assert_eq!(
            apply("setup();\nTEST_CASE(parsing) {\n", blank_before_blocks),
            "setup();\n\nTEST_CASE(parsing) {\n"
        );
    }

    #[test]
    fn test_adjacent_blocks_each_get_a_blank() {
        assert_eq!(
            apply("a();\nif (x)\nwhile (y)\n", blank_before_blocks),
            "a();\n\nif (x)\n\nwhile (y)\n"
        );
    }

    #[test]
    fn test_blank_before_function_declaration() {
        assert_eq!(
            apply("}\nint helper(int a)\n", blank_before_functions),
            "}\n\nint helper(int a)\n"
        );
    }

    #[test]
    fn test_assignment_is_not_a_function() {
        let text = "}\nint x = call(a);\n";
        assert_eq!(apply(text, blank_before_functions), text);
    }

    #[test]
    fn test_type_alias_is_not_a_function() {
        let text = "}\nusing Map = std::map<int, int>;\n";
        assert_eq!(apply(text, blank_before_functions), text);
    }

    #[test]
    fn test_else_if_is_not_a_function() {
        let text = "}\nelse if (x > 0)\n";
        assert_eq!(apply(text, blank_before_functions), text);
    }

    #[test]
    fn test_function_after_blank_untouched() {
        let text = "}\n\nvoid next(void)\n";
        assert_eq!(apply(text, blank_before_functions), text);
    }
}
