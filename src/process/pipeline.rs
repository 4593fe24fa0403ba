//! Sequential fix pipeline.
//!
//! Drives the command's stages in order: whitespace normalization, brace
//! placement, blank-line insertion, then the host's built-in reindent.
//! Each stage re-reads the document (earlier stages shift line numbers),
//! computes a pure edit batch against that snapshot, and submits it
//! atomically before the next stage runs. A rejected batch aborts the
//! remaining stages; stages already committed stay applied.

use std::io::{Read, Write};

use crate::config::Config;
use crate::editor::{BufferEditor, Editor, Line, Range, TextEdit};
use crate::error::FixError;
use crate::format::{blank_before_blocks, blank_before_functions, brace_edits, normalize_edits};
use crate::Result;

/// A read-only copy of the document taken at the start of a stage.
#[derive(Debug, Clone)]
pub struct Snapshot {
    lines: Vec<Line>,
}

impl Snapshot {
    /// Read every line from the editor.
    pub fn capture<E: Editor + ?Sized>(editor: &E) -> Self {
        let lines = (0..editor.line_count())
            .map(|index| editor.line(index))
            .collect();
        Snapshot { lines }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the line at `index`.
    #[must_use]
    pub fn text(&self, index: usize) -> &str {
        &self.lines[index].text
    }

    /// Full range of the line at `index`.
    #[must_use]
    pub fn line_range(&self, index: usize) -> Range {
        self.lines[index].range
    }
}

/// Run the fix pipeline against an editor.
///
/// Stage order: normalize, braces, blank-before-blocks,
/// blank-before-functions, host reindent. Structural stages honor their
/// `Config` toggles; normalization always runs.
pub fn fix_document<E: Editor>(editor: &mut E, config: &Config) -> Result<()> {
    let options = editor.options();
    if options.tab_size == 0 {
        return Err(
            FixError::InvalidConfiguration("tab size must be at least 1".to_string()).into(),
        );
    }

    run_stage(editor, |snapshot| normalize_edits(snapshot, &options))?;
    if config.split_braces {
        run_stage(editor, brace_edits)?;
    }
    if config.blank_before_blocks {
        run_stage(editor, blank_before_blocks)?;
    }
    if config.blank_before_functions {
        run_stage(editor, blank_before_functions)?;
    }
    if config.reindent {
        editor.reindent()?;
    }
    Ok(())
}

/// Capture a snapshot, compute one stage's edits, apply them atomically.
///
/// An empty batch submits nothing.
fn run_stage<E, F>(editor: &mut E, stage: F) -> Result<()>
where
    E: Editor,
    F: Fn(&Snapshot) -> Vec<TextEdit>,
{
    let snapshot = Snapshot::capture(editor);
    let edits = stage(&snapshot);
    if edits.is_empty() {
        return Ok(());
    }
    editor.apply_edits(edits)?;
    Ok(())
}

/// Format source text through an in-memory host.
pub fn format_text(input: &str, config: &Config) -> Result<String> {
    let mut editor = BufferEditor::from_text(input, config.editor_options());
    fix_document(&mut editor, config)?;
    Ok(editor.to_text())
}

/// Format everything from `input` and write the result to `output`.
pub fn format_file<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let formatted = format_text(&text, config)?;
    output.write_all(formatted.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorOptions;

    #[test]
    fn test_snapshot_reads_all_lines() {
        let buffer = BufferEditor::from_text("a\nb\nc\n", EditorOptions::default());
        let snapshot = Snapshot::capture(&buffer);
        assert_eq!(snapshot.line_count(), 3);
        assert_eq!(snapshot.text(1), "b");
        assert_eq!(snapshot.line_range(2).end.column, 1);
    }

    #[test]
    fn test_zero_tab_size_is_rejected_before_any_edit() {
        let mut editor = BufferEditor::from_text(
            "\tx\n",
            EditorOptions {
                tab_size: 0,
                insert_spaces: true,
            },
        );
        let config = Config::default();
        assert!(fix_document(&mut editor, &config).is_err());
        assert_eq!(editor.to_text(), "\tx\n");
    }

    #[test]
    fn test_stages_run_on_fresh_snapshots() {
        // The brace stage inserts a line; the blank-line stages must see
        // the shifted document, not the original line numbers.
        let config = Config {
            reindent: false,
            ..Config::default()
        };
        let input = "setup();\nif (x > 0) {\n    y = 1;\n}\n";
        let output = format_text(input, &config).unwrap();
        assert_eq!(output, "setup();\n\nif (x > 0)\n{\n    y = 1;\n}\n");
    }

    #[test]
    fn test_format_text_full_pipeline() {
        let input = "int main(void) {\n\tint x = 1;\n\tif (x > 0) {\n\t\tx = 2;\n\t}\n\treturn x;\n}\n";
        let output = format_text(input, &Config::default()).unwrap();
        assert_eq!(
            output,
            "int main(void)\n{\n    int x = 1;\n\n    if (x > 0)\n    {\n        x = 2;\n    }\n    return x;\n}\n"
        );
    }

    #[test]
    fn test_format_text_is_idempotent() {
        let input = "void f(int a) {\n\tif (a) {\n\t\tg();\n\t}\n}\n";
        let once = format_text(input, &Config::default()).unwrap();
        let twice = format_text(&once, &Config::default()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_structural_toggles_disable_passes() {
        let config = Config {
            split_braces: false,
            blank_before_blocks: false,
            blank_before_functions: false,
            reindent: false,
            ..Config::default()
        };
        let output = format_text("x();\nif (y > 0) {\n\tz();\n}\n", &config).unwrap();
        assert_eq!(output, "x();\nif (y > 0) {\n    z();\n}\n");
    }

    #[test]
    fn test_format_file_round_trip() {
        let mut input = std::io::Cursor::new(b"\tx = 1;\n".to_vec());
        let mut output = Vec::new();
        let config = Config {
            reindent: false,
            ..Config::default()
        };
        format_file(&mut input, &mut output, &config).unwrap();
        assert_eq!(output, b"    x = 1;\n");
    }
}
