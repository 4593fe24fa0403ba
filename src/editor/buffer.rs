//! In-memory host editor backed by a line buffer.
//!
//! [`BufferEditor`] is the host implementation used by the CLI binary and
//! by tests. It applies edit batches with the same contract a real editor
//! host gives us: every range refers to the document as it was when the
//! batch was computed, and a batch either applies completely or not at all.

use crate::editor::reindent::reindent_lines;
use crate::editor::{Editor, EditorOptions, Line, Position, Range, TextEdit};
use crate::error::FixError;

/// A captured notification, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// In-memory implementation of [`Editor`].
#[derive(Debug, Clone)]
pub struct BufferEditor {
    lines: Vec<String>,
    options: EditorOptions,
    /// Whether the source text ended with a newline, so `to_text` can
    /// reproduce it.
    trailing_newline: bool,
    notifications: Vec<Notification>,
}

impl BufferEditor {
    /// Build a buffer from source text.
    ///
    /// An empty input is a document with one empty line, matching how
    /// editor hosts report line counts.
    #[must_use]
    pub fn from_text(text: &str, options: EditorOptions) -> Self {
        let trailing_newline = text.ends_with('\n');
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if trailing_newline {
            // split leaves one empty trailing piece for the final newline
            lines.pop();
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        BufferEditor {
            lines,
            options,
            trailing_newline,
            notifications: Vec::new(),
        }
    }

    /// Reassemble the document into a single string.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }

    /// Notifications shown so far, in order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Byte index of a character column within a line.
    ///
    /// `column == char count` addresses the end of the line.
    fn byte_index(line: &str, column: usize) -> Option<usize> {
        if column == 0 {
            return Some(0);
        }
        let mut seen = 0;
        for (byte, _) in line.char_indices() {
            if seen == column {
                return Some(byte);
            }
            seen += 1;
        }
        (seen == column).then_some(line.len())
    }

    /// Check one position against the current buffer.
    fn validate_position(&self, position: Position) -> Result<(), FixError> {
        let Some(line) = self.lines.get(position.line) else {
            return Err(FixError::HostEditFailure(format!(
                "line {} out of range ({} lines)",
                position.line,
                self.lines.len()
            )));
        };
        if Self::byte_index(line, position.column).is_none() {
            return Err(FixError::HostEditFailure(format!(
                "column {} out of range on line {}",
                position.column, position.line
            )));
        }
        Ok(())
    }

    /// Replace one range with new text, splitting on embedded newlines.
    fn splice(&mut self, range: Range, new_text: &str) {
        // Validation already ran; indices are in bounds here.
        let start_line = &self.lines[range.start.line];
        let end_line = &self.lines[range.end.line];
        let start_byte = Self::byte_index(start_line, range.start.column).unwrap_or(0);
        let end_byte = Self::byte_index(end_line, range.end.column).unwrap_or(end_line.len());

        let mut combined =
            String::with_capacity(start_byte + new_text.len() + (end_line.len() - end_byte));
        combined.push_str(&start_line[..start_byte]);
        combined.push_str(new_text);
        combined.push_str(&end_line[end_byte..]);

        let replacement: Vec<String> = combined.split('\n').map(str::to_string).collect();
        self.lines
            .splice(range.start.line..=range.end.line, replacement);
    }
}

impl Editor for BufferEditor {
    fn options(&self) -> EditorOptions {
        self.options
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Line {
        let text = self.lines[index].clone();
        let end_column = text.chars().count();
        Line {
            range: Range::new(
                Position::new(index, 0),
                Position::new(index, end_column),
            ),
            text,
        }
    }

    fn apply_edits(&mut self, mut edits: Vec<TextEdit>) -> Result<(), FixError> {
        // Validate the whole batch before touching anything.
        for edit in &edits {
            self.validate_position(edit.range.start)?;
            self.validate_position(edit.range.end)?;
            if edit.range.end < edit.range.start {
                return Err(FixError::HostEditFailure(format!(
                    "inverted range on line {}",
                    edit.range.start.line
                )));
            }
        }

        // Sort by start then end. For edits sharing a start position this
        // orders inserts (empty ranges) before replacements, and the
        // reverse-order application below then places inserted text ahead
        // of the replacement text, matching host edit-builder semantics.
        edits.sort_by_key(|edit| (edit.range.start, edit.range.end));

        for pair in edits.windows(2) {
            if pair[1].range.start < pair[0].range.end {
                return Err(FixError::HostEditFailure(format!(
                    "overlapping edits at line {}",
                    pair[1].range.start.line
                )));
            }
        }

        // Apply back to front so earlier ranges keep their snapshot
        // coordinates.
        for edit in edits.iter().rev() {
            self.splice(edit.range, &edit.new_text);
        }
        Ok(())
    }

    fn reindent(&mut self) -> Result<(), FixError> {
        reindent_lines(&mut self.lines, &self.options);
        Ok(())
    }

    fn show_info(&mut self, message: &str) {
        self.notifications
            .push(Notification::Info(message.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.notifications
            .push(Notification::Error(message.to_string()));
    }
}
