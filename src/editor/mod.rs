//! Host editor abstraction.
//!
//! The formatting pipeline never owns the document. It reads lines through
//! the [`Editor`] trait and submits [`TextEdit`] batches that the host
//! applies atomically. [`BufferEditor`] is the in-memory host used by the
//! CLI and by tests; an integration embedding this crate in a real editor
//! provides its own implementation.

pub mod buffer;
pub mod reindent;

pub use buffer::{BufferEditor, Notification};

use crate::error::FixError;

/// A zero-based (line, column) position. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// A half-open span between two positions in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// An empty range anchored at a single position.
    #[must_use]
    pub const fn at(position: Position) -> Self {
        Range {
            start: position,
            end: position,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single replacement request against a document snapshot.
///
/// Ranges always refer to the document as it was when the batch was
/// computed, not to intermediate states during application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    /// Replace the text covered by `range` with `new_text`.
    #[must_use]
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        TextEdit {
            range,
            new_text: new_text.into(),
        }
    }

    /// Insert `new_text` at `position` without removing anything.
    #[must_use]
    pub fn insert(position: Position, new_text: impl Into<String>) -> Self {
        TextEdit {
            range: Range::at(position),
            new_text: new_text.into(),
        }
    }
}

/// A line as reported by the host: its text plus its document range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub range: Range,
}

/// Formatting options the host exposes for the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Tab-stop width in columns. Must be at least 1.
    pub tab_size: usize,
    /// true: canonicalize indentation to spaces; false: tabs with a
    /// space remainder.
    pub insert_spaces: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            tab_size: 4,
            insert_spaces: true,
        }
    }
}

/// The host editor capability consumed by the formatting pipeline.
///
/// Implementations own the document, the notification surface, and the
/// built-in reindent logic. The pipeline only ever mutates text through
/// `apply_edits`.
pub trait Editor {
    /// Formatting options for the active document.
    fn options(&self) -> EditorOptions;

    /// Total number of lines in the document.
    fn line_count(&self) -> usize;

    /// Text and range of the line at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `index >= line_count()`.
    fn line(&self, index: usize) -> Line;

    /// Apply a batch of edits atomically.
    ///
    /// All ranges refer to the current document. On error nothing from the
    /// batch is applied.
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> Result<(), FixError>;

    /// Recompute indentation with the host's own reindent logic.
    fn reindent(&mut self) -> Result<(), FixError>;

    /// Show an informational notification.
    fn show_info(&mut self, message: &str);

    /// Show an error notification.
    fn show_error(&mut self, message: &str);
}
