//! Sequential formatting pipeline.

pub mod pipeline;

pub use pipeline::{fix_document, format_file, format_text, Snapshot};
