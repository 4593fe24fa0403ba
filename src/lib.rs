//! auto-indent - fixes indentation and brace placement in C-style source code
//!
//! Normalizes mixed tab/space indentation to a canonical form without
//! moving any visible character, applies a small set of regex-driven brace
//! and blank-line rewrites, then recomputes indentation through the host
//! editor's reindent facility.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use command::{fix_indentation, COMMAND_ID, SUCCESS_MESSAGE};
pub use config::Config;
pub use editor::{BufferEditor, Editor, EditorOptions, Position, Range, TextEdit};
pub use error::{FixError, Result};
pub use process::{fix_document, format_file, format_text};
