//! Error types and result aliases for auto-indent.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//! - [`FixError`]: The failure modes of the fix-indentation command

use anyhow::Result as AnyhowResult;
use thiserror::Error;

pub type Result<T> = AnyhowResult<T>;

/// Failure modes of the fix-indentation command.
///
/// `NoActiveEditor` is handled silently by the command surface and never
/// reaches the user; the other variants are reported through a single
/// error notification at the top-level handler.
#[derive(Debug, Error)]
pub enum FixError {
    /// No document is open in the host.
    #[error("no active editor")]
    NoActiveEditor,

    /// Formatting options are unusable (e.g., a zero tab size).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The host rejected an edit batch; nothing from that batch was applied.
    #[error("edit batch rejected: {0}")]
    HostEditFailure(String),
}
