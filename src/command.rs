//! The user-invocable fix command.
//!
//! One command, no arguments, operating on the currently active editor.
//! With no active editor the command silently does nothing. Every
//! pipeline failure is caught here, exactly once, and converted into a
//! single error notification; steps committed before the failure remain
//! applied.

use crate::config::Config;
use crate::editor::Editor;
use crate::process::fix_document;

/// Command identifier for host registration.
pub const COMMAND_ID: &str = "auto-indent.fix";

/// Notification shown when the pipeline completes.
pub const SUCCESS_MESSAGE: &str = "Indentation fixed successfully";

/// Execute the fix command against the active editor, if any.
pub fn fix_indentation<E: Editor>(active: Option<&mut E>, config: &Config) {
    let Some(editor) = active else {
        return;
    };
    match fix_document(editor, config) {
        Ok(()) => editor.show_info(SUCCESS_MESSAGE),
        Err(error) => editor.show_error(&format!("Failed to fix indentation: {error}")),
    }
}
