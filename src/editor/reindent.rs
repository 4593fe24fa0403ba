//! Built-in reindentation for the buffer host.
//!
//! Recomputes every line's indentation from brace nesting. This is the
//! buffer host's own formatting logic; the fix pipeline treats it as a
//! black box behind [`Editor::reindent`](crate::editor::Editor::reindent).
//!
//! Braces inside string literals, character literals, `//` comments and
//! `/* */` comments do not affect nesting. Lines inside a block comment
//! are left untouched.

use crate::editor::EditorOptions;

/// Recompute indentation for all lines in place.
pub fn reindent_lines(lines: &mut [String], options: &EditorOptions) {
    let mut depth: usize = 0;
    let mut in_block_comment = false;

    for line in lines.iter_mut() {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if trimmed.is_empty() {
            line.clear();
            continue;
        }

        let was_in_comment = in_block_comment;
        let (leading_closers, delta) = scan_braces(trimmed, &mut in_block_comment);
        if was_in_comment {
            // Interior of a block comment keeps whatever layout it has.
            continue;
        }

        // A line opening with closing braces sits at the shallower level.
        let level = depth.saturating_sub(leading_closers);
        let mut reindented = indent_string(level, options);
        reindented.push_str(trimmed);
        *line = reindented;

        depth = shift_depth(depth, delta);
    }
}

/// Render the indentation for one nesting level.
fn indent_string(level: usize, options: &EditorOptions) -> String {
    if options.insert_spaces {
        " ".repeat(level * options.tab_size)
    } else {
        "\t".repeat(level)
    }
}

/// Apply a signed brace delta to the depth, clamping at zero.
fn shift_depth(depth: usize, delta: isize) -> usize {
    if delta >= 0 {
        depth + delta.unsigned_abs()
    } else {
        depth.saturating_sub(delta.unsigned_abs())
    }
}

/// Scan one trimmed line for braces.
///
/// Returns the number of closing braces before the first other visible
/// character, and the net brace delta for the whole line. Updates
/// `in_block_comment` across lines.
fn scan_braces(text: &str, in_block_comment: &mut bool) -> (usize, isize) {
    let mut leading_closers = 0;
    let mut counting_leading = !*in_block_comment;
    let mut delta: isize = 0;
    let mut string_delim: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if *in_block_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_block_comment = false;
            }
            continue;
        }
        if let Some(delim) = string_delim {
            match ch {
                '\\' => {
                    chars.next();
                }
                c if c == delim => string_delim = None,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' | '\'' => {
                string_delim = Some(ch);
                counting_leading = false;
            }
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                *in_block_comment = true;
            }
            '{' => {
                delta += 1;
                counting_leading = false;
            }
            '}' => {
                delta -= 1;
                if counting_leading {
                    leading_closers += 1;
                }
            }
            ' ' | '\t' => {}
            _ => counting_leading = false,
        }
    }

    (leading_closers, delta)
}
