//! Regex patterns for the structural rewrite passes.
//!
//! All patterns are compiled once at startup using `LazyLock`. These are
//! deliberately heuristic, language-grammar-unaware patterns; they match
//! common C-style layouts and nothing more.

use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all
/// patterns in this module are compile-time constants that are verified by
/// tests. The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// A block header or primitive-typed declaration whose opening brace sits
/// at the end of the line: the brace-split candidate.
pub static BRACE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(
        r"\b(?:if|else|for|while|switch|do|class|struct|namespace|(?:int|void|float|double|char|bool|string)\s+\w+)\b.*\)\s*\{\s*$",
    )
});

/// The trailing opening brace (and surrounding whitespace) to strip from a
/// brace-split candidate.
pub static TRAILING_BRACE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"\s*\{\s*$"));

/// A line whose first visible character is a closing brace.
pub static CLOSING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^\s*\}"));

/// A line starting with a block keyword.
pub static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^\s*(?:for|while|if|else|class|switch|do)\b"));

/// A bare identifier call carrying its own opening brace, e.g. a macro
/// block or constructor-style invocation.
pub static CALL_WITH_BRACE_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^\s*\w+\s*\(.*\)\s*\{\s*$"));

/// A function-declaration shape: optional modifiers, a type, a name, an
/// opening parenthesis.
pub static FUNC_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    build_re(
        r"^\s*(?:(?:public|private|protected|static|inline|virtual|extern|const)\s+)*\w[\w:<>,\[\]\*&]*\s+[\w:]+\s*\(",
    )
});

/// Lines excluded from the function-declaration heuristic: type aliases
/// and returns read like declarations but are not.
pub static NON_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"^\s*(?:typedef|using|return)\b"));
