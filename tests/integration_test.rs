//! Integration tests for auto-indent
//!
//! These tests verify that the pipeline stages work together correctly
//! over an in-memory host.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use auto_indent::format::{normalize_leading, visual_width};
use auto_indent::process::format_text;
use auto_indent::Config;

/// Config with the structural passes and reindent disabled
fn normalize_only() -> Config {
    Config {
        split_braces: false,
        blank_before_blocks: false,
        blank_before_functions: false,
        reindent: false,
        ..Config::default()
    }
}

#[test]
fn test_normalization_preserves_visual_columns() {
    let input = "\tone\n  \ttwo\n\t  three\n        four\n";
    let config = normalize_only();
    let output = format_text(input, &config).unwrap();

    for (original, formatted) in input.lines().zip(output.lines()) {
        let original_ws: String = original.chars().take_while(|c| *c == ' ' || *c == '\t').collect();
        let formatted_ws: String = formatted.chars().take_while(|c| *c == ' ' || *c == '\t').collect();
        assert_eq!(
            visual_width(&original_ws, config.tab_size),
            visual_width(&formatted_ws, config.tab_size),
            "column shifted for {original:?}"
        );
        assert_eq!(original.trim_start(), formatted.trim_start());
    }
}

#[test]
fn test_normalize_only_pipeline_is_idempotent() {
    let input = "\tif (x) {\n\t\ty();\n\t}\n";
    let config = normalize_only();
    let once = format_text(input, &config).unwrap();
    let twice = format_text(&once, &config).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, "    if (x) {\n        y();\n    }\n");
}

#[test]
fn test_tabs_mode_end_to_end() {
    let config = Config {
        insert_spaces: false,
        split_braces: false,
        blank_before_blocks: false,
        blank_before_functions: false,
        reindent: false,
        ..Config::default()
    };
    let output = format_text("        deep\n      partial\n", &config).unwrap();
    assert_eq!(output, "\t\tdeep\n\t  partial\n");
}

#[test]
fn test_brace_split_scenario() {
    let config = Config {
        blank_before_blocks: false,
        blank_before_functions: false,
        reindent: false,
        ..Config::default()
    };
    let output = format_text("if (x > 0) {\n    y = 1;\n", &config).unwrap();
    assert_eq!(output, "if (x > 0)\n{\n    y = 1;\n");
}

#[test]
fn test_closing_brace_collapse_scenario() {
    let config = Config {
        blank_before_blocks: false,
        blank_before_functions: false,
        reindent: false,
        ..Config::default()
    };
    let output = format_text("if (x > 0) {\n    }\n", &config).unwrap();
    assert_eq!(output, "if (x > 0)\n{\n}\n");
}

#[test]
fn test_complete_c_function() {
    let input = "int count_positive(int *values, int n) {\n\tint total = 0;\n\tfor (int i = 0; i < n; i++) {\n\t\tif (values[i] > 0) {\n\t\t\ttotal++;\n\t\t}\n\t}\n\treturn total;\n}\n";
    let output = format_text(input, &Config::default()).unwrap();
    // the blank-line pass also fires on the `if` that now follows an
    // inserted `{` line
    assert_eq!(
        output,
        "int count_positive(int *values, int n)\n{\n    int total = 0;\n\n    for (int i = 0; i < n; i++)\n    {\n\n        if (values[i] > 0)\n        {\n            total++;\n        }\n    }\n    return total;\n}\n"
    );
}

#[test]
fn test_blank_lines_between_functions() {
    let config = Config {
        split_braces: false,
        blank_before_blocks: false,
        reindent: false,
        ..Config::default()
    };
    let input = "void first(void);\nvoid second(void);\n";
    let output = format_text(input, &config).unwrap();
    assert_eq!(output, "void first(void);\n\nvoid second(void);\n");
}

#[test]
fn test_already_formatted_document_gets_no_blank_line_churn() {
    let config = Config {
        reindent: false,
        ..Config::default()
    };
    let input = "void first(void);\n\nvoid second(void);\n";
    assert_eq!(format_text(input, &config).unwrap(), input);
}

#[test]
fn test_empty_input() {
    assert_eq!(format_text("", &Config::default()).unwrap(), "");
}

#[test]
fn test_trailing_newline_is_preserved() {
    let with = format_text("x();\n", &Config::default()).unwrap();
    assert!(with.ends_with('\n'));
    let without = format_text("x();", &Config::default()).unwrap();
    assert!(!without.ends_with('\n'));
}

#[test]
fn test_normalize_leading_canonical_examples() {
    // tabs to spaces: two tabs at width 4 occupy eight columns
    assert_eq!(normalize_leading("\t\t", 4, true), "        ");
    // spaces to tabs: eight spaces at width 4 collapse to two tabs
    assert_eq!(normalize_leading("        ", 4, false), "\t\t");
    // mixed: tab to column 4, then two spaces
    assert_eq!(normalize_leading("\t  ", 4, true), "      ");
}
