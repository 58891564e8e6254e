// Copyright 2025 the santa_fmt authors
// SPDX-License-Identifier: Apache-2.0

//! An opinionated code formatter for santa-lang.
//!
//! The pipeline is the usual four stages: [`lexer`] turns source text into a token stream,
//! [`parser`] turns tokens into an [`ast::Program`], [`builder`] turns the AST into a [`doc::Doc`],
//! and `doc`'s printer turns that into the final string. [`format`] and [`is_formatted`] are the
//! two entry points a caller needs; everything else is public so the CLI binary (and tests) can
//! drive the stages individually.

pub mod ast;
pub mod builder;
pub mod doc;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use error::FormatError;

/// Formats `source`, returning the canonical rendering.
///
/// Empty input produces empty output. Otherwise the result always ends in exactly one `\n` and
/// contains no trailing whitespace on any line (§8.2's invariants).
pub fn format(source: &str) -> Result<String, FormatError> {
    let tokens = lexer::Lexer::new(source).tokenize()?;
    let program = parser::parse(tokens)?;
    let doc = builder::build_program(&program);
    Ok(doc.render())
}

/// True when `source` is already in its canonical form, i.e. `format(source)? == source`.
pub fn is_formatted(source: &str) -> Result<bool, FormatError> {
    Ok(format(source)? == source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_formats_to_empty_output() {
        assert_eq!(format("").unwrap(), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let src = "part_one: {\n  let xs = [1, 2, 3]\n\n  xs |> map(|x| x * 2) |> fold(0, +)\n}\n";
        let once = format(src).unwrap();
        let twice = format(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn output_has_no_trailing_whitespace_per_line() {
        let src = "let f = |x| {\n  let y = x + 1\n\n  y\n}\n\nf(1)\n";
        let out = format(src).unwrap();
        for line in out.lines() {
            assert_eq!(line, line.trim_end(), "line has trailing whitespace: {line:?}");
        }
        assert!(out.ends_with('\n') && !out.ends_with("\n\n"));
    }

    #[test]
    fn dict_shorthand_rewrite_scenario() {
        let src = "let foo = 1\nlet bar = 2\n#{\"foo\": foo, \"bar\": bar}\n";
        let out = format(src).unwrap();
        assert!(out.contains("#{foo, bar}"));
    }

    #[test]
    fn parse_error_reports_line() {
        let err = format("let x = ").unwrap_err();
        match err {
            FormatError::Parse { line, .. } => assert_eq!(line, 1),
            FormatError::OutOfMemory => panic!("expected a parse error"),
        }
    }

    #[test]
    fn is_formatted_detects_canonical_source() {
        let canonical = format("let x = 1\n\nx\n").unwrap();
        assert!(is_formatted(&canonical).unwrap());
    }

    /// The end-to-end scenario table: binding+operator spacing, collection spacing, lambda
    /// inlining, dictionary shorthand, forced pipe breaking, right-associativity preservation,
    /// section brace rule.
    #[test]
    fn scenario_1_binding_and_operator_spacing() {
        assert_eq!(format("let x=1+2").unwrap(), "let x = 1 + 2\n");
    }

    #[test]
    fn scenario_2_collection_spacing() {
        assert_eq!(format("[1,2,3]").unwrap(), "[1, 2, 3]\n");
    }

    #[test]
    fn scenario_3_lambda_inlining() {
        assert_eq!(format("|x|x+1").unwrap(), "|x| x + 1\n");
    }

    #[test]
    fn scenario_4_dictionary_shorthand() {
        assert_eq!(
            format(r#"#{"foo":foo,"bar":bar}"#).unwrap(),
            "#{foo, bar}\n"
        );
    }

    #[test]
    fn scenario_5_forced_pipe_breaking() {
        assert_eq!(
            format("input |> lines |> filter(is_nice?) |> size").unwrap(),
            "input\n  |> lines\n  |> filter(is_nice?)\n  |> size\n"
        );
    }

    #[test]
    fn scenario_6_right_associativity_preservation() {
        assert_eq!(format("a - (b - c)").unwrap(), "a - (b - c)\n");
    }

    #[test]
    fn scenario_7_section_brace_rule() {
        assert_eq!(format("part_one: { 2 }").unwrap(), "part_one: {\n  2\n}\n");
    }
}
