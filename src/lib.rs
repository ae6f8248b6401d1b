#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::parse;

/// Byte offsets `[start, end)` into the source a token was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line's text (without its line
/// terminator) and the column of `position` within that line. A position at
/// or past the end of the source maps to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, &str, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return (line_number, line.trim_end_matches(['\n', '\r']), position - start);
        }

        start = end;
        line_number += 1;
    }

    // Past the end: point just after the last character of the last line,
    // ignoring a trailing line terminator.
    match source.split_inclusive('\n').last() {
        Some(line) => {
            let line = line.trim_end_matches(['\n', '\r']);
            (line_number - 1, line, line.len())
        }
        None => (1, "", 0),
    }
}

/// Renders a diagnostic with the offending source line and a caret.
///
/// ```text
/// Error: UnexpectedToken (expected a name here)
///   | expected next token to be IDENT, got = instead
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let (line, line_text, line_pos) = get_line_at_position(source, error.get_span().start);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "{:>padding$} {}", "|", error);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);

    (trimmed, string.len() - trimmed.len())
}
