#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse, Action},
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, plus the name of that source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses one candidate program.
///
/// # Returns
///
/// The shift/reduce trace when `source` is a program, otherwise the first
/// lexical or syntax error.
pub fn recognize(source: &str, file: Option<String>) -> Result<Vec<Action>, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;

    let (parser, result) = parse(tokens, file);
    result.map(|_| parser.trace().to_vec())
}

/// Finds the line holding `position`.
///
/// # Returns
///
/// The 1-based line number, the line text and the offset of `position`
/// within that line. A position at or past the end of `source` maps to just
/// after the last character.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), line.trim_end_matches(['\n', '\r']).len());
        start = end;
        line_number += 1;
    }

    last
}


/// Renders `error` as a short diagnostic with a caret under the offending
/// character:
///
/// ```text
/// Error: UnexpectedSymbol (`RightBrace` cannot follow `Semicolon`)
/// -> programs.txt
///   |
/// 1 | {a:=1;}
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = if let ErrorTip::None = error.get_tip() {
        writeln!(out, "Error: {}", error.get_error_name())
    } else {
        writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip())
    };
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (String::from(&string[start..]), start)
}
