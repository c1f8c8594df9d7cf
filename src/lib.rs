#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset to `(line_number, line_text, column)`.
///
/// Offsets at or past the end of the source resolve to the end of the last line, since
/// errors are commonly raised at end of input.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(source.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last_line = (line_number, line.to_string(), line.len());
        start = end;
        line_number += 1;
    }

    // End of input right after a newline sits on a fresh, empty line.
    if last_line.1.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last_line
}


/// Renders a diagnostic with the offending source line.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> final.ks
           |
        20 | def foo(
           | --------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    result.push_str(&format!("-> {}\n", position.1));
    result.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    result.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    result
}

/// Prints a diagnostic to stderr.
pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
