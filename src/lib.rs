#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use config::ParserConfig;
pub use parser::parser::{parse, parse_with_config, Parser};

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text and the 0-based column.
/// Offsets past the end of the source land on the last line.
pub fn line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len(): either an empty source or just past a trailing newline
    match source.rsplit_once('\n') {
        Some((_, last)) if !source.ends_with('\n') => (line_number - 1, last.to_string(), last.len()),
        Some(_) => (line_number, String::new(), 0),
        None => (1, source.to_string(), source.len()),
    }
}

/// Renders a diagnostic with the offending line and a caret under it.
///
/// ```text
/// Error: UnexpectedToken (is a closing `)` missing?)
/// -> shell
///    |
/// 1  | let a = (1 + 2;
///    | --------------^
/// ```
pub fn render_diagnostic(source: &str, source_name: &str, error: &Error) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", source_name));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::ErrorImpl;
    use crate::lexer::tokens::TokenKind;

    #[test]
    fn test_line_at_position() {
        let source = "Hello, world!\nlet a = 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_at_position(source, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_at_position_past_end() {
        assert_eq!(line_at_position("", 0), (1, String::new(), 0));
        assert_eq!(line_at_position("ab\ncd", 99), (2, String::from("cd"), 2));
        assert_eq!(line_at_position("ab\n", 3), (2, String::new(), 0));
        assert_eq!(line_at_position("abc", 3), (1, String::from("abc"), 3));
    }

    #[test]
    fn test_render_diagnostic() {
        let source = "let x = 1;\n  let = 2;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Assign,
            },
            Position(17),
        );

        let rendered = render_diagnostic(source, "shell", &error);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (a name must follow `let`)");
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | let = 2;");
        assert_eq!(lines[4], "  | ----^");
    }
}
