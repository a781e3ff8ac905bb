#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, tokenize_strict, Lexer};
pub use lexer::tokens::{classify, Token, TokenKind};

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Offsets past `u32::MAX` are clamped to it rather than wrapped.
    pub fn from_offset(offset: usize, file: Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

/// Finds the line holding byte `position` of `source`.
///
/// Returns the 1-based line number, the line text (including its newline, with
/// invalid UTF-8 replaced by U+FFFD) and the column of `position` counted in
/// characters of that text, or `None` when `position` is past the end.
pub fn get_line_at_position<S: AsRef<[u8]> + ?Sized>(
    source: &S,
    position: u32,
) -> Option<(usize, String, usize)> {
    let pos = position as usize;
    let mut start = 0;

    for (index, line) in source.as_ref().split_inclusive(|byte| *byte == b'\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let column = String::from_utf8_lossy(&line[..pos - start]).chars().count();
            return Some((index + 1, String::from_utf8_lossy(line).into_owned(), column));
        }

        start = end;
    }

    None
}

/// Renders `error` as a caret diagnostic against `source`:
///
/// ```text
/// Error: UnrecognisedToken
/// -> main.mk
///   |
/// 1 | let a = @;
///   | --------^
/// ```
pub fn render_error<S: AsRef<[u8]> + ?Sized>(error: &Error, source: &S) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error<S: AsRef<[u8]> + ?Sized>(error: &Error, source: &S) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|byte| *byte == b' ' || *byte == b'\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    const SOURCE: &str = "Hello, world!\nfoo\nbar\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, SOURCE.len() as u32).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_render_error_points_at_byte() {
        let source = "let a = @;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(8, Rc::new("main.mk".to_string())),
        );

        assert_eq!(
            super::render_error(&error, source),
            "Error: UnrecognisedToken\n-> main.mk\n  |\n1 | let a = @;\n  | --------^\n"
        );
    }

    #[test]
    fn test_render_error_strips_indent() {
        let source = "fn f() {\n    x = $;\n}";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "$".to_string(),
            },
            Position(17, Rc::new("main.mk".to_string())),
        );

        let rendered = super::render_error(&error, source);
        assert!(rendered.contains("2 | x = $;\n"));
        assert!(rendered.ends_with("  | ----^\n"));
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::Io {
                path: "missing.mk".to_string(),
                message: "not found".to_string(),
            },
            Position::null(),
        );

        assert_eq!(
            super::render_error(&error, ""),
            "Error: Io (Could not read `missing.mk`: not found)\n-> <null>\n"
        );
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        let source = "é = @;\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(5, Rc::new("main.mk".to_string())),
        );

        let rendered = super::render_error(&error, source);
        assert!(rendered.contains("1 | é = @;\n"));
        assert!(rendered.ends_with("  | ----^\n"));
    }

    #[test]
    fn test_render_error_on_invalid_utf8_line() {
        let source: &[u8] = b"x\xFF @\n";
        let error = Error::new(
            ErrorImpl::UnrecognisedToken {
                token: "@".to_string(),
            },
            Position(3, Rc::new("main.mk".to_string())),
        );

        let (_, line, column) = super::get_line_at_position(source, 3).unwrap();
        assert_eq!(line, "x\u{FFFD} @\n");
        assert_eq!(column, 3);

        let rendered = super::render_error(&error, source);
        assert!(rendered.ends_with("  | ---^\n"));
    }

    #[test]
    fn test_position_offset_clamps() {
        let file = Rc::new("big.mk".to_string());

        assert_eq!(Position::from_offset(42, Rc::clone(&file)).0, 42);
        assert_eq!(
            Position::from_offset((u32::MAX as usize).saturating_add(1), Rc::clone(&file)).0,
            u32::MAX
        );
        assert_eq!(Position::from_offset(usize::MAX, file).0, u32::MAX);
    }
}
