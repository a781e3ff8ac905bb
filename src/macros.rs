//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The input bytes the token covers
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, b"42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        $crate::lexer::tokens::Token::from_lexeme($kind, $lexeme)
    };
}
