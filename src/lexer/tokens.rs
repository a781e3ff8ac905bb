use lazy_static::lazy_static;
use std::{borrow::Cow, collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map
    };
}

/// Returns the keyword kind for `ident`, or `TokenKind::Identifier` when it is
/// not reserved. Only an exact match counts, so `letx` stays an identifier.
pub fn classify(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Identifier, // add, foobar, x, y
    Int,        // 1343456

    Assignment, // =
    Plus,       // +

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
}

impl TokenKind {
    /// The tag name a parser reports this kind under.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Fn => "FUNCTION",
            TokenKind::Let => "LET",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified lexeme.
///
/// `lexeme` is the exact run of input bytes the token was scanned from, and
/// `literal` is its text. Both borrow from the input. The one exception is an
/// `Illegal` token for a byte >= 0x80: that byte is not UTF-8 on its own, so its
/// `literal` is an owned U+FFFD while `lexeme` still holds the byte itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: Cow<'a, str>,
    pub lexeme: Cow<'a, [u8]>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: impl Into<Cow<'a, str>>) -> Self {
        let (literal, lexeme) = match literal.into() {
            Cow::Borrowed(text) => (Cow::Borrowed(text), Cow::Borrowed(text.as_bytes())),
            Cow::Owned(text) => {
                let bytes = text.as_bytes().to_vec();
                (Cow::Owned(text), Cow::Owned(bytes))
            }
        };

        Token {
            kind,
            literal,
            lexeme,
        }
    }

    /// Builds a token straight from the input bytes it covers.
    pub fn from_lexeme(kind: TokenKind, lexeme: &'a [u8]) -> Self {
        Token {
            kind,
            literal: String::from_utf8_lossy(lexeme),
            lexeme: Cow::Borrowed(lexeme),
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            literal: Cow::Owned(self.literal.into_owned()),
            lexeme: Cow::Owned(self.lexeme.into_owned()),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Int, TokenKind::Illegal]) {
            write!(f, "{} ({})", self.kind, self.literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
