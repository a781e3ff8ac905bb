use std::{iter::FusedIterator, rc::Rc};

use log::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{classify, Token, TokenKind};

/// Scanner over borrowed source bytes, producing one token per call.
///
/// `ch` is `None` both before anything is read and once the input is exhausted.
/// After construction `read_position == position + 1` always holds.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    read_position: usize,
    ch: Option<u8>,
    token_start: usize,
    file: Rc<String>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Accepts `&str`, `&[u8]` or anything else that views as bytes. The input is
    /// not required to be UTF-8.
    pub fn new<S: AsRef<[u8]> + ?Sized>(input: &'a S) -> Lexer<'a> {
        Lexer::with_file(input, "<input>")
    }

    /// Same as `new`, naming the source for the positions reported in errors.
    pub fn with_file<S: AsRef<[u8]> + ?Sized>(input: &'a S, file: impl Into<String>) -> Lexer<'a> {
        let mut lexer = Lexer {
            input: input.as_ref(),
            position: 0,
            read_position: 0,
            ch: None,
            token_start: 0,
            file: Rc::new(file.into()),
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.token_start = self.position;

        let current = self.ch;
        let kind = match current {
            None => return MK_TOKEN!(TokenKind::EOF, b""),
            Some(b'=') => TokenKind::Assignment,
            Some(b';') => TokenKind::Semicolon,
            Some(b'(') => TokenKind::OpenParen,
            Some(b')') => TokenKind::CloseParen,
            Some(b',') => TokenKind::Comma,
            Some(b'+') => TokenKind::Plus,
            Some(b'{') => TokenKind::OpenCurly,
            Some(b'}') => TokenKind::CloseCurly,
            // Both branches below leave the cursor on the first byte past the lexeme.
            Some(ch) if is_letter(ch) => {
                let lexeme = self.read_identifier();
                return MK_TOKEN!(classify(&String::from_utf8_lossy(lexeme)), lexeme);
            }
            Some(ch) if is_digit(ch) => {
                return MK_TOKEN!(TokenKind::Int, self.read_number());
            }
            Some(_) => TokenKind::Illegal,
        };

        let input = self.input;
        let token = MK_TOKEN!(kind, &input[self.position..self.read_position]);
        self.read_char();
        token
    }

    /// Byte offset at which the most recently returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn token_position(&self) -> Position {
        Position::from_offset(self.token_start, Rc::clone(&self.file))
    }

    pub fn at_eof(&self) -> bool {
        self.ch.is_none()
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a [u8] {
        let start = self.position;
        while matches!(self.ch, Some(ch) if is_letter(ch) || is_digit(ch)) {
            self.read_char();
        }

        let input = self.input;
        &input[start..self.position]
    }

    fn read_number(&mut self) -> &'a [u8] {
        let start = self.position;
        while matches!(self.ch, Some(ch) if is_digit(ch)) {
            self.read_char();
        }

        let input = self.input;
        &input[start..self.position]
    }
}

/// Yields every token up to and including the first `EOF`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Scans all of `source`. Illegal bytes come back as `Illegal` tokens and the
/// result always ends with a single `EOF`.
pub fn tokenize<S: AsRef<[u8]> + ?Sized>(source: &S) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Lexer::new(source).collect();
    trace!("scanned {} tokens from {} bytes", tokens.len(), source.as_ref().len());
    tokens
}

/// Like `tokenize`, but rejects the input at the first byte that belongs to no
/// lexical category.
pub fn tokenize_strict<S: AsRef<[u8]> + ?Sized>(
    source: &S,
    file: Option<String>,
) -> Result<Vec<Token<'_>>, Error> {
    let bytes = source.as_ref();
    let mut lex = match file {
        Some(file) => Lexer::with_file(source, file),
        None => Lexer::new(source),
    };
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();

        match token.kind {
            TokenKind::Illegal => {
                let error_impl = match bytes.get(lex.token_start()) {
                    Some(&byte) if !byte.is_ascii() => ErrorImpl::NonAsciiByte { byte },
                    _ => ErrorImpl::UnrecognisedToken { token: token.literal.into_owned() },
                };

                debug!("rejecting input at byte {}: {}", lex.token_start(), error_impl);
                return Err(Error::new(error_impl, lex.token_position()));
            }
            TokenKind::EOF => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    trace!("scanned {} tokens from {} bytes", tokens.len(), bytes.len());
    Ok(tokens)
}
