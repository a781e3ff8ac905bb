//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for a parser. It handles:
//!
//! - On-demand scanning with a byte cursor over borrowed input
//! - Recognition of keywords, identifiers, integers and single-byte symbols
//! - `Illegal` tokens for bytes outside every lexical category
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
