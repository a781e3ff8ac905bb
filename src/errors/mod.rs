//! Error types and error handling.
//!
//! The lexer itself never fails; these errors come from the strict driver,
//! which rejects the first illegal byte, and from the command-line front end.
//! Every error carries the source position it refers to and an optional tip.

pub mod errors;

#[cfg(test)]
mod tests;
