//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts a candidate
//! program into a stream of tokens for the precedence parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of the `while` keyword, identifiers and numbers
//! - The `$` stream terminator
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
