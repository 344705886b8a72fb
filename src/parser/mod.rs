//! Simple-precedence parser for the block language.
//!
//! This module contains the recognizer that decides whether a stream of
//! tokens is a program. It is a shift/reduce automaton driven by:
//!
//! - a precedence table relating a stack-top symbol to a lookahead symbol
//!   (`<` shift and open a handle, `=` shift, `>` reduce)
//! - a reduction table naming the nonterminal a completed handle becomes,
//!   keyed on the terminal that follows the handle
//!
//! No tree is built: a reduced nonterminal is pushed back onto the input and
//! read again like any other symbol.

pub mod lookups;
pub mod parser;
pub mod symbols;
