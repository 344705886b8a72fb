use std::fmt::Display;

use thiserror::Error;

use crate::{parser::symbols::Symbol, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Lexical errors reject the input before the parser ever runs.
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::LexicalError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ErrorImpl::NoReduction { .. } => "NoReduction",
            ErrorImpl::MalformedHandle => "MalformedHandle",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::LexicalError { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedSymbol { stack_top, lookahead } => ErrorTip::Suggestion(format!(
                "`{}` cannot follow `{}`",
                lookahead, stack_top
            )),
            ErrorImpl::NoReduction { lookahead, handle_top } => ErrorTip::Suggestion(format!(
                "no production ends in `{}` before `{}`",
                handle_top, lookahead
            )),
            ErrorImpl::MalformedHandle => ErrorTip::Suggestion(String::from(
                "the precedence table is inconsistent, this is a bug",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at offset {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    LexicalError { character: char },
    #[error("unexpected symbol {lookahead} after {stack_top}")]
    UnexpectedSymbol { stack_top: Symbol, lookahead: Symbol },
    #[error("no reduction for handle ending in {handle_top} before {lookahead}")]
    NoReduction { lookahead: Symbol, handle_top: Symbol },
    #[error("handle start not found above the stack sentinel")]
    MalformedHandle,
}
