//! Grammar vocabulary shared by the precedence table, the reduction table
//! and both parser stacks.

use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NonTerminalKind {
    Program,
    Block,
    BlockTail,
    Operator,
    Variable,
    Expression,
    ExpressionTail,
    Factor,
    Primary,
}

impl Display for NonTerminalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminalKind),
}

impl Symbol {
    pub fn terminal(&self) -> Option<TokenKind> {
        match self {
            Symbol::Terminal(kind) => Some(*kind),
            Symbol::NonTerminal(_) => None,
        }
    }

    pub fn is(&self, kind: impl Into<Symbol>) -> bool {
        *self == kind.into()
    }
}

impl From<TokenKind> for Symbol {
    fn from(kind: TokenKind) -> Self {
        Symbol::Terminal(kind)
    }
}

impl From<NonTerminalKind> for Symbol {
    fn from(kind: NonTerminalKind) -> Self {
        Symbol::NonTerminal(kind)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(kind) => write!(f, "{}", kind),
            Symbol::NonTerminal(kind) => write!(f, "{}", kind),
        }
    }
}

/// Precedence relation between a stack-top symbol and a lookahead symbol.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Relation {
    /// `<`: shift, and mark the pushed entry as the start of a handle
    Yields,
    /// `=`: shift inside the current handle
    SameLevel,
    /// `>`: the stack top ends a handle, reduce
    Takes,
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Yields => write!(f, "<"),
            Relation::SameLevel => write!(f, "="),
            Relation::Takes => write!(f, ">"),
        }
    }
}
