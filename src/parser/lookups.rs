//! Static lookup tables for the block language grammar.
//!
//! Both tables are built once, on first use, and are read-only afterwards,
//! so any number of parses may share them.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

use super::symbols::{NonTerminalKind, Relation, Symbol};

pub type PrecedenceLookup = HashMap<(Symbol, Symbol), Relation>;
pub type ReductionLookup = HashMap<(TokenKind, Symbol), NonTerminalKind>;

use NonTerminalKind::*;
use Relation::*;

const IDENT: Symbol = Symbol::Terminal(TokenKind::Identifier);
const NUMBER: Symbol = Symbol::Terminal(TokenKind::Number);
const SEMI: Symbol = Symbol::Terminal(TokenKind::Semicolon);
const ASSIGN: Symbol = Symbol::Terminal(TokenKind::Assign);
const HASH: Symbol = Symbol::Terminal(TokenKind::Hash);
const NOT: Symbol = Symbol::Terminal(TokenKind::Not);
const AMP: Symbol = Symbol::Terminal(TokenKind::Ampersand);
const WHILE: Symbol = Symbol::Terminal(TokenKind::While);
const LBRACE: Symbol = Symbol::Terminal(TokenKind::LeftBrace);
const RBRACE: Symbol = Symbol::Terminal(TokenKind::RightBrace);
const END: Symbol = Symbol::Terminal(TokenKind::EndMarker);

const fn nt(kind: NonTerminalKind) -> Symbol {
    Symbol::NonTerminal(kind)
}

fn relations(table: &mut PrecedenceLookup, top: Symbol, row: &[(Symbol, Relation)]) {
    for (lookahead, relation) in row {
        table.insert((top, *lookahead), *relation);
    }
}

fn reductions(table: &mut ReductionLookup, lookahead: TokenKind, row: &[(Symbol, NonTerminalKind)]) {
    for (handle_top, result) in row {
        table.insert((lookahead, *handle_top), *result);
    }
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: PrecedenceLookup = {
        let mut table = HashMap::new();

        // Terminals and nonterminals that always end a handle
        relations(&mut table, IDENT, &[
            (LBRACE, Takes), (RBRACE, Takes), (SEMI, Takes),
            (ASSIGN, Takes), (HASH, Takes), (AMP, Takes),
        ]);
        relations(&mut table, NUMBER, &[(RBRACE, Takes), (SEMI, Takes), (HASH, Takes), (AMP, Takes)]);
        relations(&mut table, nt(Primary), &[(RBRACE, Takes), (SEMI, Takes), (HASH, Takes), (AMP, Takes)]);
        relations(&mut table, nt(Factor), &[(RBRACE, Takes), (SEMI, Takes), (HASH, Takes), (AMP, SameLevel)]);
        relations(&mut table, nt(ExpressionTail), &[(RBRACE, Takes), (SEMI, Takes), (HASH, SameLevel)]);
        relations(&mut table, nt(Expression), &[(RBRACE, Takes), (SEMI, Takes)]);
        relations(&mut table, nt(Operator), &[(RBRACE, Takes), (SEMI, Takes)]);
        relations(&mut table, nt(BlockTail), &[(RBRACE, Takes), (SEMI, SameLevel)]);
        relations(&mut table, nt(Block), &[(RBRACE, SameLevel)]);
        relations(&mut table, nt(Variable), &[(LBRACE, SameLevel), (ASSIGN, SameLevel)]);

        // Blocks and statements
        relations(&mut table, LBRACE, &[
            (IDENT, Yields), (nt(Block), SameLevel), (nt(BlockTail), Yields),
            (nt(Operator), Yields), (nt(Variable), Yields), (WHILE, Yields),
            (LBRACE, Yields),
        ]);
        relations(&mut table, RBRACE, &[(RBRACE, Takes), (SEMI, Takes), (END, Takes)]);
        relations(&mut table, SEMI, &[
            (IDENT, Yields), (nt(Block), SameLevel), (nt(BlockTail), SameLevel),
            (nt(Operator), SameLevel), (nt(Variable), Yields), (WHILE, Yields),
            (LBRACE, Yields),
        ]);
        relations(&mut table, WHILE, &[(IDENT, Yields), (nt(Variable), SameLevel)]);

        // Expressions
        relations(&mut table, ASSIGN, &[
            (IDENT, Yields), (nt(Expression), SameLevel), (nt(ExpressionTail), Yields),
            (nt(Factor), Yields), (NUMBER, Yields), (nt(Primary), Yields), (NOT, Yields),
        ]);
        relations(&mut table, NOT, &[
            (IDENT, Yields), (nt(Factor), SameLevel), (NUMBER, Yields), (nt(Primary), Yields),
        ]);
        relations(&mut table, HASH, &[
            (IDENT, Yields), (nt(Expression), SameLevel), (nt(ExpressionTail), SameLevel),
            (nt(Factor), SameLevel), (NUMBER, Yields), (nt(Primary), Yields),
        ]);
        relations(&mut table, AMP, &[(IDENT, Yields), (NUMBER, Yields), (nt(Primary), SameLevel)]);

        relations(&mut table, END, &[(nt(Program), Yields), (LBRACE, Yields)]);

        table
    };

    pub static ref REDUCTION_LOOKUP: ReductionLookup = {
        let mut table = HashMap::new();

        reductions(&mut table, TokenKind::LeftBrace, &[(IDENT, Variable)]);
        reductions(&mut table, TokenKind::Assign, &[(IDENT, Variable)]);
        reductions(&mut table, TokenKind::RightBrace, &[
            (IDENT, Primary), (NUMBER, Primary), (nt(Primary), Factor),
            (nt(Factor), ExpressionTail), (nt(ExpressionTail), Expression),
            (nt(Expression), Operator), (RBRACE, Operator),
            (nt(Operator), BlockTail), (nt(BlockTail), Block),
        ]);
        reductions(&mut table, TokenKind::Semicolon, &[
            (IDENT, Primary), (NUMBER, Primary), (nt(Primary), Factor),
            (nt(Factor), ExpressionTail), (nt(ExpressionTail), Expression),
            (nt(Expression), Operator), (RBRACE, Operator),
            (nt(Operator), BlockTail),
        ]);
        reductions(&mut table, TokenKind::Hash, &[
            (IDENT, Primary), (NUMBER, Primary), (nt(Primary), Factor),
            (nt(Factor), ExpressionTail),
        ]);
        reductions(&mut table, TokenKind::Ampersand, &[
            (IDENT, Primary), (NUMBER, Primary), (nt(Primary), Factor),
        ]);
        reductions(&mut table, TokenKind::EndMarker, &[(RBRACE, Program)]);

        table
    };
}

/// Relation between the parse-stack top and the lookahead, if the pair can
/// legally appear next to each other.
pub fn relation(stack_top: Symbol, lookahead: Symbol) -> Option<Relation> {
    PRECEDENCE_LOOKUP.get(&(stack_top, lookahead)).copied()
}

/// Nonterminal produced by the handle ending in `handle_top` when it is
/// followed by `lookahead`.
pub fn reduction(lookahead: TokenKind, handle_top: Symbol) -> Option<NonTerminalKind> {
    REDUCTION_LOOKUP.get(&(lookahead, handle_top)).copied()
}
