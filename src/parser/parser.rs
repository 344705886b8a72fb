//! Simple-precedence shift/reduce engine.
//!
//! The engine drives two stacks:
//!
//! - the parse stack, bottom-anchored by a permanent `EndMarker` sentinel,
//!   whose entries remember the relation in effect when they were pushed
//! - the lookahead stack, holding the unconsumed input with `EndMarker` at
//!   the bottom
//!
//! A reduction collapses the handle on the parse stack and pushes the
//! resulting nonterminal back onto the lookahead stack, where it is examined
//! again as ordinary input on the next step.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{PrecedenceLookup, ReductionLookup, PRECEDENCE_LOOKUP, REDUCTION_LOOKUP},
    symbols::{NonTerminalKind, Relation, Symbol},
};

/// One transition of the automaton, as recorded in the parse trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The lookahead symbol was moved onto the parse stack.
    Shift { symbol: Symbol, relation: Relation },
    /// `handle` (bottom to top) was collapsed into `into` because `lookahead`
    /// followed it.
    Reduce {
        handle: Vec<Symbol>,
        into: NonTerminalKind,
        lookahead: Symbol,
    },
    /// The stack holds `Program` and only the end marker is left.
    Accept,
}

#[derive(Debug, Clone)]
struct StackEntry {
    symbol: Symbol,
    /// `None` only for the sentinel
    relation: Option<Relation>,
    position: Position,
}

#[derive(Debug, Clone)]
struct LookaheadEntry {
    symbol: Symbol,
    position: Position,
}

/// The parser state for a single candidate program.
pub struct Parser<'t> {
    /// Parse stack, sentinel at index 0
    stack: Vec<StackEntry>,
    /// Remaining input, next symbol last
    lookahead: Vec<LookaheadEntry>,
    /// Every action taken so far
    trace: Vec<Action>,
    precedence: &'t PrecedenceLookup,
    reductions: &'t ReductionLookup,
}

impl Parser<'static> {
    /// Creates a parser over `tokens` using the block language tables.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser::with_tables(tokens, file, &PRECEDENCE_LOOKUP, &REDUCTION_LOOKUP)
    }
}

impl<'t> Parser<'t> {
    /// Creates a parser driven by the given tables.
    ///
    /// Tokens after the first `EndMarker` are ignored, and an `EndMarker` is
    /// supplied if the stream lacks one.
    pub fn with_tables(
        tokens: Vec<Token>,
        file: Rc<String>,
        precedence: &'t PrecedenceLookup,
        reductions: &'t ReductionLookup,
    ) -> Self {
        let mut input: Vec<LookaheadEntry> = Vec::with_capacity(tokens.len() + 1);
        let mut end = 0;
        for token in tokens {
            let is_end = token.kind == TokenKind::EndMarker;
            end = token.span.end.0;
            input.push(LookaheadEntry {
                symbol: Symbol::Terminal(token.kind),
                position: token.span.start,
            });
            if is_end {
                break;
            }
        }

        if !input.last().is_some_and(|entry| entry.symbol.is(TokenKind::EndMarker)) {
            input.push(LookaheadEntry {
                symbol: Symbol::Terminal(TokenKind::EndMarker),
                position: Position(end, Rc::clone(&file)),
            });
        }
        input.reverse();

        Parser {
            stack: vec![StackEntry {
                symbol: Symbol::Terminal(TokenKind::EndMarker),
                relation: None,
                position: Position(0, file),
            }],
            lookahead: input,
            trace: vec![],
            precedence,
            reductions,
        }
    }

    /// Returns the actions taken so far.
    pub fn trace(&self) -> &[Action] {
        &self.trace
    }

    /// Parse stack symbols, sentinel first.
    pub fn stack_symbols(&self) -> Vec<Symbol> {
        self.stack.iter().map(|entry| entry.symbol).collect()
    }

    /// Remaining lookahead symbols, next symbol first.
    pub fn lookahead_symbols(&self) -> Vec<Symbol> {
        self.lookahead.iter().rev().map(|entry| entry.symbol).collect()
    }

    fn stack_top(&self) -> &StackEntry {
        // The sentinel is never popped.
        &self.stack[self.stack.len() - 1]
    }

    fn lookahead_top(&self) -> &LookaheadEntry {
        // The bottom `EndMarker` is never shifted.
        &self.lookahead[self.lookahead.len() - 1]
    }

    /// Pops one handle entry; `None` once only the sentinel is left.
    fn pop_handle_entry(&mut self) -> Option<StackEntry> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    fn record(&mut self, action: Action) -> Action {
        self.trace.push(action.clone());
        action
    }

    /// Performs a single step of the automaton.
    ///
    /// # Returns
    ///
    /// The action taken; `Action::Accept` means the input was recognized and
    /// no further steps should be made.
    pub fn step(&mut self) -> Result<Action, Error> {
        let top = self.stack_top().symbol;
        let next = self.lookahead_top().symbol;

        if top.is(NonTerminalKind::Program) && next.is(TokenKind::EndMarker) {
            log::trace!("Accept");
            return Ok(self.record(Action::Accept));
        }

        let relation = match self.precedence.get(&(top, next)).copied() {
            Some(Relation::Yields | Relation::SameLevel) if self.lookahead.len() == 1 => None,
            relation => relation,
        };

        match relation {
            None => Err(Error::new(
                ErrorImpl::UnexpectedSymbol {
                    stack_top: top,
                    lookahead: next,
                },
                self.lookahead_top().position.clone(),
            )),
            Some(relation @ (Relation::Yields | Relation::SameLevel)) => {
                self.shift(relation);
                log::trace!("Shift {} ({})", next, relation);
                Ok(self.record(Action::Shift {
                    symbol: next,
                    relation,
                }))
            }
            Some(Relation::Takes) => self.reduce(top, next),
        }
    }

    fn shift(&mut self, relation: Relation) {
        if let Some(entry) = self.lookahead.pop() {
            self.stack.push(StackEntry {
                symbol: entry.symbol,
                relation: Some(relation),
                position: entry.position,
            });
        }
    }

    fn reduce(&mut self, handle_top: Symbol, lookahead: Symbol) -> Result<Action, Error> {
        let position = self.lookahead_top().position.clone();
        let no_reduction = || {
            Error::new(
                ErrorImpl::NoReduction {
                    lookahead,
                    handle_top,
                },
                position.clone(),
            )
        };

        // Reductions are keyed on the terminal that follows the handle.
        let into = lookahead
            .terminal()
            .and_then(|terminal| self.reductions.get(&(terminal, handle_top)).copied())
            .ok_or_else(no_reduction)?;

        let mut handle = vec![];
        let start = loop {
            let Some(entry) = self.pop_handle_entry() else {
                return Err(Error::new(
                    ErrorImpl::MalformedHandle,
                    self.stack_top().position.clone(),
                ));
            };
            handle.push(entry.symbol);
            if entry.relation == Some(Relation::Yields) {
                break entry.position;
            }
        };
        handle.reverse();

        self.lookahead.push(LookaheadEntry {
            symbol: Symbol::NonTerminal(into),
            position: start,
        });

        log::trace!("Reduce {:?} -> {} before {}", handle, into, lookahead);
        Ok(self.record(Action::Reduce {
            handle,
            into,
            lookahead,
        }))
    }

    /// Runs the automaton until the input is accepted or rejected.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            if let Action::Accept = self.step()? {
                return Ok(());
            }
        }
    }
}

/// Recognizes a token stream.
///
/// # Arguments
///
/// * `tokens` - Tokens as produced by the lexer
/// * `file` - Name of the source the tokens came from
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with its trace of actions)
/// - `Ok(())` if the input is a program, otherwise the reason it was rejected
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser<'static>, Result<(), Error>) {
    let mut parser = Parser::new(tokens, file);
    let result = parser.run();

    if let Err(error) = &result {
        log::debug!("rejected: {}", error);
    }

    (parser, result)
}
