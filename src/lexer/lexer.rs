use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(source).expect("lexer patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Tried in order; every pattern is anchored at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \t\n\r]+", skip_handler),
        pattern("^[a-zA-Z][a-zA-Z0-9]*", symbol_handler),
        pattern("^[0-9]+", number_handler),
        pattern("^:=", MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=")),
        pattern("^:", colon_handler),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::LeftBrace, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::RightBrace, "}")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^#", MK_DEFAULT_HANDLER!(TokenKind::Hash, "#")),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("^&", MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&")),
        pattern("^\\$", end_marker_handler),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Records the offending character as an `ErrorToken` and builds the
    /// matching error. `offset` is relative to the current position.
    fn fail_at(&mut self, offset: usize, character: char) -> Error {
        self.pos += offset;
        let span = self.span(character.len_utf8());
        let position = span.start.clone();
        self.push(MK_TOKEN!(TokenKind::ErrorToken, character.to_string(), span));
        Error::new(ErrorImpl::LexicalError { character }, position)
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(matched);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).map_or("", |m| m.as_str()).to_string();

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.clone(), lexer.span(matched.len())));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    // The whole letter/digit run is taken first, so `whilex` stays an identifier.
    let value = regex.find(lexer.remainder()).map_or("", |m| m.as_str()).to_string();
    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value.clone(), lexer.span(value.len())));
    lexer.advance_n(value.len());
    Ok(())
}

/// A `:` that did not match `:=`. The character standing where `=` was
/// expected is reported; at end of input the colon itself is.
fn colon_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let next = lexer.remainder()[1..].chars().next();
    match next {
        Some(next) => Err(lexer.fail_at(1, next)),
        None => Err(lexer.fail_at(0, ':')),
    }
}

fn end_marker_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    lexer.push(MK_TOKEN!(TokenKind::EndMarker, String::from("$"), lexer.span(1)));
    lexer.advance_n(1);
    lexer.finished = true;
    Ok(())
}

/// Tokenizes `source`, returning every token produced so far together with
/// the lexical error, if any. On failure the last token is the
/// `ErrorToken` carrying the offending character.
pub fn lex(source: String, file: Option<String>) -> (Vec<Token>, Option<Error>) {
    let mut lex = Lexer::new(source, file);

    while !lex.finished && !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS.iter().find(|pattern| pattern.regex.is_match(remaining));

        let result = match matched {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let character = remaining.chars().next().unwrap_or('\0');
                Err(lex.fail_at(0, character))
            }
        };

        if let Err(error) = result {
            log::debug!("lexical error: {}", error);
            return (lex.tokens, Some(error));
        }
    }

    if !lex.finished {
        let span = lex.span(0);
        lex.push(MK_TOKEN!(TokenKind::EndMarker, String::from("$"), span));
    }

    log::trace!("tokenized {} tokens from {}", lex.tokens.len(), lex.file);
    (lex.tokens, None)
}

/// Tokenizes `source` into a token stream ending in `EndMarker`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    match lex(source, file) {
        (_, Some(error)) => Err(error),
        (tokens, None) => Ok(tokens),
    }
}
