//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from its own lexer with
//! a single token of lookahead, dispatches primary expressions through a lookup table, and folds
//! binary operators by precedence climbing.
//!
//! Failures are reported as diagnostics and a missing result. The parser never skips tokens to
//! recover on its own; callers use [`Parser::advance`] for that, as [`parse`] does.

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::{Function, Prototype, TopLevel},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{create_token_lookups, PrimaryHandler, PrimaryLookup},
    toplevel,
};

/// One parse session: a private lexer, the current token, and the diagnostics raised so far.
pub struct Parser {
    /// Token source, owned by this session only
    lexer: Lexer,
    /// The single token of lookahead
    current: Token,
    /// Lookup table for primary expression handlers
    primary_lookup: PrimaryLookup,
    /// One entry per failed construct
    diagnostics: Vec<Error>,
}

impl Parser {
    /// Creates a parser over `source` and primes the first token.
    ///
    /// # Arguments
    ///
    /// * `source` - Text to parse
    /// * `file` - Name used in positions, `shell` when absent
    pub fn new(source: String, file: Option<String>) -> Self {
        let mut lexer = Lexer::new(source, file);
        let current = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            primary_lookup: HashMap::new(),
            diagnostics: vec![],
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token from the lexer and returns the one it replaces.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Text of the current identifier token, read from the lexer's payload slot.
    pub fn identifier_value(&self) -> String {
        self.lexer.identifier_value().to_string()
    }

    /// Value of the current numeric token, read from the lexer's payload slot.
    pub fn numeric_value(&self) -> f64 {
        self.lexer.numeric_value()
    }

    /// Consumes a token of `expected_kind`, or fails describing what was missing.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `context` - Where in the grammar the token was expected, e.g. "after if condition"
    pub fn expect(&mut self, expected_kind: TokenKind, context: &str) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.expected_error(format!("'{}'", expected_kind), context));
        }

        Ok(self.advance())
    }

    /// Consumes an identifier and returns its text.
    pub fn expect_identifier(&mut self, context: &str) -> Result<String, Error> {
        if self.current.kind != TokenKind::Identifier {
            return Err(self.expected_error(String::from("identifier"), context));
        }

        let name = self.identifier_value();
        self.advance();
        Ok(name)
    }

    fn expected_error(&self, expected: String, context: &str) -> Error {
        Error::new(
            ErrorImpl::ExpectedToken {
                expected,
                context: String::from(context),
                token: self.current.value.clone(),
            },
            self.get_position(),
        )
    }

    /// Returns a reference to the primary expression lookup table.
    pub fn get_primary_lookup(&self) -> &PrimaryLookup {
        &self.primary_lookup
    }

    /// Registers a primary expression handler for a token.
    pub fn primary(&mut self, kind: TokenKind, handler: PrimaryHandler) {
        self.primary_lookup.insert(kind, handler);
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        mem::take(&mut self.diagnostics)
    }

    /// Parses `'def' prototype expression`.
    pub fn parse_definition(&mut self) -> Option<Function> {
        let result = toplevel::parse_definition(self);
        self.report(result)
    }

    /// Parses `'extern' prototype`.
    pub fn parse_extern(&mut self) -> Option<Prototype> {
        let result = toplevel::parse_extern(self);
        self.report(result)
    }

    /// Parses a bare expression into an anonymous function.
    pub fn parse_top_level_expr(&mut self) -> Option<Function> {
        let result = toplevel::parse_top_level_expr(self);
        self.report(result)
    }

    /// Parses whichever construct the current token starts.
    pub fn parse_top_level(&mut self) -> Option<TopLevel> {
        let result = toplevel::parse_top_level(self);
        self.report(result)
    }

    fn report<T>(&mut self, result: Result<T, Error>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.diagnostics.push(error);
                None
            }
        }
    }
}

/// Yields one result per top-level construct until the end of input.
///
/// Top-level `;` are skipped. After a failed construct one token is skipped before parsing
/// resumes, so iteration always makes progress.
impl Iterator for Parser {
    type Item = Result<TopLevel, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return None,
                TokenKind::Other(';') => {
                    self.advance();
                }
                _ => break,
            }
        }

        match toplevel::parse_top_level(self) {
            Ok(item) => Some(Ok(item)),
            Err(error) => {
                self.diagnostics.push(error.clone());
                self.advance();
                Some(Err(error))
            }
        }
    }
}

/// Parses a whole source.
///
/// # Returns
///
/// A tuple containing:
/// - Every construct that parsed, in source order
/// - One diagnostic per construct that failed
pub fn parse(source: String, file: Option<String>) -> (Vec<TopLevel>, Vec<Error>) {
    let mut parser = Parser::new(source, file);

    let items = parser.by_ref().filter_map(Result::ok).collect();

    (items, parser.take_diagnostics())
}
