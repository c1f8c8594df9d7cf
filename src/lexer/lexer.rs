use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap();
    static ref NUMERIC_RUN: Regex = Regex::new("^[0-9.]+").unwrap();
    // Same class as C `isspace`, vertical tab included.
    static ref WHITESPACE_RUN: Regex = Regex::new("^[ \\t\\n\\x0B\\x0C\\r]+").unwrap();
}

/// Pull-based lexer over one source text.
///
/// Each call to [`Lexer::next_token`] consumes just enough characters to classify one token.
/// `last_char` is the one-character lookahead carried between calls: it is the first character
/// not yet belonging to any token, `None` once the source is exhausted.
///
/// The payloads of identifier and numeric tokens are kept in a single slot each and are
/// overwritten by the next token of the same class.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    last_char: Option<char>,
    identifier_value: String,
    numeric_value: f64,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let last_char = source.chars().next();

        Lexer {
            source,
            pos: 0,
            last_char,
            identifier_value: String::new(),
            numeric_value: 0.0,
            file: file_name,
        }
    }

    /// Consumes characters up to the end of the next token and returns it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        let Some(current) = self.last_char else {
            return MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                MK_SPAN!(start, start, self.file)
            );
        };

        if current.is_ascii_alphabetic() {
            let value = self.consume_run(&IDENTIFIER_RUN);
            let kind = RESERVED_LOOKUP
                .get(value.as_str())
                .copied()
                .unwrap_or(TokenKind::Identifier);
            self.identifier_value = value.clone();

            return MK_TOKEN!(kind, value, MK_SPAN!(start, self.pos, self.file));
        }

        if current.is_ascii_digit() || current == '.' {
            let value = self.consume_run(&NUMERIC_RUN);
            self.numeric_value = parse_numeric_run(&value);

            return MK_TOKEN!(
                TokenKind::Numeric,
                value,
                MK_SPAN!(start, self.pos, self.file)
            );
        }

        self.advance_n(current.len_utf8());
        MK_TOKEN!(
            TokenKind::Other(current),
            current.to_string(),
            MK_SPAN!(start, self.pos, self.file)
        )
    }

    /// Text of the most recent identifier or keyword.
    pub fn identifier_value(&self) -> &str {
        &self.identifier_value
    }

    /// Value of the most recent numeric token.
    pub fn numeric_value(&self) -> f64 {
        self.numeric_value
    }

    pub fn last_char(&self) -> Option<char> {
        self.last_char
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.last_char.is_none()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.last_char = self.remainder().chars().next();
    }

    fn skip_whitespace(&mut self) {
        let skipped = WHITESPACE_RUN
            .find(self.remainder())
            .map(|run| run.end())
            .unwrap_or(0);
        self.advance_n(skipped);
    }

    fn consume_run(&mut self, pattern: &Regex) -> String {
        let len = pattern
            .find(self.remainder())
            .map(|run| run.end())
            .unwrap_or(0);
        let run = self.remainder()[..len].to_string();
        self.advance_n(len);
        run
    }
}

/// Converts a run of digits and dots into a value, `strtod` style.
///
/// The run is not validated: only the prefix before a second `.` is converted, and a prefix
/// without digits converts to `0.0`. `1.2.3` therefore yields `1.2`.
pub fn parse_numeric_run(run: &str) -> f64 {
    let prefix = match run.match_indices('.').nth(1) {
        Some((second_dot, _)) => &run[..second_dot],
        None => run,
    };

    prefix.parse().unwrap_or(0.0)
}

/// Lexes a whole source, up to and including the `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            break;
        }
    }

    tokens
}
