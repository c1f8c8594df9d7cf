use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

lazy_static! {
    /// Binary operator precedence. Higher binds tighter.
    pub static ref BINOP_PRECEDENCE: HashMap<char, i32> = {
        let mut map = HashMap::new();
        map.insert('<', 10);
        map.insert('+', 20);
        map.insert('-', 20);
        map.insert('*', 40);
        map
    };
}

/// Precedence reported for any token that is not a binary operator.
pub const NOT_A_BINOP: i32 = -1;

pub type PrimaryHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.primary(TokenKind::Numeric, parse_number_expr);
    parser.primary(TokenKind::Identifier, parse_identifier_expr);
    parser.primary(TokenKind::Other('('), parse_paren_expr);
    parser.primary(TokenKind::If, parse_if_expr);
    parser.primary(TokenKind::For, parse_for_expr);
}

/// Looks up the precedence of `kind`, `NOT_A_BINOP` when it is not a binary operator.
pub fn binop_precedence(kind: TokenKind) -> i32 {
    match kind {
        TokenKind::Other(operator) => BINOP_PRECEDENCE
            .get(&operator)
            .copied()
            .unwrap_or(NOT_A_BINOP),
        _ => NOT_A_BINOP,
    }
}

// Lookup table inside parser struct, so it's easier
pub type PrimaryLookup = HashMap<TokenKind, PrimaryHandler>;
