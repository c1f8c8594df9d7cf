use crate::{
    ast::ast::{Function, Prototype, TopLevel},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// prototype := identifier '(' identifier* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser.expect_identifier("as function name in prototype")?;
    parser.expect(TokenKind::Other('('), "after function name in prototype")?;

    let mut params = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        params.push(parser.identifier_value());
        parser.advance();
    }

    parser.expect(TokenKind::Other(')'), "at the end of prototype's parameter list")?;

    Ok(Prototype::new(name, params))
}

/// definition := 'def' prototype expression
pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.expect(TokenKind::Def, "at the beginning of function definition")?;

    let prototype = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(Function::new(prototype, body))
}

/// external := 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.expect(TokenKind::Extern, "at the beginning of extern prototype")?;

    parse_prototype(parser)
}

/// Wraps a bare expression into an anonymous, parameterless function.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function::new(Prototype::anonymous(), body))
}

pub fn parse_top_level(parser: &mut Parser) -> Result<TopLevel, Error> {
    match parser.current_token_kind() {
        TokenKind::Def => parse_definition(parser).map(TopLevel::Definition),
        TokenKind::Extern => parse_extern(parser).map(TopLevel::Extern),
        _ => parse_top_level_expr(parser).map(TopLevel::Expression),
    }
}
