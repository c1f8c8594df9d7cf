use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::binop_precedence, parser::Parser};

/// expression := primary (binop primary)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary_expr(parser)?;

    parse_binary_rhs(parser, 0, lhs)
}

/// Precedence climbing over `(binop primary)*`.
///
/// Folds operators binding at least as tightly as `min_precedence` into `lhs`. A right operand is
/// only extended when the operator after it binds strictly tighter, which keeps operators of
/// equal precedence left-associative.
pub fn parse_binary_rhs(parser: &mut Parser, min_precedence: i32, mut lhs: Expr) -> Result<Expr, Error> {
    loop {
        let precedence = binop_precedence(parser.current_token_kind());
        if precedence < min_precedence {
            return Ok(lhs);
        }

        let operator = match parser.advance().kind {
            TokenKind::Other(operator) => operator,
            _ => return Ok(lhs),
        };

        let mut rhs = parse_primary_expr(parser)?;

        if precedence < binop_precedence(parser.current_token_kind()) {
            rhs = parse_binary_rhs(parser, precedence + 1, rhs)?;
        }

        lhs = Expr::binary(operator, lhs, rhs);
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    let handler = parser.get_primary_lookup().get(&token_kind).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = parser.numeric_value();
    parser.advance();

    Ok(Expr::Number(value))
}

/// identifier [ '(' (expression (',' expression)*)? ')' ]
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.identifier_value();
    parser.advance();

    if parser.current_token_kind() != TokenKind::Other('(') {
        return Ok(Expr::Variable(name));
    }

    parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::Other(')') {
        loop {
            arguments.push(parse_expr(parser)?);

            match parser.current_token_kind() {
                TokenKind::Other(')') => break,
                TokenKind::Other(',') => {
                    parser.advance();
                }
                _ => {
                    return Err(Error::new(
                        ErrorImpl::ArgumentListSeparator {
                            token: parser.current_token().value.clone(),
                        },
                        parser.get_position(),
                    ))
                }
            }
        }
    }

    parser.advance();

    Ok(Expr::Call {
        callee: name,
        arguments,
    })
}

pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::Other(')'), "after expression")?;

    Ok(expr)
}

/// 'if' expression 'then' expression 'else' expression
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Then, "after if condition")?;

    let then_branch = parse_expr(parser)?;
    parser.expect(TokenKind::Else, "after then branch")?;

    let else_branch = parse_expr(parser)?;

    Ok(Expr::If {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

/// 'for' identifier '=' expression ',' expression [',' expression] 'in' expression
pub fn parse_for_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();

    let variable = parser.expect_identifier("after 'for'")?;
    parser.expect(TokenKind::Other('='), "after for loop variable")?;

    let start = parse_expr(parser)?;
    parser.expect(TokenKind::Other(','), "after for start value")?;

    let end = parse_expr(parser)?;

    let step = if parser.current_token_kind() == TokenKind::Other(',') {
        parser.advance();
        Some(Box::new(parse_expr(parser)?))
    } else {
        None
    };

    parser.expect(TokenKind::In, "after for loop header")?;

    let body = parse_expr(parser)?;

    Ok(Expr::For {
        variable,
        start: Box::new(start),
        end: Box::new(end),
        step,
        body: Box::new(body),
    })
}
