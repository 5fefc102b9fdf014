use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{BooleanLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{infix_handler, prefix_handler, Precedence},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// On entry the current token starts the expression; on success the current
/// token is its last token. `None` means a diagnostic has been recorded.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    if !parser.enter_nesting() {
        return None;
    }

    let expr = parse_expr_inner(parser, precedence);
    parser.exit_nesting();
    expr
}

fn parse_expr_inner(parser: &mut Parser, precedence: Precedence) -> Option<Expr> {
    // First parse the prefix position
    let token_kind = parser.current_token_kind();
    let Some(prefix) = prefix_handler(token_kind) else {
        parser.no_prefix_parse_fn_error(token_kind);
        return None;
    };

    let mut left = prefix(parser)?;

    // Keep folding while the next operator binds tighter than our floor
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_handler(parser.peek_token().kind) else {
            return Some(left);
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    Some(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let position = parser.get_position();
            parser.push_error(ErrorImpl::IntegerParse { literal: token.literal }, position);
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expr> {
    let value = parser.current_token_is(TokenKind::True);

    Some(Expr::Boolean(BooleanLiteral {
        token: parser.current_token().clone(),
        value,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: right.get_span().end,
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Shared by every binary operator.
///
/// The right operand is parsed with the operator's own precedence as the
/// floor, which makes chains of equal precedence left-associative.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.next_token();

    let right = parse_expr(parser, precedence)?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.next_token();

    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Some(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    // if (x < y) { x } else { y }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.next_token();

    let condition = parse_expr(parser, Precedence::Lowest)?;

    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    let end = alternative.as_ref().unwrap_or(&consequence).span.end;

    Some(Expr::If(IfExpr {
        span: Span {
            start: token.span.start,
            end,
        },
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}
