use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::parse_expr,
    lookups::{stmt_handler, Precedence},
    parser::Parser,
};

/// Parses one statement starting at the current token.
///
/// Whether it succeeds or not, the current token is left at or past the
/// statement's last token so the caller can always advance.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(handler) = stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.next_token();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Let(LetStmt {
        span: Span {
            start: start_token.span.start,
            end: parser.current_token().span.end,
        },
        token: start_token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    let ends_here = parser.peek_token().is_one_of_many(&[
        TokenKind::Semicolon,
        TokenKind::CloseCurly,
        TokenKind::EOF,
    ]);

    let value = if ends_here {
        None
    } else {
        parser.next_token();
        Some(parse_expr(parser, Precedence::Lowest)?)
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Return(ReturnStmt {
        span: Span {
            start: start_token.span.start,
            end: parser.current_token().span.end,
        },
        token: start_token,
        value,
    }))
}

/// A bare expression. The trailing `;` is optional.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;
    let span = Span {
        start: start_token.span.start,
        end: expression.get_span().end,
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Stmt::Expression(ExpressionStmt {
        token: start_token,
        expression,
        span,
    }))
}

/// Parses `{ ... }` with the current token on the opening brace.
///
/// Reaching end of input before the closing brace is a diagnostic and
/// yields no block. Each block counts as one level of nesting.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStmt> {
    if !parser.enter_nesting() {
        return None;
    }

    let block = parse_block_body(parser);
    parser.exit_nesting();
    block
}

fn parse_block_body(parser: &mut Parser) -> Option<BlockStmt> {
    let start_token = parser.current_token().clone();
    parser.next_token();

    let mut body = vec![];

    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        if let Some(stmt) = parse_stmt(parser) {
            body.push(stmt);
        }
        parser.next_token();
    }

    if parser.current_token_is(TokenKind::EOF) {
        let position = parser.get_position();
        parser.push_error(ErrorImpl::UnterminatedBlock, position);
        return None;
    }

    Some(BlockStmt {
        span: Span {
            start: start_token.span.start,
            end: parser.current_token().span.end,
        },
        token: start_token,
        body,
    })
}
