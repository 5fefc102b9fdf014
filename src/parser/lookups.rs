use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expr>;
pub type InfixHandler = fn(&mut Parser, Expr) -> Option<Expr>;

lazy_static! {
    pub static ref PRECEDENCES: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equals, Precedence::Equals);
        map.insert(TokenKind::NotEquals, Precedence::Equals);
        map.insert(TokenKind::Less, Precedence::LessGreater);
        map.insert(TokenKind::Greater, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Star, Precedence::Product);
        map.insert(TokenKind::Slash, Precedence::Product);
        map
    };
}

/// Tokens without an entry bind at `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCES.get(&kind).copied().unwrap_or(Precedence::Lowest)
}

pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Let => parse_let_stmt,
        TokenKind::Return => parse_return_stmt,
        _ => return None,
    };
    Some(handler)
}

pub fn prefix_handler(kind: TokenKind) -> Option<PrefixHandler> {
    let handler: PrefixHandler = match kind {
        TokenKind::Identifier => parse_identifier,
        TokenKind::Int => parse_integer_literal,
        TokenKind::True | TokenKind::False => parse_boolean,
        TokenKind::Bang | TokenKind::Minus => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        _ => return None,
    };
    Some(handler)
}

pub fn infix_handler(kind: TokenKind) -> Option<InfixHandler> {
    let handler: InfixHandler = match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Star
        | TokenKind::Slash => parse_infix_expr,
        _ => return None,
    };
    Some(handler)
}
