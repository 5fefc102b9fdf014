//! Parser state and the program entry points.
//!
//! The parser pulls tokens from a [`Lexer`] on demand and keeps exactly two
//! of them: the current token and one token of lookahead. Expressions are
//! parsed with a Pratt parser (see `expr.rs`), using the dispatch functions
//! and the precedence table in `lookups.rs`.
//!
//! Malformed input never aborts the parse. Each problem is recorded as a
//! diagnostic and the offending statement is skipped.

use tracing::debug;

use crate::{
    ast::ast::Program,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{precedence_of, Precedence},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, drawn one at a time
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics collected so far, in the order they were found
    errors: Vec<Error>,
    /// Nesting limit taken from the [`ParserConfig`]
    max_depth: Option<usize>,
    /// Current expression nesting depth
    depth: usize,
}

impl Parser {
    /// Creates a new Parser with the default configuration.
    ///
    /// Two tokens are drawn up front so both the current and the lookahead
    /// token are always present.
    pub fn new(lexer: Lexer) -> Self {
        Self::with_config(lexer, &ParserConfig::default())
    }

    pub fn with_config(mut lexer: Lexer, config: &ParserConfig) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            max_depth: config.max_depth,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Shifts the lookahead into the current slot and draws a new lookahead.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the lookahead is of the expected kind.
    ///
    /// Otherwise records an unexpected token diagnostic and returns `None`
    /// without moving, so callers can bail out with `?`.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<()> {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            Some(())
        } else {
            self.peek_error(expected_kind);
            None
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current_token.kind)
    }

    pub fn peek_error(&mut self, expected: TokenKind) {
        let position = self.peek_token.span.start;
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek_token.kind,
            },
            position,
        );
    }

    pub fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        let position = self.get_position();
        self.push_error(ErrorImpl::NoPrefixParseFn { kind }, position);
    }

    pub fn push_error(&mut self, error: ErrorImpl, position: Position) {
        debug!(offset = position.0, "{}", error);
        self.errors.push(Error::new(error, position));
    }

    /// Enters one level of expression or block nesting.
    ///
    /// Returns false, after recording a diagnostic, when the configured
    /// limit would be exceeded.
    pub fn enter_nesting(&mut self) -> bool {
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                let position = self.get_position();
                self.push_error(ErrorImpl::NestingTooDeep { limit }, position);
                return false;
            }
        }

        self.depth += 1;
        true
    }

    pub fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// diagnostics are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            statements = statements.len(),
            diagnostics = self.errors.len(),
            "parsed program"
        );

        Program {
            statements,
            span: Span {
                start: Position(0),
                end: self.current_token.span.end,
            },
        }
    }
}

/// Parses source text into a program.
///
/// # Returns
///
/// A tuple containing:
/// - The best-effort program
/// - Every diagnostic found, in source order of discovery
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    parse_with_config(source, &ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: &ParserConfig) -> (Program, Vec<Error>) {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
