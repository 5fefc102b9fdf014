//! Unit tests for diagnostics.
//!
//! This module contains tests for error names, messages and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::Semicolon,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "expected next token to be ), got ; instead");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        Position(0),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ; found");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParse {
            literal: "92233720368547758070".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParse");
    assert_eq!(
        error.to_string(),
        "could not parse \"92233720368547758070\" as integer"
    );
}

#[test]
fn test_unterminated_block_message() {
    let error = Error::new(ErrorImpl::UnterminatedBlock, Position(0));

    assert_eq!(error.get_error_name(), "UnterminatedBlock");
    assert_eq!(
        error.to_string(),
        "unterminated block: expected }, got EOF instead"
    );
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 32 }, Position(0));

    assert_eq!(error.to_string(), "expression nesting exceeds limit of 32");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tips() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(0),
    );
    assert_eq!(
        error.get_tip().to_string(),
        "this character is not part of the language"
    );

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::OpenCurly,
            found: TokenKind::Identifier,
        },
        Position(0),
    );
    assert_eq!(error.get_tip().to_string(), "");
}
