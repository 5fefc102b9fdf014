//! Integration tests for the whole front end.
//!
//! These tests drive source text through tokenization and parsing using the
//! public API only, and check the canonical rendering round trip.

use monkey_front::{
    ast::ast::{Expr, Node, Stmt},
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
    parse, parse_with_config, render_diagnostic, Parser, ParserConfig,
};

/// render -> parse -> render must be a fixed point.
fn assert_fixed_point(source: &str) {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "errors in {:?}: {:?}", source, errors);

    let rendered = program.to_string();
    let (reparsed, errors) = parse(&rendered);
    assert!(errors.is_empty(), "errors re-parsing {:?}: {:?}", rendered, errors);

    assert_eq!(reparsed.to_string(), rendered, "source: {:?}", source);
    assert_eq!(reparsed.len(), program.len());
}

#[test]
fn test_render_parse_fixed_point() {
    let sources = [
        "let x = 5;",
        "return;",
        "return -a * b;",
        "a + b * c + d",
        "(a + b) * c",
        "a; b; c",
        "!-a == -!b",
        "if (x < y) { x } else { y }",
        "if (x) { } else { if (y) { return 1; } }",
        "let max = if (a > b) { a } else { b }; max",
        "5 > 4 == 3 < 4; 1 + (2 + 3) + 4",
        "if (true) { let a = 1; a + 2; -a }",
        "007",
    ];

    for source in sources {
        assert_fixed_point(source);
    }
}

#[test]
fn test_full_program() {
    let source = "
        let five = 5;
        let ten = 10;
        let bigger = if (five > ten) { five } else { ten };
        if (bigger == ten) {
            return true;
        }
        !(five != ten) * -1
    ";

    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.len(), 5);
    assert_eq!(program.token_literal(), "let");
    assert_eq!(program.iter().filter(|stmt| matches!(stmt, Stmt::Let(_))).count(), 3);

    assert!(matches!(&program.statements[0], Stmt::Let(stmt) if stmt.name.value == "five"));
    assert!(matches!(&program.statements[2], Stmt::Let(stmt) if matches!(stmt.value, Expr::If(_))));
    assert_eq!(program.statements[4].to_string(), "((!(five != ten)) * (-1))");
}

#[test]
fn test_parser_driven_by_lexer() {
    let mut parser = Parser::new(Lexer::new("let a = 1; let = 2;"));

    assert_eq!(parser.current_token().kind, TokenKind::Let);
    assert_eq!(parser.peek_token().kind, TokenKind::Identifier);

    let program = parser.parse_program();

    assert_eq!(program.len(), 2);
    assert_eq!(parser.errors().len(), 2);
    assert_eq!(
        parser.error_messages(),
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found"
        ]
    );
}

#[test]
fn test_independent_parses_do_not_share_diagnostics() {
    let (_, first) = parse("let = ;");
    let (_, second) = parse("let x = 1;");

    assert!(!first.is_empty());
    assert!(second.is_empty());
}

#[test]
fn test_every_error_kind_reported_in_one_pass() {
    let source = "let 1; 99999999999999999999; @; if (x) { y";
    let (_, errors) = parse(source);

    let kinds: Vec<&ErrorImpl> = errors.iter().map(|error| error.get_kind()).collect();

    assert!(kinds.iter().any(|kind| matches!(kind, ErrorImpl::UnexpectedToken { .. })));
    assert!(kinds.iter().any(|kind| matches!(kind, ErrorImpl::IntegerParse { .. })));
    assert!(kinds.iter().any(|kind| matches!(
        kind,
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal
        }
    )));
    assert!(kinds.iter().any(|kind| matches!(kind, ErrorImpl::UnterminatedBlock)));
}

#[test]
fn test_rendered_diagnostic_points_at_token() {
    let source = "let a = 1;\nlet b = (a + 2;";
    let config = ParserConfig::new().with_source_name("main.mk");

    let (_, errors) = parse_with_config(source, &config);
    let rendered = render_diagnostic(source, &config.source_name, &errors[0]);

    assert_eq!(
        rendered,
        "Error: UnexpectedToken (is a closing `)` missing?)\n\
         -> main.mk\n  \
         |\n\
         2 | let b = (a + 2;\n  \
         | --------------^"
    );
}

#[test]
fn test_parser_takes_nesting_limit_from_config() {
    let config = ParserConfig::new().with_source_name("main.mk").with_max_depth(1);
    let mut parser = Parser::with_config(Lexer::new("1; (2)"), &config);

    let program = parser.parse_program();

    // `(2)` fails at the group; recovery then picks up the bare `2`
    assert_eq!(program.to_string(), "1\n2");
    assert_eq!(parser.errors()[0].get_kind(), &ErrorImpl::NestingTooDeep { limit: 1 });
    assert_eq!(config.source_name, "main.mk");
}
