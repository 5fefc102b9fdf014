use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Turns the text matched by a pattern into a token, or `None` for skipped input.
pub type PatternHandler = fn(&Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

fn pattern(source: &str, handler: PatternHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(source).expect("token patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Order matters: two character operators must come before their one character prefix.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \\t\\n\\r]+", skip_handler),
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("^[0-9]+", number_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals)),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals)),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign)),
        pattern("^!", MK_DEFAULT_HANDLER!(TokenKind::Bang)),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star)),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash)),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
    ];
}

/// Pull-based tokenizer over a single source string.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. Once the end
/// of input is reached every further call returns another EOF token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            finished: false,
        }
    }

    /// Span of `matched` if it starts at the current position.
    pub fn span_of(&self, matched: &str) -> Span {
        Span {
            start: Position(self.pos),
            end: Position(self.pos + matched.len()),
        }
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(""));
            }

            let remaining = self.remainder();
            let found = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern, m.as_str())));

            let Some((pattern, matched)) = found else {
                return self.illegal_token();
            };

            let length = matched.len();
            let token = (pattern.handler)(self, matched);
            self.pos += length;

            if let Some(token) = token {
                trace!(kind = %token.kind, literal = %token.literal, "lexed token");
                return token;
            }
        }
    }

    fn illegal_token(&mut self) -> Token {
        // at_eof() was checked by the caller, so there is at least one char left
        let ch = self.remainder().chars().next().unwrap_or('\0');
        let literal = ch.to_string();

        debug!(offset = self.pos, character = %literal, "illegal character in source");

        let span = self.span_of(&literal);
        self.pos += literal.len();

        MK_TOKEN!(TokenKind::Illegal, literal, span)
    }
}

/// Yields every token up to and including a single EOF.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn skip_handler(_lexer: &Lexer, _matched: &str) -> Option<Token> {
    None
}

fn number_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Int, String::from(matched), lexer.span_of(matched)))
}

fn symbol_handler(lexer: &Lexer, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(
        lookup_identifier(matched),
        String::from(matched),
        lexer.span_of(matched)
    ))
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
