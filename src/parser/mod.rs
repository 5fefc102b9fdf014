//! Parser module for building the Abstract Syntax Tree.
//!
//! This module contains the parser that transforms the token stream into
//! a [`Program`](crate::ast::ast::Program). It uses a Pratt parser for
//! expressions with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, `if`)
//! - Error recovery and reporting
//!
//! Prefix and infix behavior is dispatched on token kind, with a static
//! precedence table deciding how far each operator binds.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
