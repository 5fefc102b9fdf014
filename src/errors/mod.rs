//! Diagnostic types for the front end.
//!
//! Nothing here is fatal: the lexer turns bad input into illegal tokens and
//! the parser records every problem as an [`errors::Error`] and keeps going.
//! This module defines:
//!
//! - The diagnostic structure with its source position
//! - One variant per kind of malformed input
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
