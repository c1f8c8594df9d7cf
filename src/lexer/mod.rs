//! Lexical analysis module.
//!
//! This module contains the lexer that converts Kaleidoscope source text
//! into tokens, one at a time, as the parser asks for them. It handles:
//!
//! - Recognition of keywords, identifiers, numeric literals and single characters
//! - The one-character lookahead needed to find the end of a run
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
