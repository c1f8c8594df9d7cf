//! Error types and error handling for the parser.
//!
//! This module defines the syntax errors raised while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each violated expectation
//! - Error names and helpful suggestions for rendering

pub mod errors;
