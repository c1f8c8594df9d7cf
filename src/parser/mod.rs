//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that turns the lexer's token stream
//! into AST nodes, one top-level construct at a time. It handles:
//!
//! - Function definitions, extern declarations and bare top-level expressions
//! - Primary expressions (numbers, variables, calls, grouping, `if`, `for`)
//! - Binary expressions through precedence climbing
//! - Error reporting without partial results
//!
//! Primary expressions are dispatched through a lookup table of handlers keyed
//! by token kind, binary operators through a fixed precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod toplevel;
