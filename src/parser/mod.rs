//! minipy source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), split across `statements`,
//!   `declarations` and `expressions`
//! - [`ast`]: AST node definitions
//! - [`diagnostic`]: recoverable syntax fault reports
//!
//! # Language
//!
//! - Statements: `var` declarations, assignment, `if`/`else`, `while`,
//!   `def` function declarations, `return`, expression statements
//! - Expressions: int/float/string literals, identifiers, calls, `+ - * /`,
//!   comparisons, `&&`, `||`, prefix `+`/`-`
//! - `#` line comments
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level,
//! with panic-mode error recovery. No external parser generator dependencies.

pub mod ast;
pub mod diagnostic;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;

pub use parse::{parse, ParseOutcome, Parser};
