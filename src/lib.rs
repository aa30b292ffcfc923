//! # Introduction
//!
//! minipy turns source text of a small imperative scripting language into a
//! diagnosable abstract syntax tree. A single pass reports every independent
//! syntax fault it finds instead of stopping at the first one, and the tree it
//! returns is always complete, with placeholders where input was malformed.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST + Diagnostics → Visitors
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the AST, recording
//!    [`parser::diagnostic::Diagnostic`]s with panic-mode recovery.
//! 2. [`visitor`]: the [`visitor::Visitor`] contract plus the two shipped
//!    traversals, [`visitor::AstPrinter`] and [`visitor::NodeStats`].
//! 3. [`ui`]: ratatui-based explorer for source, tree and faults; not part of
//!    the stable library API.
//!
//! ## Language
//!
//! Statements: `var`, assignment, `if/else`, `while`, `def`, `return`,
//! expression statements. Expressions: integer, float and string literals,
//! identifiers, calls, arithmetic, comparisons, `&&`, `||` and prefix `+`/`-`.
//!
//! ```
//! let outcome = minipy::parser::parse("var x = 2 + 3 * 4;").unwrap();
//! assert!(!outcome.had_errors());
//! print!("{}", minipy::visitor::print_program(&outcome.program));
//! ```

pub mod parser;
pub mod ui;
pub mod visitor;
