//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! token navigation helpers, fault reporting and panic-mode synchronization,
//! and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, error recovery, coordination
//! - `statements`: program, block and statement parsing
//! - `declarations`: function declarations and parameter lists
//! - `expressions`: expressions, one method per precedence level
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Error recovery
//!
//! Syntax faults never abort the parse. Each fault is recorded as a
//! [`Diagnostic`], after which tokens are discarded until one of
//! `; } if while def return var` (a trailing `;` is consumed too). Parsing
//! methods therefore always return a node, substituting placeholders for the
//! parts they could not read. Only lexical faults are fatal, and those surface
//! from [`Parser::new`] before any parsing happens.

use crate::parser::ast::*;
use crate::parser::diagnostic::Diagnostic;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};

/// Result of a parse: a best-effort tree plus every syntax fault found.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn had_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Recursive descent parser for minipy
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    source: Option<String>,
    diagnostics: Vec<Diagnostic>,
    panic_mode: bool,
}

impl Parser {
    /// Tokenize `source` and build a parser over it. Diagnostics will quote
    /// the offending source line.
    pub fn new(source: &str) -> Result<Self, LexError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens).with_source(source))
    }

    /// Build a parser over an existing token sequence. A missing trailing
    /// `Eof` is appended.
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let location = tokens
                .last()
                .map(|t| t.location)
                .unwrap_or(SourceLocation::new(1, 1));
            tokens.push(Token::new(TokenKind::Eof, location));
        }

        Self {
            tokens,
            position: 0,
            source: None,
            diagnostics: Vec::new(),
            panic_mode: false,
        }
    }

    /// Attach the text the tokens came from, so diagnostics can quote it.
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Parse the whole token sequence. Always yields a complete `Program`.
    pub fn parse(mut self) -> ParseOutcome {
        let program = self.parse_program();
        ParseOutcome {
            program,
            diagnostics: self.diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn had_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    // ===== Error recovery =====

    /// Report a syntax fault at the current token and resynchronize.
    ///
    /// Once a fault is reported, later faults are dropped until the next
    /// statement begins or an enclosing block closes: they are cascades of
    /// the first one.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        if !self.panic_mode {
            self.panic_mode = true;

            let location = self.current_location();
            let mut diagnostic = Diagnostic::new(message, location);
            if let Some(line) = self.source_line(location.line) {
                diagnostic = diagnostic.with_source_line(line);
            }
            self.diagnostics.push(diagnostic);
        }

        self.synchronize();
    }

    /// Leave panic mode. Called at the start of every statement and after a
    /// block's closing `}`.
    pub(crate) fn clear_panic_mode(&mut self) {
        self.panic_mode = false;
    }

    /// Discard tokens until a statement boundary; consume it if it is `;`.
    pub(crate) fn synchronize(&mut self) {
        while !self.is_at_end() && !is_sync_token(self.peek_kind()) {
            self.advance();
        }

        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
    }

    fn source_line(&self, line: usize) -> Option<&str> {
        let source = self.source.as_deref()?;
        source.lines().nth(line.checked_sub(1)?)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind().same_kind(kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Kind of the token `n` places past the current one; `Eof` beyond the end.
    pub(crate) fn peek_ahead(&self, n: usize) -> &TokenKind {
        let index = (self.position + n).min(self.tokens.len() - 1);
        &self.tokens[index].kind
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    /// Consume a token of the given kind, or report `message` and recover.
    pub(crate) fn expect_token(&mut self, kind: &TokenKind, message: &str) -> bool {
        if self.match_token(kind) {
            true
        } else {
            let found = self.peek_kind().to_string();
            self.error(format!("{}, found {}", message, found));
            false
        }
    }

    pub(crate) fn expect_identifier(&mut self, message: &str) -> Option<String> {
        if let TokenKind::Ident(name) = self.peek_kind() {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            let found = self.peek_kind().to_string();
            self.error(format!("{}, found {}", message, found));
            None
        }
    }
}

fn is_sync_token(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Semicolon
            | TokenKind::RBrace
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Def
            | TokenKind::Return
            | TokenKind::Var
    )
}

/// Tokenize and parse `source` in one step.
pub fn parse(source: &str) -> Result<ParseOutcome, LexError> {
    Ok(Parser::new(source)?.parse())
}
