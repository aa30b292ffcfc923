//! Function declaration parsing
//!
//! ```text
//! func_decl  ::= "def" IDENT "(" param_list? ")" block
//! param_list ::= IDENT ( "," IDENT )*
//! ```
//!
//! Parameters are bare names; duplicates are not rejected here.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse function declaration: def name(params) { body }
    pub(crate) fn parse_function_declaration(&mut self) -> Stmt {
        self.advance(); // 'def'

        let Some(name) = self.expect_identifier("Expected function name after 'def'") else {
            return Stmt::FunctionDeclaration {
                name: String::new(),
                params: Vec::new(),
                body: Block::empty(),
            };
        };

        if !self.expect_token(&TokenKind::LParen, "Expected '(' after function name") {
            return Stmt::FunctionDeclaration {
                name,
                params: Vec::new(),
                body: Block::empty(),
            };
        }

        let params = self.parse_parameter_list();

        if !self.expect_token(&TokenKind::RParen, "Expected ')' after parameters") {
            return Stmt::FunctionDeclaration {
                name,
                params,
                body: Block::empty(),
            };
        }

        let body = self.parse_block();

        Stmt::FunctionDeclaration { name, params, body }
    }

    /// Parse parameter list: name, name, ...
    ///
    /// A bad first name is reported and the list keeps going; every `,` is
    /// followed by an attempt to read another name.
    fn parse_parameter_list(&mut self) -> Vec<String> {
        let mut params = Vec::new();

        if self.check(&TokenKind::RParen) {
            return params;
        }

        if let Some(param) = self.expect_identifier("Expected parameter name") {
            params.push(param);
        }

        while self.match_token(&TokenKind::Comma) {
            if let Some(param) = self.expect_identifier("Expected parameter name after ','") {
                params.push(param);
            }
        }

        params
    }
}
