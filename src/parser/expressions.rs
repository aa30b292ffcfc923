//! Expression parsing implementation
//!
//! One method per precedence level, lowest first. Every binary level is left
//! associative.
//!
//! ```text
//! logical_or     ::= logical_and ( "||" logical_and )*
//! logical_and    ::= comparison ( "&&" comparison )*
//! comparison     ::= additive ( ( ">" | "<" | ">=" | "<=" | "==" | "!=" ) additive )*
//! additive       ::= multiplicative ( ( "+" | "-" ) multiplicative )*
//! multiplicative ::= primary ( ( "*" | "/" ) primary )*
//! primary        ::= INT | FLOAT | STRING | IDENT | call
//!                  | "(" logical_or ")" | ( "+" | "-" ) primary
//! call           ::= IDENT "(" ( logical_or ( "," logical_or )* )? ")"
//! ```
//!
//! Comparisons do not chain: `a < b < c` is `(a < b) < c`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Expr {
        self.parse_logical_or()
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Expr {
        let mut left = self.parse_logical_and();

        while self.match_token(&TokenKind::OrOr) {
            let right = self.parse_logical_and();
            left = Expr::binary(left, BinOp::Or, right);
        }

        left
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Expr {
        let mut left = self.parse_comparison();

        while self.match_token(&TokenKind::AndAnd) {
            let right = self.parse_comparison();
            left = Expr::binary(left, BinOp::And, right);
        }

        left
    }

    /// Parse comparison (> < >= <= == !=)
    fn parse_comparison(&mut self) -> Expr {
        let mut left = self.parse_additive();

        loop {
            let op = match self.peek_kind() {
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Ge => BinOp::Ge,
                TokenKind::Le => BinOp::Le,
                TokenKind::EqEq => BinOp::Eq,
                TokenKind::NotEq => BinOp::Ne,
                _ => break,
            };
            self.advance();

            let right = self.parse_additive();
            left = Expr::binary(left, op, right);
        }

        left
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Expr {
        let mut left = self.parse_multiplicative();

        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();

            let right = self.parse_multiplicative();
            left = Expr::binary(left, op, right);
        }

        left
    }

    /// Parse multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Expr {
        let mut left = self.parse_primary();

        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();

            let right = self.parse_primary();
            left = Expr::binary(left, op, right);
        }

        left
    }

    /// Parse primary (literals, identifiers, calls, parentheses, prefix signs)
    fn parse_primary(&mut self) -> Expr {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::IntLiteral(n) => {
                self.advance();
                Expr::Literal(Literal::Integer(n))
            }
            TokenKind::FloatLiteral(x) => {
                self.advance();
                Expr::Literal(Literal::Float(x))
            }
            TokenKind::StringLiteral(s) => {
                self.advance();
                Expr::Literal(Literal::String(s))
            }
            TokenKind::Ident(name) => {
                if matches!(self.peek_ahead(1), TokenKind::LParen) {
                    self.parse_call_expression(name)
                } else {
                    self.advance();
                    Expr::Identifier(name)
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression();
                self.expect_token(&TokenKind::RParen, "Expected ')' after expression");
                expr
            }
            TokenKind::Plus | TokenKind::Minus => {
                let op = if matches!(token.kind, TokenKind::Plus) {
                    UnOp::Plus
                } else {
                    UnOp::Neg
                };
                self.advance();
                Expr::unary(op, self.parse_primary())
            }
            other => {
                let start = self.position;
                self.error(format!("Unexpected token in expression: {}", other));

                // The offending token goes even when it is a statement boundary
                if self.position == start {
                    self.advance();
                }

                Expr::placeholder()
            }
        }
    }

    /// Parse call expression: name(arg, arg, ...)
    fn parse_call_expression(&mut self, callee: String) -> Expr {
        self.advance(); // name
        self.advance(); // '('

        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression());

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect_token(&TokenKind::RParen, "Expected ')' after arguments");

        Expr::Call { callee, args }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::parse;

    /// Parse `source` as a single expression statement.
    fn expr(source: &str) -> Expr {
        let outcome = parse(&format!("{};", source)).unwrap();
        assert!(
            !outcome.had_errors(),
            "unexpected faults: {:?}",
            outcome.diagnostics
        );
        match outcome.program.statements.into_iter().next() {
            Some(Stmt::Expression(e)) => e,
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            expr("2 + 3 * 4"),
            Expr::binary(
                Expr::int(2),
                BinOp::Add,
                Expr::binary(Expr::int(3), BinOp::Mul, Expr::int(4)),
            )
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(
            expr("10 - 4 - 3"),
            Expr::binary(
                Expr::binary(Expr::int(10), BinOp::Sub, Expr::int(4)),
                BinOp::Sub,
                Expr::int(3),
            )
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            expr("(2 + 3) * 4"),
            Expr::binary(
                Expr::binary(Expr::int(2), BinOp::Add, Expr::int(3)),
                BinOp::Mul,
                Expr::int(4),
            )
        );
    }

    #[test]
    fn test_comparisons_do_not_chain() {
        assert_eq!(
            expr("a < b < c"),
            Expr::binary(
                Expr::binary(ident("a"), BinOp::Lt, ident("b")),
                BinOp::Lt,
                ident("c"),
            )
        );
    }

    #[test]
    fn test_logical_precedence() {
        // a || b && c > 1  ==>  a || (b && (c > 1))
        assert_eq!(
            expr("a || b && c > 1"),
            Expr::binary(
                ident("a"),
                BinOp::Or,
                Expr::binary(
                    ident("b"),
                    BinOp::And,
                    Expr::binary(ident("c"), BinOp::Gt, Expr::int(1)),
                ),
            )
        );
    }

    #[test]
    fn test_nested_unary() {
        assert_eq!(
            expr("--x"),
            Expr::unary(UnOp::Neg, Expr::unary(UnOp::Neg, ident("x")))
        );
        assert_eq!(
            expr("-+x"),
            Expr::unary(UnOp::Neg, Expr::unary(UnOp::Plus, ident("x")))
        );
    }

    #[test]
    fn test_unary_binds_to_primary() {
        assert_eq!(
            expr("-a * b"),
            Expr::binary(Expr::unary(UnOp::Neg, ident("a")), BinOp::Mul, ident("b"))
        );
    }

    #[test]
    fn test_call_expressions() {
        assert_eq!(
            expr("f()"),
            Expr::Call {
                callee: "f".to_string(),
                args: vec![],
            }
        );
        assert_eq!(
            expr("max(min(10, 20), a && b)"),
            Expr::Call {
                callee: "max".to_string(),
                args: vec![
                    Expr::Call {
                        callee: "min".to_string(),
                        args: vec![Expr::int(10), Expr::int(20)],
                    },
                    Expr::binary(ident("a"), BinOp::And, ident("b")),
                ],
            }
        );
    }

    #[test]
    fn test_identifier_followed_by_paren_group_is_call() {
        // Only the very next token decides; `f (1)` is still a call
        assert!(matches!(expr("f (1)"), Expr::Call { .. }));
    }

    #[test]
    fn test_float_and_string_literals() {
        assert_eq!(expr("2.5"), Expr::Literal(Literal::Float(2.5)));
        assert_eq!(
            expr("\"hello world\""),
            Expr::Literal(Literal::String("hello world".to_string()))
        );
    }

    #[test]
    fn test_unexpected_token_becomes_placeholder() {
        let outcome = parse("var x = * 3;\nvar y = 2;").unwrap();

        assert!(outcome.had_errors());
        assert!(outcome.diagnostics[0]
            .message
            .starts_with("Unexpected token in expression"));
        assert_eq!(
            outcome.program.statements[0],
            Stmt::VarDeclaration {
                name: "x".to_string(),
                value: Expr::int(0),
            }
        );
        assert_eq!(
            outcome.program.statements.last(),
            Some(&Stmt::VarDeclaration {
                name: "y".to_string(),
                value: Expr::int(2),
            })
        );
    }

    #[test]
    fn test_expression_statement_without_semicolon() {
        let outcome = parse("2 + 3 * 4").unwrap();

        assert!(outcome.had_errors());
        assert_eq!(
            outcome.program.statements,
            vec![Stmt::Expression(Expr::binary(
                Expr::int(2),
                BinOp::Add,
                Expr::binary(Expr::int(3), BinOp::Mul, Expr::int(4)),
            ))]
        );
    }
}
