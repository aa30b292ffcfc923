//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! program    ::= statement*
//! statement  ::= var_decl | assignment | if_stmt | while_stmt
//!              | func_decl | return_stmt | expr_stmt
//! var_decl   ::= "var" IDENT "=" expr ";"
//! assignment ::= IDENT "=" expr ";"
//! if_stmt    ::= "if" "(" expr ")" block ( "else" ( if_stmt | block ) )?
//! while_stmt ::= "while" "(" expr ")" block
//! return_stmt::= "return" expr ";"
//! expr_stmt  ::= expr ";"
//! block      ::= "{" statement* "}"
//! ```
//!
//! An identifier starts an assignment only when the token after it is `=`.
//! `else if` is not a node of its own: the nested `if` is wrapped in a
//! one-statement [`Block`] and becomes the else branch.
//!
//! When a statement hits a fault it stops after recovery and returns what it
//! has, with placeholders for the missing parts.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse the entire program (statements until end of input)
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement_with_progress());
        }

        Program::new(statements)
    }

    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement_with_progress());
        }

        statements
    }

    fn parse_statement_with_progress(&mut self) -> Stmt {
        let start = self.position;
        self.clear_panic_mode();
        let stmt = self.parse_statement();

        // Recovery consumes at least one token; never spin if it did not.
        if self.position == start {
            self.advance();
        }

        stmt
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Stmt {
        match self.peek_kind() {
            TokenKind::Var => self.parse_var_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Def => self.parse_function_declaration(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Ident(_) if matches!(self.peek_ahead(1), TokenKind::Assign) => {
                self.parse_assignment()
            }
            TokenKind::Else => {
                // Recovery discards the stray 'else' along with what follows it
                self.error("Unexpected 'else' without matching 'if'");
                Stmt::Expression(Expr::placeholder())
            }
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse variable declaration: var name = expr;
    fn parse_var_declaration(&mut self) -> Stmt {
        self.advance(); // 'var'

        let Some(name) = self.expect_identifier("Expected variable name after 'var'") else {
            return Stmt::VarDeclaration {
                name: String::new(),
                value: Expr::placeholder(),
            };
        };

        if !self.expect_token(&TokenKind::Assign, "Expected '=' after variable name") {
            return Stmt::VarDeclaration {
                name,
                value: Expr::placeholder(),
            };
        }

        let value = self.parse_expression();
        self.expect_token(
            &TokenKind::Semicolon,
            "Expected ';' after variable declaration",
        );

        Stmt::VarDeclaration { name, value }
    }

    /// Parse assignment: name = expr;
    fn parse_assignment(&mut self) -> Stmt {
        let name = match self.peek_kind() {
            TokenKind::Ident(name) => name.clone(),
            _ => String::new(),
        };
        self.advance(); // name
        self.advance(); // '='

        if self.check(&TokenKind::Semicolon) {
            // Recovery consumes the ';'
            self.error("Missing expression in assignment");
            return Stmt::Assignment {
                name,
                value: Expr::placeholder(),
            };
        }

        let value = self.parse_expression();
        self.expect_token(&TokenKind::Semicolon, "Expected ';' after assignment");

        Stmt::Assignment { name, value }
    }

    /// Parse if statement, including else and else-if chains
    pub(crate) fn parse_if_statement(&mut self) -> Stmt {
        self.advance(); // 'if'

        let Some(condition) = self.parse_condition("if") else {
            return Stmt::If {
                condition: Expr::placeholder(),
                then_block: Block::empty(),
                else_block: None,
            };
        };

        let then_block = self.parse_block();

        let else_block = if self.match_token(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                Some(Block::new(vec![self.parse_if_statement()]))
            } else {
                Some(self.parse_block())
            }
        } else {
            None
        };

        Stmt::If {
            condition,
            then_block,
            else_block,
        }
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Stmt {
        self.advance(); // 'while'

        let Some(condition) = self.parse_condition("while") else {
            return Stmt::While {
                condition: Expr::placeholder(),
                body: Block::empty(),
            };
        };

        let body = self.parse_block();

        Stmt::While { condition, body }
    }

    /// Parenthesized condition after `if` / `while`. `None` once a paren is missing.
    fn parse_condition(&mut self, keyword: &str) -> Option<Expr> {
        if !self.expect_token(
            &TokenKind::LParen,
            &format!("Expected '(' after '{}'", keyword),
        ) {
            return None;
        }

        let condition = self.parse_expression();

        if !self.expect_token(
            &TokenKind::RParen,
            &format!("Expected ')' after {} condition", keyword),
        ) {
            return None;
        }

        Some(condition)
    }

    /// Parse return statement: return expr;
    fn parse_return_statement(&mut self) -> Stmt {
        self.advance(); // 'return'

        let value = self.parse_expression();
        self.expect_token(&TokenKind::Semicolon, "Expected ';' after return value");

        Stmt::Return { value }
    }

    /// Parse expression statement: expr;
    fn parse_expression_statement(&mut self) -> Stmt {
        let expr = self.parse_expression();
        self.expect_token(&TokenKind::Semicolon, "Expected ';' after expression");

        Stmt::Expression(expr)
    }

    /// Parse a braced block.
    ///
    /// Without a leading `{` the fault is reported and an empty block comes
    /// back; the block rule itself never consumes the unexpected token.
    pub(crate) fn parse_block(&mut self) -> Block {
        if !self.check(&TokenKind::LBrace) {
            self.error("Expected '{' to start block");
            return Block::empty();
        }
        self.advance();

        let statements = self.parse_block_statements();
        if self.expect_token(&TokenKind::RBrace, "Expected '}' to close block") {
            // A fault inside the block must not hide the next one after it
            self.clear_panic_mode();
        }

        Block::new(statements)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{parse, ParseOutcome};

    fn parse_ok(source: &str) -> Program {
        let outcome = parse(source).unwrap();
        assert!(
            !outcome.had_errors(),
            "unexpected faults: {:?}",
            outcome.diagnostics
        );
        outcome.program
    }

    fn parse_faulty(source: &str) -> ParseOutcome {
        let outcome = parse(source).unwrap();
        assert!(outcome.had_errors(), "expected faults in {:?}", source);
        outcome
    }

    fn ident(name: &str) -> Expr {
        Expr::Identifier(name.to_string())
    }

    #[test]
    fn test_var_declaration() {
        let program = parse_ok("var y = x * 2;");

        assert_eq!(
            program.statements,
            vec![Stmt::VarDeclaration {
                name: "y".to_string(),
                value: Expr::binary(ident("x"), BinOp::Mul, Expr::int(2)),
            }]
        );
    }

    #[test]
    fn test_assignment_vs_expression_statement() {
        let program = parse_ok("x = 1; x == 1; x;");

        assert!(matches!(program.statements[0], Stmt::Assignment { .. }));
        assert!(matches!(
            program.statements[1],
            Stmt::Expression(Expr::BinaryOp { op: BinOp::Eq, .. })
        ));
        assert_eq!(program.statements[2], Stmt::Expression(ident("x")));
    }

    #[test]
    fn test_literal_only_statement() {
        let program = parse_ok("42; \"hi\";");

        assert_eq!(program.statements[0], Stmt::Expression(Expr::int(42)));
        assert_eq!(
            program.statements[1],
            Stmt::Expression(Expr::Literal(Literal::String("hi".to_string())))
        );
    }

    #[test]
    fn test_if_without_else() {
        let program = parse_ok("if (x > 5) { print(x); }");

        match &program.statements[0] {
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                assert_eq!(
                    *condition,
                    Expr::binary(ident("x"), BinOp::Gt, Expr::int(5))
                );
                assert_eq!(then_block.statements.len(), 1);
                assert!(else_block.is_none());
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_else_if_nests_inside_block() {
        let program = parse_ok("if (a) { 1; } else if (b) { 2; }");

        let Stmt::If { else_block, .. } = &program.statements[0] else {
            panic!("Expected if statement");
        };
        let else_block = else_block.as_ref().expect("else branch");

        assert_eq!(else_block.statements.len(), 1);
        match &else_block.statements[0] {
            Stmt::If {
                condition,
                else_block,
                ..
            } => {
                assert_eq!(*condition, ident("b"));
                assert!(else_block.is_none());
            }
            other => panic!("Expected nested if, got {:?}", other),
        }
    }

    #[test]
    fn test_else_if_else_chain() {
        let program = parse_ok("if (a) { 1; } else if (b) { 2; } else { 3; }");

        let Stmt::If { else_block: Some(outer_else), .. } = &program.statements[0] else {
            panic!("Expected if with else");
        };
        let Stmt::If { else_block: Some(inner_else), .. } = &outer_else.statements[0] else {
            panic!("Expected nested if with else");
        };
        assert_eq!(inner_else.statements, vec![Stmt::Expression(Expr::int(3))]);
    }

    #[test]
    fn test_while_statement() {
        let program = parse_ok("while (x < 100) { x = x + 10; }");

        match &program.statements[0] {
            Stmt::While { condition, body } => {
                assert_eq!(
                    *condition,
                    Expr::binary(ident("x"), BinOp::Lt, Expr::int(100))
                );
                assert_eq!(
                    body.statements,
                    vec![Stmt::Assignment {
                        name: "x".to_string(),
                        value: Expr::binary(ident("x"), BinOp::Add, Expr::int(10)),
                    }]
                );
            }
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_order_preserved() {
        let program = parse_ok("var a = 1; var b = 2; var c = 3;");

        let names: Vec<&str> = program
            .statements
            .iter()
            .map(|s| match s {
                Stmt::VarDeclaration { name, .. } => name.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_expression_in_assignment() {
        let outcome = parse_faulty("y = ;\nvar z = 1;");

        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].message, "Missing expression in assignment");
        assert_eq!(
            outcome.program.statements,
            vec![
                Stmt::Assignment {
                    name: "y".to_string(),
                    value: Expr::int(0),
                },
                Stmt::VarDeclaration {
                    name: "z".to_string(),
                    value: Expr::int(1),
                },
            ]
        );
    }

    #[test]
    fn test_stray_else() {
        let outcome = parse_faulty("else { x; }\nvar z = 1;");

        assert_eq!(
            outcome.diagnostics[0].message,
            "Unexpected 'else' without matching 'if'"
        );
        assert_eq!(outcome.program.statements[0], Stmt::Expression(Expr::int(0)));
        assert!(outcome.program.statements.contains(&Stmt::VarDeclaration {
            name: "z".to_string(),
            value: Expr::int(1),
        }));
    }

    #[test]
    fn test_missing_brace_gives_empty_block() {
        let outcome = parse_faulty("while (x) return 1;");

        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].message.starts_with("Expected '{'"));
        assert_eq!(
            outcome.program.statements,
            vec![
                Stmt::While {
                    condition: ident("x"),
                    body: Block::empty(),
                },
                Stmt::Return {
                    value: Expr::int(1),
                },
            ]
        );
    }

    #[test]
    fn test_missing_paren_in_if_recovers_at_next_statement() {
        let outcome = parse_faulty("if (x > 5 { print(1); }\nvar ok = 1;");

        assert!(outcome.diagnostics[0].message.starts_with("Expected ')'"));
        assert!(outcome.program.statements.contains(&Stmt::VarDeclaration {
            name: "ok".to_string(),
            value: Expr::int(1),
        }));
    }

    #[test]
    fn test_unclosed_block_at_end_of_input() {
        let outcome = parse_faulty("while (x) { x = 1;");

        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].message.starts_with("Expected '}'"));
        match &outcome.program.statements[0] {
            Stmt::While { body, .. } => assert_eq!(body.statements.len(), 1),
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_stray_closing_brace_at_top_level() {
        let outcome = parse_faulty("}\nvar a = 1;");

        assert!(outcome.program.statements.contains(&Stmt::VarDeclaration {
            name: "a".to_string(),
            value: Expr::int(1),
        }));
    }
}
