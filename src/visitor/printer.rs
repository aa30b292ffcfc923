//! Indented text rendering of the AST
//!
//! Each node writes one header line at its own depth. Children are rendered
//! by a nested printer one or two levels deeper, depending on whether a
//! label line (`Left:`, `Body:`, ...) sits between them and their parent.
//! The depth travels with the printer value, so rendering the same tree
//! always yields the same text.

use std::fmt::Display;

use crate::parser::ast::{BinOp, Block, Expr, Literal, Program, UnOp};
use crate::visitor::Visitor;

const INDENT: &str = "  ";

/// Renders nodes as indented lines, two spaces per level.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstPrinter {
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_depth(depth: usize) -> Self {
        Self { depth }
    }

    fn nested(&self, levels: usize) -> Self {
        Self::at_depth(self.depth + levels)
    }

    fn line(&self, text: impl Display) -> String {
        format!("{}{}\n", INDENT.repeat(self.depth), text)
    }

    /// `label:` one level down, then the child two levels down.
    fn labeled(&self, label: &str, child: &Expr) -> String {
        let mut out = self.nested(1).line(format_args!("{}:", label));
        out.push_str(&child.accept(&mut self.nested(2)));
        out
    }

    fn labeled_block(&self, label: &str, block: &Block) -> String {
        let mut out = self.nested(1).line(format_args!("{}:", label));
        out.push_str(&block.accept(&mut self.nested(2)));
        out
    }
}

/// Render a whole program from depth zero.
pub fn print_program(program: &Program) -> String {
    program.accept(&mut AstPrinter::new())
}

impl Visitor for AstPrinter {
    type Output = String;

    fn visit_program(&mut self, program: &Program) -> String {
        let mut out = self.line("Program:");
        for stmt in &program.statements {
            out.push_str(&stmt.accept(&mut self.nested(1)));
        }
        out
    }

    fn visit_var_declaration(&mut self, name: &str, value: &Expr) -> String {
        let mut out = self.line(format_args!("VarDeclaration: {}", name));
        out.push_str(&self.labeled("Value", value));
        out
    }

    fn visit_assignment(&mut self, name: &str, value: &Expr) -> String {
        let mut out = self.line(format_args!("Assignment: {}", name));
        out.push_str(&self.labeled("Value", value));
        out
    }

    fn visit_if_statement(
        &mut self,
        condition: &Expr,
        then_block: &Block,
        else_block: Option<&Block>,
    ) -> String {
        let mut out = self.line("IfStatement:");
        out.push_str(&self.labeled("Condition", condition));
        out.push_str(&self.labeled_block("Then", then_block));
        if let Some(block) = else_block {
            out.push_str(&self.labeled_block("Else", block));
        }
        out
    }

    fn visit_while_statement(&mut self, condition: &Expr, body: &Block) -> String {
        let mut out = self.line("WhileStatement:");
        out.push_str(&self.labeled("Condition", condition));
        out.push_str(&self.labeled_block("Body", body));
        out
    }

    fn visit_function_declaration(&mut self, name: &str, params: &[String], body: &Block) -> String {
        let mut out = self.line(format_args!("FunctionDeclaration: {}", name));
        out.push_str(
            &self
                .nested(1)
                .line(format_args!("Parameters: {}", params.join(", "))),
        );
        out.push_str(&self.labeled_block("Body", body));
        out
    }

    fn visit_return_statement(&mut self, value: &Expr) -> String {
        let mut out = self.line("ReturnStatement:");
        out.push_str(&value.accept(&mut self.nested(1)));
        out
    }

    fn visit_expression_statement(&mut self, expr: &Expr) -> String {
        let mut out = self.line("ExpressionStatement:");
        out.push_str(&expr.accept(&mut self.nested(1)));
        out
    }

    fn visit_block(&mut self, block: &Block) -> String {
        let mut out = self.line("Block:");
        for stmt in &block.statements {
            out.push_str(&stmt.accept(&mut self.nested(1)));
        }
        out
    }

    fn visit_binary_op(&mut self, left: &Expr, op: BinOp, right: &Expr) -> String {
        let mut out = self.line(format_args!("BinaryOp: {}", op));
        out.push_str(&self.labeled("Left", left));
        out.push_str(&self.labeled("Right", right));
        out
    }

    fn visit_unary_op(&mut self, op: UnOp, operand: &Expr) -> String {
        let mut out = self.line(format_args!("UnaryOp: {}", op));
        out.push_str(&operand.accept(&mut self.nested(1)));
        out
    }

    fn visit_call_expression(&mut self, callee: &str, args: &[Expr]) -> String {
        let mut out = self.line(format_args!("CallExpression: {}", callee));
        if !args.is_empty() {
            out.push_str(&self.nested(1).line("Arguments:"));
            for arg in args {
                out.push_str(&arg.accept(&mut self.nested(2)));
            }
        }
        out
    }

    fn visit_identifier(&mut self, name: &str) -> String {
        self.line(format_args!("Identifier: {}", name))
    }

    fn visit_literal(&mut self, literal: &Literal) -> String {
        self.line(format_args!("{}Literal: {}", literal.type_name(), literal))
    }
}
