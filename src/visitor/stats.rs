//! Node counting traversal

use rustc_hash::FxHashMap;

use crate::parser::ast::{BinOp, Block, Expr, Literal, Program, UnOp};
use crate::visitor::Visitor;

/// Counts visited nodes per kind label (`"Program"`, `"BinaryOp"`, ...).
#[derive(Debug, Clone, Default)]
pub struct NodeStats {
    counts: FxHashMap<&'static str, usize>,
}

impl NodeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node in `program`, the root included.
    pub fn collect(program: &Program) -> Self {
        let mut stats = Self::new();
        program.accept(&mut stats);
        stats
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.counts.get(kind).copied().unwrap_or(0)
    }

    /// Per-kind counts sorted by kind label.
    pub fn summary(&self) -> Vec<(&'static str, usize)> {
        let mut rows: Vec<_> = self.counts.iter().map(|(k, v)| (*k, *v)).collect();
        rows.sort_unstable_by_key(|(kind, _)| *kind);
        rows
    }

    fn record(&mut self, kind: &'static str) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }
}

impl Visitor for NodeStats {
    type Output = ();

    fn visit_program(&mut self, program: &Program) {
        self.record("Program");
        for stmt in &program.statements {
            stmt.accept(self);
        }
    }

    fn visit_var_declaration(&mut self, _name: &str, value: &Expr) {
        self.record("VarDeclaration");
        value.accept(self);
    }

    fn visit_assignment(&mut self, _name: &str, value: &Expr) {
        self.record("Assignment");
        value.accept(self);
    }

    fn visit_if_statement(&mut self, condition: &Expr, then_block: &Block, else_block: Option<&Block>) {
        self.record("IfStatement");
        condition.accept(self);
        then_block.accept(self);
        if let Some(block) = else_block {
            block.accept(self);
        }
    }

    fn visit_while_statement(&mut self, condition: &Expr, body: &Block) {
        self.record("WhileStatement");
        condition.accept(self);
        body.accept(self);
    }

    fn visit_function_declaration(&mut self, _name: &str, _params: &[String], body: &Block) {
        self.record("FunctionDeclaration");
        body.accept(self);
    }

    fn visit_return_statement(&mut self, value: &Expr) {
        self.record("ReturnStatement");
        value.accept(self);
    }

    fn visit_expression_statement(&mut self, expr: &Expr) {
        self.record("ExpressionStatement");
        expr.accept(self);
    }

    fn visit_block(&mut self, block: &Block) {
        self.record("Block");
        for stmt in &block.statements {
            stmt.accept(self);
        }
    }

    fn visit_binary_op(&mut self, left: &Expr, _op: BinOp, right: &Expr) {
        self.record("BinaryOp");
        left.accept(self);
        right.accept(self);
    }

    fn visit_unary_op(&mut self, _op: UnOp, operand: &Expr) {
        self.record("UnaryOp");
        operand.accept(self);
    }

    fn visit_call_expression(&mut self, _callee: &str, args: &[Expr]) {
        self.record("CallExpression");
        for arg in args {
            arg.accept(self);
        }
    }

    fn visit_identifier(&mut self, _name: &str) {
        self.record("Identifier");
    }

    fn visit_literal(&mut self, _literal: &Literal) {
        self.record("Literal");
    }
}
