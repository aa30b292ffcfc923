//! Tree traversal over the AST
//!
//! [`Visitor`] has one method per node kind. The node enums in
//! [`crate::parser::ast`] route themselves to the matching method through
//! their `accept` functions, so a new traversal (an evaluator, an exporter, a
//! checker) is a new `Visitor` impl and never a change to the node types.
//! The trait has no default bodies: every traversal handles every kind, and
//! adding a node kind breaks every traversal at compile time until it does.
//!
//! Two traversals ship with the crate:
//! - [`printer::AstPrinter`]: indented diagnostic text
//! - [`stats::NodeStats`]: node counts per kind

use crate::parser::ast::{BinOp, Block, Expr, Literal, Program, Stmt, UnOp};

pub mod printer;
pub mod stats;

pub use printer::{print_program, AstPrinter};
pub use stats::NodeStats;

/// One handler per node kind.
pub trait Visitor {
    type Output;

    fn visit_program(&mut self, program: &Program) -> Self::Output;

    fn visit_var_declaration(&mut self, name: &str, value: &Expr) -> Self::Output;

    fn visit_assignment(&mut self, name: &str, value: &Expr) -> Self::Output;

    fn visit_if_statement(
        &mut self,
        condition: &Expr,
        then_block: &Block,
        else_block: Option<&Block>,
    ) -> Self::Output;

    fn visit_while_statement(&mut self, condition: &Expr, body: &Block) -> Self::Output;

    fn visit_function_declaration(
        &mut self,
        name: &str,
        params: &[String],
        body: &Block,
    ) -> Self::Output;

    fn visit_return_statement(&mut self, value: &Expr) -> Self::Output;

    fn visit_expression_statement(&mut self, expr: &Expr) -> Self::Output;

    fn visit_block(&mut self, block: &Block) -> Self::Output;

    fn visit_binary_op(&mut self, left: &Expr, op: BinOp, right: &Expr) -> Self::Output;

    fn visit_unary_op(&mut self, op: UnOp, operand: &Expr) -> Self::Output;

    fn visit_call_expression(&mut self, callee: &str, args: &[Expr]) -> Self::Output;

    fn visit_identifier(&mut self, name: &str) -> Self::Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;
}

impl Program {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}

impl Block {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_block(self)
    }
}

impl Stmt {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::VarDeclaration { name, value } => visitor.visit_var_declaration(name, value),
            Stmt::Assignment { name, value } => visitor.visit_assignment(name, value),
            Stmt::Block(block) => visitor.visit_block(block),
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => visitor.visit_if_statement(condition, then_block, else_block.as_ref()),
            Stmt::While { condition, body } => visitor.visit_while_statement(condition, body),
            Stmt::FunctionDeclaration { name, params, body } => {
                visitor.visit_function_declaration(name, params, body)
            }
            Stmt::Return { value } => visitor.visit_return_statement(value),
            Stmt::Expression(expr) => visitor.visit_expression_statement(expr),
        }
    }
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Identifier(name) => visitor.visit_identifier(name),
            Expr::BinaryOp { left, op, right } => visitor.visit_binary_op(left, *op, right),
            Expr::UnaryOp { op, operand } => visitor.visit_unary_op(*op, operand),
            Expr::Call { callee, args } => visitor.visit_call_expression(callee, args),
        }
    }
}
