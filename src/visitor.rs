//! Expression visitor pattern for tree traversal
//!
//! Provides a clean interface for walking the expression tree without
//! manually handling the recursive structure.

use crate::functions::OperationDef;
use crate::{Expr, ExprKind, Variable};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Trait for visiting expression nodes
///
/// Implement this trait to define custom behavior when traversing expressions.
/// Each method returns a boolean indicating whether to continue visiting children.
///
/// # Example
/// ```
/// use exprdiff::visitor::{ExprVisitor, walk_expr};
/// use exprdiff::{Expr, OperationDef, Notation, Variable, parse};
/// use std::sync::Arc;
///
/// struct ConstSum(f64);
///
/// impl ExprVisitor for ConstSum {
///     fn visit_const(&mut self, n: f64) -> bool { self.0 += n; true }
///     fn visit_variable(&mut self, _var: Variable) -> bool { true }
///     fn visit_operation(&mut self, _op: &OperationDef, _args: &[Arc<Expr>]) -> bool { true }
/// }
///
/// let expr = parse("(+ 1 (* 2 x))", Notation::Prefix).unwrap();
/// let mut sum = ConstSum(0.0);
/// walk_expr(&expr, &mut sum);
/// assert_eq!(sum.0, 3.0);
/// ```
pub trait ExprVisitor {
    /// Visit a constant, returns true to continue visiting
    fn visit_const(&mut self, n: f64) -> bool;

    /// Visit a variable, returns true to continue visiting
    fn visit_variable(&mut self, var: Variable) -> bool;

    /// Visit an operation, returns true to visit operands
    fn visit_operation(&mut self, op: &OperationDef, args: &[Arc<Expr>]) -> bool;
}

/// Walk an expression tree with a visitor
///
/// Visits nodes in pre-order (parent before children).
/// The visitor methods return true to continue walking children, false to skip.
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    match &expr.kind {
        ExprKind::Const(n) => {
            visitor.visit_const(*n);
        }
        ExprKind::Variable(v) => {
            visitor.visit_variable(*v);
        }
        ExprKind::Operation { op, args } => {
            if visitor.visit_operation(op, args) {
                for arg in args {
                    walk_expr(arg, visitor);
                }
            }
        }
    }
}

/// A simple visitor that counts nodes
#[derive(Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl ExprVisitor for NodeCounter {
    fn visit_const(&mut self, _n: f64) -> bool {
        self.count += 1;
        true
    }

    fn visit_variable(&mut self, _var: Variable) -> bool {
        self.count += 1;
        true
    }

    fn visit_operation(&mut self, _op: &OperationDef, _args: &[Arc<Expr>]) -> bool {
        self.count += 1;
        true
    }
}

/// A visitor that collects the distinct variables, in x, y, z order
#[derive(Default)]
pub struct VariableCollector {
    pub variables: BTreeSet<Variable>,
}

impl ExprVisitor for VariableCollector {
    fn visit_const(&mut self, _n: f64) -> bool {
        true
    }

    fn visit_variable(&mut self, var: Variable) -> bool {
        self.variables.insert(var);
        true
    }

    fn visit_operation(&mut self, _op: &OperationDef, _args: &[Arc<Expr>]) -> bool {
        true
    }
}

/// A visitor that records which operation tokens occur, with repetition
#[derive(Default)]
pub struct TokenCollector {
    pub tokens: Vec<&'static str>,
}

impl ExprVisitor for TokenCollector {
    fn visit_const(&mut self, _n: f64) -> bool {
        true
    }

    fn visit_variable(&mut self, _var: Variable) -> bool {
        true
    }

    fn visit_operation(&mut self, op: &OperationDef, _args: &[Arc<Expr>]) -> bool {
        self.tokens.push(op.token);
        true
    }
}
