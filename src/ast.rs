//! Expression trees over the variables `x`, `y` and `z`

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use crate::functions::definitions::{ADD, DIV, GAUSS, MEAN, MUL, NEGATE, SUB, VAR};
use crate::functions::{Catalogue, OperationDef};

/// One of the three catalogued variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    /// All variables in evaluation order
    pub const ALL: [Variable; 3] = [Variable::X, Variable::Y, Variable::Z];

    /// Position of this variable's value in an evaluation input
    pub fn index(self) -> usize {
        match self {
            Variable::X => 0,
            Variable::Y => 1,
            Variable::Z => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        }
    }

    /// Look up a variable by name, `None` if it is not catalogued
    pub fn from_name(name: &str) -> Option<Variable> {
        match name {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            "z" => Some(Variable::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no catalogued variable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variable '{0}', expected one of x, y, z")]
pub struct UnknownVariable(pub String);

impl FromStr for Variable {
    type Err = UnknownVariable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::from_name(s).ok_or_else(|| UnknownVariable(s.to_string()))
    }
}

/// An immutable expression tree
///
/// Operands are held behind `Arc`, so trees built by differentiation can
/// share subtrees with the tree they were derived from. Nothing is ever
/// mutated after construction.
///
/// Nodes are only built through the constructors below, which keep every
/// operation's operand count within its arity. `ExprKind` can be read
/// through `Deref` but not wrapped into an `Expr` from outside the crate:
///
/// ```compile_fail
/// use exprdiff::{Catalogue, Expr, ExprKind};
///
/// let op = Catalogue::global().operation("+").unwrap();
/// let _ = Expr::new(ExprKind::Operation { op, args: vec![] });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub(crate) kind: ExprKind,
}

impl Deref for Expr {
    type Target = ExprKind;

    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Constant number; any IEEE double, including inf and NaN
    Const(f64),

    /// Catalogued variable
    Variable(Variable),

    /// Catalogued operation applied to its operands, in order
    Operation {
        op: &'static OperationDef,
        args: Vec<Arc<Expr>>,
    },
}

impl From<Variable> for Expr {
    fn from(var: Variable) -> Self {
        Expr::variable(var)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::number(value)
    }
}

impl Expr {
    pub(crate) fn new(kind: ExprKind) -> Self {
        Expr { kind }
    }

    // Accessor methods

    /// Check if expression is a constant number and return its value
    pub fn as_number(&self) -> Option<f64> {
        match &self.kind {
            ExprKind::Const(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<Variable> {
        match &self.kind {
            ExprKind::Variable(v) => Some(*v),
            _ => None,
        }
    }

    /// Catalogue entry of an operation node, `None` for leaves
    pub fn operation(&self) -> Option<&'static OperationDef> {
        match &self.kind {
            ExprKind::Operation { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// Operation token, `None` for leaves
    pub fn token(&self) -> Option<&'static str> {
        match &self.kind {
            ExprKind::Operation { op, .. } => Some(op.token),
            _ => None,
        }
    }

    /// Operands of an operation; empty for leaves
    pub fn operands(&self) -> &[Arc<Expr>] {
        match &self.kind {
            ExprKind::Operation { args, .. } => args,
            _ => &[],
        }
    }

    // Convenience constructors

    /// Create a number expression
    pub fn number(n: f64) -> Self {
        Expr::new(ExprKind::Const(n))
    }

    /// Create a variable expression
    pub fn variable(var: Variable) -> Self {
        Expr::new(ExprKind::Variable(var))
    }

    /// Build an operation node over already-shared operands
    pub(crate) fn from_arcs(op: &'static OperationDef, args: Vec<Arc<Expr>>) -> Self {
        debug_assert!(
            op.validate_arity(args.len()),
            "'{}' built with {} operands",
            op.token,
            args.len()
        );
        Expr::new(ExprKind::Operation { op, args })
    }

    pub(crate) fn from_exprs(op: &'static OperationDef, args: Vec<Expr>) -> Self {
        Expr::from_arcs(op, args.into_iter().map(Arc::new).collect())
    }

    /// Apply a catalogued operation by token
    ///
    /// Returns `None` if the token is not catalogued or the operand count
    /// does not fit its arity.
    ///
    /// # Example
    /// ```
    /// use exprdiff::{Expr, Variable};
    ///
    /// let sum = Expr::call("+", vec![Variable::X.into(), Expr::number(1.0)]).unwrap();
    /// assert_eq!(sum.evaluate(&[2.0, 0.0, 0.0]), 3.0);
    /// assert!(Expr::call("+", vec![Expr::number(1.0)]).is_none());
    /// ```
    pub fn call(token: &str, args: Vec<Expr>) -> Option<Self> {
        let op = Catalogue::global().operation(token)?;
        if !op.validate_arity(args.len()) {
            return None;
        }
        Some(Expr::from_exprs(op, args))
    }

    pub fn add_expr(left: Expr, right: Expr) -> Self {
        Expr::from_exprs(&ADD, vec![left, right])
    }

    pub fn sub_expr(left: Expr, right: Expr) -> Self {
        Expr::from_exprs(&SUB, vec![left, right])
    }

    pub fn mul_expr(left: Expr, right: Expr) -> Self {
        Expr::from_exprs(&MUL, vec![left, right])
    }

    pub fn div_expr(left: Expr, right: Expr) -> Self {
        Expr::from_exprs(&DIV, vec![left, right])
    }

    pub fn negate(operand: Expr) -> Self {
        Expr::from_exprs(&NEGATE, vec![operand])
    }

    /// Arithmetic mean of any number of operands
    pub fn mean(operands: Vec<Expr>) -> Self {
        Expr::from_exprs(&MEAN, operands)
    }

    /// Population variance of any number of operands
    pub fn variance(operands: Vec<Expr>) -> Self {
        Expr::from_exprs(&VAR, operands)
    }

    /// `amplitude * exp(-(point - center)^2 / (2 * width^2))`
    pub fn gauss(amplitude: Expr, center: Expr, width: Expr, point: Expr) -> Self {
        Expr::from_exprs(&GAUSS, vec![amplitude, center, width, point])
    }

    // Analysis methods

    /// Count the total number of nodes in the tree (shared subtrees count once per use)
    pub fn node_count(&self) -> usize {
        match &self.kind {
            ExprKind::Const(_) | ExprKind::Variable(_) => 1,
            ExprKind::Operation { args, .. } => {
                1 + args.iter().map(|a| a.node_count()).sum::<usize>()
            }
        }
    }

    /// Get the maximum nesting depth of the tree
    pub fn max_depth(&self) -> usize {
        match &self.kind {
            ExprKind::Const(_) | ExprKind::Variable(_) => 1,
            ExprKind::Operation { args, .. } => {
                1 + args.iter().map(|a| a.max_depth()).max().unwrap_or(0)
            }
        }
    }

    /// Check if the expression contains a specific variable
    pub fn contains_var(&self, var: Variable) -> bool {
        match &self.kind {
            ExprKind::Const(_) => false,
            ExprKind::Variable(v) => *v == var,
            ExprKind::Operation { args, .. } => args.iter().any(|a| a.contains_var(var)),
        }
    }

    /// Evaluate numerically
    ///
    /// `values` holds the values of `x`, `y` and `z` in that order. A missing
    /// position reads as NaN. Evaluation never fails: division by zero and
    /// other IEEE edge cases come back as inf or NaN.
    ///
    /// # Example
    /// ```
    /// use exprdiff::{Notation, parse};
    ///
    /// let expr = parse("(* x (+ y z))", Notation::Prefix).unwrap();
    /// assert_eq!(expr.evaluate(&[2.0, 3.0, 4.0]), 14.0);
    /// ```
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        match &self.kind {
            ExprKind::Const(n) => *n,
            ExprKind::Variable(v) => values.get(v.index()).copied().unwrap_or(f64::NAN),
            ExprKind::Operation { op, args } => {
                let operands: Vec<f64> = args.iter().map(|a| a.evaluate(values)).collect();
                (op.eval)(&operands)
            }
        }
    }
}

// Operator overloading for ergonomic tree building

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add_expr(self, rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::sub_expr(self, rhs)
    }
}

impl std::ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::mul_expr(self, rhs)
    }
}

impl std::ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::div_expr(self, rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::negate(self)
    }
}
