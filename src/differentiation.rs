// Differentiation engine - applies calculus rules
//
// Leaves are handled here; every operation delegates to the derivative rule
// of its catalogue entry, passing the operands and their derivatives in
// order. No simplification is attempted: the result is the literal tree the
// rules produce.

use crate::{Expr, ExprKind};
use std::sync::Arc;

impl Expr {
    /// Differentiate this expression with respect to a variable
    ///
    /// Returns a new tree; `self` is left untouched. A name that is not one
    /// of `x`, `y`, `z` differentiates every variable to zero.
    ///
    /// # Example
    /// ```
    /// use exprdiff::{Notation, parse};
    ///
    /// let expr = parse("(* x x)", Notation::Prefix).unwrap();
    /// let derivative = expr.differentiate("x");
    /// assert_eq!(derivative.render(Notation::Prefix), "(+ (* 1 x) (* x 1))");
    /// assert_eq!(derivative.evaluate(&[3.0, 0.0, 0.0]), 6.0);
    /// ```
    pub fn differentiate(&self, var: &str) -> Expr {
        log::debug!("differentiating {} nodes with respect to '{}'", self.node_count(), var);
        self.derive(var)
    }

    pub(crate) fn derive(&self, var: &str) -> Expr {
        match &self.kind {
            // Base cases
            ExprKind::Const(_) => Expr::number(0.0),

            ExprKind::Variable(v) => {
                if v.name() == var {
                    Expr::number(1.0)
                } else {
                    Expr::number(0.0)
                }
            }

            ExprKind::Operation { op, args } => {
                let arg_primes: Vec<Arc<Expr>> =
                    args.iter().map(|arg| Arc::new(arg.derive(var))).collect();
                (op.derivative)(args, &arg_primes)
            }
        }
    }
}
