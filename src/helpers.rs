//! String-level helpers
//!
//! Convenience wrappers that parse, then evaluate or differentiate, for
//! callers that work with text end to end.

use crate::{Expr, Notation, ParseError, Variable, parse};

/// Parse and evaluate in one step
///
/// `values` holds x, y, z in that order.
///
/// # Example
/// ```
/// use exprdiff::{Notation, evaluate_str};
///
/// let value = evaluate_str("x y *", Notation::Infix, &[3.0, 4.0, 0.0]).unwrap();
/// assert_eq!(value, 12.0);
/// ```
pub fn evaluate_str(formula: &str, notation: Notation, values: &[f64]) -> Result<f64, ParseError> {
    Ok(parse(formula, notation)?.evaluate(values))
}

/// Parse, differentiate and render the derivative in the input notation
///
/// # Example
/// ```
/// use exprdiff::{Notation, diff_str};
///
/// let derivative = diff_str("(negate x)", Notation::Prefix, "x").unwrap();
/// assert_eq!(derivative, "(negate 1)");
/// ```
pub fn diff_str(formula: &str, notation: Notation, var: &str) -> Result<String, ParseError> {
    Ok(parse(formula, notation)?.differentiate(var).render(notation))
}

/// Partial derivatives with respect to x, y and z, in that order
pub fn gradient(expr: &Expr) -> [Expr; 3] {
    Variable::ALL.map(|var| expr.differentiate(var.name()))
}

/// String version of [`gradient`]; each partial is rendered in the input notation
pub fn gradient_str(formula: &str, notation: Notation) -> Result<[String; 3], ParseError> {
    let expr = parse(formula, notation)?;
    Ok(gradient(&expr).map(|partial| partial.render(notation)))
}
