//! Operation catalogue
//!
//! This module is the single source of truth for every operation token:
//! its arity, numeric evaluation and derivative rule.

use crate::Expr;
use std::sync::Arc;

pub(crate) mod definitions;
pub(crate) mod registry;

pub use registry::{Arity, Catalogue, OperationDef};

// ===== Helper functions for building derivative expressions =====

/// Create a binary operation node from shared operands - cheap, avoids deep clone
pub(crate) fn binary(op: &'static OperationDef, left: Arc<Expr>, right: Arc<Expr>) -> Expr {
    Expr::from_arcs(op, vec![left, right])
}

/// Create a unary operation node from a shared operand
pub(crate) fn unary(op: &'static OperationDef, operand: Arc<Expr>) -> Expr {
    Expr::from_arcs(op, vec![operand])
}

/// Shared constant leaf
pub(crate) fn number(value: f64) -> Arc<Expr> {
    Arc::new(Expr::number(value))
}

/// Product rule: (u * v)' = u' * v + u * v'
pub(crate) fn product_rule(
    u: &Arc<Expr>,
    u_prime: &Arc<Expr>,
    v: &Arc<Expr>,
    v_prime: &Arc<Expr>,
) -> Expr {
    use definitions::{ADD, MUL};
    binary(
        &ADD,
        Arc::new(binary(&MUL, Arc::clone(u_prime), Arc::clone(v))),
        Arc::new(binary(&MUL, Arc::clone(u), Arc::clone(v_prime))),
    )
}

/// Quotient rule: (u / v)' = (u' * v - u * v') / (v * v)
pub(crate) fn quotient_rule(
    u: &Arc<Expr>,
    u_prime: &Arc<Expr>,
    v: &Arc<Expr>,
    v_prime: &Arc<Expr>,
) -> Expr {
    use definitions::{DIV, MUL, SUB};
    let numerator = binary(
        &SUB,
        Arc::new(binary(&MUL, Arc::clone(u_prime), Arc::clone(v))),
        Arc::new(binary(&MUL, Arc::clone(u), Arc::clone(v_prime))),
    );
    let denominator = binary(&MUL, Arc::clone(v), Arc::clone(v));
    binary(&DIV, Arc::new(numerator), Arc::new(denominator))
}

// ===== Numeric helpers shared by evaluation rules =====

/// Arithmetic mean, defined as 0 for no values
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population variance: mean of squared deviations from the mean
pub(crate) fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    let deviations: Vec<f64> = values.iter().map(|v| (v - m) * (v - m)).collect();
    mean(&deviations)
}

/// a * exp(-(x - b)^2 / (2 * c^2))
pub(crate) fn gaussian(amplitude: f64, center: f64, width: f64, point: f64) -> f64 {
    let d = point - center;
    amplitude * (-(d * d) / (2.0 * width * width)).exp()
}
