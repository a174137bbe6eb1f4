//! Operation definitions for the catalogue
//!
//! Contains evaluation and symbolic differentiation rules for all supported operations.
//! Each derivative rule receives the node's operands and their derivatives and
//! builds a fresh tree; operand subtrees are shared through `Arc`, never copied.

use super::registry::{Arity, OperationDef};
use super::{binary, gaussian, mean, number, product_rule, quotient_rule, unary, variance};
use crate::Expr;
use std::sync::Arc;

/// Named constants accepted wherever a number is
pub(crate) const NAMED_CONSTANTS: [(&str, f64); 3] = [("zero", 0.0), ("one", 1.0), ("two", 2.0)];

pub(crate) static ADD: OperationDef = OperationDef {
    token: "+",
    arity: Arity::Fixed(2),
    eval: |args| args[0] + args[1],
    derivative: |_, primes| {
        // (u + v)' = u' + v'
        binary(&ADD, Arc::clone(&primes[0]), Arc::clone(&primes[1]))
    },
};

pub(crate) static SUB: OperationDef = OperationDef {
    token: "-",
    arity: Arity::Fixed(2),
    eval: |args| args[0] - args[1],
    derivative: |_, primes| {
        // (u - v)' = u' - v'
        binary(&SUB, Arc::clone(&primes[0]), Arc::clone(&primes[1]))
    },
};

pub(crate) static MUL: OperationDef = OperationDef {
    token: "*",
    arity: Arity::Fixed(2),
    eval: |args| args[0] * args[1],
    derivative: |args, primes| product_rule(&args[0], &primes[0], &args[1], &primes[1]),
};

pub(crate) static DIV: OperationDef = OperationDef {
    token: "/",
    arity: Arity::Fixed(2),
    // No special case for zero divisors: IEEE gives inf or NaN
    eval: |args| args[0] / args[1],
    derivative: |args, primes| quotient_rule(&args[0], &primes[0], &args[1], &primes[1]),
};

pub(crate) static NEGATE: OperationDef = OperationDef {
    token: "negate",
    arity: Arity::Fixed(1),
    eval: |args| -args[0],
    derivative: |_, primes| unary(&NEGATE, Arc::clone(&primes[0])),
};

pub(crate) static MEAN: OperationDef = OperationDef {
    token: "mean",
    arity: Arity::Variadic,
    eval: mean,
    derivative: |_, primes| {
        // mean(u_1..u_n)' = mean(u_1'..u_n')
        Expr::from_arcs(&MEAN, primes.to_vec())
    },
};

pub(crate) static VAR: OperationDef = OperationDef {
    token: "var",
    arity: Arity::Variadic,
    eval: variance,
    derivative: |args, primes| {
        // var(u)' = 2 * mean((u_i - m) * (u_i' - m')), m = mean(u), m' = mean(u')
        let m = Arc::new(Expr::from_arcs(&MEAN, args.to_vec()));
        let m_prime = Arc::new(Expr::from_arcs(&MEAN, primes.to_vec()));
        let terms = args
            .iter()
            .zip(primes)
            .map(|(u, u_prime)| {
                let deviation = binary(&SUB, Arc::clone(u), Arc::clone(&m));
                let deviation_prime = binary(&SUB, Arc::clone(u_prime), Arc::clone(&m_prime));
                Arc::new(binary(
                    &MUL,
                    Arc::new(deviation),
                    Arc::new(deviation_prime),
                ))
            })
            .collect();
        binary(&MUL, number(2.0), Arc::new(Expr::from_arcs(&MEAN, terms)))
    },
};

pub(crate) static GAUSS: OperationDef = OperationDef {
    token: "gauss",
    arity: Arity::Fixed(4),
    eval: |args| gaussian(args[0], args[1], args[2], args[3]),
    derivative: |args, primes| {
        // gauss(a, b, c, x) = a * exp(E), E = -(x - b)^2 / (2 * c^2)
        // gauss' = a' * gauss(1, b, c, x) + gauss(a, b, c, x) * E'
        let (b, c, x) = (&args[1], &args[2], &args[3]);
        let (a_prime, b_prime, c_prime, x_prime) = (&primes[0], &primes[1], &primes[2], &primes[3]);

        let unit = Expr::from_arcs(
            &GAUSS,
            vec![number(1.0), Arc::clone(b), Arc::clone(c), Arc::clone(x)],
        );
        let amplitude_term = binary(&MUL, Arc::clone(a_prime), Arc::new(unit));

        let d = Arc::new(binary(&SUB, Arc::clone(x), Arc::clone(b)));
        let d_prime = Arc::new(binary(&SUB, Arc::clone(x_prime), Arc::clone(b_prime)));
        let numerator = Arc::new(binary(&MUL, Arc::clone(&d), Arc::clone(&d)));
        let numerator_prime = Arc::new(product_rule(&d, &d_prime, &d, &d_prime));

        let c_squared = Arc::new(binary(&MUL, Arc::clone(c), Arc::clone(c)));
        let c_squared_prime = Arc::new(product_rule(c, c_prime, c, c_prime));
        let two = number(2.0);
        let denominator = Arc::new(binary(&MUL, Arc::clone(&two), Arc::clone(&c_squared)));
        let denominator_prime = Arc::new(product_rule(
            &two,
            &number(0.0),
            &c_squared,
            &c_squared_prime,
        ));

        let exponent_prime = unary(
            &NEGATE,
            Arc::new(quotient_rule(
                &numerator,
                &numerator_prime,
                &denominator,
                &denominator_prime,
            )),
        );

        // The Gaussian factor is the node itself, rebuilt over the same operands
        let gaussian = Expr::from_arcs(&GAUSS, args.to_vec());
        let exponent_term = binary(&MUL, Arc::new(gaussian), Arc::new(exponent_prime));

        binary(&ADD, Arc::new(amplitude_term), Arc::new(exponent_term))
    },
};

/// Return all operation definitions for populating the catalogue
pub(crate) fn all_definitions() -> [&'static OperationDef; 8] {
    [&ADD, &SUB, &MUL, &DIV, &NEGATE, &MEAN, &VAR, &GAUSS]
}
