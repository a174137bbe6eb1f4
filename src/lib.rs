//! Expression Trees with Symbolic Differentiation
//!
//! A small library for formulas over the variables `x`, `y` and `z`.
//!
//! # Features
//! - Immutable expression trees over a fixed operation catalogue
//!   (`+ - * / negate`, variadic `mean`/`var`, and `gauss`)
//! - Numeric evaluation with IEEE semantics
//! - Symbolic differentiation producing new trees (product, quotient and chain rules)
//! - Rendering and parsing in three notations: implicit postfix `x y +`,
//!   prefix `(+ x y)` and postfix `(x y +)`
//! - Parse errors that carry the consumed input for caret-style reporting
//!
//! # Usage Examples
//!
//! ```
//! use exprdiff::{Notation, parse};
//!
//! let expr = parse("(+ x x)", Notation::Prefix).unwrap();
//! assert_eq!(expr.evaluate(&[3.0, 0.0, 0.0]), 6.0);
//!
//! let derivative = expr.differentiate("x");
//! assert_eq!(derivative.render(Notation::Prefix), "(+ 1 1)");
//! assert_eq!(derivative.evaluate(&[42.0, 0.0, 0.0]), 2.0);
//! ```
//!
//! ```
//! use exprdiff::{Notation, ParseErrorKind, parse};
//!
//! let err = parse("(% x y)", Notation::Prefix).unwrap_err();
//! assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
//! assert_eq!(err.prefix(), "(");
//! ```

mod ast;
mod differentiation;
mod display;
mod error;
pub mod functions;
mod helpers;
mod parser;
pub mod visitor;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{Expr, ExprKind, UnknownVariable, Variable};
pub use display::Notation;
pub use error::{Context, ParseError, ParseErrorKind, Span};
pub use functions::{Arity, Catalogue, OperationDef};
pub use helpers::{diff_str, evaluate_str, gradient, gradient_str};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, Token, Tokenizer, parse};
