//! Parser module - converts strings to expression trees
mod descent;
mod rpn;
mod tokenizer;

pub use tokenizer::{Token, Tokenizer};

use crate::functions::Catalogue;
use crate::{Expr, Notation, ParseError, Variable};

/// Default maximum nesting depth for callers that want a bound
pub const DEFAULT_MAX_DEPTH: usize = 1_000;

/// Parse a string in the given notation into an expression tree
///
/// `Notation::Prefix` reads `(op a b ...)`, `Notation::Postfix` reads
/// `(a b ... op)` and `Notation::Infix` reads the bracket-free implicit
/// postfix form `a b op`. Nesting depth is unbounded; use [`Parser`] to
/// set a limit.
///
/// # Example
/// ```
/// use exprdiff::{Notation, parse};
///
/// let expr = parse("(+ x x)", Notation::Prefix).unwrap();
/// assert_eq!(expr.evaluate(&[3.0, 0.0, 0.0]), 6.0);
///
/// let expr = parse("(x x *)", Notation::Postfix).unwrap();
/// assert_eq!(expr.evaluate(&[5.0, 0.0, 0.0]), 25.0);
/// ```
///
/// # Errors
/// Returns `ParseError` if:
/// - An operator token is not catalogued
/// - An operator gets the wrong number of operands
/// - A bracket is missing or misplaced, or tokens trail a complete expression
/// - A bare term is neither a number, a named constant nor a variable
pub fn parse(input: &str, notation: Notation) -> Result<Expr, ParseError> {
    Parser::new(notation).parse(input)
}

/// Configurable parser
///
/// # Example
/// ```
/// use exprdiff::{Notation, ParseError, Parser};
///
/// let parser = Parser::new(Notation::Postfix).max_depth(Some(2));
/// assert!(parser.parse("((x y +) z *)").is_ok());
/// assert!(matches!(
///     parser.parse("(((x y +) z *) x -)"),
///     Err(ParseError::MaxDepthExceeded { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'c> {
    notation: Notation,
    max_depth: Option<usize>,
    catalogue: &'c Catalogue,
}

impl Parser<'static> {
    /// Create a parser over the global catalogue
    pub fn new(notation: Notation) -> Self {
        Parser::with_catalogue(notation, Catalogue::global())
    }
}

impl<'c> Parser<'c> {
    /// Create a parser over a specific catalogue
    pub fn with_catalogue(notation: Notation, catalogue: &'c Catalogue) -> Self {
        Parser {
            notation,
            max_depth: None,
            catalogue,
        }
    }

    /// Limit bracket nesting; `None` leaves it unbounded
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn parse(&self, input: &str) -> Result<Expr, ParseError> {
        log::debug!("parsing {} input of {} bytes", self.notation, input.len());
        let result = match self.notation {
            Notation::Infix => rpn::parse_implicit_postfix(input, self.catalogue),
            Notation::Prefix | Notation::Postfix => {
                descent::parse_bracketed(input, self.notation, self.catalogue, self.max_depth)
            }
        };
        match &result {
            Ok(expr) => log::debug!("parsed {} nodes", expr.node_count()),
            Err(err) => log::debug!("parse failed: {}", err),
        }
        result
    }
}

/// Classify a bare term: named constant, variable, then number
pub(crate) fn term_from_text(catalogue: &Catalogue, text: &str) -> Option<Expr> {
    if let Some(value) = catalogue.constant(text) {
        return Some(Expr::number(value));
    }
    if let Some(var) = Variable::from_name(text) {
        return Some(Expr::variable(var));
    }
    text.parse::<f64>().ok().map(Expr::number)
}
