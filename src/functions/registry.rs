use crate::Expr;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// How many operands an operation takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many operands
    Fixed(usize),
    /// Any number of operands, including none
    Variadic,
}

impl Arity {
    /// Check if an operand count is acceptable
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => *n == count,
            Arity::Variadic => true,
        }
    }
}

/// Definition of an operation including its evaluation and differentiation logic
pub struct OperationDef {
    /// Token naming the operation in every notation (e.g., "+", "gauss")
    pub token: &'static str,

    /// Acceptable operand count
    pub arity: Arity,

    /// Numerical evaluation over already-evaluated operands
    pub eval: fn(&[f64]) -> f64,

    /// Symbolic differentiation
    /// Arguments: (operands of the node, derivatives of the operands, in the same order)
    /// Returns a new tree for the derivative of the whole node
    pub derivative: fn(&[Arc<Expr>], &[Arc<Expr>]) -> Expr,
}

impl OperationDef {
    /// Helper to check if operand count is valid
    pub fn validate_arity(&self, operands: usize) -> bool {
        self.arity.accepts(operands)
    }
}

// Operations are identified by their token
impl PartialEq for OperationDef {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl fmt::Debug for OperationDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDef")
            .field("token", &self.token)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Immutable table of operations and named constants
///
/// Built once from the static definitions and never mutated afterwards.
/// [`Catalogue::global`] is the shared instance the parser uses by default.
#[derive(Debug)]
pub struct Catalogue {
    operations: FxHashMap<&'static str, &'static OperationDef>,
    constants: FxHashMap<&'static str, f64>,
}

static CATALOGUE: OnceLock<Catalogue> = OnceLock::new();

impl Catalogue {
    /// Build the standard catalogue
    pub fn standard() -> Self {
        let definitions = super::definitions::all_definitions();
        let mut operations =
            FxHashMap::with_capacity_and_hasher(definitions.len(), Default::default());
        for def in definitions {
            operations.insert(def.token, def);
        }

        let constants: FxHashMap<&'static str, f64> =
            super::definitions::NAMED_CONSTANTS.iter().copied().collect();

        log::debug!(
            "catalogue built with {} operations and {} constants",
            operations.len(),
            constants.len()
        );

        Catalogue {
            operations,
            constants,
        }
    }

    /// The process-wide catalogue, built on first use
    pub fn global() -> &'static Catalogue {
        CATALOGUE.get_or_init(Catalogue::standard)
    }

    /// Get an operation definition by token - O(1) HashMap lookup
    pub fn operation(&self, token: &str) -> Option<&'static OperationDef> {
        self.operations.get(token).copied()
    }

    /// Value of a named constant such as `one`
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// All operations, in no particular order
    pub fn operations(&self) -> impl Iterator<Item = &'static OperationDef> + '_ {
        self.operations.values().copied()
    }
}
