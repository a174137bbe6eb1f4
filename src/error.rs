use std::fmt;
use thiserror::Error;

use crate::Notation;

/// Source location span for error reporting
/// Represents a range of characters in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            format!(" at end of input (position {})", self.start + 1)
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Where a parse failure happened: the input consumed before the offending
/// token, and the span of that token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub prefix: String,
    pub span: Span,
}

impl Context {
    pub fn new(prefix: impl Into<String>, span: Span) -> Self {
        Context {
            prefix: prefix.into(),
            span,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.span.display())
    }
}

/// The two classes every parse failure falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A well-formed token in the wrong place: unknown operator, wrong arity,
    /// bracket mismatch, trailing input
    UnexpectedToken,
    /// A token that cannot stand where a term was expected
    InvalidToken,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken => f.write_str("UnexpectedTokenError"),
            ParseErrorKind::InvalidToken => f.write_str("InvalidTokenError"),
        }
    }
}

/// Errors that can occur while parsing an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected operator '{token}'{context}")]
    UnknownOperator { token: String, context: Context },

    #[error("Expected an operator, but got '{found}'{context}")]
    MissingOperator { found: String, context: Context },

    #[error("Operator '{token}' expects {expected} operand(s), but got {found}{context}")]
    ArityMismatch {
        token: String,
        expected: usize,
        found: usize,
        context: Context,
    },

    #[error("Expected ')', but got '{found}'{context}")]
    ExpectedCloseBracket {
        found: String,
        notation: Notation,
        context: Context,
    },

    #[error("Expected end of input, but got extra token '{found}'{context}")]
    ExtraToken { found: String, context: Context },

    #[error("Expected number or variable, but got '{found}'{context}")]
    InvalidTerm { found: String, context: Context },

    #[error("Expression nesting depth exceeds maximum limit of {limit}{context}")]
    MaxDepthExceeded { limit: usize, context: Context },
}

impl ParseError {
    /// Classify this error as an unexpected or invalid token
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::UnknownOperator { .. }
            | ParseError::MissingOperator { .. }
            | ParseError::ArityMismatch { .. }
            | ParseError::ExtraToken { .. }
            | ParseError::MaxDepthExceeded { .. } => ParseErrorKind::UnexpectedToken,
            ParseError::ExpectedCloseBracket { notation, .. } => match notation {
                Notation::Postfix => ParseErrorKind::InvalidToken,
                _ => ParseErrorKind::UnexpectedToken,
            },
            ParseError::InvalidTerm { .. } => ParseErrorKind::InvalidToken,
        }
    }

    pub fn context(&self) -> &Context {
        match self {
            ParseError::UnknownOperator { context, .. }
            | ParseError::MissingOperator { context, .. }
            | ParseError::ArityMismatch { context, .. }
            | ParseError::ExpectedCloseBracket { context, .. }
            | ParseError::ExtraToken { context, .. }
            | ParseError::InvalidTerm { context, .. }
            | ParseError::MaxDepthExceeded { context, .. } => context,
        }
    }

    /// Input consumed before the offending token
    pub fn prefix(&self) -> &str {
        &self.context().prefix
    }

    pub fn span(&self) -> Span {
        self.context().span
    }

    /// Render the consumed prefix with a caret under the failure column
    ///
    /// ```
    /// use exprdiff::{Notation, parse};
    ///
    /// let err = parse("(+ x y z)", Notation::Prefix).unwrap_err();
    /// assert_eq!(err.pointer(), "(+ x y z\n        ^");
    /// ```
    pub fn pointer(&self) -> String {
        let prefix = self.prefix();
        let column = prefix.chars().count();
        format!("{}\n{}^", prefix, " ".repeat(column))
    }
}
