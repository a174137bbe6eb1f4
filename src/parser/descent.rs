use super::term_from_text;
use super::tokenizer::{Token, Tokenizer};
use crate::error::ParseError;
use crate::functions::{Catalogue, OperationDef};
use crate::{Expr, Notation};

/// Parse a bracketed prefix or postfix expression
pub(crate) fn parse_bracketed(
    input: &str,
    notation: Notation,
    catalogue: &Catalogue,
    max_depth: Option<usize>,
) -> Result<Expr, ParseError> {
    let mut parser = Descent {
        tokens: Tokenizer::new(input),
        catalogue,
        notation,
        max_depth,
        depth: 0,
    };

    parser.tokens.next_token();
    let expr = parser.parse_expression()?;

    match parser.tokens.current() {
        Token::End => Ok(expr),
        found => Err(ParseError::ExtraToken {
            found: found.to_string(),
            context: parser.tokens.context(),
        }),
    }
}

struct Descent<'a, 'c> {
    tokens: Tokenizer<'a>,
    catalogue: &'c Catalogue,
    notation: Notation,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'a> Descent<'a, '_> {
    /// Parse one expression starting at the current token, leaving the
    /// tokenizer on the token after it
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        if self.tokens.current() != Token::Open {
            return self.parse_term();
        }

        self.depth += 1;
        if let Some(limit) = self.max_depth
            && self.depth > limit
        {
            return Err(ParseError::MaxDepthExceeded {
                limit,
                context: self.tokens.context(),
            });
        }

        let expr = match self.notation {
            Notation::Postfix => self.parse_postfix_body(),
            _ => self.parse_prefix_body(),
        }?;
        self.depth -= 1;
        Ok(expr)
    }

    /// `(` op operand* `)` with the current token on `(`
    fn parse_prefix_body(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.next_token();
        let op = match token {
            Token::Text(text) => self.catalogue.operation(text),
            _ => None,
        }
        .ok_or_else(|| ParseError::UnknownOperator {
            token: token.to_string(),
            context: self.tokens.context(),
        })?;
        self.tokens.next_token();

        let mut args = Vec::new();
        while !matches!(self.tokens.current(), Token::Close | Token::End) {
            args.push(self.parse_expression()?);
        }

        self.check_arity(op, args.len())?;
        self.expect_close()?;
        Ok(Expr::from_exprs(op, args))
    }

    /// `(` operand* op `)` with the current token on `(`
    ///
    /// Operands are parsed until the current token names a catalogued
    /// operator; that token closes the operand list.
    fn parse_postfix_body(&mut self) -> Result<Expr, ParseError> {
        self.tokens.next_token();

        let mut args = Vec::new();
        let op = loop {
            let token = self.tokens.current();
            if let Token::Text(text) = token
                && let Some(op) = self.catalogue.operation(text)
            {
                break op;
            }
            if matches!(token, Token::Close | Token::End) {
                return Err(ParseError::MissingOperator {
                    found: token.to_string(),
                    context: self.tokens.context(),
                });
            }
            // A non-term right before `)` sits in operator position
            if let Token::Text(text) = token
                && term_from_text(self.catalogue, text).is_none()
                && self.peek() == Token::Close
            {
                return Err(ParseError::UnknownOperator {
                    token: text.to_string(),
                    context: self.tokens.context(),
                });
            }
            args.push(self.parse_expression()?);
        };

        self.check_arity(op, args.len())?;
        self.tokens.next_token();
        self.expect_close()?;
        Ok(Expr::from_exprs(op, args))
    }

    /// The token after the current one, without consuming anything
    fn peek(&self) -> Token<'a> {
        let mut ahead = self.tokens.clone();
        ahead.next_token()
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.current();
        let expr = match token {
            Token::Text(text) => term_from_text(self.catalogue, text),
            _ => None,
        }
        .ok_or_else(|| ParseError::InvalidTerm {
            found: token.to_string(),
            context: self.tokens.context(),
        })?;
        self.tokens.next_token();
        Ok(expr)
    }

    fn check_arity(&self, op: &OperationDef, found: usize) -> Result<(), ParseError> {
        match op.arity {
            crate::Arity::Fixed(expected) if expected != found => {
                Err(ParseError::ArityMismatch {
                    token: op.token.to_string(),
                    expected,
                    found,
                    context: self.tokens.context(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Consume the closing bracket of an operation
    fn expect_close(&mut self) -> Result<(), ParseError> {
        match self.tokens.current() {
            Token::Close => {
                self.tokens.next_token();
                Ok(())
            }
            found => Err(ParseError::ExpectedCloseBracket {
                found: found.to_string(),
                notation: self.notation,
                context: self.tokens.context(),
            }),
        }
    }
}
