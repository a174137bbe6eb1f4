use super::term_from_text;
use super::tokenizer::{Token, Tokenizer};
use crate::error::{Context, ParseError};
use crate::functions::{Arity, Catalogue};
use crate::Expr;

/// A value on the stack together with where its first token started
struct Pending<'a> {
    expr: Expr,
    first_token: &'a str,
    context: Context,
}

/// Parse bracket-free implicit postfix (`x y + z *`) with a value stack
///
/// Operands push a value; an operator pops its arity's worth of values,
/// a variadic operator pops every value on the stack.
pub(crate) fn parse_implicit_postfix(
    input: &str,
    catalogue: &Catalogue,
) -> Result<Expr, ParseError> {
    let mut tokens = Tokenizer::new(input);
    let mut stack: Vec<Pending> = Vec::new();

    loop {
        let text = match tokens.next_token() {
            Token::End => break,
            Token::Text(text) => text,
            bracket => {
                return Err(ParseError::InvalidTerm {
                    found: bracket.to_string(),
                    context: tokens.context(),
                });
            }
        };

        if let Some(op) = catalogue.operation(text) {
            let wanted = match op.arity {
                Arity::Fixed(n) => n,
                Arity::Variadic => stack.len(),
            };
            if stack.len() < wanted {
                return Err(ParseError::ArityMismatch {
                    token: op.token.to_string(),
                    expected: wanted,
                    found: stack.len(),
                    context: tokens.context(),
                });
            }

            let operands = stack.split_off(stack.len() - wanted);
            let (first_token, context) = match operands.first() {
                Some(first) => (first.first_token, first.context.clone()),
                None => (text, tokens.context()),
            };
            let args = operands.into_iter().map(|p| p.expr).collect();
            stack.push(Pending {
                expr: Expr::from_exprs(op, args),
                first_token,
                context,
            });
            continue;
        }

        let expr = term_from_text(catalogue, text).ok_or_else(|| ParseError::InvalidTerm {
            found: text.to_string(),
            context: tokens.context(),
        })?;
        stack.push(Pending {
            expr,
            first_token: text,
            context: tokens.context(),
        });
    }

    let mut values = stack.into_iter();
    match (values.next(), values.next()) {
        (Some(only), None) => Ok(only.expr),
        (Some(_), Some(extra)) => Err(ParseError::ExtraToken {
            found: extra.first_token.to_string(),
            context: extra.context,
        }),
        (None, _) => Err(ParseError::InvalidTerm {
            found: Token::End.to_string(),
            context: tokens.context(),
        }),
    }
}
