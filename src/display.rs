// Rendering of expression trees in the three textual notations
use crate::{Expr, ExprKind};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Textual notation of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// Implicit postfix without brackets: `x y +`
    Infix,
    /// Operator first, bracketed: `(+ x y)`
    #[default]
    Prefix,
    /// Operator last, bracketed: `(x y +)`
    Postfix,
}

impl Notation {
    pub fn name(self) -> &'static str {
        match self {
            Notation::Infix => "infix",
            Notation::Prefix => "prefix",
            Notation::Postfix => "postfix",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "infix" | "rpn" => Ok(Notation::Infix),
            "prefix" => Ok(Notation::Prefix),
            "postfix" => Ok(Notation::Postfix),
            other => Err(format!("unknown notation '{}'", other)),
        }
    }
}

impl Expr {
    /// Render the tree in the given notation
    ///
    /// Every rendering can be parsed back with the same notation, except
    /// that implicit postfix cannot delimit variadic operands that do not
    /// consume the whole value stack.
    ///
    /// # Example
    /// ```
    /// use exprdiff::{Expr, Notation, Variable};
    ///
    /// let expr = Expr::add_expr(Variable::X.into(), Expr::number(2.0));
    /// assert_eq!(expr.render(Notation::Infix), "x 2 +");
    /// assert_eq!(expr.render(Notation::Prefix), "(+ x 2)");
    /// assert_eq!(expr.render(Notation::Postfix), "(x 2 +)");
    /// ```
    pub fn render(&self, notation: Notation) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_expr(&mut out, self, notation);
        out
    }
}

fn write_expr<W: Write>(out: &mut W, expr: &Expr, notation: Notation) -> fmt::Result {
    match &expr.kind {
        ExprKind::Const(n) => write!(out, "{}", n),
        ExprKind::Variable(v) => out.write_str(v.name()),
        ExprKind::Operation { op, args } => match notation {
            Notation::Infix => {
                for arg in args {
                    write_expr(out, arg, notation)?;
                    out.write_char(' ')?;
                }
                out.write_str(op.token)
            }
            Notation::Prefix => {
                write!(out, "({}", op.token)?;
                for arg in args {
                    out.write_char(' ')?;
                    write_expr(out, arg, notation)?;
                }
                out.write_char(')')
            }
            Notation::Postfix => {
                out.write_char('(')?;
                for arg in args {
                    write_expr(out, arg, notation)?;
                    out.write_char(' ')?;
                }
                write!(out, "{})", op.token)
            }
        },
    }
}

/// Displays the implicit postfix form
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, Notation::Infix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variable;

    fn sample() -> Expr {
        // (x - 0.5) * negate(y)
        Expr::mul_expr(
            Expr::sub_expr(Variable::X.into(), Expr::number(0.5)),
            Expr::negate(Variable::Y.into()),
        )
    }

    #[test]
    fn test_render_all_notations() {
        let expr = sample();
        assert_eq!(expr.render(Notation::Infix), "x 0.5 - y negate *");
        assert_eq!(expr.render(Notation::Prefix), "(* (- x 0.5) (negate y))");
        assert_eq!(expr.render(Notation::Postfix), "((x 0.5 -) (y negate) *)");
        assert_eq!(format!("{}", expr), "x 0.5 - y negate *");
    }

    #[test]
    fn test_render_variadic() {
        let empty = Expr::mean(vec![]);
        assert_eq!(empty.render(Notation::Prefix), "(mean)");
        assert_eq!(empty.render(Notation::Postfix), "(mean)");
        assert_eq!(empty.render(Notation::Infix), "mean");

        let three = Expr::variance(vec![
            Variable::X.into(),
            Variable::Y.into(),
            Variable::Z.into(),
        ]);
        assert_eq!(three.render(Notation::Prefix), "(var x y z)");
        assert_eq!(three.render(Notation::Postfix), "(x y z var)");
    }

    #[test]
    fn test_render_numbers() {
        assert_eq!(Expr::number(2.0).render(Notation::Prefix), "2");
        assert_eq!(Expr::number(-1.25).render(Notation::Prefix), "-1.25");
        assert_eq!(Expr::number(f64::INFINITY).render(Notation::Prefix), "inf");
        assert_eq!(Expr::number(f64::NAN).render(Notation::Prefix), "NaN");
    }

    #[test]
    fn test_notation_from_str() {
        assert_eq!("Postfix".parse::<Notation>(), Ok(Notation::Postfix));
        assert_eq!("rpn".parse::<Notation>(), Ok(Notation::Infix));
        assert!("polish".parse::<Notation>().is_err());

        // The CLI prints defaults with Display and reads them back with FromStr
        for notation in [Notation::Infix, Notation::Prefix, Notation::Postfix] {
            assert_eq!(notation.to_string().parse::<Notation>(), Ok(notation));
        }
    }
}
