use std::fmt::{self, Write};

use crate::poly::{Polynomial, Term, Variable};

/// Prints a polynomial in its canonical compact form, e.g. `2x2y+3x-5`.
pub struct PolynomialPrinter<'a> {
    pub poly: &'a Polynomial,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(poly: &'a Polynomial) -> PolynomialPrinter<'a> {
        PolynomialPrinter { poly }
    }
}

impl<'a> fmt::Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_char('0');
        }

        let mut first = true;
        for t in self.poly {
            if !first && t.coefficient() > 0 {
                f.write_char('+')?;
            }
            first = false;

            fmt::Display::fmt(t, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.degree {
            0 => Ok(()),
            1 => f.write_char(self.symbol),
            d => write!(f, "{}{}", self.symbol, d),
        }
    }
}

impl fmt::Display for Term {
    /// Print the term without a leading `+`. A coefficient of `1` or `-1` is
    /// only written out when there are no variables.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.coefficient() {
            1 if !self.is_constant() => {}
            -1 if !self.is_constant() => f.write_char('-')?,
            c => write!(f, "{}", c)?,
        }

        for v in self.variables() {
            fmt::Display::fmt(v, f)?;
        }
        Ok(())
    }
}
