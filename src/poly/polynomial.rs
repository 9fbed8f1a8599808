use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{instrument, trace};

use crate::error::{PolyError, Result};
use crate::parser;
use crate::printer::PolynomialPrinter;

use super::monomial::Term;

/// A multivariate polynomial with integer coefficients.
///
/// The terms are stored in descending precedence (see [`Term::cmp_precedence`]),
/// like terms are always combined and no term has a zero coefficient. As a
/// result, two polynomials are equal if and only if their term lists are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    #[inline]
    pub fn zero() -> Polynomial {
        Polynomial { terms: vec![] }
    }

    pub fn constant(coefficient: i64) -> Polynomial {
        if coefficient == 0 {
            Polynomial::zero()
        } else {
            Polynomial {
                terms: vec![Term::constant(coefficient)],
            }
        }
    }

    /// Build a polynomial from terms in any order. Like terms are added
    /// and terms whose coefficient ends up zero are removed.
    ///
    /// Only the final sum of each group of like terms has to fit in an `i64`,
    /// so `x` plus `i64::MAX x` minus `x` is fine.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Result<Polynomial> {
        let mut sorted: Vec<Term> = terms.into_iter().filter(|t| !t.is_zero()).collect();
        sorted.sort_by(|a, b| b.cmp_precedence(a));

        let mut combined: Vec<Term> = Vec::with_capacity(sorted.len());
        let mut sorted = sorted.into_iter().peekable();
        while let Some(mut t) = sorted.next() {
            // at most `usize::MAX` summands, so the sum cannot overflow an i128
            let mut sum = i128::from(t.coefficient());
            while let Some(next) = sorted.next_if(|n| n.same_variables(&t)) {
                sum += i128::from(next.coefficient());
            }

            let c = i64::try_from(sum)
                .map_err(|_| PolyError::Overflow("coefficient sum exceeds i64"))?;
            if c != 0 {
                t.set_coefficient(c);
                combined.push(t);
            }
        }

        Ok(Polynomial { terms: combined })
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns `true` if the polynomial has no variables, which includes zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Term::is_constant)
    }

    /// Get the highest degree of `symbol` over all terms.
    pub fn degree(&self, symbol: char) -> u32 {
        self.terms.iter().map(|t| t.degree(symbol)).max().unwrap_or(0)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Polynomial) -> Result<Polynomial> {
        self.merge(other, false)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial> {
        self.merge(other, true)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn neg(&self) -> Result<Polynomial> {
        let terms = self
            .terms
            .iter()
            .map(Term::checked_neg)
            .collect::<Result<Vec<_>>>()?;
        Ok(Polynomial { terms })
    }

    /// Merge two sorted polynomials, optionally negating every term taken from `other`.
    /// Neither input is modified: every term in the result is a fresh copy.
    fn merge(&self, other: &Polynomial, negate_other: bool) -> Result<Polynomial> {
        let take_other = |t: &Term| {
            if negate_other {
                t.checked_neg()
            } else {
                Ok(t.clone())
            }
        };

        let mut terms = Vec::with_capacity(self.nterms() + other.nterms());
        let mut i = 0;
        let mut j = 0;

        while i < self.nterms() && j < other.nterms() {
            let (a, b) = (&self.terms[i], &other.terms[j]);
            match a.cmp_precedence(b) {
                Ordering::Greater => {
                    terms.push(a.clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(take_other(b)?);
                    j += 1;
                }
                Ordering::Equal => {
                    let coefficient = if negate_other {
                        a.coefficient().checked_sub(b.coefficient())
                    } else {
                        a.coefficient().checked_add(b.coefficient())
                    }
                    .ok_or(PolyError::Overflow("coefficient sum exceeds i64"))?;

                    if coefficient != 0 {
                        terms.push(a.with_coefficient(coefficient));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&self.terms[i..]);
        for b in &other.terms[j..] {
            terms.push(take_other(b)?);
        }

        Ok(Polynomial { terms })
    }

    /// Multiply two polynomials by distributing every term of `self` over
    /// `other` and adding the partial products one by one.
    ///
    /// Multiplying a sorted polynomial by a single term keeps it sorted, so each
    /// partial product can be merged directly. This performs `O(n^2 m)` term
    /// operations in the worst case, which is fine for the small inputs this is meant for.
    #[allow(clippy::should_implement_trait)]
    #[instrument(level = "trace", skip_all, fields(lhs = %self, rhs = %other))]
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial> {
        let mut result = Polynomial::zero();

        for t in &self.terms {
            let partial = Polynomial {
                terms: other
                    .terms
                    .iter()
                    .map(|s| t.checked_mul(s))
                    .collect::<Result<Vec<_>>>()?,
            };
            trace!("partial product {} * ({}) = {}", t, other, partial);

            result = result.add(&partial)?;
        }

        Ok(result)
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}

impl FromStr for Polynomial {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Polynomial> {
        parser::parse(s)
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
