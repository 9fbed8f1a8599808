use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::{PolyError, Result};

use super::INLINED_VARIABLES;

/// A single symbol raised to a positive power, e.g. `x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    pub symbol: char,
    pub degree: u32,
}

impl Variable {
    #[inline]
    pub fn new(symbol: char, degree: u32) -> Variable {
        Variable { symbol, degree }
    }
}

/// A coefficient times a product of variable powers. The variables are
/// kept sorted by symbol and every symbol occurs at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: i64,
    variables: SmallVec<[Variable; INLINED_VARIABLES]>,
}

impl Term {
    /// Create a term from variables in any order. Variables of degree zero
    /// are dropped and repeated symbols are multiplied together, so `x2 * x`
    /// becomes `x3`. A zero coefficient gives the zero constant.
    ///
    /// Every symbol must be a lowercase ASCII letter, otherwise
    /// [`PolyError::InvalidSymbol`] is returned.
    pub fn new(coefficient: i64, variables: impl IntoIterator<Item = Variable>) -> Result<Term> {
        let mut vars: SmallVec<[Variable; INLINED_VARIABLES]> = SmallVec::new();
        for v in variables {
            if !v.symbol.is_ascii_lowercase() {
                return Err(PolyError::InvalidSymbol(v.symbol));
            }
            if v.degree > 0 {
                vars.push(v);
            }
        }

        if coefficient == 0 {
            return Ok(Term::constant(0));
        }
        vars.sort_by_key(|v| v.symbol);

        let mut merged: SmallVec<[Variable; INLINED_VARIABLES]> = SmallVec::new();
        for v in vars {
            match merged.last_mut() {
                Some(last) if last.symbol == v.symbol => {
                    last.degree = last
                        .degree
                        .checked_add(v.degree)
                        .ok_or(PolyError::Overflow("degree exceeds u32"))?;
                }
                _ => merged.push(v),
            }
        }

        Ok(Term {
            coefficient,
            variables: merged,
        })
    }

    #[inline]
    pub fn constant(coefficient: i64) -> Term {
        Term {
            coefficient,
            variables: SmallVec::new(),
        }
    }

    #[inline]
    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    #[inline]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.variables.is_empty()
    }

    /// Get the degree of `symbol` in this term, which is 0 when it does not occur.
    pub fn degree(&self, symbol: char) -> u32 {
        self.variables
            .iter()
            .find(|v| v.symbol == symbol)
            .map(|v| v.degree)
            .unwrap_or(0)
    }

    /// Compare the precedence of two terms, where `Greater` means that `self`
    /// comes first in a polynomial. Symbols earlier in the alphabet win,
    /// then higher degrees. When one variable list is a prefix of the other,
    /// the longer list wins, so that constants come last.
    pub fn cmp_precedence(&self, other: &Term) -> Ordering {
        for (a, b) in self.variables.iter().zip(&other.variables) {
            match b.symbol.cmp(&a.symbol).then(a.degree.cmp(&b.degree)) {
                Ordering::Equal => {}
                o => return o,
            }
        }

        self.variables.len().cmp(&other.variables.len())
    }

    #[inline]
    pub fn same_variables(&self, other: &Term) -> bool {
        self.variables == other.variables
    }

    #[inline]
    pub(crate) fn set_coefficient(&mut self, coefficient: i64) {
        self.coefficient = coefficient;
    }

    /// Copy the variables of this term under a new coefficient.
    #[inline]
    pub(crate) fn with_coefficient(&self, coefficient: i64) -> Term {
        Term {
            coefficient,
            variables: self.variables.clone(),
        }
    }

    pub fn checked_neg(&self) -> Result<Term> {
        let coefficient = self
            .coefficient
            .checked_neg()
            .ok_or(PolyError::Overflow("coefficient negation exceeds i64"))?;
        Ok(self.with_coefficient(coefficient))
    }

    pub fn checked_mul(&self, other: &Term) -> Result<Term> {
        let coefficient = self
            .coefficient
            .checked_mul(other.coefficient)
            .ok_or(PolyError::Overflow("coefficient product exceeds i64"))?;

        Ok(Term {
            coefficient,
            variables: merge_variables(&self.variables, &other.variables)?,
        })
    }
}

/// Multiply two symbol-sorted variable lists by merging them.
fn merge_variables(
    a: &[Variable],
    b: &[Variable],
) -> Result<SmallVec<[Variable; INLINED_VARIABLES]>> {
    let mut result = SmallVec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].symbol.cmp(&b[j].symbol) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                let degree = a[i]
                    .degree
                    .checked_add(b[j].degree)
                    .ok_or(PolyError::Overflow("degree exceeds u32"))?;
                result.push(Variable::new(a[i].symbol, degree));
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    Ok(result)
}
