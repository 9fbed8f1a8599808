use std::fmt::{self, Write};
use std::str::FromStr;

use tracing::instrument;

use crate::error::{PolyError, Result};
use crate::poly::Polynomial;

/// A binary operation between two polynomials.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => f.write_char('+'),
            Operator::Sub => f.write_char('-'),
            Operator::Mul => f.write_char('*'),
        }
    }
}

impl FromStr for Operator {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Operator> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            _ => Err(PolyError::UnknownOperator(s.into())),
        }
    }
}

/// Apply `op` to `a` and `b`. Both operands are left untouched.
#[instrument(level = "trace", fields(%op, %a, %b))]
pub fn evaluate(op: Operator, a: &Polynomial, b: &Polynomial) -> Result<Polynomial> {
    match op {
        Operator::Add => a.add(b),
        Operator::Sub => a.sub(b),
        Operator::Mul => a.mul(b),
    }
}
