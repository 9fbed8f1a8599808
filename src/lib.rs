//! Polycalc performs arithmetic on multivariate polynomials with integer
//! coefficients, written in a compact form without operators between
//! factors: `2x2y+3x-5` stands for `2*x^2*y + 3*x - 5`.
//!
//! Polynomials are always kept in canonical form: like terms are combined,
//! zero terms are removed and the terms are sorted by precedence, where
//! symbols earlier in the alphabet and higher degrees come first.
//!
//! For example:
//!
//! ```
//! use polycalc::{evaluate, parse, Operator};
//!
//! let a = parse("x+1").unwrap();
//! let b = parse("x-1").unwrap();
//! let r = evaluate("*".parse::<Operator>().unwrap(), &a, &b).unwrap();
//! assert_eq!(r.to_string(), "x2-1");
//! ```

pub mod batch;
pub mod error;
pub mod evaluate;
pub mod parser;
pub mod poly;
pub mod printer;

pub use error::{PolyError, Result};
pub use evaluate::{evaluate, Operator};
pub use parser::parse;
pub use poly::{Polynomial, Term, Variable};
