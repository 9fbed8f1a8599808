pub mod monomial;
pub mod polynomial;

pub use self::monomial::{Term, Variable};
pub use self::polynomial::Polynomial;

/// The number of variables a term stores without allocating.
pub const INLINED_VARIABLES: usize = 4;
