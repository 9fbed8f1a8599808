use smartstring::{LazyCompact, SmartString};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolyError>;

/// Errors raised while parsing or evaluating a single expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    #[error("parse error at position {position}: {reason}")]
    Parse { position: usize, reason: String },
    #[error("unknown operator `{0}`, expected one of `+`, `-`, `*`")]
    UnknownOperator(SmartString<LazyCompact>),
    #[error("overflow: {0}")]
    Overflow(&'static str),
    #[error("invalid variable symbol `{0}`, expected a lowercase letter")]
    InvalidSymbol(char),
}

impl PolyError {
    pub(crate) fn parse(position: usize, reason: impl Into<String>) -> PolyError {
        PolyError::Parse {
            position,
            reason: reason.into(),
        }
    }
}
