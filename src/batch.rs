//! Line-oriented evaluation of many expressions.
//!
//! The input starts with the number of expressions `N`, followed by `N` lines
//! of the form `OPERATOR POLY1 POLY2`. For every line, the canonical form of the
//! result is written to the output on its own line.

use std::io::{BufRead, Write};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::PolyError;
use crate::evaluate::{evaluate, Operator};
use crate::parser::parse;
use crate::poly::Polynomial;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Abort the run at the first line that fails, instead of writing an
    /// error line and continuing with the next expression.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub failed: usize,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing expression count")]
    MissingCount,
    #[error("invalid expression count `{0}`")]
    InvalidCount(String),
    #[error("expected {expected} expressions, found {found}")]
    MissingLines { expected: usize, found: usize },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
}

/// The reason a single expression line could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected `OPERATOR POLY1 POLY2`, found {0} fields")]
    Fields(usize),
    #[error(transparent)]
    Eval(#[from] PolyError),
}

/// Evaluate a single `OPERATOR POLY1 POLY2` line.
pub fn evaluate_line(line: &str) -> Result<Polynomial, LineError> {
    let fields: SmallVec<[&str; 3]> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(LineError::Fields(fields.len()));
    }

    let op: Operator = fields[0].parse()?;
    let a = parse(fields[1])?;
    let b = parse(fields[2])?;
    Ok(evaluate(op, &a, &b)?)
}

/// Read the expression count and the expressions from `reader` and write the
/// results to `writer`. Blank lines before the count are skipped.
pub fn run(
    reader: impl BufRead,
    mut writer: impl Write,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let count = loop {
        let Some((_, line)) = lines.next() else {
            return Err(BatchError::MissingCount);
        };
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            break line
                .parse::<usize>()
                .map_err(|_| BatchError::InvalidCount(line.to_owned()))?;
        }
    };

    debug!("Evaluating {} expressions", count);

    let mut summary = BatchSummary::default();
    for _ in 0..count {
        let Some((line_number, line)) = lines.next() else {
            return Err(BatchError::MissingLines {
                expected: count,
                found: summary.evaluated + summary.failed,
            });
        };
        let line = line?;

        match evaluate_line(&line) {
            Ok(r) => {
                writeln!(writer, "{}", r)?;
                summary.evaluated += 1;
            }
            Err(e) => {
                if options.fail_fast {
                    return Err(BatchError::Line {
                        line: line_number,
                        source: e,
                    });
                }

                warn!("Line {}: {}", line_number, e);
                writeln!(writer, "error: {}", e)?;
                summary.failed += 1;
            }
        }
    }

    writer.flush()?;
    debug!(
        "Evaluated {} expressions, {} failed",
        summary.evaluated, summary.failed
    );
    Ok(summary)
}
