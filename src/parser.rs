//! Parser for polynomials written in compact form, such as `2x2y+3x-5`.
//!
//! A term is an optional sign, an optional coefficient and a list of
//! variables, where each variable is a lowercase letter followed by an
//! optional degree. The input does not have to be sorted: the variables of
//! every term are sorted by symbol, and the terms are sorted and combined.

use smallvec::SmallVec;
use smartstring::{LazyCompact, SmartString};

use crate::error::{PolyError, Result};
use crate::poly::{Polynomial, Term, Variable, INLINED_VARIABLES};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Sign(bool), // `true` if negative
    Number(SmartString<LazyCompact>),
    Symbol(char),
}

/// A token together with the character offset at which it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Spanned {
    token: Token,
    position: usize,
}

fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let mut tokens: Vec<Spanned> = Vec::with_capacity(input.len());

    for (position, c) in input.chars().enumerate() {
        let token = match c {
            '+' => Token::Sign(false),
            '-' => Token::Sign(true),
            'a'..='z' => Token::Symbol(c),
            '0'..='9' => {
                if let Some(Spanned {
                    token: Token::Number(n),
                    ..
                }) = tokens.last_mut()
                {
                    n.push(c);
                    continue;
                }
                let mut n = SmartString::new();
                n.push(c);
                Token::Number(n)
            }
            _ => {
                return Err(PolyError::parse(
                    position,
                    format!("unexpected character `{}`", c),
                ))
            }
        };

        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

/// Parse a coefficient, including the sign, so that `i64::MIN` is accepted.
fn parse_coefficient(negative: bool, digits: &str) -> Result<i64> {
    let mut n: i64 = 0;
    for d in digits.bytes() {
        let d = (d - b'0') as i64;
        n = n
            .checked_mul(10)
            .and_then(|n| if negative { n.checked_sub(d) } else { n.checked_add(d) })
            .ok_or(PolyError::Overflow("coefficient exceeds i64"))?;
    }
    Ok(n)
}

fn parse_degree(digits: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| PolyError::Overflow("degree exceeds u32"))
}

/// Assemble the tokens of a single term, which starts at `tokens[0]`.
/// Returns the term and the number of tokens consumed. The lexer merges digit
/// runs, so the term always ends at a sign or at the end of the input.
fn parse_term(tokens: &[Spanned]) -> Result<(Term, usize)> {
    let start = tokens[0].position;
    let mut pos = 0;

    let negative = match tokens[pos].token {
        Token::Sign(negative) => {
            pos += 1;
            negative
        }
        _ => false,
    };

    let mut has_coefficient = false;
    let mut coefficient = if negative { -1 } else { 1 };
    if let Some(Spanned {
        token: Token::Number(n),
        ..
    }) = tokens.get(pos)
    {
        coefficient = parse_coefficient(negative, n)?;
        has_coefficient = true;
        pos += 1;
    }

    let mut variables: SmallVec<[Variable; INLINED_VARIABLES]> = SmallVec::new();
    let mut seen = 0u32;
    while let Some(Spanned {
        token: Token::Symbol(symbol),
        position,
    }) = tokens.get(pos)
    {
        let bit = 1u32 << (*symbol as u8 - b'a');
        if seen & bit != 0 {
            return Err(PolyError::parse(
                *position,
                format!("variable `{}` occurs more than once in a term", symbol),
            ));
        }
        seen |= bit;
        pos += 1;

        let mut degree = 1;
        if let Some(Spanned {
            token: Token::Number(n),
            ..
        }) = tokens.get(pos)
        {
            degree = parse_degree(n)?;
            pos += 1;
        }

        variables.push(Variable::new(*symbol, degree));
    }

    if !has_coefficient && variables.is_empty() {
        let position = tokens.get(pos).map(|t| t.position).unwrap_or(start + 1);
        return Err(PolyError::parse(position, "expected a coefficient or a variable"));
    }

    Ok((Term::new(coefficient, variables)?, pos))
}

/// Parse a polynomial such as `2x2y+3x-5` into its canonical form.
pub fn parse(input: &str) -> Result<Polynomial> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(PolyError::parse(0, "empty input"));
    }

    let mut terms = Vec::new();
    let mut pos = 0;
    while pos < tokens.len() {
        let (term, consumed) = parse_term(&tokens[pos..])?;
        terms.push(term);
        pos += consumed;
    }

    Polynomial::from_terms(terms)
}
