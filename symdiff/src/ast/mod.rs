//! The immutable expression tree at the heart of the library.
//!
//! An [`Expr`] is a tree over non-negative constants, named variables, sums, and products.
//! Trees are built either by [parsing](crate::parser::parse) source text or directly through
//! the constructors on [`Expr`], and are never mutated afterwards; every transformation
//! returns a new tree. Because there is no interior mutability, a tree can be shared freely
//! across threads.
//!
//! # Structural equality
//!
//! The [`PartialEq`] and [`Hash`] implementations compare tree *shape*, not mathematical
//! value: `x+y` and `y+x` are different expressions, as are `x*(y*z)` and `(x*y)*z`. The one
//! concession is constants, which are truncated to 4 fractional digits at construction so
//! that two constants render, compare, and hash identically whenever their first 4 fractional
//! digits agree.

pub mod error;

use error::InvalidVariableName;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use symdiff_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An arithmetic expression over constants, variables, addition, and multiplication.
///
/// Each interior node exclusively owns its two children, so a tree can never contain cycles
/// or shared subtrees. Prefer the [`constant`](Expr::constant) and
/// [`variable`](Expr::variable) constructors over building variants directly; they uphold the
/// invariants that the [`Display`](fmt::Display), [`PartialEq`] and [`Hash`] implementations
/// rely on (constants are finite, non-negative, and truncated; names are non-empty ASCII
/// letters).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `100` or `4.5`.
    Constant(f64),

    /// A named variable, such as `x` or `Foo`. Names are case-sensitive.
    Variable(String),

    /// The sum of the left and right child expressions.
    Sum(Box<Expr>, Box<Expr>),

    /// The product of the left and right child expressions.
    Product(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a constant expression from the given value.
    ///
    /// The value is truncated (not rounded) to at most 4 fractional decimal digits, so
    /// `Expr::constant(4.56789)` and `Expr::constant(4.56781)` produce equal expressions
    /// that both render as `4.5678`.
    ///
    /// The value must be finite and non-negative. The parser rejects literals that overflow
    /// to infinity and the simplifier refuses folds whose result would be out of range, so
    /// only direct misuse of this constructor can trip the debug assertion.
    pub fn constant(value: f64) -> Expr {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "constants must be finite and non-negative, got {value}",
        );

        // collapse negative zero so rendering and hashing see a single zero
        Expr::Constant(if value == 0.0 { 0.0 } else { truncate(value) })
    }

    /// Creates a variable expression with the given name.
    ///
    /// The name must be one or more ASCII letters. Anything else fails with an
    /// [`InvalidVariableName`] error whose span points at the offending character of the
    /// name itself.
    pub fn variable(name: impl Into<String>) -> Result<Expr, Error> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::new(vec![0..0], InvalidVariableName { name }));
        }

        if let Some((at, bad)) = name.char_indices().find(|(_, c)| !c.is_ascii_alphabetic()) {
            let span = at..at + bad.len_utf8();
            return Err(Error::new(vec![span], InvalidVariableName { name }));
        }

        Ok(Expr::Variable(name))
    }

    /// Creates the sum of the two given expressions.
    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::Sum(Box::new(left), Box::new(right))
    }

    /// Creates the product of the two given expressions.
    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::Product(Box::new(left), Box::new(right))
    }
}

/// Truncates a value to at most 4 fractional decimal digits.
///
/// Truncation goes through the decimal rendering of the value rather than scaling by `1e4`
/// and flooring: the scaled form mis-truncates values such as `4.5678`, whose closest `f64`
/// lies just below the decimal it prints as.
fn truncate(value: f64) -> f64 {
    let repr = value.to_string();
    match repr.split_once('.') {
        // the fractional digits are ASCII, so slicing by byte index is safe
        Some((whole, frac)) if frac.len() > 4 => match format!("{whole}.{}", &frac[..4]).parse() {
            Ok(truncated) => truncated,
            Err(_) => value,
        },
        _ => value,
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Sum(left, right) => {
                fmt_operand(left, f)?;
                write!(f, "+")?;
                fmt_operand(right, f)
            },
            Expr::Product(left, right) => {
                fmt_operand(left, f)?;
                write!(f, "*")?;
                fmt_operand(right, f)
            },
        }
    }
}

/// Writes a child operand, parenthesizing composite children so that the rendered text
/// re-parses to the identical tree.
fn fmt_operand(expr: &Expr, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if matches!(expr, Expr::Sum(..) | Expr::Product(..)) {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// [`PartialEq`] is implemented manually to compare the constant payload by value. Constants
/// are truncated at construction, so two constants compare equal exactly when their 4-decimal
/// renderings agree.
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Constant(lhs), Expr::Constant(rhs)) => lhs == rhs,
            (Expr::Variable(lhs), Expr::Variable(rhs)) => lhs == rhs,
            (Expr::Sum(ll, lr), Expr::Sum(rl, rr))
            | (Expr::Product(ll, lr), Expr::Product(rl, rr)) => ll == rl && lr == rr,
            _ => false,
        }
    }
}

/// [`Eq`] is implemented manually to allow comparing constants. The constructors **must
/// never** produce a `NaN` constant for this impl to be valid.
impl Eq for Expr {}

/// [`Hash`] is implemented manually to allow hashing the constant payload. Constants hash by
/// the bits of their truncated value, which is consistent with [`PartialEq`] because the
/// constructors never produce `NaN` or negative zero.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Expr::Constant(value) => value.to_bits().hash(state),
            Expr::Variable(name) => name.hash(state),
            Expr::Sum(left, right) | Expr::Product(left, right) => {
                left.hash(state);
                right.hash(state);
            },
        }
    }
}
