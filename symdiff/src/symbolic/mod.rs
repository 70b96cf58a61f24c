//! Symbolic transformations over expression trees.
//!
//! Both transformations are purely structural recursions that leave the input untouched and
//! return a new tree. They are intentionally independent: [`derivative()`] performs no
//! simplification of its result, and [`simplify()`] never applies calculus.

pub mod derivative;
pub mod simplify;

pub use derivative::derivative;
pub use simplify::simplify;

use crate::ast::Expr;
use std::collections::HashMap;

impl Expr {
    /// Returns the symbolic derivative of this expression with respect to the variable named
    /// `with`. See [`derivative()`].
    pub fn differentiate(&self, with: &str) -> Expr {
        derivative(self, with)
    }

    /// Returns this expression partially evaluated under the given variable environment. See
    /// [`simplify()`].
    pub fn simplify(&self, env: &HashMap<String, f64>) -> Expr {
        simplify(self, env)
    }
}
