//! Immutable expression trees for a small arithmetic language, with parsing, symbolic
//! differentiation, and partial numeric evaluation.
//!
//! The language covers non-negative decimal constants, case-sensitive variables, `+`, `*`,
//! and parentheses. Trees compare and hash *structurally*: `x+y` and `y+x` are different
//! expressions, but a parsed tree and a programmatically constructed tree with the same
//! shape are equal.
//!
//! ```
//! use symdiff::{parse, Expr};
//! use std::collections::HashMap;
//!
//! let expr = parse("x*y+100")?;
//! assert_eq!(expr.to_string(), "(x*y)+100");
//! assert_eq!(expr, Expr::add(parse("x * y")?, Expr::constant(100.0)));
//!
//! // differentiation is purely symbolic...
//! let derivative = expr.differentiate("y");
//! assert_eq!(derivative.to_string(), "((x*1)*(y*0))+0");
//!
//! // ...while simplification folds whatever the environment pins down
//! let env = HashMap::from([("x".to_owned(), 2.0), ("y".to_owned(), 3.0)]);
//! assert_eq!(expr.simplify(&env), parse("106")?);
//! # Ok::<(), symdiff_error::Error>(())
//! ```

pub mod ast;
pub mod parser;
pub mod symbolic;
pub mod tokenizer;

pub use ast::Expr;
pub use parser::parse;
