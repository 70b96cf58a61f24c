use crate::ast::Expr;
use std::collections::HashMap;

/// Returns true if the value can be stored in a constant expression: finite and
/// non-negative.
///
/// Two in-range constants can still overflow to infinity when added or multiplied, and an
/// environment can bind any `f64` whatsoever. Values that fail this check are never fed to
/// [`Expr::constant`]; the surrounding tree stays symbolic instead.
fn representable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Partially evaluates the given expression under an environment mapping variable names to
/// values.
///
/// Variables bound in the environment are replaced by their value; unbound variables stay
/// symbolic, and bindings for variables that do not occur in the expression are ignored. A
/// sum or product collapses to a single constant only when *both* simplified operands are
/// constants and the computed value is representable; a fold that would overflow is left as
/// a sum or product of the simplified operands. No other algebraic rules are applied; in
/// particular, `x*0` and `x+0` are left alone.
pub fn simplify(expr: &Expr, env: &HashMap<String, f64>) -> Expr {
    match expr {
        Expr::Constant(_) => expr.clone(),
        Expr::Variable(name) => match env.get(name) {
            Some(&value) if representable(value) => Expr::constant(value),
            _ => expr.clone(),
        },
        Expr::Sum(left, right) => match (simplify(left, env), simplify(right, env)) {
            (Expr::Constant(lhs), Expr::Constant(rhs)) if representable(lhs + rhs) => {
                Expr::constant(lhs + rhs)
            },
            (lhs, rhs) => Expr::add(lhs, rhs),
        },
        Expr::Product(left, right) => match (simplify(left, env), simplify(right, env)) {
            (Expr::Constant(lhs), Expr::Constant(rhs)) if representable(lhs * rhs) => {
                Expr::constant(lhs * rhs)
            },
            (lhs, rhs) => Expr::multiply(lhs, rhs),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::parser::parse;

    fn p(source: &str) -> Expr {
        parse(source).unwrap()
    }

    /// Builds an environment from name/value pairs.
    fn env<const N: usize>(pairs: [(&str, f64); N]) -> HashMap<String, f64> {
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect()
    }

    #[test]
    fn bound_variables_are_replaced() {
        assert_eq!(p("x").simplify(&env([("x", 1.0)])), p("1.0"));
        assert_eq!(p("x").simplify(&env([("x", 4.5)])), Expr::constant(4.5));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(p("X").simplify(&env([("x", 1.0)])), p("X"));
    }

    #[test]
    fn constants_pass_through_unchanged() {
        assert_eq!(p("4.567891").simplify(&env([("x", 1.0)])).to_string(), "4.5678");
        assert_eq!(p("100").simplify(&env([])), p("100"));
    }

    #[test]
    fn unbound_variables_stay_symbolic() {
        let simplified = p("x+y").simplify(&env([("x", 1.0)]));
        assert_eq!(simplified, Expr::add(p("1.0"), p("y")));
    }

    #[test]
    fn folding_requires_both_operands() {
        // `x` and `y` stay symbolic, so the product around them survives
        let simplified = p("x*y+100").simplify(&env([("x", 1.0)]));
        assert_eq!(simplified, Expr::add(p("1.0*y"), p("100")));
    }

    #[test]
    fn fully_bound_trees_fold_to_a_constant() {
        assert_eq!(p("200+x*y").simplify(&env([("x", 1.0), ("y", 2.0)])), p("202"));
        assert_eq!(
            p("x*y*z+200").simplify(&env([("x", 2.0), ("y", 2.0), ("z", 2.0)])),
            p("208"),
        );
    }

    #[test]
    fn inner_products_fold_independently() {
        assert_eq!(
            p("200+(x*y)*z").simplify(&env([("x", 2.0), ("y", 2.0), ("j", 2.0)])),
            p("200+(4.0*z)"),
        );
    }

    #[test]
    fn unused_bindings_are_ignored() {
        assert_eq!(
            p("(x*y)*z+200").simplify(&env([("z", 1.0), ("j", 2.0)])),
            p("((x*y)*1.0)+200"),
        );
    }

    #[test]
    fn deep_product_chain_folds_completely() {
        assert_eq!(
            p("x*y*z*200*300*j").simplify(&env([("x", 2.0), ("y", 2.0), ("z", 2.0), ("j", 1.0)])),
            p("480000"),
        );
    }

    #[test]
    fn folded_constants_are_truncated() {
        assert_eq!(
            p("x*y").simplify(&env([("x", 1.5), ("y", 3.04567)])),
            Expr::constant(4.5685),
        );
    }

    #[test]
    fn overflowing_folds_stay_unfolded() {
        // each literal fits in an f64, but their product does not
        let big = "9".repeat(200);
        let expr = p(&format!("({big}*{big})*0"));
        assert_eq!(expr.simplify(&env([])), expr);

        // same for sums near the top of the range
        let huge = "9".repeat(308);
        let expr = p(&format!("{huge}+{huge}"));
        assert_eq!(expr.simplify(&env([])), expr);
    }

    #[test]
    fn out_of_range_bindings_stay_symbolic() {
        assert_eq!(p("x+1").simplify(&env([("x", -1.0)])), p("x+1"));
        assert_eq!(p("x").simplify(&env([("x", f64::INFINITY)])), p("x"));
        assert_eq!(p("x").simplify(&env([("x", f64::NAN)])), p("x"));
    }

    #[test]
    fn simplify_leaves_the_input_untouched() {
        let expr = p("x+y");
        let _ = expr.simplify(&env([("x", 1.0), ("y", 2.0)]));
        assert_eq!(expr, p("x+y"));
    }
}
