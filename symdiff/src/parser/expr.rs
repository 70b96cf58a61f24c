use crate::ast::Expr;
use crate::tokenizer::TokenKind;
use super::{error::{kind, Error}, Parse, Parser};

/// The token kinds that can begin a primary expression.
const PRIMARY_STARTS: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Name,
    TokenKind::OpenParen,
];

/// `expression ::= product ('+' product)*`
///
/// Addition chains fold to the left: `a+b+c` produces `(a+b)+c`.
impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let mut expr = product(input)?;
        while input.eat(TokenKind::Add).is_some() {
            expr = Expr::add(expr, product(input)?);
        }
        Ok(expr)
    }
}

/// `product ::= primary ('*' primary)*`
///
/// Multiplication chains nest to the *right*: `x*y*z` produces `x*(y*z)`. The asymmetry with
/// addition is deliberate; both shapes are part of the rendered-form contract and are pinned
/// down by tests.
fn product(input: &mut Parser) -> Result<Expr, Error> {
    let first = primary(input)?;
    if input.eat(TokenKind::Mul).is_some() {
        Ok(Expr::multiply(first, product(input)?))
    } else {
        Ok(first)
    }
}

/// `primary ::= number | variable | '(' expression ')'`
fn primary(input: &mut Parser) -> Result<Expr, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Int | TokenKind::Float => {
            // the Int and Float regexes only match plain decimal digits, so the only way
            // the parsed value can be unusable is by overflowing to infinity
            match token.lexeme.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Expr::constant(value)),
                _ => Err(Error::new(vec![token.span], kind::InvalidNumber)),
            }
        },
        // the Name regex only matches ASCII letters, which is exactly the set of valid
        // variable names
        TokenKind::Name => Ok(Expr::Variable(token.lexeme.to_owned())),
        TokenKind::OpenParen => {
            if let Some(close) = input.eat(TokenKind::CloseParen) {
                return Err(Error::new(
                    vec![token.span.start..close.span.end],
                    kind::EmptyParenthesis,
                ));
            }

            let expr = input.try_parse::<Expr>()?;
            if input.eat(TokenKind::CloseParen).is_none() {
                return Err(Error::new(
                    vec![token.span],
                    kind::UnclosedParenthesis { opening: true },
                ));
            }
            Ok(expr)
        },
        _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
            expected: PRIMARY_STARTS,
            found: token.kind,
        })),
    }
}
