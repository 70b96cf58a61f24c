pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds found in the input.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Tokenizes the entire input up front, returning an owned array of tokens. Having the whole
/// stream in memory lets the parser rewind its cursor when a speculative parse fails.
///
/// Whitespace tokens are kept so that token spans cover the original text; the parser skips
/// them itself.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    std::iter::from_fn(|| match lexer.next() {
        Some(Ok(kind)) => Some(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        }),
        _ => None,
    })
    .collect()
}
