use crate::tokenizer::TokenKind;
use ariadne::{Fmt, Label, Report, ReportBuilder, ReportKind};
use std::ops::Range;
use symdiff_error::{ErrorKind, EXPR};

/// Builds a report in the shape shared by all parse errors: one message, and the given label
/// texts paired up with the error's spans. Labels without a matching span are dropped.
fn build<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: Vec<String>,
) -> ReportBuilder<'a, (&'a str, Range<usize>)> {
    Report::build(ReportKind::Error, src_id, spans[0].start)
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .zip(spans.iter().cloned())
                .map(|(label_str, span)| {
                    let mut label = Label::new((src_id, span))
                        .with_color(EXPR);

                    if !label_str.is_empty() {
                        label = label.with_message(label_str);
                    }

                    label
                })
                .collect::<Vec<_>>()
        )
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "unexpected end of input",
            vec![format!("you might need to add another {} here", "expression".fg(EXPR))],
        )
            .finish()
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "expected end of input",
            vec![format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
        )
            .finish()
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "unexpected token",
            vec![format!(
                "expected one of: {}",
                self.expected
                    .iter()
                    .map(|t| format!("{:?}", t))
                    .collect::<Vec<_>>()
                    .join(", "),
            )],
        )
            .with_help(format!("found {:?}", self.found))
            .finish()
    }
}

/// A numeric literal does not fit in the finite range of an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber;

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "invalid numeric literal",
            vec!["this value is too large".to_owned()],
        )
            .with_help(format!("constants must be {}", "finite 64-bit floats".fg(EXPR)))
            .finish()
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was
    /// a closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "unclosed parenthesis",
            vec!["this parenthesis is not closed".to_owned()],
        )
            .with_help(if self.opening {
                "add a closing parenthesis `)` somewhere after this"
            } else {
                "add an opening parenthesis `(` somewhere before this"
            })
            .finish()
    }
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyParenthesis;

impl ErrorKind for EmptyParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build(
            src_id,
            spans,
            "missing expression inside parenthesis",
            vec!["add an expression here".to_owned()],
        )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use crate::parser::parse;

    /// Parses the given malformed source and renders its error report as plain text.
    fn report_text(source: &str) -> String {
        let err = parse(source).unwrap_err();
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn unexpected_eof_report() {
        let text = report_text("x+");
        assert!(text.contains("unexpected end of input"));
        assert!(text.contains("you might need to add another expression here"));
    }

    #[test]
    fn expected_eof_report() {
        let text = report_text("x y");
        assert!(text.contains("expected end of input"));
        // the report points at the leftover token, not the start of the input
        assert!(text.contains("input:1:3"));
    }

    #[test]
    fn unexpected_token_report() {
        let text = report_text("*x");
        assert!(text.contains("unexpected token"));
        assert!(text.contains("expected one of:"));
        assert!(text.contains("found Mul"));
    }

    #[test]
    fn invalid_number_report() {
        let text = report_text(&"9".repeat(400));
        assert!(text.contains("invalid numeric literal"));
        assert!(text.contains("this value is too large"));
    }

    #[test]
    fn unclosed_parenthesis_reports() {
        let text = report_text("(x");
        assert!(text.contains("unclosed parenthesis"));
        assert!(text.contains("add a closing parenthesis"));
        assert!(text.contains("input:1:1"));

        let text = report_text("x)");
        assert!(text.contains("add an opening parenthesis"));
        assert!(text.contains("input:1:2"));
    }

    #[test]
    fn empty_parenthesis_report() {
        let text = report_text("()");
        assert!(text.contains("missing expression inside parenthesis"));
        assert!(text.contains("add an expression here"));
    }
}
