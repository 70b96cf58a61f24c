use ariadne::{Fmt, Label, Report, ReportKind};
use std::ops::Range;
use symdiff_error::{ErrorKind, EXPR};

/// A variable was constructed with an empty name, or a name containing a character that is
/// not an ASCII letter. The spans index into the rejected name itself.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidVariableName {
    /// The rejected name.
    pub name: String,
}

impl ErrorKind for InvalidVariableName {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
            .with_message(format!("invalid variable name: `{}`", self.name))
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message(if self.name.is_empty() {
                        "the name is empty"
                    } else {
                        "this character is not a letter"
                    })
                    .with_color(EXPR)
            }));

        builder.set_help(format!("variable names must be {}", "one or more ASCII letters".fg(EXPR)));
        builder.finish()
    }
}
