//! The [`ErrorKind`] trait and the [`Error`] carrier shared by every error in this
//! workspace.
//!
//! An error on its own only records *where* it happened (byte spans) and *what* went wrong
//! (a boxed [`ErrorKind`]). Turning that into a user-facing message is deferred to
//! [`Error::build_report`], which takes the id of the offending text: for parse errors that
//! is the source handed to the parser, and for construction errors the rejected input
//! itself (such as a variable name).

use ariadne::{Color, Report};
use std::fmt::Debug;
use std::ops::Range;

/// The color used to highlight expressions in reports.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error, responsible for rendering itself as an [`ariadne`] report.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error, pairing its labels with the given spans.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error pointing at one or more regions of the offending text.
#[derive(Debug)]
pub struct Error {
    /// The regions of the text that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Builds the report for this error against the given source id.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
