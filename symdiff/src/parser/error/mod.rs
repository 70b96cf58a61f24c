//! Errors raised while parsing source text into an expression tree.
//!
//! Every error carries the spans of the offending source regions and a [`kind`] describing
//! what went wrong; [`Error::build_report`](symdiff_error::Error::build_report) turns one
//! into a printable [`ariadne`] report against the original source text.

pub mod kind;

pub use symdiff_error::Error;
