//! Combining pages from several PDFs into one.
//!
//! [`CombinePipeline`] loads each operation's source in turn, asks the
//! operation which pages survive and appends them to an [`OutputDocument`].
//! The result is written once, after every operation has succeeded.

pub mod document;
pub mod pipeline;

pub use document::OutputDocument;
pub use pipeline::{CombinePipeline, CombineSummary};
