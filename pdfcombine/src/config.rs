//! Configuration produced by argument parsing.
//!
//! The argument parser turns the raw command line into an [`Invocation`].
//! A [`CombinePlan`] is everything the combine pipeline needs for one run.

use std::path::PathBuf;

use crate::operation::Operation;

/// Output path used when neither `-o` nor `--output` is given.
pub const DEFAULT_OUTPUT: &str = "combined.pdf";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments, or `-h`/`--help` somewhere on the line.
    Help,
    /// Combine the given operations into one output file.
    Combine(CombinePlan),
}

/// Output path plus the ordered list of operations to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinePlan {
    /// Where the combined PDF is written.
    pub output: PathBuf,
    /// Operations in command-line order; this is the output page order.
    pub operations: Vec<Operation>,
}

impl CombinePlan {
    /// Create a plan writing to `output`.
    pub fn new(output: impl Into<PathBuf>, operations: Vec<Operation>) -> Self {
        Self {
            output: output.into(),
            operations,
        }
    }
}

impl Default for CombinePlan {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT, Vec::new())
    }
}
