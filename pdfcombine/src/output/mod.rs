//! Output formatting and display for pdfcombine.
//!
//! This module handles all user-facing output:
//! - Status and success messages
//! - Error and warning display with highlighted file names
//! - Summary reports
//! - Quiet mode

pub mod formatter;
pub mod highlight;

pub use formatter::{MessageLevel, OutputFormatter};
pub use highlight::{Highlight, NoHighlight, Yellow};

use crate::combine::CombineSummary;
use crate::io::format_file_size;

/// Display the result of a combine run.
pub fn display_summary(formatter: &OutputFormatter, summary: &CombineSummary) {
    formatter.success(&format!(
        "Saved combined PDF to {}.",
        formatter.highlight(&summary.output.display().to_string())
    ));
    formatter.info(&format!(
        "  {} page(s) from {} operation(s), {}",
        summary.total_pages,
        summary.operations,
        format_file_size(summary.file_size)
    ));
}
