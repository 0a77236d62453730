//! Runs a [`CombinePlan`] end to end.

use std::path::PathBuf;

use crate::combine::document::OutputDocument;
use crate::config::CombinePlan;
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter};
use crate::output::OutputFormatter;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineSummary {
    /// Where the combined PDF was written.
    pub output: PathBuf,
    /// Pages in the combined PDF.
    pub total_pages: usize,
    /// Operations applied.
    pub operations: usize,
    /// Size of the written file in bytes.
    pub file_size: u64,
}

/// Applies operations in order and writes the result.
pub struct CombinePipeline<'a> {
    reader: PdfReader,
    writer: PdfWriter,
    formatter: &'a OutputFormatter,
}

impl<'a> CombinePipeline<'a> {
    /// Create a pipeline with the default reader and writer.
    pub fn new(formatter: &'a OutputFormatter) -> Self {
        Self::with_writer(PdfWriter::new(), formatter)
    }

    /// Create a pipeline using `writer` for the output file.
    pub fn with_writer(writer: PdfWriter, formatter: &'a OutputFormatter) -> Self {
        Self {
            reader: PdfReader::new(),
            writer,
            formatter,
        }
    }

    /// Apply every operation of `plan` and write the combined document.
    ///
    /// Nothing is written unless all operations succeed.
    ///
    /// # Errors
    ///
    /// The first failure aborts the run: an unreadable source, a malformed
    /// range, a page past the end of a source, or a failed write.
    pub async fn run(&self, plan: &CombinePlan) -> Result<CombineSummary> {
        let output = self.assemble(plan).await?;
        let total_pages = output.page_count();

        let stats = self
            .writer
            .save_with_stats(output.finish(), &plan.output)
            .await?;

        Ok(CombineSummary {
            output: stats.output_path,
            total_pages,
            operations: plan.operations.len(),
            file_size: stats.file_size,
        })
    }

    /// Build the combined document in memory without writing it.
    pub async fn assemble(&self, plan: &CombinePlan) -> Result<OutputDocument> {
        let mut output = OutputDocument::new();

        for operation in &plan.operations {
            let source = self.reader.load(operation.source()).await?;
            let pages = operation.pages_to_keep(source.page_count)?;
            log::debug!("{operation}: selected pages {pages:?}");

            if pages.is_empty() {
                self.formatter.warning(&format!(
                    "No pages selected from {}.",
                    self.formatter.highlight(&operation.source().display().to_string())
                ));
            }

            output.append(source, &pages, operation.angle())?;
        }

        Ok(output)
    }
}
