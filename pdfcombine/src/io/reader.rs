//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfcombine::io::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let source = reader.load(Path::new("a.pdf")).await?;
//! println!("{} has {} pages", source.path.display(), source.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CombineError, Result};

/// A loaded source PDF.
#[derive(Debug)]
pub struct SourcePdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

/// Opens source documents for the combine pipeline.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - [`CombineError::FileNotFound`] if the file is gone.
    /// - [`CombineError::FileNotAccessible`] for other read failures.
    /// - [`CombineError::FailedToLoadPdf`] if the bytes are not a PDF.
    pub async fn load(&self, path: &Path) -> Result<SourcePdf> {
        let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CombineError::file_not_found(path),
            _ => CombineError::FileNotAccessible {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let document = Document::load_mem(&bytes)
            .map_err(|e| CombineError::failed_to_load_pdf(path, e.to_string()))?;
        let page_count = document.get_pages().len();

        log::debug!("loaded {} ({page_count} pages)", path.display());

        Ok(SourcePdf {
            document,
            path: path.to_path_buf(),
            page_count,
            file_size: bytes.len() as u64,
        })
    }
}
