//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Atomic writes (write to a temp file, then rename)
//! - Compression support
//! - Write statistics
//!
//! A failed write never leaves a file at the destination path.
//!
//! # Examples
//!
//! ```no_run
//! use pdfcombine::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(doc, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{CombineError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Create a writer without compression (faster but larger files).
    pub fn without_compression() -> Self {
        Self {
            options: WriteOptions {
                compress: false,
                ..Default::default()
            },
        }
    }

    /// Save a PDF document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or moved
    /// into place.
    pub async fn save(&self, doc: Document, path: &Path) -> Result<()> {
        self.save_with_stats(doc, path).await.map(|_| ())
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// Serialization runs on the blocking thread pool; the call completes
    /// only once the file is in place.
    pub async fn save_with_stats(&self, doc: Document, path: &Path) -> Result<WriteStatistics> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        task::spawn_blocking(move || write_document(doc, path_buf, &options))
            .await
            .map_err(|e| CombineError::Io(std::io::Error::other(e)))?
    }
}

fn write_document(
    mut doc: Document,
    path: PathBuf,
    options: &WriteOptions,
) -> Result<WriteStatistics> {
    let start = Instant::now();

    if options.compress {
        doc.compress();
    }

    let write_path = if options.atomic {
        temp_path_for(&path)
    } else {
        path.clone()
    };

    let result = write_to(&mut doc, &write_path, options.buffer_size).and_then(|()| {
        if options.atomic {
            std::fs::rename(&write_path, &path).map_err(|e| CombineError::FailedToWrite {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    });

    if let Err(err) = result {
        // best effort: the write already failed
        let _ = std::fs::remove_file(&write_path);
        return Err(err);
    }

    let write_time = start.elapsed();
    let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    log::info!(
        "wrote {} ({}) in {:.2}s",
        path.display(),
        format_file_size(file_size),
        write_time.as_secs_f64()
    );

    Ok(WriteStatistics {
        write_time,
        file_size,
        output_path: path,
        compressed: options.compress,
    })
}

fn write_to(doc: &mut Document, path: &Path, buffer_size: usize) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| CombineError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = std::io::BufWriter::with_capacity(buffer_size, file);

    doc.save_to(&mut writer)
        .map_err(|e| CombineError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| CombineError::FailedToWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Sibling path the document is written to before being renamed into place.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("combined.pdf"));
    name.push(".part");
    path.with_file_name(name)
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
