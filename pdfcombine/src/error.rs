//! Error types for pdfcombine.
//!
//! Every failure is terminal for a run: the argument parser and the combine
//! pipeline stop at the first error and nothing is written to the output
//! path.
//!
//! # Error Categories
//!
//! - **Usage Errors**: conflicting or unknown flags, missing flag values
//! - **Parse Errors**: malformed page ranges, non-integer angles
//! - **I/O Errors**: missing inputs, existing output, write failures
//! - **PDF Errors**: unreadable documents, pages beyond a document's end

use std::io;
use std::path::PathBuf;

use crate::output::Highlight;

/// Result type alias for pdfcombine operations.
pub type Result<T> = std::result::Result<T, CombineError>;

/// Main error type for pdfcombine operations.
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    /// Both `-o` and `--output` were given.
    #[error("Both -o and --output specified. Aborting.")]
    ConflictingFlags,

    /// A flag was the last token and has no value.
    #[error("Missing value for argument: {flag}")]
    MissingValue {
        /// The flag token.
        flag: String,
    },

    /// A flag other than keep/remove/angle followed an input file.
    #[error("Failed to parse argument: {flag}")]
    UnknownFlag {
        /// The flag token.
        flag: String,
    },

    /// The value given to `--angle` is not an integer.
    #[error("Invalid rotation angle: {value}")]
    InvalidAngle {
        /// The rejected value.
        value: String,
    },

    /// A page range spec could not be parsed.
    #[error("Failed to parse page range: {spec}")]
    MalformedRange {
        /// The whole range spec.
        spec: String,
    },

    /// A `LOW-HIGH` token has `HIGH < LOW`.
    #[error("Invalid range: {range}")]
    InvalidRange {
        /// The offending token.
        range: String,
    },

    /// No input file was given.
    #[error("No input files specified")]
    NoInputFiles,

    /// A selected page does not exist in its document.
    #[error(
        "Page {page} of {} does not exist (document has {total_pages} page(s))",
        .path.display()
    )]
    PageOutOfRange {
        /// Path to the source document.
        path: PathBuf,
        /// One-indexed page number that was requested.
        page: usize,
        /// Pages in the source document.
        total_pages: usize,
    },

    /// Input file does not exist or is not a regular file.
    #[error("File {} does not exist. Aborting.", .path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Input file exists but could not be read.
    #[error("Cannot access file {}: {source}", .path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input file is not a readable PDF.
    #[error("Failed to load PDF {}: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the PDF parser.
        reason: String,
    },

    /// Output file is already present.
    #[error("Output file {} already exists. Aborting.", .path.display())]
    OutputExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file {}: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write or move the output file.
    #[error("Failed to write output file {}: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Error from the PDF object model.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CombineError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutputExists error.
    pub fn output_exists(path: impl Into<PathBuf>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create a MalformedRange error.
    pub fn malformed_range(spec: impl Into<String>) -> Self {
        Self::MalformedRange { spec: spec.into() }
    }

    /// Whether this error comes from parsing a range or an angle.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRange { .. } | Self::InvalidAngle { .. }
        )
    }

    /// The user-supplied token or path this error is about, if any.
    pub fn subject(&self) -> Option<String> {
        match self {
            Self::MissingValue { flag } | Self::UnknownFlag { flag } => Some(flag.clone()),
            Self::InvalidAngle { value } => Some(value.clone()),
            Self::MalformedRange { spec } => Some(spec.clone()),
            Self::InvalidRange { range } => Some(range.clone()),
            Self::PageOutOfRange { path, .. }
            | Self::FileNotFound { path }
            | Self::FileNotAccessible { path, .. }
            | Self::FailedToLoadPdf { path, .. }
            | Self::OutputExists { path }
            | Self::FailedToCreateOutput { path, .. }
            | Self::FailedToWrite { path, .. } => Some(path.display().to_string()),
            Self::ConflictingFlags | Self::NoInputFiles | Self::Pdf(_) | Self::Io(_) => None,
        }
    }

    /// Render the message with its subject passed through `highlight`.
    pub fn render(&self, highlight: &dyn Highlight) -> String {
        let message = self.to_string();
        let Some(subject) = self.subject().filter(|s| !s.is_empty()) else {
            return message;
        };

        let start = self.subject_start(&message, &subject);
        match message.get(start..) {
            Some(rest) if rest.starts_with(&subject) => format!(
                "{}{}{}",
                &message[..start],
                highlight.highlight(&subject),
                &rest[subject.len()..]
            ),
            _ => message,
        }
    }

    /// Byte offset of the subject within the rendered message.
    fn subject_start(&self, message: &str, subject: &str) -> usize {
        let prefix = match self {
            Self::PageOutOfRange { page, .. } => format!("Page {page} of "),
            Self::FileNotFound { .. } => "File ".to_string(),
            Self::FileNotAccessible { .. } => "Cannot access file ".to_string(),
            Self::FailedToLoadPdf { .. } => "Failed to load PDF ".to_string(),
            Self::OutputExists { .. } => "Output file ".to_string(),
            Self::FailedToCreateOutput { .. } => "Failed to create output file ".to_string(),
            Self::FailedToWrite { .. } => "Failed to write output file ".to_string(),
            // flag and range tokens close their message
            _ => return message.len().saturating_sub(subject.len()),
        };
        prefix.len()
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConflictingFlags
            | Self::MissingValue { .. }
            | Self::UnknownFlag { .. }
            | Self::InvalidAngle { .. }
            | Self::MalformedRange { .. }
            | Self::InvalidRange { .. }
            | Self::NoInputFiles
            | Self::PageOutOfRange { .. } => 1,
            Self::FileNotFound { .. } | Self::FileNotAccessible { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::OutputExists { .. } => 4,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io(_) => 5,
            Self::Pdf(_) => 6,
        }
    }
}
