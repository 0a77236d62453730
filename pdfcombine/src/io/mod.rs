//! Reading source documents and writing the combined result.

pub mod reader;
pub mod writer;

pub use reader::{PdfReader, SourcePdf};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics, format_file_size};
