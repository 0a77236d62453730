//! pdfcombine - Flexibly combine (parts of) PDF files.
//!
//! Each input file on the command line becomes an [`Operation`]: keep or
//! remove a set of pages, optionally rotate what remains. Operations are
//! applied in order and their pages are concatenated into one output PDF.
//!
//! # Examples
//!
//! ## From command-line tokens
//!
//! ```no_run
//! use pdfcombine::{ArgumentParser, CombinePipeline, Invocation};
//! use pdfcombine::output::OutputFormatter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = ["a.pdf", "--keep", "1-2,4", "b.pdf", "--angle", "90", "-o", "out.pdf"];
//! let formatter = OutputFormatter::new(false);
//!
//! if let Invocation::Combine(plan) = ArgumentParser::new().parse(&tokens)? {
//!     let summary = CombinePipeline::new(&formatter).run(&plan).await?;
//!     println!("{} pages written", summary.total_pages);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a plan directly
//!
//! ```no_run
//! use pdfcombine::{CombinePipeline, CombinePlan, Operation};
//! use pdfcombine::output::OutputFormatter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = CombinePlan::new(
//!     "out.pdf",
//!     vec![
//!         Operation::new("a.pdf").remove("1"),
//!         Operation::new("b.pdf").rotate(-90),
//!     ],
//! );
//! let formatter = OutputFormatter::quiet();
//! CombinePipeline::new(&formatter).run(&plan).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod combine;
pub mod config;
pub mod error;
pub mod io;
pub mod operation;
pub mod output;
pub mod range;

// Re-export commonly used types
pub use args::{ArgumentParser, USAGE};
pub use combine::{CombinePipeline, CombineSummary, OutputDocument};
pub use config::{CombinePlan, DEFAULT_OUTPUT, Invocation};
pub use error::{CombineError, Result};
pub use operation::{Operation, Selection};
pub use range::{PageRange, parse_page_range};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
