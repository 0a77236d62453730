//! Command description for pdfcombine.
//!
//! The grammar is order-sensitive (flags bind to the file before them), so
//! the actual parsing is done by `pdfcombine::ArgumentParser`. This `clap`
//! description exists for `--version` and for the man page generated in
//! `build.rs`.

use clap::{CommandFactory, Parser};
use std::ffi::OsStr;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  pdfcombine foo.pdf bar.pdf -o out.pdf
  pdfcombine foo.pdf --keep 1-2,4 -o out.pdf
  pdfcombine foo.pdf --keep 1-2 bar.pdf --remove 1-2 -o out.pdf
  pdfcombine foo.pdf --keep 1 --angle 90 bar.pdf --keep 2 -o out.pdf";

/// Flexibly combine (parts of) PDF files.
///
/// Input files are combined in the order given. The --keep, --remove and
/// --angle options apply to the input file right before them, so every file
/// can have its own page selection and rotation.
#[derive(Parser, Debug)]
#[command(name = "pdfcombine")]
#[command(version)]
#[command(about = "Flexibly combine (parts of) PDF files")]
#[command(author)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Input PDF files, each followed by its own options
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Keep only these pages of the preceding file (e.g. 1-2,4)
    #[arg(short, long, value_name = "RANGE", conflicts_with = "remove")]
    pub keep: Option<String>,

    /// Remove these pages of the preceding file and keep all others
    #[arg(short, long, value_name = "RANGE")]
    pub remove: Option<String>,

    /// Rotate the selected pages of the preceding file by this many degrees
    #[arg(short, long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub angle: Option<i64>,

    /// Output PDF file; must not exist yet
    #[arg(short, long, value_name = "FILE", default_value = "combined.pdf")]
    pub output: PathBuf,
}

/// Whether the command line is exactly `-V` or `--version`.
pub fn is_version_request<S: AsRef<OsStr>>(tokens: &[S]) -> bool {
    match tokens {
        [only] => matches!(only.as_ref().to_str(), Some("-V" | "--version")),
        _ => false,
    }
}

/// `pdfcombine <version>`, as clap renders it.
pub fn version_text() -> String {
    Cli::command().render_version().trim_end().to_string()
}
