//! Command-line grammar.
//!
//! The command line is a flat, order-sensitive list of tokens. Each input
//! file may be followed by its own flags, which apply to that file only:
//!
//! ```text
//! pdfcombine foo.pdf --keep 1-2 --angle 90 bar.pdf --remove 1 -o out.pdf
//! ```
//!
//! `-o`/`--output` may appear anywhere. It is pulled out of the token list
//! first, and the rest is grouped front to back into [`Operation`]s.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::{CombinePlan, DEFAULT_OUTPUT, Invocation};
use crate::error::{CombineError, Result};
use crate::operation::Operation;

/// Usage text printed for `-h`, `--help` or an empty command line.
pub const USAGE: &str = "\
Flexibly combine (parts of) PDF files.

Usage:
    pdfcombine input1.pdf [--keep range | --remove range] [--angle degrees] \\
              [input2.pdf [...]] ... [-o output.pdf]

Options (apply to the preceding input file):
    -k, --keep <range>       keep only these pages, e.g. 1-2,4
    -r, --remove <range>     remove these pages and keep all others
    -a, --angle <degrees>    rotate the selected pages

Global options:
    -o, --output <file>      output file [default: combined.pdf]
    -h, --help               print this help
    -V, --version            print version

Examples:
    # merge two PDF files
    pdfcombine foo.pdf bar.pdf -o out.pdf

    # extract first two pages and fourth page of foo.pdf
    pdfcombine foo.pdf --keep 1-2,4 -o out.pdf

    # combine first two pages of foo.pdf with all but the first two pages of
    # bar.pdf
    pdfcombine foo.pdf --keep 1-2 bar.pdf --remove 1-2 -o out.pdf

    # rotate the first page of foo.pdf by 90 degrees and add the second page of
    # bar.pdf
    pdfcombine foo.pdf --keep 1 --angle 90 bar.pdf --keep 2 -o out.pdf";

/// Flags accepted after an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFlag {
    Keep,
    Remove,
    Angle,
}

impl FileFlag {
    fn from_token(token: &OsStr) -> Option<Self> {
        match token.to_str()? {
            "-k" | "--keep" => Some(Self::Keep),
            "-r" | "--remove" => Some(Self::Remove),
            "-a" | "--angle" => Some(Self::Angle),
            _ => None,
        }
    }
}

/// Forward-only cursor over an immutable token slice.
struct TokenCursor<'a> {
    tokens: &'a [&'a OsStr],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [&'a OsStr]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a OsStr> {
        let token = self.tokens.get(self.position).copied()?;
        self.position += 1;
        Some(token)
    }

    fn next_flag(&mut self) -> Option<&'a OsStr> {
        match self.tokens.get(self.position) {
            Some(token) if is_flag(token) => self.next_token(),
            _ => None,
        }
    }
}

/// Parses the raw command line into an [`Invocation`].
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    default_output: PathBuf,
}

impl ArgumentParser {
    /// Create a parser whose default output is [`DEFAULT_OUTPUT`].
    pub fn new() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    /// Use `path` when no `-o`/`--output` is given.
    #[must_use]
    pub fn with_default_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_output = path.into();
        self
    }

    /// Parse the command line (without the program name).
    ///
    /// Checks run in order and stop at the first failure: output flag
    /// extraction, output existence, then grouping of input files and their
    /// flags. Input files must exist when parsing; page ranges are only
    /// parsed once a file's page count is known.
    ///
    /// # Errors
    ///
    /// - [`CombineError::ConflictingFlags`] if both `-o` and `--output` are given.
    /// - [`CombineError::OutputExists`] if the output path is already taken.
    /// - [`CombineError::FileNotFound`] for an input that is not a regular file.
    /// - [`CombineError::UnknownFlag`] for any other flag after an input.
    /// - [`CombineError::MissingValue`] for a flag at the end of the line.
    /// - [`CombineError::InvalidAngle`] for a non-integer angle.
    /// - [`CombineError::NoInputFiles`] if only an output was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfcombine::args::ArgumentParser;
    /// use pdfcombine::config::Invocation;
    ///
    /// let parser = ArgumentParser::new();
    /// assert_eq!(parser.parse(&["--help"]).unwrap(), Invocation::Help);
    /// ```
    pub fn parse<S: AsRef<OsStr>>(&self, tokens: &[S]) -> Result<Invocation> {
        let tokens: Vec<&OsStr> = tokens.iter().map(AsRef::as_ref).collect();

        if tokens.is_empty() || tokens.iter().any(|t| *t == "-h" || *t == "--help") {
            return Ok(Invocation::Help);
        }

        let (output, remaining) = self.extract_output(&tokens)?;

        if output.exists() {
            return Err(CombineError::output_exists(output));
        }

        let operations = group_operations(&remaining)?;
        if operations.is_empty() {
            return Err(CombineError::NoInputFiles);
        }

        log::debug!(
            "parsed {} operation(s), writing to {}",
            operations.len(),
            output.display()
        );

        Ok(Invocation::Combine(CombinePlan { output, operations }))
    }

    /// Split off the output flag and its value.
    fn extract_output<'a>(&self, tokens: &[&'a OsStr]) -> Result<(PathBuf, Vec<&'a OsStr>)> {
        let short = tokens.iter().position(|t| *t == "-o");
        let long = tokens.iter().position(|t| *t == "--output");

        let index = match (short, long) {
            (Some(_), Some(_)) => return Err(CombineError::ConflictingFlags),
            (Some(index), None) | (None, Some(index)) => index,
            (None, None) => return Ok((self.default_output.clone(), tokens.to_vec())),
        };

        let value = tokens
            .get(index + 1)
            .ok_or_else(|| CombineError::MissingValue {
                flag: display_token(tokens[index]),
            })?;

        let remaining = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index && *i != index + 1)
            .map(|(_, token)| *token)
            .collect();

        Ok((PathBuf::from(*value), remaining))
    }
}

impl Default for ArgumentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Group tokens into operations: a file, then any flag/value pairs for it.
fn group_operations(tokens: &[&OsStr]) -> Result<Vec<Operation>> {
    let mut cursor = TokenCursor::new(tokens);
    let mut operations = Vec::new();

    while let Some(file) = cursor.next_token() {
        let source = Path::new(file);
        if !source.is_file() {
            return Err(CombineError::file_not_found(source));
        }

        let mut operation = Operation::new(source);

        while let Some(flag) = cursor.next_flag() {
            let kind = FileFlag::from_token(flag).ok_or_else(|| CombineError::UnknownFlag {
                flag: display_token(flag),
            })?;
            let value = cursor.next_token().ok_or_else(|| CombineError::MissingValue {
                flag: display_token(flag),
            })?;

            // a range that is not UTF-8 cannot hold digits and fails to parse later
            operation = match kind {
                FileFlag::Keep => operation.keep(display_token(value)),
                FileFlag::Remove => operation.remove(display_token(value)),
                FileFlag::Angle => operation.rotate(parse_angle(value)?),
            };
        }

        log::debug!("operation {}: {operation}", operations.len() + 1);
        operations.push(operation);
    }

    Ok(operations)
}

fn parse_angle(value: &OsStr) -> Result<i64> {
    value
        .to_str()
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| CombineError::InvalidAngle {
            value: display_token(value),
        })
}

fn is_flag(token: &OsStr) -> bool {
    token.as_encoded_bytes().starts_with(b"-")
}

fn display_token(token: &OsStr) -> String {
    token.to_string_lossy().into_owned()
}
