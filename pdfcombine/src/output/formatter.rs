//! Message formatting and display.
//!
//! All user-facing text, diagnostics included, goes to standard output.
//! File names and offending tokens are passed through the formatter's
//! [`Highlight`] strategy.
//!
//! # Examples
//!
//! ```
//! use pdfcombine::output::{NoHighlight, OutputFormatter};
//!
//! let formatter = OutputFormatter::with_highlighter(false, Box::new(NoHighlight));
//! formatter.info("Processing files...");
//! formatter.success(&format!("Saved combined PDF to {}.", formatter.highlight("out.pdf")));
//! ```

use std::io::{self, IsTerminal};

use super::highlight::{Highlight, NoHighlight, Yellow};
use crate::error::CombineError;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Output formatter with an injectable highlight strategy.
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Decoration for file names and tokens.
    highlighter: Box<dyn Highlight + Send + Sync>,
}

impl OutputFormatter {
    /// Create a formatter that highlights in yellow when stdout is a colour
    /// terminal.
    pub fn new(quiet: bool) -> Self {
        let highlighter: Box<dyn Highlight + Send + Sync> = if Self::should_use_color() {
            Box::new(Yellow)
        } else {
            Box::new(NoHighlight)
        };
        Self::with_highlighter(quiet, highlighter)
    }

    /// Create a formatter using the given highlight strategy.
    pub fn with_highlighter(quiet: bool, highlighter: Box<dyn Highlight + Send + Sync>) -> Self {
        Self { quiet, highlighter }
    }

    /// Create a quiet formatter (only errors and warnings), without colour.
    pub fn quiet() -> Self {
        Self::with_highlighter(true, Box::new(NoHighlight))
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY, TERM is set and NO_COLOR is not.
    fn should_use_color() -> bool {
        io::stdout().is_terminal()
            && std::env::var_os("TERM").is_some()
            && std::env::var_os("NO_COLOR").is_none()
    }

    /// Whether non-error output is suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Decorate `text` with the configured highlight strategy.
    pub fn highlight(&self, text: &str) -> String {
        self.highlighter.highlight(text)
    }

    /// Render an error with its subject highlighted.
    pub fn render_error(&self, err: &CombineError) -> String {
        err.render(self.highlighter.as_ref())
    }

    /// Print an informational message.
    ///
    /// Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message.
    ///
    /// Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning message.
    ///
    /// Always displayed (even in quiet mode).
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error, highlighting the token or file it is about.
    ///
    /// Always displayed.
    pub fn error(&self, err: &CombineError) {
        self.print_message(MessageLevel::Error, &self.render_error(err));
    }

    /// Print the usage text verbatim.
    pub fn usage(&self, text: &str) {
        println!("{text}");
    }

    /// Format a message for `level` without printing it.
    pub fn format_message(&self, level: MessageLevel, message: &str) -> String {
        let prefix = match level {
            MessageLevel::Info | MessageLevel::Success => "",
            MessageLevel::Warning => "Warning: ",
            MessageLevel::Error => "Error: ",
        };
        format!("{prefix}{message}")
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        println!("{}", self.format_message(level, message));
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}
