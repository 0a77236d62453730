//! Highlighting of file names and tokens in diagnostics.

/// Strategy used to make a substring of a message stand out.
///
/// Any `Fn(&str) -> String` is a strategy, so callers can inject their own:
///
/// ```
/// use pdfcombine::output::Highlight;
///
/// let brackets = |s: &str| format!("[{s}]");
/// assert_eq!(brackets.highlight("a.pdf"), "[a.pdf]");
/// ```
pub trait Highlight {
    /// Return `text` decorated for display.
    fn highlight(&self, text: &str) -> String;
}

impl<F> Highlight for F
where
    F: Fn(&str) -> String,
{
    fn highlight(&self, text: &str) -> String {
        self(text)
    }
}

/// Yellow foreground via ANSI escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yellow;

impl Highlight for Yellow {
    fn highlight(&self, text: &str) -> String {
        format!("\x1b[33m{text}\x1b[39m")
    }
}

/// Leaves text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlight;

impl Highlight for NoHighlight {
    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}
