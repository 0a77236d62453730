//! Per-file selection and rotation directives.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::range::PageRange;

/// Which pages of a source document an [`Operation`] contributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every page, in document order.
    #[default]
    All,
    /// Only the pages named by the range spec.
    Keep(String),
    /// Every page except those named by the range spec.
    Remove(String),
}

/// One input file together with its page selection and rotation.
///
/// Built by the argument parser, read-only afterwards.
///
/// # Examples
///
/// ```
/// use pdfcombine::operation::Operation;
/// use std::collections::BTreeSet;
///
/// let op = Operation::new("foo.pdf").remove("1-2");
/// assert_eq!(op.pages_to_keep(4).unwrap(), BTreeSet::from([2, 3]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    source: PathBuf,
    selection: Selection,
    angle: i64,
}

impl Operation {
    /// An operation taking every page of `source`, unrotated.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            selection: Selection::All,
            angle: 0,
        }
    }

    /// Keep only the pages in `range`.
    #[must_use]
    pub fn keep(mut self, range: impl Into<String>) -> Self {
        self.selection = Selection::Keep(range.into());
        self
    }

    /// Drop the pages in `range`, keeping all others.
    #[must_use]
    pub fn remove(mut self, range: impl Into<String>) -> Self {
        self.selection = Selection::Remove(range.into());
        self
    }

    /// Rotate every selected page by `angle` degrees.
    ///
    /// The value is passed through to the page as-is; it is not normalised.
    #[must_use]
    pub fn rotate(mut self, angle: i64) -> Self {
        self.angle = angle;
        self
    }

    /// Path of the source document.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The page selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The range spec, if one was given.
    pub fn range_spec(&self) -> Option<&str> {
        match &self.selection {
            Selection::All => None,
            Selection::Keep(spec) | Selection::Remove(spec) => Some(spec),
        }
    }

    /// False only in remove mode.
    pub fn is_keep(&self) -> bool {
        !matches!(self.selection, Selection::Remove(_))
    }

    /// Rotation in degrees applied to every selected page.
    pub fn angle(&self) -> i64 {
        self.angle
    }

    /// Zero-indexed pages this operation contributes from a document with
    /// `page_count` pages, in ascending order.
    ///
    /// Kept pages are not filtered against `page_count`: the first kept page
    /// past the end stays in the set and surfaces when it is looked up in the
    /// document. Later ones are left out, so the set never grows beyond
    /// `page_count + 1` however wide the range. Removed pages past the end
    /// have no effect.
    ///
    /// # Errors
    ///
    /// Propagates range parse errors.
    pub fn pages_to_keep(&self, page_count: usize) -> Result<BTreeSet<usize>> {
        let pages = 0..page_count;

        match &self.selection {
            Selection::All => Ok(pages.collect()),
            Selection::Keep(spec) => {
                let range = PageRange::parse(spec)?;
                let mut kept: BTreeSet<usize> =
                    pages.filter(|&index| range.contains(index + 1)).collect();
                if let Some(page) = range.first_page_after(page_count) {
                    kept.insert(page - 1);
                }
                Ok(kept)
            }
            Selection::Remove(spec) => {
                let range = PageRange::parse(spec)?;
                Ok(pages.filter(|&index| !range.contains(index + 1)).collect())
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source.display())?;
        match &self.selection {
            Selection::All => {}
            Selection::Keep(spec) => write!(f, " --keep {spec}")?,
            Selection::Remove(spec) => write!(f, " --remove {spec}")?,
        }
        if self.angle != 0 {
            write!(f, " --angle {}", self.angle)?;
        }
        Ok(())
    }
}
