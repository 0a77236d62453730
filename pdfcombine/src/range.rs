//! Page range parsing.
//!
//! A range spec is a comma-separated list of one-indexed page numbers and
//! inclusive `LOW-HIGH` spans:
//! - "1" - single page
//! - "1-5" - range of pages (inclusive)
//! - "1,3,5" - multiple individual pages
//! - "1-2,4" - combination of ranges
//!
//! Parsing does not know how many pages a document has. Bounds are checked
//! later, when the selected pages are looked up in an opened document.

use std::collections::BTreeSet;

use crate::error::{CombineError, Result};

/// A parsed page range spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    items: Vec<PageRangeItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageRangeItem {
    Single(usize),
    Range(usize, usize),
}

impl PageRange {
    /// Parse a page range string.
    ///
    /// # Errors
    ///
    /// - [`CombineError::InvalidRange`] for a `LOW-HIGH` token with `HIGH < LOW`.
    /// - [`CombineError::MalformedRange`] for a token with more than one dash,
    ///   an empty or non-integer component, or page number zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfcombine::range::PageRange;
    ///
    /// let range = PageRange::parse("1-2,4").unwrap();
    /// assert!(range.contains(2));
    /// assert!(!range.contains(3));
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        let mut items = Vec::new();

        for token in spec.split(',') {
            let limits: Vec<&str> = token.split('-').collect();
            let item = match limits.as_slice() {
                [page] => PageRangeItem::Single(parse_page_number(page, spec)?),
                [low, high] => {
                    let low = parse_page_number(low, spec)?;
                    let high = parse_page_number(high, spec)?;
                    if high < low {
                        return Err(CombineError::InvalidRange {
                            range: token.trim().to_string(),
                        });
                    }
                    PageRangeItem::Range(low, high)
                }
                _ => return Err(CombineError::malformed_range(spec)),
            };
            items.push(item);
        }

        Ok(Self { items })
    }

    /// Check if a one-indexed page number is included in this range.
    pub fn contains(&self, page: usize) -> bool {
        self.items.iter().any(|item| match *item {
            PageRangeItem::Single(p) => p == page,
            PageRangeItem::Range(low, high) => (low..=high).contains(&page),
        })
    }

    /// Smallest selected one-indexed page greater than `page`, if any.
    pub fn first_page_after(&self, page: usize) -> Option<usize> {
        self.items
            .iter()
            .filter_map(|item| match *item {
                PageRangeItem::Single(p) => (p > page).then_some(p),
                PageRangeItem::Range(low, high) => (high > page).then(|| low.max(page + 1)),
            })
            .min()
    }

    /// All selected pages as one-indexed numbers, as written by the user.
    pub fn one_indexed(&self) -> BTreeSet<usize> {
        self.items
            .iter()
            .flat_map(|item| match *item {
                PageRangeItem::Single(p) => p..=p,
                PageRangeItem::Range(low, high) => low..=high,
            })
            .collect()
    }

    /// All selected pages as zero-indexed positions in a page list.
    pub fn zero_indexed(&self) -> BTreeSet<usize> {
        // page numbers are validated to be >= 1 at parse time
        self.one_indexed().into_iter().map(|p| p - 1).collect()
    }
}

/// Parse a range spec straight into a page set.
///
/// With `zero_index` the result holds positions in a page list (`"1"` becomes
/// `0`); without it the one-indexed page numbers are returned unchanged.
///
/// ```
/// use pdfcombine::range::parse_page_range;
/// use std::collections::BTreeSet;
///
/// assert_eq!(parse_page_range("1-2,4", true).unwrap(), BTreeSet::from([0, 1, 3]));
/// assert_eq!(parse_page_range("1-2,4", false).unwrap(), BTreeSet::from([1, 2, 4]));
/// ```
pub fn parse_page_range(spec: &str, zero_index: bool) -> Result<BTreeSet<usize>> {
    let range = PageRange::parse(spec)?;
    Ok(if zero_index {
        range.zero_indexed()
    } else {
        range.one_indexed()
    })
}

fn parse_page_number(component: &str, spec: &str) -> Result<usize> {
    match component.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(CombineError::malformed_range(spec)),
        Ok(page) => Ok(page),
    }
}
