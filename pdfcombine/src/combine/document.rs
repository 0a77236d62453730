//! The output document that selected pages are appended to.
//!
//! Each source is renumbered above the current maximum object id and its
//! objects are moved in wholesale. Selected pages are re-parented onto a
//! single flat page tree owned by the output; everything no longer reachable
//! from the catalog is pruned in [`OutputDocument::finish`].

use lopdf::{Document, Object, ObjectId, dictionary};
use std::collections::BTreeSet;

use crate::error::{CombineError, Result};
use crate::io::SourcePdf;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// Accumulates pages from several sources into one document.
#[derive(Debug)]
pub struct OutputDocument {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<ObjectId>,
}

impl OutputDocument {
    /// Create an empty document with a catalog and a page tree root.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append the zero-indexed `pages` of `source`, in ascending order,
    /// adding `angle` to each page's rotation.
    ///
    /// Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// [`CombineError::PageOutOfRange`] if an index is past the end of the
    /// source. Nothing is appended in that case.
    pub fn append(&mut self, source: SourcePdf, pages: &BTreeSet<usize>, angle: i64) -> Result<usize> {
        let SourcePdf {
            mut document,
            path,
            page_count,
            ..
        } = source;

        document.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = document.get_pages().into_values().collect();
        let selected = pages
            .iter()
            .map(|&index| {
                page_ids
                    .get(index)
                    .copied()
                    .ok_or_else(|| CombineError::PageOutOfRange {
                        path: path.clone(),
                        page: index + 1,
                        total_pages: page_count,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        // Inherited values live on the source tree, which is discarded.
        let inherited = selected
            .iter()
            .map(|&id| inherited_attributes(&document, id).map(|attrs| (id, attrs)))
            .collect::<Result<Vec<_>>>()?;

        self.document.max_id = self.document.max_id.max(document.max_id);
        self.document.objects.extend(document.objects);

        for (page_id, attributes) in inherited {
            let page = self.document.get_dictionary_mut(page_id)?;
            for (key, value) in attributes {
                page.set(key.to_vec(), value);
            }
            page.set("Parent", self.pages_id);

            if angle != 0 {
                let current = current_rotation(&self.document, page_id);
                self.document
                    .get_dictionary_mut(page_id)?
                    .set("Rotate", current + angle);
            }

            self.kids.push(page_id);
        }

        log::debug!(
            "appended {} page(s) from {}, output now has {}",
            selected.len(),
            path.display(),
            self.kids.len()
        );

        Ok(selected.len())
    }

    /// Write the page tree and return the finished document.
    pub fn finish(mut self) -> Document {
        let kids: Vec<Object> = self.kids.iter().map(|&id| id.into()).collect();
        let count = self.kids.len() as i64;

        self.document.objects.insert(
            self.pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }
            .into(),
        );

        let pruned = self.document.prune_objects();
        log::debug!("pruned {} unreachable object(s)", pruned.len());
        self.document.renumber_objects();

        self.document
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// The page's `/Rotate`, following an indirect reference. Missing or
/// unreadable values count as 0.
fn current_rotation(doc: &Document, page_id: ObjectId) -> i64 {
    doc.get_dictionary(page_id)
        .and_then(|page| page.get(b"Rotate"))
        .and_then(|rotate| doc.dereference(rotate))
        .and_then(|(_, rotate)| rotate.as_i64())
        .unwrap_or(0)
}

/// Values the page inherits but does not define itself, nearest ancestor
/// first. Indirect values are copied as references; their targets move into
/// the output together with the rest of the source.
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Result<Vec<(&'static [u8], Object)>> {
    let page = doc.get_dictionary(page_id)?;
    let mut missing: Vec<&'static [u8]> = INHERITABLE
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();
    let mut found = Vec::new();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if missing.is_empty() || depth == MAX_TREE_DEPTH {
            break;
        }
        let node = doc.get_dictionary(node_id)?;
        missing.retain(|&key| match node.get(key) {
            Ok(value) => {
                found.push((key, value.clone()));
                false
            }
            Err(_) => true,
        });
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    Ok(found)
}
