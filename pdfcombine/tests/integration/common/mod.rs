//! Shared helpers for the integration tests.
//!
//! Test PDFs are generated on the fly. Page `p` (one-indexed) of a file
//! tagged `t` has a MediaBox width of `t * 100 + p`, so the origin of every
//! page in a combined file can be read back.

use lopdf::{Document, Object, dictionary};
use pdfcombine::output::OutputFormatter;
use pdfcombine::{ArgumentParser, CombinePipeline, CombineSummary, Invocation, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding generated inputs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a `pages`-page PDF tagged `tag` and return its path.
    pub fn tagged_pdf(&self, name: &str, tag: i64, pages: usize) -> PathBuf {
        let path = self.path(name);
        tagged_document(tag, pages)
            .save(&path)
            .expect("Failed to write test PDF");
        path
    }

    /// Parse `tokens` with the output defaulting into this workspace.
    pub fn parser(&self) -> ArgumentParser {
        ArgumentParser::new().with_default_output(self.path("combined.pdf"))
    }
}

pub fn tagged_document(tag: i64, pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (1..=pages as i64)
        .map(|page| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), (tag * 100 + page).into(), 792.into()],
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Parse `tokens` and run the resulting plan.
pub async fn combine(parser: &ArgumentParser, tokens: &[&str]) -> Result<CombineSummary> {
    let formatter = OutputFormatter::quiet();
    match parser.parse(tokens)? {
        Invocation::Combine(plan) => CombinePipeline::new(&formatter).run(&plan).await,
        Invocation::Help => panic!("unexpected help invocation for {tokens:?}"),
    }
}

/// A page of a combined file: which source page it came from and its rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub width: i64,
    pub rotate: i64,
}

pub fn page(width: i64, rotate: i64) -> PageInfo {
    PageInfo { width, rotate }
}

pub fn read_pages(path: &Path) -> Vec<PageInfo> {
    let doc = Document::load(path).expect("Failed to load combined PDF");
    doc.get_pages()
        .into_values()
        .map(|id| {
            let dict = doc.get_dictionary(id).unwrap();
            let media_box = dict.get(b"MediaBox").unwrap().as_array().unwrap();
            PageInfo {
                width: media_box[2].as_i64().unwrap(),
                rotate: dict.get(b"Rotate").and_then(Object::as_i64).unwrap_or(0),
            }
        })
        .collect()
}
