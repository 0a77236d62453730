//! Integration tests for error handling and edge cases.

use pdfcombine::CombineError;

use crate::common::{Workspace, combine};

#[tokio::test]
async fn test_conflicting_output_flags() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 1);
    let x = ws.path("x.pdf");
    let y = ws.path("y.pdf");

    let err = combine(
        &ws.parser(),
        &[
            a.to_str().unwrap(),
            "-o",
            x.to_str().unwrap(),
            "--output",
            y.to_str().unwrap(),
        ],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CombineError::ConflictingFlags));
    assert!(!x.exists());
    assert!(!y.exists());
}

#[tokio::test]
async fn test_existing_output_checked_before_inputs() {
    let ws = Workspace::new();
    let out = ws.path("out.pdf");
    std::fs::write(&out, b"already here").unwrap();

    // the input does not exist, but the output check comes first
    let err = combine(
        &ws.parser(),
        &[ws.path("missing.pdf").to_str().unwrap(), "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CombineError::OutputExists { .. }));
    assert_eq!(std::fs::read(&out).unwrap(), b"already here");
}

#[tokio::test]
async fn test_page_out_of_range_writes_nothing() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 2);
    let b = ws.tagged_pdf("b.pdf", 2, 3);
    let out = ws.path("out.pdf");

    let err = combine(
        &ws.parser(),
        &[
            a.to_str().unwrap(),
            b.to_str().unwrap(),
            "--keep",
            "2-5",
            "-o",
            out.to_str().unwrap(),
        ],
    )
    .await
    .unwrap_err();

    match err {
        CombineError::PageOutOfRange {
            path,
            page,
            total_pages,
        } => {
            assert_eq!(path, b);
            assert_eq!(page, 4);
            assert_eq!(total_pages, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!out.exists());
    assert!(!ws.path("out.pdf.part").exists());
}

#[tokio::test]
async fn test_invalid_range_fails_before_writing() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 5);
    let out = ws.path("out.pdf");

    let err = combine(
        &ws.parser(),
        &[a.to_str().unwrap(), "--keep", "5-3", "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CombineError::InvalidRange { .. }));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_malformed_range() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 5);

    let err = combine(&ws.parser(), &[a.to_str().unwrap(), "--remove", "1-2-3"])
        .await
        .unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_not_a_pdf() {
    let ws = Workspace::new();
    let notes = ws.path("notes.pdf");
    std::fs::write(&notes, b"plain text, not a PDF").unwrap();

    let err = combine(&ws.parser(), &[notes.to_str().unwrap()])
        .await
        .unwrap_err();

    assert!(matches!(err, CombineError::FailedToLoadPdf { .. }));
    assert_eq!(err.exit_code(), 3);
    assert!(!ws.path("combined.pdf").exists());
}

#[tokio::test]
async fn test_missing_input() {
    let ws = Workspace::new();

    let err = combine(&ws.parser(), &[ws.path("nope.pdf").to_str().unwrap()])
        .await
        .unwrap_err();

    assert!(matches!(err, CombineError::FileNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_output_only_has_no_inputs() {
    let ws = Workspace::new();
    let out = ws.path("out.pdf");

    let err = combine(&ws.parser(), &["-o", out.to_str().unwrap()])
        .await
        .unwrap_err();

    assert!(matches!(err, CombineError::NoInputFiles));
}
