//! End-to-end combine runs on generated PDFs.

use crate::common::{Workspace, combine, page, read_pages};

#[tokio::test]
async fn test_concatenate_two_files() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 3);
    let b = ws.tagged_pdf("b.pdf", 2, 3);
    let out = ws.path("out.pdf");

    let summary = combine(
        &ws.parser(),
        &[a.to_str().unwrap(), b.to_str().unwrap(), "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap();

    assert_eq!(summary.total_pages, 6);
    assert_eq!(summary.operations, 2);
    assert_eq!(
        read_pages(&out),
        vec![
            page(101, 0),
            page(102, 0),
            page(103, 0),
            page(201, 0),
            page(202, 0),
            page(203, 0),
        ]
    );
}

#[tokio::test]
async fn test_keep_pages() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 5);
    let out = ws.path("out.pdf");

    combine(
        &ws.parser(),
        &[a.to_str().unwrap(), "--keep", "1-2,4", "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap();

    assert_eq!(
        read_pages(&out),
        vec![page(101, 0), page(102, 0), page(104, 0)]
    );
}

#[tokio::test]
async fn test_remove_pages() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 4);
    let out = ws.path("out.pdf");

    combine(
        &ws.parser(),
        &[a.to_str().unwrap(), "-r", "1-2", "--output", out.to_str().unwrap()],
    )
    .await
    .unwrap();

    assert_eq!(read_pages(&out), vec![page(103, 0), page(104, 0)]);
}

#[tokio::test]
async fn test_rotation_applies_to_one_file() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 3);
    let b = ws.tagged_pdf("b.pdf", 2, 2);
    let out = ws.path("out.pdf");

    combine(
        &ws.parser(),
        &[
            "-o",
            out.to_str().unwrap(),
            a.to_str().unwrap(),
            "--keep",
            "1-2",
            "--angle",
            "90",
            b.to_str().unwrap(),
            "--keep",
            "2",
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        read_pages(&out),
        vec![page(101, 90), page(102, 90), page(202, 0)]
    );
}

#[tokio::test]
async fn test_keep_order_is_ascending() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 4);
    let out = ws.path("out.pdf");

    combine(
        &ws.parser(),
        &[a.to_str().unwrap(), "--keep", "4,1,2-3,1", "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap();

    let widths: Vec<i64> = read_pages(&out).iter().map(|p| p.width).collect();
    assert_eq!(widths, vec![101, 102, 103, 104]);
}

#[tokio::test]
async fn test_same_file_twice() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 3);
    let out = ws.path("out.pdf");
    let a = a.to_str().unwrap();

    combine(
        &ws.parser(),
        &[a, "--keep", "3", a, "--keep", "1", "-a", "-90", "-o", out.to_str().unwrap()],
    )
    .await
    .unwrap();

    assert_eq!(read_pages(&out), vec![page(103, 0), page(101, -90)]);
}

#[tokio::test]
async fn test_default_output_path() {
    let ws = Workspace::new();
    let a = ws.tagged_pdf("a.pdf", 1, 1);

    let summary = combine(&ws.parser(), &[a.to_str().unwrap()]).await.unwrap();

    assert_eq!(summary.output, ws.path("combined.pdf"));
    assert_eq!(read_pages(&summary.output), vec![page(101, 0)]);
}
