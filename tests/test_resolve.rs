use slate::server::resolve::{Resolved, resolve};
use std::path::Path;

fn doc_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), b"<h1>home</h1>").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub/page.html"), b"<h1>sub</h1>").unwrap();
    dir
}

#[tokio::test]
async fn test_resolves_existing_file() {
    let root = doc_root();

    match resolve(root.path(), "/sub/page.html").await {
        Resolved::Found { path, meta } => {
            assert_eq!(path, root.path().join("sub/page.html"));
            assert_eq!(meta.len(), 12);
        }
        Resolved::NotFound => panic!("expected a match"),
    }
}

#[tokio::test]
async fn test_trailing_slash_appends_index_html() {
    let root = doc_root();

    match resolve(root.path(), "/").await {
        Resolved::Found { path, .. } => assert_eq!(path, root.path().join("index.html")),
        Resolved::NotFound => panic!("expected index.html"),
    }

    // Equivalent to requesting the index directly.
    assert!(matches!(
        resolve(root.path(), "/index.html").await,
        Resolved::Found { .. }
    ));
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let root = doc_root();
    assert!(matches!(
        resolve(root.path(), "/missing.txt").await,
        Resolved::NotFound
    ));
}

#[tokio::test]
async fn test_dot_segments_resolve_within_root() {
    let root = doc_root();
    match resolve(root.path(), "/sub/../index.html").await {
        Resolved::Found { path, .. } => assert_eq!(path, root.path().join("index.html")),
        Resolved::NotFound => panic!("expected index.html"),
    }
}

#[tokio::test]
async fn test_traversal_out_of_root_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("docs");
    std::fs::create_dir(&root).unwrap();
    // A real file one level above the document root.
    std::fs::write(dir.path().join("secret.txt"), b"secret").unwrap();

    assert!(matches!(
        resolve(&root, "/../secret.txt").await,
        Resolved::NotFound
    ));
    assert!(matches!(
        resolve(&root, "/../../../../etc/passwd").await,
        Resolved::NotFound
    ));
}

#[tokio::test]
async fn test_nonexistent_root_is_not_found() {
    assert!(matches!(
        resolve(Path::new("/no/such/root"), "/index.html").await,
        Resolved::NotFound
    ));
}
