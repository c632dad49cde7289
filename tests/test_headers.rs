use slate::http::headers::{HeaderMap, canonical_key};

#[test]
fn test_canonical_key_capitalizes_segments() {
    assert_eq!(canonical_key("content-type"), "Content-Type");
    assert_eq!(canonical_key("last-modified"), "Last-Modified");
    assert_eq!(canonical_key("host"), "Host");
}

#[test]
fn test_canonical_key_lowercases_rest() {
    assert_eq!(canonical_key("CONTENT-LENGTH"), "Content-Length");
    assert_eq!(canonical_key("uSeR-aGeNt"), "User-Agent");
}

#[test]
fn test_canonical_key_is_idempotent() {
    let once = canonical_key("x-custom-header");
    assert_eq!(canonical_key(&once), once);
}

#[test]
fn test_insert_canonicalizes() {
    let mut headers = HeaderMap::new();
    headers.insert("content-type", "text/html");

    assert_eq!(headers.get("Content-Type"), Some("text/html"));
    assert!(headers.contains_key("CONTENT-TYPE"));
}

#[test]
fn test_insert_same_canonical_key_overwrites() {
    let mut headers = HeaderMap::new();
    headers.insert("Accept", "text/html");
    headers.insert("ACCEPT", "*/*");

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("accept"), Some("*/*"));
}

#[test]
fn test_iteration_is_sorted_by_key() {
    let mut headers = HeaderMap::new();
    headers.insert("Last-Modified", "b");
    headers.insert("Content-Length", "a");
    headers.insert("Date", "c");

    let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["Content-Length", "Date", "Last-Modified"]);
}
