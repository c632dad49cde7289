use std::fs::Metadata;
use std::path::{Component, Path, PathBuf};

/// Outcome of mapping a request url onto the document root.
#[derive(Debug)]
pub enum Resolved {
    /// The url maps to an existing file-system entry. Carries the metadata
    /// from the classifying stat so the response builder does not stat
    /// again.
    Found { path: PathBuf, meta: Metadata },
    NotFound,
}

/// Maps a request url to a location under the document root.
///
/// A url ending in `/` gets `index.html` appended before resolving. The
/// joined path is lexically normalized, and a result that escapes the
/// document root resolves to not-found: traversal sequences cannot reach
/// outside the root. Any stat failure also classifies as not-found.
pub async fn resolve(doc_root: &Path, url: &str) -> Resolved {
    let mut target = url.to_string();
    if target.ends_with('/') {
        target.push_str("index.html");
    }

    let root = clean(doc_root);
    let path = clean(&doc_root.join(target.trim_start_matches('/')));
    if !path.starts_with(&root) {
        return Resolved::NotFound;
    }

    match tokio::fs::metadata(&path).await {
        Ok(meta) => Resolved::Found { path, meta },
        Err(_) => Resolved::NotFound,
    }
}

/// Lexical path normalization: drops `.` segments and resolves `..`
/// against the components before it. Does not touch the file system.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(c) => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_resolves_dot_segments() {
        assert_eq!(clean(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(clean(Path::new("a//b/./")), PathBuf::from("a/b"));
    }

    #[test]
    fn clean_stops_at_root() {
        assert_eq!(clean(Path::new("/../../etc")), PathBuf::from("/etc"));
    }
}
