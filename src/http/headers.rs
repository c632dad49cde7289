use std::collections::BTreeMap;

/// Canonicalizes a header name: the first letter of each hyphen-delimited
/// segment is uppercased, the rest lowercased.
///
/// # Example
///
/// ```
/// # use slate::http::headers::canonical_key;
/// assert_eq!(canonical_key("content-type"), "Content-Type");
/// assert_eq!(canonical_key("HOST"), "Host");
/// ```
pub fn canonical_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut start_of_segment = true;

    for c in key.chars() {
        if c == '-' {
            out.push('-');
            start_of_segment = true;
        } else if start_of_segment {
            out.extend(c.to_uppercase());
            start_of_segment = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Header storage with canonicalization applied once, at insertion.
///
/// Backed by a sorted map so that iteration yields keys in lexicographic
/// order; the response writer relies on this for deterministic serialization.
/// Inserting a key that canonicalizes to an existing one overwrites it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: BTreeMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries.insert(canonical_key(key.as_ref()), value.into());
    }

    /// Looks up a header value; the key is canonicalized before the lookup,
    /// so lookups are case-insensitive.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&canonical_key(key)).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&canonical_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
