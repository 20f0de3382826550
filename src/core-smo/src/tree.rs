//! Hierarchical organization of page URLs by host and path segment.

use std::collections::BTreeMap;

use url::Url;

/// A nested, ordered mapping of URL segments.
///
/// The first level holds hosts; deeper levels hold successive path
/// segments. Inserting `example.com/docs/a` and `example.com/docs/b`
/// produces a single `docs` node with two children, so shared prefixes are
/// deduplicated. Iteration order is sorted (BTreeMap), which is what the
/// renderer relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    children: BTreeMap<String, PathTree>,
}

impl PathTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child nodes in sorted key order.
    pub fn children(&self) -> impl Iterator<Item = (&String, &PathTree)> {
        self.children.iter()
    }

    /// Inserts a chain of segments, reusing existing nodes along the way.
    pub fn insert_segments<I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut node = self;
        for segment in segments {
            node = node.children.entry(segment).or_default();
        }
    }

    /// Inserts a page URL as its host followed by its non-empty path
    /// segments.
    ///
    /// Returns `false` (and skips the URL with a warning) when the URL
    /// cannot be parsed or has no host.
    pub fn insert_url(&mut self, page_url: &str) -> bool {
        let parsed = match Url::parse(page_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping unparseable page URL '{page_url}': {e}");
                return false;
            }
        };

        let Some(host) = parsed.host_str() else {
            tracing::warn!("Skipping page URL without a host: {page_url}");
            return false;
        };

        let segments = std::iter::once(host.to_string()).chain(
            parsed
                .path_segments()
                .into_iter()
                .flatten()
                .filter(|segment| !segment.is_empty())
                .map(|segment| segment.to_string()),
        );
        self.insert_segments(segments);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(node: &PathTree) -> Vec<&str> {
        node.children().map(|(key, _)| key.as_str()).collect()
    }

    fn child<'a>(node: &'a PathTree, key: &str) -> &'a PathTree {
        node.children()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, child)| child)
            .unwrap()
    }

    #[test]
    fn test_insert_url_host_then_segments() {
        let mut tree = PathTree::new();
        assert!(tree.insert_url("https://example.com/docs/guide"));

        assert_eq!(keys(&tree), vec!["example.com"]);
        let host = child(&tree, "example.com");
        assert_eq!(keys(host), vec!["docs"]);
        assert_eq!(keys(child(host, "docs")), vec!["guide"]);
    }

    #[test]
    fn test_insert_url_shared_prefixes_deduplicated() {
        let mut tree = PathTree::new();
        tree.insert_url("https://example.com/docs/a");
        tree.insert_url("https://example.com/docs/b");
        tree.insert_url("https://example.com/blog");

        let host = child(&tree, "example.com");
        assert_eq!(keys(host), vec!["blog", "docs"]);
        assert_eq!(keys(child(host, "docs")), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_root_url_is_host_only() {
        let mut tree = PathTree::new();
        tree.insert_url("https://example.com/");

        assert_eq!(keys(&tree), vec!["example.com"]);
        assert!(child(&tree, "example.com").is_empty());
    }

    #[test]
    fn test_insert_url_trailing_slash_collapses() {
        let mut tree = PathTree::new();
        tree.insert_url("https://example.com/docs/");
        tree.insert_url("https://example.com/docs");

        let host = child(&tree, "example.com");
        assert_eq!(keys(host), vec!["docs"]);
        assert!(child(host, "docs").is_empty());
    }

    #[test]
    fn test_insert_url_rejects_garbage() {
        let mut tree = PathTree::new();
        assert!(!tree.insert_url("not a url"));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_two_hosts_sorted() {
        let mut tree = PathTree::new();
        tree.insert_url("https://zeta.example.com/a");
        tree.insert_url("https://alpha.example.com/b");

        assert_eq!(keys(&tree), vec!["alpha.example.com", "zeta.example.com"]);
    }
}
