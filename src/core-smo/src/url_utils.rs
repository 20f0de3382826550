//! URL construction and filtering utilities.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::errors::Result;

/// Builds the conventional sitemap URL for a site.
///
/// # Examples
///
/// ```
/// # use core_smo::sitemap_url_for;
/// assert_eq!(sitemap_url_for("https://example.com"), "https://example.com/sitemap.xml");
/// assert_eq!(sitemap_url_for("https://example.com/"), "https://example.com/sitemap.xml");
/// ```
pub fn sitemap_url_for(site_url: &str) -> String {
    format!("{}/sitemap.xml", site_url.trim_end_matches('/'))
}

/// Prepends `https://` to user input that carries no scheme.
///
/// # Examples
///
/// ```
/// # use core_smo::normalize_site_url;
/// assert_eq!(normalize_site_url("example.com"), "https://example.com");
/// assert_eq!(normalize_site_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_site_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Converts a URL to a filesystem-safe filename stem.
///
/// The scheme is dropped and path/host separators become underscores, so
/// `https://example.com/docs` turns into `example_com_docs`.
pub fn url_to_filename(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    stripped.trim_end_matches('/').replace(['/', '.'], "_")
}

/// Compiled include/exclude glob matchers for page URLs.
///
/// Exclusion wins; if include patterns exist, only URLs matching at least
/// one of them pass.
#[derive(Debug, Clone)]
pub struct UrlFilters {
    exclude: GlobSet,
    include: Option<GlobSet>,
}

impl UrlFilters {
    /// Compiles glob matchers from include/exclude pattern lists.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob pattern is invalid.
    pub fn new(include_paths: &[String], exclude_paths: &[String]) -> Result<Self> {
        let mut exclude_builder = GlobSetBuilder::new();
        for pattern in exclude_paths {
            exclude_builder.add(Glob::new(pattern)?);
        }
        let exclude = exclude_builder.build()?;

        let include = if include_paths.is_empty() {
            None
        } else {
            let mut include_builder = GlobSetBuilder::new();
            for pattern in include_paths {
                include_builder.add(Glob::new(pattern)?);
            }
            Some(include_builder.build()?)
        };

        Ok(Self { exclude, include })
    }

    /// True if the URL passes the filters.
    pub fn matches(&self, url: &str) -> bool {
        if self.exclude.is_match(url) {
            return false;
        }

        match &self.include {
            Some(include) => include.is_match(url),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_url_for() {
        assert_eq!(
            sitemap_url_for("https://example.com"),
            "https://example.com/sitemap.xml"
        );
        assert_eq!(
            sitemap_url_for("https://example.com///"),
            "https://example.com/sitemap.xml"
        );
    }

    #[test]
    fn test_normalize_site_url() {
        assert_eq!(normalize_site_url("example.com"), "https://example.com");
        assert_eq!(normalize_site_url("  example.com "), "https://example.com");
        assert_eq!(
            normalize_site_url("http://example.com"),
            "http://example.com"
        );
        assert_eq!(
            normalize_site_url("https://example.com"),
            "https://example.com"
        );
    }

    #[test]
    fn test_url_to_filename() {
        assert_eq!(
            url_to_filename("https://example.com/docs/guide"),
            "example_com_docs_guide"
        );
        assert_eq!(url_to_filename("http://example.com/"), "example_com");
        assert_eq!(url_to_filename("example.com"), "example_com");
    }

    #[test]
    fn test_url_filters_exclude_wins() {
        let include = vec!["*/docs/*".to_string()];
        let exclude = vec!["*/docs/private/*".to_string()];
        let filters = UrlFilters::new(&include, &exclude).unwrap();

        assert!(filters.matches("https://example.com/docs/guide"));
        assert!(!filters.matches("https://example.com/docs/private/key"));
        assert!(!filters.matches("https://example.com/api/v1"));
    }

    #[test]
    fn test_url_filters_no_includes_passes_everything() {
        let exclude = vec!["*/admin/*".to_string()];
        let filters = UrlFilters::new(&[], &exclude).unwrap();

        assert!(filters.matches("https://example.com/api/v1"));
        assert!(!filters.matches("https://example.com/admin/panel"));
    }

    #[test]
    fn test_url_filters_invalid_pattern() {
        let bad = vec!["a{".to_string()];
        assert!(UrlFilters::new(&bad, &[]).is_err());
    }
}
