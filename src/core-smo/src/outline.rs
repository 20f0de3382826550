//! Top-level pipeline: site URL in, rendered outline out.

use crate::errors::Result;
use crate::fetch::resolve_sitemap;
use crate::options::OutlineOptions;
use crate::render::render_outline;
use crate::tree::PathTree;
use crate::url_utils::{UrlFilters, sitemap_url_for};

/// Organizes page URLs into a path tree, applying the options' URL filters.
///
/// URLs that fail the filters are dropped; URLs that cannot be parsed are
/// skipped by the tree itself.
///
/// # Errors
///
/// Returns an error if an include/exclude glob pattern is invalid.
pub fn organize_urls(urls: &[String], options: &OutlineOptions) -> Result<PathTree> {
    let filters = UrlFilters::new(&options.include_paths, &options.exclude_paths)?;

    let mut tree = PathTree::new();
    for url in urls {
        if filters.matches(url) {
            tree.insert_url(url);
        }
    }
    Ok(tree)
}

/// Generates the outline for one website.
///
/// This function:
/// 1. Builds the sitemap URL from the site URL
/// 2. Fetches the sitemap, expanding nested sitemaps recursively
/// 3. Filters and organizes the page URLs into a tree
/// 4. Renders the tree as outline text
///
/// # Errors
///
/// Returns an error if the top-level sitemap cannot be fetched or parsed,
/// or if a filter pattern is invalid.
///
/// # Examples
///
/// ```no_run
/// # use core_smo::{OutlineOptions, outline};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = OutlineOptions::builder()
///     .exclude_path("*/tags/*".to_string())
///     .build();
///
/// let text = outline("https://example.com", &options).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
pub async fn outline(site_url: &str, options: &OutlineOptions) -> Result<String> {
    let sitemap_url = sitemap_url_for(site_url);
    tracing::info!("Resolving sitemap: {sitemap_url}");

    let urls = resolve_sitemap(&sitemap_url).await?;
    tracing::info!("Resolved {} page URLs for {site_url}", urls.len());

    let tree = organize_urls(&urls, options)?;
    if tree.is_empty() {
        tracing::info!("No page URLs survived organization for {site_url}; outline is empty");
    }

    Ok(render_outline(&tree, options))
}
