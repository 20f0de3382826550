//! HTTP fetching and recursive sitemap resolution.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use quick_xml::Reader;
use quick_xml::events::Event;
use url::Url;

use crate::errors::{OutlineError, Result};

/// Fetches the body of a URL as text.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response body cannot
/// be read.
///
/// # Examples
///
/// ```no_run
/// # use core_smo::fetch_text;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let xml = fetch_text("https://example.com/sitemap.xml").await?;
/// println!("Fetched {} bytes", xml.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_text(url: &str) -> Result<String> {
    let response = reqwest::get(url).await?;
    let text = response.text().await?;
    Ok(text)
}

/// Parses sitemap XML and returns the text content of every `<loc>` element.
///
/// Handles both page sitemaps and sitemap indexes:
/// ```xml
/// <urlset>
///   <url><loc>https://example.com/page</loc></url>
/// </urlset>
/// ```
/// ```xml
/// <sitemapindex>
///   <sitemap><loc>https://example.com/posts-sitemap.xml</loc></sitemap>
/// </sitemapindex>
/// ```
/// Entries pointing at nested sitemaps are distinguished downstream by
/// their `.xml` suffix, not by the surrounding element, so the two formats
/// need no separate handling here. An empty sitemap yields an empty list.
///
/// # Errors
///
/// Returns an error if the XML is malformed.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut locs = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"loc" => {
                in_loc = true;
            }
            Ok(Event::Text(text)) if in_loc => {
                let loc = text
                    .unescape()
                    .map_err(|e| OutlineError::SitemapError(format!("Invalid XML: {}", e)))?;
                let loc = loc.trim();
                if !loc.is_empty() {
                    locs.push(loc.to_string());
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"loc" => {
                in_loc = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(OutlineError::SitemapError(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(locs)
}

/// Fetches a sitemap and recursively expands nested sitemaps, returning the
/// flat list of page URLs.
///
/// Entries ending in `.xml` are treated as nested sitemaps and resolved
/// against the URL of the sitemap that referenced them before being fetched
/// in turn. A nested sitemap that cannot be fetched or parsed is skipped
/// with a warning; a sitemap URL that was already fetched once is not
/// fetched again, so a self-referencing sitemap index terminates.
///
/// # Errors
///
/// Returns an error only if the top-level sitemap cannot be fetched or
/// parsed.
///
/// # Examples
///
/// ```no_run
/// # use core_smo::resolve_sitemap;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pages = resolve_sitemap("https://example.com/sitemap.xml").await?;
/// println!("Found {} page URLs", pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn resolve_sitemap(sitemap_url: &str) -> Result<Vec<String>> {
    let xml = fetch_text(sitemap_url).await?;
    let entries = parse_sitemap(&xml)?;
    tracing::debug!("Fetched top-level sitemap {sitemap_url} ({} entries)", entries.len());

    let mut visited = HashSet::from([sitemap_url.to_string()]);
    let mut pages = Vec::new();
    expand_entries(entries, sitemap_url, &mut visited, &mut pages).await;
    Ok(pages)
}

/// Walks `<loc>` entries, recursing into nested sitemaps and collecting
/// page URLs. Boxed because async recursion needs an indirection.
fn expand_entries<'a>(
    entries: Vec<String>,
    base_url: &'a str,
    visited: &'a mut HashSet<String>,
    pages: &'a mut Vec<String>,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        for entry in entries {
            if !entry.ends_with(".xml") {
                pages.push(entry);
                continue;
            }

            let nested_url = match Url::parse(base_url).and_then(|base| base.join(&entry)) {
                Ok(joined) => joined.to_string(),
                Err(e) => {
                    tracing::warn!("Skipping nested sitemap with unresolvable URL '{entry}': {e}");
                    continue;
                }
            };

            if !visited.insert(nested_url.clone()) {
                tracing::warn!("Skipping already-visited sitemap: {nested_url}");
                continue;
            }

            let xml = match fetch_text(&nested_url).await {
                Ok(xml) => xml,
                Err(e) => {
                    tracing::warn!("Skipping nested sitemap '{nested_url}': {e}");
                    continue;
                }
            };

            match parse_sitemap(&xml) {
                Ok(nested_entries) => {
                    tracing::debug!(
                        "Fetched nested sitemap {nested_url} ({} entries)",
                        nested_entries.len()
                    );
                    expand_entries(nested_entries, &nested_url, visited, pages).await;
                }
                Err(e) => {
                    tracing::warn!("Skipping unparseable nested sitemap '{nested_url}': {e}");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sitemap_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/page1</loc>
    <lastmod>2024-01-01</lastmod>
  </url>
  <url>
    <loc>https://example.com/page2</loc>
  </url>
</urlset>"#;

        let locs = parse_sitemap(xml).unwrap();
        assert_eq!(
            locs,
            vec!["https://example.com/page1", "https://example.com/page2"]
        );
    }

    #[test]
    fn test_parse_sitemap_index() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://example.com/posts-sitemap.xml</loc>
  </sitemap>
  <sitemap>
    <loc>https://example.com/pages-sitemap.xml</loc>
  </sitemap>
</sitemapindex>"#;

        let locs = parse_sitemap(xml).unwrap();
        assert_eq!(
            locs,
            vec![
                "https://example.com/posts-sitemap.xml",
                "https://example.com/pages-sitemap.xml"
            ]
        );
    }

    #[test]
    fn test_parse_sitemap_empty_is_ok() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
</urlset>"#;

        let locs = parse_sitemap(xml).unwrap();
        assert!(locs.is_empty());
    }

    #[test]
    fn test_parse_sitemap_unescapes_entities() {
        let xml = r#"<urlset>
  <url><loc>https://example.com/search?q=a&amp;b</loc></url>
</urlset>"#;

        let locs = parse_sitemap(xml).unwrap();
        assert_eq!(locs, vec!["https://example.com/search?q=a&b"]);
    }

    #[test]
    fn test_parse_sitemap_malformed() {
        let xml = "<urlset><url><loc>https://example.com</url></urlset>";
        assert!(parse_sitemap(xml).is_err());
    }
}
