//! # Sitemap Outliner
//!
//! A library for turning a website's `sitemap.xml` into an indented,
//! heading-annotated markdown outline suitable for note-taking tools.
//!
//! The pipeline:
//!
//! 1. Build the sitemap URL from a site URL
//! 2. Fetch the sitemap and recursively expand nested sitemaps
//! 3. Filter page URLs with glob patterns (include/exclude)
//! 4. Organize URLs into a tree keyed by host and path segment
//! 5. Render the tree as bulleted outline text
//!
//! ## Examples
//!
//! ```no_run
//! use core_smo::{OutlineOptions, outline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = OutlineOptions::builder()
//!         .exclude_path("*/tags/*".to_string())
//!         .build();
//!
//!     let text = outline("https://example.com", &options).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

// Module declarations
mod errors;
mod fetch;
mod options;
mod outline;
mod render;
mod tree;
mod url_utils;

pub mod logging;

// Public API re-exports
pub use errors::{OutlineError, Result};
pub use options::{OutlineOptions, OutlineOptionsBuilder};
pub use outline::{organize_urls, outline};

// Additional exports for advanced usage
pub use fetch::{fetch_text, parse_sitemap, resolve_sitemap};
pub use render::render_outline;
pub use tree::PathTree;
pub use url_utils::{UrlFilters, normalize_site_url, sitemap_url_for, url_to_filename};
