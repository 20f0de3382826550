use std::path::PathBuf;

use clap::Parser;
use core_smo::{OutlineOptions, logging::setup_logging, normalize_site_url, outline};

#[derive(Parser)]
#[command(name = "sitemap-outline")]
#[command(about = "Generate a markdown outline from a website's sitemap", long_about = None)]
struct OutlineCli {
    /// The website URL to generate an outline for.
    #[arg(value_parser = validate_site_url)]
    url: String,

    /// Output file path for the generated outline
    #[arg(short, long, default_value = "sitemap.md", value_parser = validate_output_file)]
    output: PathBuf,

    /// Glob pattern for page URLs to exclude (repeatable)
    #[arg(long = "exclude-path")]
    exclude_paths: Vec<String>,

    /// Glob pattern for page URLs to include; when given, only matching URLs are kept (repeatable)
    #[arg(long = "include-path")]
    include_paths: Vec<String>,

    /// Markdown heading level used for the host line
    #[arg(long, default_value_t = 2)]
    heading_base: usize,
}

fn validate_site_url(s: &str) -> Result<String, String> {
    // Accept scheme-less input the way the GUI does.
    let normalized = normalize_site_url(s);
    url::Url::parse(&normalized)
        .map(|_| normalized)
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    // A bare filename has an empty parent, which is the current directory.
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    setup_logging("core_smo=info");

    let cli = OutlineCli::parse();

    let options = OutlineOptions::builder()
        .exclude_paths(cli.exclude_paths.clone())
        .include_paths(cli.include_paths.clone())
        .heading_base(cli.heading_base)
        .build();

    let text = match outline(&cli.url, &options).await {
        Ok(text) => text,
        Err(e) => {
            println!("ERROR: Cannot generate outline for '{}' due to: {e}", cli.url);
            std::process::exit(1)
        }
    };

    if let Err(e) = std::fs::write(&cli.output, &text) {
        println!("ERROR: Cannot write file ({:?}) due to: {e}", cli.output);
        std::process::exit(1)
    }

    println!("Wrote outline for {} to {}", cli.url, cli.output.display());
}
