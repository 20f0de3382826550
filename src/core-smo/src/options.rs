//! Configuration options for outline generation.

/// Configuration options for the outline pipeline.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Glob patterns for page URLs to exclude from the outline
    pub exclude_paths: Vec<String>,
    /// Glob patterns for page URLs to include (if specified, only these are kept)
    pub include_paths: Vec<String>,
    /// Markdown heading level of the host line (default: 2)
    pub heading_base: usize,
    /// Bullet prefix for every outline line (default: "- ")
    pub bullet: String,
    /// Indentation unit, repeated once per depth level (default: "\t")
    pub indent: String,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            exclude_paths: Vec::new(),
            include_paths: Vec::new(),
            heading_base: 2,
            bullet: "- ".to_string(),
            indent: "\t".to_string(),
        }
    }
}

impl OutlineOptions {
    /// Creates a new builder for OutlineOptions.
    pub fn builder() -> OutlineOptionsBuilder {
        OutlineOptionsBuilder::default()
    }
}

/// Builder for OutlineOptions.
#[derive(Debug, Clone, Default)]
pub struct OutlineOptionsBuilder {
    exclude_paths: Vec<String>,
    include_paths: Vec<String>,
    heading_base: Option<usize>,
    bullet: Option<String>,
    indent: Option<String>,
}

impl OutlineOptionsBuilder {
    /// Adds a path pattern to exclude.
    pub fn exclude_path(mut self, pattern: String) -> Self {
        self.exclude_paths.push(pattern);
        self
    }

    /// Adds multiple path patterns to exclude.
    pub fn exclude_paths(mut self, patterns: Vec<String>) -> Self {
        self.exclude_paths.extend(patterns);
        self
    }

    /// Adds a path pattern to include.
    pub fn include_path(mut self, pattern: String) -> Self {
        self.include_paths.push(pattern);
        self
    }

    /// Adds multiple path patterns to include.
    pub fn include_paths(mut self, patterns: Vec<String>) -> Self {
        self.include_paths.extend(patterns);
        self
    }

    /// Sets the heading level used for the host line.
    pub fn heading_base(mut self, heading_base: usize) -> Self {
        self.heading_base = Some(heading_base);
        self
    }

    /// Sets the bullet prefix.
    pub fn bullet(mut self, bullet: String) -> Self {
        self.bullet = Some(bullet);
        self
    }

    /// Sets the indentation unit.
    pub fn indent(mut self, indent: String) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Builds the OutlineOptions.
    pub fn build(self) -> OutlineOptions {
        let defaults = OutlineOptions::default();
        OutlineOptions {
            exclude_paths: self.exclude_paths,
            include_paths: self.include_paths,
            heading_base: self.heading_base.unwrap_or(defaults.heading_base),
            bullet: self.bullet.unwrap_or(defaults.bullet),
            indent: self.indent.unwrap_or(defaults.indent),
        }
    }
}
