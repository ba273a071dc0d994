//! Sitemap conversion service
//!
//! Reads sitemap files through the filesystem boundary, parses them and
//! renders the resulting tree.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::render::{self, OutputFormat};
use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{parse_sitemap, SitemapNode};
use crate::infrastructure::traits::FileSystem;

/// Service for converting sitemaps into trees.
pub struct SitemapService {
    fs: Arc<dyn FileSystem>,
}

impl SitemapService {
    /// Create a new sitemap service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Parse sitemap text that is already in memory.
    pub fn parse_str(&self, text: &str) -> SitemapNode {
        parse_sitemap(text)
    }

    /// Read and parse a sitemap file.
    #[instrument(level = "debug", skip(self))]
    pub fn parse_file(&self, path: &Path) -> ApplicationResult<SitemapNode> {
        // Check file exists first - give clear error message
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("sitemap not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        if !self.fs.is_file(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("sitemap is not a file: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "not a regular file",
                )),
            });
        }

        let text = self
            .fs
            .read_to_string(path)
            .with_path_context("read sitemap", path)?;
        debug!("parse_file: read {} bytes", text.len());

        Ok(self.parse_str(&text))
    }

    /// Render a parsed sitemap.
    pub fn render(
        &self,
        node: &SitemapNode,
        format: OutputFormat,
        pretty: bool,
    ) -> ApplicationResult<String> {
        render::render(node, format, pretty)
    }

    /// Parse `text`, render it and write it to `output` if given.
    ///
    /// Returns the rendered text in either case.
    #[instrument(level = "debug", skip(self, text))]
    pub fn convert_str(
        &self,
        text: &str,
        output: Option<&Path>,
        format: OutputFormat,
        pretty: bool,
    ) -> ApplicationResult<String> {
        let root = self.parse_str(text);
        self.write_rendered(&root, output, format, pretty)
    }

    /// Read `input`, render it and write it to `output` if given.
    ///
    /// Returns the rendered text in either case.
    #[instrument(level = "debug", skip(self))]
    pub fn convert(
        &self,
        input: &Path,
        output: Option<&Path>,
        format: OutputFormat,
        pretty: bool,
    ) -> ApplicationResult<String> {
        let root = self.parse_file(input)?;
        self.write_rendered(&root, output, format, pretty)
    }

    fn write_rendered(
        &self,
        root: &SitemapNode,
        output: Option<&Path>,
        format: OutputFormat,
        pretty: bool,
    ) -> ApplicationResult<String> {
        let mut rendered = self.render(root, format, pretty)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        if let Some(path) = output {
            self.fs
                .ensure_parent(path)
                .with_path_context("create output directory", path)?;
            self.fs
                .write(path, &rendered)
                .with_path_context("write output", path)?;
            debug!("write_rendered: wrote {} bytes to {}", rendered.len(), path.display());
        }

        Ok(rendered)
    }
}
