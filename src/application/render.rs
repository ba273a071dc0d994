//! Rendering of parsed sitemaps: JSON and a terminal tree view.

use std::fmt;

use serde::{Deserialize, Serialize};
use termtree::Tree;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::SitemapNode;

/// Label shown for the synthetic root in the tree view.
pub const ROOT_LABEL: &str = "sitemap";

/// Output format for a parsed sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested JSON object
    #[default]
    Json,
    /// Indented tree for the terminal
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Render `node` in the given format.
pub fn render(node: &SitemapNode, format: OutputFormat, pretty: bool) -> ApplicationResult<String> {
    match format {
        OutputFormat::Json => to_json(node, pretty),
        OutputFormat::Tree => Ok(node.to_tree_view().to_string()),
    }
}

/// Serialize `node` as JSON.
pub fn to_json(node: &SitemapNode, pretty: bool) -> ApplicationResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    };
    result.map_err(|e| ApplicationError::Render {
        message: format!("serialize sitemap to JSON: {e}"),
    })
}

pub trait TreeViewConvert {
    fn to_tree_view(&self) -> Tree<String>;
}

impl TreeViewConvert for SitemapNode {
    fn to_tree_view(&self) -> Tree<String> {
        let text = match &self.label {
            Some(label) => match &label.link {
                Some(link) => format!("{} -> {}", label.name, link),
                None => label.name.clone(),
            },
            None => ROOT_LABEL.to_string(),
        };

        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_view()).collect();

        Tree::new(text).with_leaves(leaves)
    }
}
