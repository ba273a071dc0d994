//! Domain layer: the sitemap grammar and tree model
//!
//! Pure functions over text; no I/O, no configuration, no errors.

pub mod label;
pub mod line;
pub mod sitemap;
pub mod tree;

pub use label::{parse_label, ParsedLabel, LINK_NAMESPACE};
pub use line::{classify_line, classify_lines, SitemapEntry, MAX_HEADING_DEPTH};
pub use sitemap::{parse_node_labels, parse_sitemap, SitemapNode};
pub use tree::{Node, RawNode, SitemapTree, TreeIterator};
