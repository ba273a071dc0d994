//! Sitemap parser: classify lines, build the tree, parse every label.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, instrument, warn};

use crate::domain::label::{parse_label, ParsedLabel};
use crate::domain::line::classify_lines;
use crate::domain::tree::{Node, RawNode, SitemapTree};

/// Node of a fully parsed sitemap.
pub type SitemapNode = Node<ParsedLabel>;

/// Parse sitemap source text into an annotated tree.
///
/// Total over its input: unrecognized lines are skipped, and text without
/// any heading or bullet yields a root with no children.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_sitemap(text: &str) -> SitemapNode {
    let tree: SitemapTree = classify_lines(text).collect();
    let root = tree.into_root();

    let entries = root.node_count() - 1;
    if entries == 0 {
        warn!("no headings or bullet items found in sitemap");
    } else {
        debug!(
            entries,
            leaves = root.leaf_nodes().len(),
            height = root.height(),
            "built sitemap tree"
        );
    }

    parse_node_labels(root)
}

/// Replace every raw label in the tree by its parsed name and link.
///
/// The root has no label and stays unlabelled.
pub fn parse_node_labels(root: RawNode) -> SitemapNode {
    root.map_labels(&mut |label: Option<String>| label.as_deref().map(parse_label))
}

/// Serializes as `{"name", "link", "depth", "children"}`; the root omits
/// `name` and `link`, other nodes always carry `link` (possibly `null`).
impl Serialize for SitemapNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.label.is_some() { 4 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(label) = &self.label {
            map.serialize_entry("name", &label.name)?;
            map.serialize_entry("link", &label.link)?;
        }
        map.serialize_entry("depth", &self.depth)?;
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::SitemapEntry;

    fn name(node: &SitemapNode) -> &str {
        node.label.as_ref().map(|l| l.name.as_str()).unwrap_or("")
    }

    #[test]
    fn given_heading_and_bullet_when_parsing_then_nests_bullet() {
        let root = parse_sitemap("== A ==\n*** B");

        assert_eq!(root.depth, 0);
        assert!(root.label.is_none());
        assert_eq!(root.children.len(), 1);

        let a = &root.children[0];
        assert_eq!(name(a), "A");
        assert_eq!(a.depth, 2);
        assert_eq!(a.children.len(), 1);

        let b = &a.children[0];
        assert_eq!(name(b), "B");
        assert_eq!(b.depth, 9);
        assert!(b.children.is_empty());
    }

    #[test]
    fn given_single_marker_heading_when_parsing_then_depth_is_one() {
        let root = parse_sitemap("= A =\n*** B");
        assert_eq!(root.children[0].depth, 1);
        assert_eq!(root.children[0].children[0].depth, 9);
    }

    #[test]
    fn given_no_recognized_lines_when_parsing_then_returns_empty_root() {
        let root = parse_sitemap("just prose\n\nmore prose");
        assert_eq!(root, SitemapNode::root());
        assert_eq!(parse_sitemap(""), SitemapNode::root());
    }

    #[test]
    fn given_equal_headings_when_parsing_then_siblings() {
        let root = parse_sitemap("=== A ===\n=== B ===");
        let names: Vec<_> = root.children.iter().map(name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(root.children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn given_raw_tree_when_parsing_labels_then_root_stays_unlabelled() {
        let raw = SitemapTree::from_entries(vec![SitemapEntry::new(
            "[[Mathe für Nicht-Freaks: X|Show X]]",
            1,
        )])
        .into_root();

        let parsed = parse_node_labels(raw);

        assert!(parsed.label.is_none());
        assert_eq!(
            parsed.children[0].label,
            Some(ParsedLabel::new(
                "Show X",
                Some("Mathe für Nicht-Freaks: X".to_string())
            ))
        );
    }

    #[test]
    fn given_parsed_tree_when_serializing_then_root_has_no_name_or_link() {
        let root = parse_sitemap("== [[Other|Shown]] ==");
        let json = serde_json::to_value(&root).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "depth": 0,
                "children": [
                    {"name": "Shown", "link": null, "depth": 2, "children": []}
                ]
            })
        );
    }
}
