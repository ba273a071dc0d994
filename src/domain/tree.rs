//! Owned sitemap tree and the depth-based builder that folds entries into it.

use tracing::instrument;

use crate::domain::line::SitemapEntry;

/// Tree node carrying an optional label of type `L`.
///
/// The synthetic root has depth 0 and no label. Children are kept in
/// insertion order, which is the source line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<L> {
    /// Label payload, `None` only for the root
    pub label: Option<L>,
    /// Structural depth as assigned by the line classifier
    pub depth: usize,
    /// Child nodes, strictly deeper than this node
    pub children: Vec<Node<L>>,
}

/// Node as produced by the builder: the label is still raw text.
pub type RawNode = Node<String>;

impl<L> Node<L> {
    /// Synthetic root: depth 0, no label, no children.
    pub fn root() -> Self {
        Self {
            label: None,
            depth: 0,
            children: Vec::new(),
        }
    }

    pub fn leaf(label: L, depth: usize) -> Self {
        Self {
            label: Some(label),
            depth,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::height)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order iterator yielding `(level, node)`, where `self` is level 0.
    pub fn iter(&self) -> TreeIterator<'_, L> {
        TreeIterator::new(self)
    }

    /// Collects all leaf nodes (nodes with no children) left to right.
    pub fn leaf_nodes(&self) -> Vec<&Node<L>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Node<L>>) {
        if self.children.is_empty() {
            leaves.push(self);
        } else {
            for child in &self.children {
                child.collect_leaves(leaves);
            }
        }
    }

    /// Rebuild the tree depth-first with every label passed through `f`.
    ///
    /// `f` also sees the root's `None`; structure and depths are unchanged.
    pub fn map_labels<M, F>(self, f: &mut F) -> Node<M>
    where
        F: FnMut(Option<L>) -> Option<M>,
    {
        let label = f(self.label);
        Node {
            label,
            depth: self.depth,
            children: self
                .children
                .into_iter()
                .map(|child| child.map_labels(f))
                .collect(),
        }
    }
}

pub struct TreeIterator<'a, L> {
    stack: Vec<(usize, &'a Node<L>)>,
}

impl<'a, L> TreeIterator<'a, L> {
    fn new(root: &'a Node<L>) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a, L> Iterator for TreeIterator<'a, L> {
    type Item = (usize, &'a Node<L>);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}

/// Folds classified entries into a rooted tree.
///
/// A new node descends through the chain of last children while the last
/// child is shallower than the node, then becomes the last child of the node
/// where the descent stopped. Only last children are compared, earlier
/// siblings are never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapTree {
    root: RawNode,
}

impl Default for SitemapTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SitemapTree {
    pub fn new() -> Self {
        Self {
            root: Node::root(),
        }
    }

    /// Build a tree from entries in source order.
    #[instrument(level = "debug", skip(entries))]
    pub fn from_entries(entries: impl IntoIterator<Item = SitemapEntry>) -> Self {
        let mut tree = Self::new();
        for entry in entries {
            tree.insert(entry);
        }
        tree
    }

    /// Insert one entry at the position given by the last-child rule.
    pub fn insert(&mut self, entry: SitemapEntry) {
        let mut current = &mut self.root;
        while current
            .children
            .last()
            .is_some_and(|last| last.depth < entry.depth)
        {
            let last = current.children.len() - 1;
            current = &mut current.children[last];
        }
        current.children.push(Node::leaf(entry.label, entry.depth));
    }

    pub fn root(&self) -> &RawNode {
        &self.root
    }

    pub fn into_root(self) -> RawNode {
        self.root
    }
}

impl FromIterator<SitemapEntry> for SitemapTree {
    fn from_iter<T: IntoIterator<Item = SitemapEntry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}
