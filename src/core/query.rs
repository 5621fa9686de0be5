//! Read-only queries over a built [`DirNode`] tree.
//!
//! The depth-bounded queries walk **only non-leaf directories**. Depth `d`
//! means the node is reached through `d` hops of non-leaf children and is
//! itself non-leaf. Leaf subdirectories of the starting node, and any chain of
//! leaves below, contribute nothing beyond depth 0. Callers expecting every
//! subdirectory to be explored should walk [`DirNode::children`] directly.

use crate::core::render::Rendered;
use crate::models::DirNode;

impl DirNode {
    /// True when the directory has neither files nor subdirectories.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// True when the directory has no subdirectories. It may still hold files.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Bare file names of this node, followed by those of every non-leaf
    /// descendant at depths `1..=max_depth`, level by level.
    pub fn files_at(&self, max_depth: usize) -> Vec<&str> {
        self.nodes_by_level(max_depth)
            .into_iter()
            .flat_map(|node| node.files.iter().map(String::as_str))
            .collect()
    }

    /// Same walk as [`files_at`](Self::files_at), keeping names that end in
    /// `suffix` byte for byte and are strictly longer than it.
    ///
    /// Each match is returned as the owning node's path plus the file name.
    pub fn files_with_suffix(&self, suffix: &str, max_depth: usize) -> Vec<String> {
        self.nodes_by_level(max_depth)
            .into_iter()
            .flat_map(|node| {
                node.files
                    .iter()
                    .filter(|name| has_suffix(name, suffix))
                    .map(move |name| format!("{}{}", node.path, name))
            })
            .collect()
    }

    /// Direct children without subdirectories.
    pub fn leaf_dirs(&self) -> Vec<&DirNode> {
        self.children.iter().filter(|c| c.is_leaf()).collect()
    }

    /// Direct children with at least one subdirectory.
    pub fn non_leaf_dirs(&self) -> Vec<&DirNode> {
        self.children.iter().filter(|c| !c.is_leaf()).collect()
    }

    /// Lazily rendered text tree; formatting happens on display.
    pub fn render(&self, max_depth: usize) -> Rendered<'_> {
        Rendered::new(self, max_depth)
    }

    /// `self` followed by the non-leaf nodes at each depth up to `max_depth`.
    ///
    /// Levels are only allocated once a non-leaf node is found at that depth,
    /// so `max_depth` may be arbitrarily large.
    fn nodes_by_level(&self, max_depth: usize) -> Vec<&DirNode> {
        let mut levels: Vec<Vec<&DirNode>> = Vec::new();
        self.collect_non_leaf(0, max_depth, &mut levels);

        let mut nodes = vec![self];
        nodes.extend(levels.into_iter().flatten());
        nodes
    }

    fn collect_non_leaf<'a>(
        &'a self,
        depth: usize,
        max_depth: usize,
        levels: &mut Vec<Vec<&'a DirNode>>,
    ) {
        if depth >= max_depth {
            return;
        }

        for child in self.children.iter().filter(|c| !c.is_leaf()) {
            if depth == levels.len() {
                levels.push(Vec::new());
            }
            levels[depth].push(child);
            child.collect_non_leaf(depth + 1, max_depth, levels);
        }
    }
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.as_bytes().ends_with(suffix.as_bytes())
}
