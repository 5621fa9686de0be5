use std::fmt;

use crate::models::DirNode;

/// Nesting below the starting node past which rendering is always cut off.
pub const MAX_RENDER_DEPTH: usize = 5;

/// Text tree for a [`DirNode`], produced when displayed.
///
/// The first line is the node's path. Each level lists its files, then its
/// subdirectories, each subdirectory followed by its own contents one indent
/// deeper. A subtree starting below the depth limit is replaced by a single
/// warning line.
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'a> {
    node: &'a DirNode,
    limit: usize,
}

impl<'a> Rendered<'a> {
    pub(crate) fn new(node: &'a DirNode, max_depth: usize) -> Self {
        Self {
            node,
            limit: max_depth.min(MAX_RENDER_DEPTH),
        }
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.node.path)?;
        write_contents(f, self.node, 0, self.limit)
    }
}

fn write_contents(
    f: &mut fmt::Formatter<'_>,
    node: &DirNode,
    depth: usize,
    limit: usize,
) -> fmt::Result {
    if depth > limit {
        write_prefix(f, depth)?;
        return writeln!(
            f,
            "Warning: contents of directories deeper than {limit} levels are not printed."
        );
    }

    for file in &node.files {
        write_prefix(f, depth)?;
        writeln!(f, "{file}")?;
    }

    for child in &node.children {
        write_prefix(f, depth)?;
        writeln!(f, "{}", child.name)?;
        write_contents(f, child, depth + 1, limit)?;
    }

    Ok(())
}

fn write_prefix(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("|  ")?;
    }
    f.write_str("|--")
}
