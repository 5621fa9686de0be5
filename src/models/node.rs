/// One directory of a built tree.
///
/// Nodes are only created by [`TreeBuilder`](crate::TreeBuilder) and are never
/// mutated afterwards. `path` always ends with a single `/`, and every child's
/// path is its parent's path followed by the child's name and `/`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirNode {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) files: Vec<String>,
    pub(crate) children: Vec<DirNode>,
}

impl DirNode {
    pub(crate) fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bare file names, in directory listing order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn children(&self) -> &[DirNode] {
        &self.children
    }
}
