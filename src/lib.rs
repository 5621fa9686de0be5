mod core;
mod error;
mod fs;
mod models;

pub use crate::core::{
    DiagnosticSink, HIDDEN_MARKER, MAX_RENDER_DEPTH, Rendered, TracingSink, TreeBuilder,
};
pub use error::BuildError;
pub use fs::{FileSystem, RealFileSystem};
pub use models::{DirNode, EntryKind, FsEntry};

/// Build the tree rooted at `path` from the real filesystem, logging
/// subdirectory failures through `tracing`.
pub fn build(path: &str) -> Result<DirNode, BuildError> {
    TreeBuilder::new(&RealFileSystem).build(path)
}

/// Split a user-supplied directory path into the node's name and its
/// canonical path ending in exactly one `/`.
///
/// An empty input means the current directory. A bare `/` yields an empty name.
pub fn normalize_root(raw: &str) -> (String, String) {
    if raw.is_empty() {
        return (".".to_owned(), "./".to_owned());
    }

    let trimmed = raw.trim_end_matches('/');
    let name = match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    };

    (name.to_owned(), format!("{trimmed}/"))
}
