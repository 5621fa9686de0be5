use tracing::{debug, trace, warn};

use crate::error::BuildError;
use crate::fs::FileSystem;
use crate::models::{DirNode, EntryKind, FsEntry};
use crate::normalize_root;

/// Entries whose name starts with this are left out of the tree entirely.
pub const HIDDEN_MARKER: char = '.';

pub(crate) const SEPARATOR: char = '/';

/// Receives failures that do not abort a build, such as a subdirectory that
/// vanished between being listed and being read.
pub trait DiagnosticSink {
    fn report(&self, error: &BuildError);
}

impl<F: Fn(&BuildError)> DiagnosticSink for F {
    fn report(&self, error: &BuildError) {
        self(error)
    }
}

/// Logs reported failures at `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &BuildError) {
        warn!(path = error.path(), "{error}");
    }
}

pub struct TreeBuilder<'a, F: FileSystem> {
    fs: &'a F,
    sink: &'a dyn DiagnosticSink,
}

impl<'a, F: FileSystem> TreeBuilder<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self {
            fs,
            sink: &TracingSink,
        }
    }

    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Build the tree rooted at `raw_path`.
    ///
    /// Fails only when the root itself cannot be listed. A subdirectory that
    /// cannot be listed stays in the tree as an empty node and is passed to
    /// the sink.
    pub fn build(&self, raw_path: &str) -> Result<DirNode, BuildError> {
        let (name, path) = normalize_root(raw_path);
        let entries = self.list(&path)?;
        Ok(self.populate(DirNode::new(name, path), entries))
    }

    fn list(&self, path: &str) -> Result<Vec<FsEntry>, BuildError> {
        debug!(path, "reading directory");
        self.fs
            .read_dir(path)
            .map_err(|source| BuildError::UnopenableDirectory {
                path: path.to_owned(),
                source,
            })
    }

    fn populate(&self, mut node: DirNode, entries: Vec<FsEntry>) -> DirNode {
        for entry in entries {
            if entry.name.starts_with(HIDDEN_MARKER) {
                trace!(parent = %node.path, entry = %entry.name, "skipping hidden entry");
                continue;
            }

            match entry.kind {
                EntryKind::Directory => {
                    let child = self.build_child(&node.path, entry.name);
                    node.children.push(child);
                }
                EntryKind::File => node.files.push(entry.name),
            }
        }

        node
    }

    fn build_child(&self, parent_path: &str, name: String) -> DirNode {
        let path = format!("{parent_path}{name}{SEPARATOR}");
        let child = DirNode::new(name, path);

        match self.list(&child.path) {
            Ok(entries) => self.populate(child, entries),
            Err(err) => {
                self.sink.report(&err);
                child
            }
        }
    }
}
