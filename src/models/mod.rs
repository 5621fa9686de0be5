mod entry;
mod node;

pub use entry::{EntryKind, FsEntry};
pub use node::DirNode;
