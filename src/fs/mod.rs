mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use std::io;

use crate::models::FsEntry;

/// Directory listing capability used by the tree builder.
///
/// `dir` is a normalized directory path ending in `/`. Entry order is whatever
/// the implementation yields; callers must not rely on it being sorted.
pub trait FileSystem: Send + Sync {
    fn read_dir(&self, dir: &str) -> io::Result<Vec<FsEntry>>;
}
