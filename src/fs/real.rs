use std::io;

use tracing::{trace, warn};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

/// Lists directories through `std::fs`.
///
/// An entry counts as a directory when its full path can be opened as one.
/// Symlinks to directories are followed, and a subdirectory that cannot be
/// read is classified as a file.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_dir(&self, dir: &str) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in readable_entries(dir, std::fs::read_dir(dir)?) {
            let name = entry.file_name().to_string_lossy().into_owned();
            let kind = match std::fs::read_dir(entry.path()) {
                Ok(_) => EntryKind::Directory,
                Err(err) => {
                    trace!(entry = %name, %err, "cannot open as directory, treating as file");
                    EntryKind::File
                }
            };

            entries.push(FsEntry { name, kind });
        }
        Ok(entries)
    }
}

/// Entries that could be read, logging and skipping the ones that failed.
fn readable_entries<I, T>(dir: &str, entries: I) -> impl Iterator<Item = T>
where
    I: Iterator<Item = io::Result<T>>,
{
    entries.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(dir, %err, "skipping unreadable directory entry");
            None
        }
    })
}
