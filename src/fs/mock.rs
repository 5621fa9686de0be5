use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Listing {
    Entries(Vec<FsEntry>),
    Fails(io::ErrorKind, String),
}

/// In-memory directory layout keyed by normalized `dir/` paths.
///
/// Every `read_dir` is logged so tests can check the traversal order and
/// which configured directories (hidden ones, say) were never opened.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<String, Listing>,
    reads: Vec<String>,
}

impl MockFileSystem {
    pub fn add_dir(&self, dir: impl Into<String>, entries: Vec<FsEntry>) {
        self.insert(dir.into(), Listing::Entries(entries));
    }

    pub fn fail_dir(
        &self,
        dir: impl Into<String>,
        kind: io::ErrorKind,
        message: impl Into<String>,
    ) {
        self.insert(dir.into(), Listing::Fails(kind, message.into()));
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn reads(&self) -> Vec<String> {
        self.lock().reads.clone()
    }

    pub fn read_count(&self, dir: &str) -> usize {
        self.lock().reads.iter().filter(|read| *read == dir).count()
    }

    /// Configured directories that were never read, sorted.
    pub fn unread(&self) -> Vec<String> {
        let inner = self.lock();
        let mut unread: Vec<String> = inner
            .listings
            .keys()
            .filter(|dir| !inner.reads.contains(dir))
            .cloned()
            .collect();
        unread.sort();
        unread
    }

    fn insert(&self, dir: String, listing: Listing) {
        assert!(dir.ends_with('/'), "mock directories are keyed as `dir/`: {dir}");
        self.lock().listings.insert(dir, listing);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock fs lock")
    }
}

impl FileSystem for MockFileSystem {
    fn read_dir(&self, dir: &str) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.lock();
        inner.reads.push(dir.to_owned());

        match inner.listings.get(dir) {
            Some(Listing::Entries(entries)) => Ok(entries.clone()),
            Some(Listing::Fails(kind, message)) => {
                Err(io::Error::new(*kind, message.clone()))
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock listing for {dir}"),
            )),
        }
    }
}
