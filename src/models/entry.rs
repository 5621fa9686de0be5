#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a directory listing, before hidden-name filtering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}
