use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The directory could not be listed: missing, not a directory, or denied.
    #[error("could not open directory: {path}: {source}")]
    UnopenableDirectory {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    pub fn path(&self) -> &str {
        match self {
            BuildError::UnopenableDirectory { path, .. } => path,
        }
    }
}
