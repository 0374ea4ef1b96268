use std::{io, path::PathBuf};

use thiserror::Error;

/// A failed status call, with the operation and path that produced it.
#[derive(Debug, Error)]
#[error("{op} {}: {source}", .path.display())]
pub struct StatError {
    pub op: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl StatError {
    pub(crate) fn new(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            op,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}
