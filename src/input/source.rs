use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::error::StatsError;

/// Where one JSON document comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A file on disk, read by the loader worker
    Path(PathBuf),
    /// Content already in memory (stdin, an upload)
    Memory { name: String, bytes: Vec<u8> },
}

impl Source {
    pub fn memory(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Source::Memory {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Name used in messages and logs
    pub fn name(&self) -> String {
        match self {
            Source::Path(path) => path.display().to_string(),
            Source::Memory { name, .. } => name.clone(),
        }
    }

    /// Raw bytes of the document
    pub fn read(&self) -> Result<Cow<'_, [u8]>, StatsError> {
        match self {
            Source::Path(path) => fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| StatsError::Io {
                    name: self.name(),
                    message: e.to_string(),
                }),
            Source::Memory { bytes, .. } => Ok(Cow::Borrowed(bytes.as_slice())),
        }
    }
}
