//! In-memory file reader for multipart tests.

use reqwire_core::fs::FileReader;
use std::collections::HashMap;
use std::io;

/// A [`FileReader`] over a fixed path-to-bytes mapping. Unknown paths
/// fail with `NotFound`, mirroring a missing file on disk.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileReader {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryFileReader {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), bytes.into());
        self
    }
}

impl FileReader for InMemoryFileReader {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory file at '{path}'"),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_paths() {
        let reader = InMemoryFileReader::new().with_file("/virtual/a.bin", b"abc".to_vec());
        assert_eq!(reader.read("/virtual/a.bin").unwrap(), b"abc");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let reader = InMemoryFileReader::new();
        let err = reader.read("/virtual/missing").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
