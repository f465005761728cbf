//! File-reading capability for multipart file fields.
//!
//! The read is synchronous: it blocks only the invoking call path, which
//! matches how multipart materialization behaves. Injecting the reader
//! lets tests substitute an in-memory fake.

use std::fs;
use std::io;

/// Capability to read a file's bytes from a caller-supplied path.
pub trait FileReader: Send + Sync {
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// The default reader, backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fs_reader_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"payload bytes").unwrap();

        let reader = FsFileReader;
        let bytes = reader.read(file.path().to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"payload bytes");
    }

    #[test]
    fn fs_reader_missing_path_errors() {
        let reader = FsFileReader;
        let err = reader.read("/definitely/not/a/real/path.bin").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
