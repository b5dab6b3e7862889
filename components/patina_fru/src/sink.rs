//! Byte sinks for encoded FRU images
//!
//! The encoder writes through the [`FruSink`] trait. `Vec<u8>` is a sink, which is how images
//! are staged in memory, and [`FileSink`] writes to a file when the `std` feature is enabled.
//!
//! ## License
//!
//! Copyright (c) Microsoft Corporation.
//!
//! SPDX-License-Identifier: Apache-2.0
//!

extern crate alloc;
use alloc::vec::Vec;

use crate::error::FruError;

#[cfg(any(test, feature = "mockall"))]
use mockall::automock;

/// Destination for encoded FRU bytes
#[cfg_attr(any(test, feature = "mockall"), automock)]
pub trait FruSink {
    /// Writes all of `bytes` to the sink.
    ///
    /// # Errors
    ///
    /// - `FruError::SinkNotOpen` if the sink has been closed
    /// - `FruError::SinkWriteFailed` if the underlying resource rejected the write
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FruError>;
}

impl FruSink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FruError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

#[cfg(feature = "std")]
pub use file::FileSink;

#[cfg(feature = "std")]
mod file {
    extern crate std;
    use std::{
        fs::File,
        io::Write,
        path::{Path, PathBuf},
    };

    use super::FruSink;
    use crate::error::FruError;

    /// File-backed sink
    ///
    /// Holds at most one open file. Opening another file through [`FileSink::reopen`] closes the
    /// current one first.
    #[derive(Debug)]
    pub struct FileSink {
        file: Option<File>,
        path: PathBuf,
    }

    impl FileSink {
        /// Creates (or truncates) the file at `path` for writing.
        ///
        /// # Errors
        ///
        /// Returns `FruError::SinkOpenFailed` if the file cannot be created.
        pub fn open(path: impl AsRef<Path>) -> Result<Self, FruError> {
            let path = path.as_ref().to_path_buf();
            let file = Self::create(&path)?;
            Ok(Self { file: Some(file), path })
        }

        /// Closes the current file, if any, and opens `path` in its place.
        pub fn reopen(&mut self, path: impl AsRef<Path>) -> Result<(), FruError> {
            self.close()?;
            let path = path.as_ref().to_path_buf();
            self.file = Some(Self::create(&path)?);
            self.path = path;
            Ok(())
        }

        /// Flushes and closes the file. Closing an already closed sink does nothing.
        ///
        /// # Errors
        ///
        /// Returns `FruError::SinkWriteFailed` if buffered data could not be synced.
        pub fn close(&mut self) -> Result<(), FruError> {
            let Some(mut file) = self.file.take() else {
                return Ok(());
            };
            file.flush().and_then(|_| file.sync_all()).map_err(|err| {
                log::error!(target: "fru", "Failed to sync {}: {}", self.path.display(), err);
                FruError::SinkWriteFailed
            })
        }

        /// Whether a file is currently open
        pub fn is_open(&self) -> bool {
            self.file.is_some()
        }

        /// Path of the current (or last) file
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn create(path: &Path) -> Result<File, FruError> {
            File::create(path).map_err(|err| {
                log::error!(target: "fru", "Failed to open {}: {}", path.display(), err);
                FruError::SinkOpenFailed
            })
        }
    }

    impl FruSink for FileSink {
        fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), FruError> {
            let Some(file) = self.file.as_mut() else {
                log::error!(target: "fru", "Write of {} bytes to closed sink {}", bytes.len(), self.path.display());
                return Err(FruError::SinkNotOpen);
            };
            file.write_all(bytes).map_err(|err| {
                log::error!(target: "fru", "Failed to write {}: {}", self.path.display(), err);
                FruError::SinkWriteFailed
            })
        }
    }

    impl Drop for FileSink {
        fn drop(&mut self) {
            let _ = self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::{fs, vec};

    #[test]
    fn test_vec_sink_appends() {
        let mut sink: Vec<u8> = vec![0xAA];
        sink.write_bytes(&[1, 2]).expect("vec sink never fails");
        sink.write_bytes(&[]).expect("vec sink never fails");
        sink.write_bytes(&[3]).expect("vec sink never fails");
        assert_eq!(sink, vec![0xAA, 1, 2, 3]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_file_sink_write_and_close() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("fru.bin");

        let mut sink = FileSink::open(&path).expect("open sink");
        assert!(sink.is_open());
        sink.write_bytes(&[0x01, 0x00, 0x00, 0x01]).expect("write");
        sink.close().expect("close");
        assert!(!sink.is_open());

        assert_eq!(fs::read(&path).expect("read back"), vec![0x01, 0x00, 0x00, 0x01]);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_file_sink_write_after_close() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut sink = FileSink::open(dir.path().join("fru.bin")).expect("open sink");
        sink.close().expect("close");
        sink.close().expect("second close is a no-op");
        assert_eq!(sink.write_bytes(&[0]), Err(FruError::SinkNotOpen));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_file_sink_reopen_closes_previous() {
        let dir = tempfile::tempdir().expect("temp dir");
        let first = dir.path().join("first.bin");
        let second = dir.path().join("second.bin");

        let mut sink = FileSink::open(&first).expect("open sink");
        sink.write_bytes(b"one").expect("write");
        sink.reopen(&second).expect("reopen");
        sink.write_bytes(b"two").expect("write");
        assert_eq!(sink.path(), second.as_path());
        drop(sink);

        assert_eq!(fs::read(&first).expect("read first"), b"one");
        assert_eq!(fs::read(&second).expect("read second"), b"two");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_file_sink_open_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing").join("fru.bin");
        assert_eq!(FileSink::open(missing).unwrap_err(), FruError::SinkOpenFailed);
    }
}
