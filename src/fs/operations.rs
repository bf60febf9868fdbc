//! Buffered file operations
//!
//! Provides the flattening byte-stream copy and destination directory
//! creation used by the copy engine.

use crate::error::{FlatCopyError, IoResultExt, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default buffer size for the read/write streams
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Copy operation statistics
#[derive(Debug, Clone, Default)]
pub struct CopyStats {
    /// Bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy
    pub duration: Duration,
}

/// Buffered file copier
pub struct FileCopier {
    buffer_size: usize,
}

impl FileCopier {
    /// Create a new file copier with the given stream buffer size
    pub fn new(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Create with the default buffer size
    pub fn default_copier() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }

    /// Copy `source` into `dest_dir` under the source file's base name,
    /// flattening any directory structure.
    ///
    /// An existing destination file of the same base name is silently
    /// truncated and overwritten. A mid-stream failure leaves the partial
    /// destination file in place and propagates the error; both handles
    /// are closed on every exit path.
    pub fn copy_flat(&self, source: &Path, dest_dir: &Path) -> Result<(PathBuf, CopyStats)> {
        let start = std::time::Instant::now();

        let file_name = source
            .file_name()
            .ok_or_else(|| FlatCopyError::InvalidPath(source.display().to_string()))?;
        let dest_path = dest_dir.join(file_name);

        let src_file = File::open(source).with_path(source)?;
        let dst_file = File::create(&dest_path).with_path(&dest_path)?;

        let mut reader = BufReader::with_capacity(self.buffer_size, src_file);
        let mut writer = BufWriter::with_capacity(self.buffer_size, dst_file);

        let bytes_copied =
            std::io::copy(&mut reader, &mut writer).map_err(|e| FlatCopyError::io(source, e))?;

        writer.flush().with_path(&dest_path)?;

        tracing::debug!(
            source = %source.display(),
            dest = %dest_path.display(),
            bytes = bytes_copied,
            "copied file"
        );

        let stats = CopyStats {
            bytes_copied,
            duration: start.elapsed(),
        };

        Ok((dest_path, stats))
    }
}

impl Default for FileCopier {
    fn default() -> Self {
        Self::default_copier()
    }
}

/// Create the destination directory, including any missing parents.
/// Idempotent; a pre-existing directory is not an error.
pub fn ensure_destination(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_path(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_copy_flat_uses_base_name() {
        let src_dir = TempDir::new().unwrap();
        let dst_dir = TempDir::new().unwrap();

        std::fs::create_dir_all(src_dir.path().join("a/b")).unwrap();
        let src = create_test_file(&src_dir.path().join("a/b"), "photo.jpg", b"jpg bytes");

        let copier = FileCopier::default_copier();
        let (dest, stats) = copier.copy_flat(&src, dst_dir.path()).unwrap();

        assert_eq!(dest, dst_dir.path().join("photo.jpg"));
        assert_eq!(stats.bytes_copied, 9);
        assert_eq!(std::fs::read(&dest).unwrap(), b"jpg bytes");
    }

    #[test]
    fn test_copy_flat_overwrites_existing() {
        let src_dir = TempDir::new().unwrap();
        let dst_dir = TempDir::new().unwrap();

        let src = create_test_file(src_dir.path(), "photo.jpg", b"new");
        create_test_file(dst_dir.path(), "photo.jpg", b"old and longer");

        let copier = FileCopier::default_copier();
        copier.copy_flat(&src, dst_dir.path()).unwrap();

        assert_eq!(std::fs::read(dst_dir.path().join("photo.jpg")).unwrap(), b"new");
    }

    #[test]
    fn test_copy_flat_empty_file() {
        let src_dir = TempDir::new().unwrap();
        let dst_dir = TempDir::new().unwrap();

        let src = create_test_file(src_dir.path(), "empty.jpg", b"");

        let copier = FileCopier::default_copier();
        let (dest, stats) = copier.copy_flat(&src, dst_dir.path()).unwrap();

        assert_eq!(stats.bytes_copied, 0);
        assert!(dest.exists());
    }

    #[test]
    fn test_copy_flat_missing_source_is_io_error() {
        let dst_dir = TempDir::new().unwrap();

        let copier = FileCopier::default_copier();
        let result = copier.copy_flat(Path::new("/no/such/file.jpg"), dst_dir.path());

        assert!(matches!(result, Err(FlatCopyError::Io { .. })));
    }

    #[test]
    fn test_ensure_destination_creates_parents_idempotently() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("a/b/c");

        ensure_destination(&dest).unwrap();
        ensure_destination(&dest).unwrap();

        assert!(dest.is_dir());
    }
}
