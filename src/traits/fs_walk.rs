//! Tree traversal operations.

use std::path::Path;

use crate::{DirEntry, FsError, Metadata};

/// Traversal operations: classify a path and list a directory.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsWalk`.
///
/// # Symlinks
///
/// [`metadata`](FsWalk::metadata) follows symbolic links, so a link that
/// resolves to a directory classifies as a directory. Entries yielded by
/// [`read_dir`](FsWalk::read_dir) report their own type instead, with
/// symlinks showing as [`FileType::Symlink`](crate::FileType::Symlink).
pub trait FsWalk: Send + Sync {
    /// Get metadata for a path, following symbolic links.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path (or a link target) does not exist
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError>;

    /// List directory contents.
    ///
    /// Returns an iterator over directory entries. The outer `Result` indicates
    /// whether the directory could be opened; each item's `Result` indicates
    /// whether that specific entry could be read.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::NotADirectory`] if the path is not a directory
    fn read_dir(&self, path: &Path) -> Result<ReadDirIter, FsError>;
}

/// Iterator over directory entries.
///
/// Wraps a boxed iterator for flexibility across different backends.
///
/// - Outer `Result` (from [`FsWalk::read_dir`]) = "can I open this directory?"
/// - Inner `Result` (per item) = "can I read this entry?"
pub struct ReadDirIter(Box<dyn Iterator<Item = Result<DirEntry, FsError>> + Send + 'static>);

impl ReadDirIter {
    /// Create from any compatible iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<DirEntry, FsError>> + Send + 'static,
    {
        Self(Box::new(iter))
    }

    /// Create from a pre-collected vector.
    pub fn from_vec(entries: Vec<Result<DirEntry, FsError>>) -> Self {
        Self(Box::new(entries.into_iter()))
    }
}

impl Iterator for ReadDirIter {
    type Item = Result<DirEntry, FsError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileType;
    use std::path::PathBuf;

    #[test]
    fn read_dir_iter_from_vec() {
        let entries = vec![
            Ok(DirEntry {
                name: "a".into(),
                path: PathBuf::from("/a"),
                file_type: FileType::File,
            }),
            Ok(DirEntry {
                name: "b".into(),
                path: PathBuf::from("/b"),
                file_type: FileType::Directory,
            }),
        ];
        let iter = ReadDirIter::from_vec(entries);
        let collected: Vec<_> = iter.collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn read_dir_iter_propagates_entry_errors() {
        let entries: Vec<Result<DirEntry, FsError>> = vec![
            Ok(DirEntry {
                name: "a".into(),
                path: PathBuf::from("/a"),
                file_type: FileType::File,
            }),
            Err(FsError::PermissionDenied {
                path: PathBuf::from("/b"),
                operation: "read_dir",
            }),
        ];
        let iter = ReadDirIter::from_vec(entries);
        let result: Result<Vec<_>, _> = iter.collect();
        assert!(result.is_err());
    }

    #[test]
    fn read_dir_iter_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ReadDirIter>();
    }
}
