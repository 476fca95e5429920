//! Native backend over the host filesystem.

use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::Path;

use nix::unistd::{Gid, Uid};

use crate::{
    DirEntry, FileType, FsError, FsMode, FsOwner, FsWalk, Metadata, Mode, Ownership, ReadDirIter,
};

/// Backend that operates on the real OS filesystem.
///
/// Traversal and mode changes go through `std::fs`; ownership changes go
/// through `chown(2)` via `nix`, which maps a `None` half of an
/// [`Ownership`] to the platform's "leave unchanged" convention.
///
/// Stateless and `Copy`; every call maps directly to a blocking syscall.
///
/// # Example
///
/// ```rust,no_run
/// use treechattr::{chmod_recursive, Mode, NativeFs};
/// use std::path::Path;
///
/// let fs = NativeFs::new();
/// chmod_recursive(&fs, Path::new("/opt/bundle"), Mode::from_mode(0o755))?;
/// # Ok::<(), treechattr::FsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl NativeFs {
    /// Create a native backend.
    pub const fn new() -> Self {
        Self
    }
}

fn entry_file_type(ft: std::fs::FileType) -> FileType {
    if ft.is_dir() {
        FileType::Directory
    } else if ft.is_symlink() {
        FileType::Symlink
    } else {
        FileType::File
    }
}

impl FsWalk for NativeFs {
    fn metadata(&self, path: &Path) -> Result<Metadata, FsError> {
        let meta = std::fs::metadata(path).map_err(|e| FsError::io("metadata", path, e))?;
        let file_type = if meta.is_dir() {
            FileType::Directory
        } else {
            // std::fs::metadata follows links, so anything else is a leaf
            FileType::File
        };
        Ok(Metadata {
            file_type,
            mode: Mode::from_mode(meta.mode()),
            uid: meta.uid(),
            gid: meta.gid(),
        })
    }

    fn read_dir(&self, path: &Path) -> Result<ReadDirIter, FsError> {
        let iter = std::fs::read_dir(path).map_err(|e| FsError::io("read_dir", path, e))?;
        let dir = path.to_path_buf();
        Ok(ReadDirIter::new(iter.map(move |res| {
            let entry = res.map_err(|e| FsError::io("read_dir", &dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| FsError::io("read_dir", &entry.path(), e))?;
            Ok(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                file_type: entry_file_type(file_type),
            })
        })))
    }
}

impl FsOwner for NativeFs {
    fn set_owner(&self, path: &Path, owner: Ownership) -> Result<(), FsError> {
        nix::unistd::chown(
            path,
            owner.uid.map(Uid::from_raw),
            owner.gid.map(Gid::from_raw),
        )
        .map_err(|errno| FsError::io("chown", path, errno.into()))
    }
}

impl FsMode for NativeFs {
    fn set_mode(&self, path: &Path, mode: Mode) -> Result<(), FsError> {
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.mode()))
            .map_err(|e| FsError::io("chmod", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_fs_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NativeFs>();
    }

    #[test]
    fn entry_file_type_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();

        let fs = NativeFs::new();
        let meta = fs.metadata(dir.path()).unwrap();
        assert!(meta.is_dir());
        let meta = fs.metadata(&file).unwrap();
        assert!(meta.is_file());
    }

    #[test]
    fn metadata_missing_path_is_not_found() {
        let fs = NativeFs::new();
        let err = fs.metadata(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
    }
}
