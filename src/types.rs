//! Core types for the treechattr capability traits.

use std::path::PathBuf;

/// Type of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
}

/// Metadata for a filesystem entry, resolved through symlinks.
///
/// This is the view [`FsWalk::metadata`](crate::FsWalk::metadata) returns:
/// the entry type plus the attributes this crate mutates. Because the lookup
/// follows symlinks, `file_type` is never [`FileType::Symlink`] for a link
/// whose target exists.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Type of the entry (file or directory after link resolution).
    pub file_type: FileType,
    /// Permission mode bits.
    pub mode: Mode,
    /// Owning user id.
    pub uid: u32,
    /// Owning group id.
    pub gid: u32,
}

impl Metadata {
    /// Returns `true` if this is a regular file.
    #[inline]
    pub fn is_file(&self) -> bool {
        self.file_type == FileType::File
    }

    /// Returns `true` if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }
}

/// A directory entry returned from `read_dir`.
///
/// Unlike [`Metadata`], the `file_type` here is the entry's own type:
/// a symbolic link reports [`FileType::Symlink`], not its target's type.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirEntry {
    /// Name of the entry (filename only, not full path).
    pub name: String,
    /// Full path to the entry.
    pub path: PathBuf,
    /// Type of the entry itself, without following symlinks.
    pub file_type: FileType,
}

/// The (user, group) pair to apply to a filesystem entry.
///
/// Either half may be `None`, meaning "leave that half unchanged" — the
/// same contract POSIX `chown(2)` expresses with a `(uid_t)-1` sentinel,
/// surfaced here as an `Option` instead of a magic value.
///
/// # Examples
///
/// ```rust
/// use treechattr::Ownership;
///
/// let both = Ownership::new(1000, 1000);
/// assert_eq!(both.uid, Some(1000));
///
/// let group_only = Ownership::gid_only(33);
/// assert_eq!(group_only.uid, None);
/// assert_eq!(group_only.gid, Some(33));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ownership {
    /// User id to set, or `None` to keep the current owner.
    pub uid: Option<u32>,
    /// Group id to set, or `None` to keep the current group.
    pub gid: Option<u32>,
}

impl Ownership {
    /// Set both user and group.
    #[inline]
    pub const fn new(uid: u32, gid: u32) -> Self {
        Self {
            uid: Some(uid),
            gid: Some(gid),
        }
    }

    /// Set only the user, leaving the group unchanged.
    #[inline]
    pub const fn uid_only(uid: u32) -> Self {
        Self {
            uid: Some(uid),
            gid: None,
        }
    }

    /// Set only the group, leaving the user unchanged.
    #[inline]
    pub const fn gid_only(gid: u32) -> Self {
        Self {
            uid: None,
            gid: Some(gid),
        }
    }

    /// Returns `true` if neither half would change anything.
    #[inline]
    pub const fn is_noop(&self) -> bool {
        self.uid.is_none() && self.gid.is_none()
    }
}

/// Unix-style permissions stored as a mode bitmask.
///
/// Uses the standard Unix permission bits (rwxrwxrwx plus setuid/setgid/sticky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode(u32);

impl Mode {
    /// Create a mode from raw Unix bits (e.g., 0o755).
    ///
    /// File-type bits beyond 0o7777 are masked off, so a raw `st_mode`
    /// value can be passed directly.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the raw mode value.
    #[inline]
    pub const fn mode(&self) -> u32 {
        self.0
    }

    /// Returns `true` if this mode denies writing to everyone.
    #[inline]
    pub const fn readonly(&self) -> bool {
        (self.0 & 0o222) == 0
    }
}
