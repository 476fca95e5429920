//! Ownership management operations.

use std::path::Path;

use crate::{FsError, Ownership};

/// Ownership management operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsOwner`.
///
/// # Note
///
/// Reading ownership is done via [`FsWalk::metadata`](super::FsWalk::metadata).
/// This trait only provides the ability to set it.
pub trait FsOwner: Send + Sync {
    /// Set the owning user and/or group of a file or directory.
    ///
    /// A `None` half of the [`Ownership`] leaves that attribute unchanged.
    /// Symbolic links are followed: the change applies to the link target.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::PermissionDenied`] if the caller lacks privilege to
    ///   change ownership
    fn set_owner(&self, path: &Path, owner: Ownership) -> Result<(), FsError>;
}
