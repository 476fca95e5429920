//! Permission-mode management operations.

use std::path::Path;

use crate::{FsError, Mode};

/// Permission-mode management operations.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self` to allow
/// concurrent access.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FsMode`.
///
/// # Note
///
/// Reading the current mode is done via [`FsWalk::metadata`](super::FsWalk::metadata).
/// This trait only provides the ability to set it.
pub trait FsMode: Send + Sync {
    /// Set the permission mode of a file or directory.
    ///
    /// Symbolic links are followed: the change applies to the link target.
    ///
    /// # Errors
    ///
    /// - [`FsError::NotFound`] if the path does not exist
    /// - [`FsError::PermissionDenied`] if the caller does not own the entry
    fn set_mode(&self, path: &Path, mode: Mode) -> Result<(), FsError>;
}
