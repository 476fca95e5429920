//! # Extension Trait
//!
//! Method-style access to the recursive operations.
//!
//! [`FsAttrExt`] is implemented for every backend that provides all three
//! capability traits, so the operations can be called as methods instead
//! of free functions:
//!
//! ```rust,no_run
//! use treechattr::{FsAttrExt, Mode, NativeFs, Ownership};
//! use std::path::Path;
//!
//! let fs = NativeFs::new();
//! fs.chown_recursive(Path::new("/srv/data"), Ownership::new(33, 33))?;
//! fs.chmod_recursive(Path::new("/srv/data"), Mode::from_mode(0o750))?;
//! # Ok::<(), treechattr::FsError>(())
//! ```

use std::path::Path;

use crate::{FsError, FsMode, FsOwner, FsWalk, Mode, Ownership};

/// Extension methods for backends with full attribute capability.
///
/// All methods have default implementations forwarding to the free
/// functions in this crate, so backends get them automatically.
pub trait FsAttrExt: FsWalk + FsOwner + FsMode {
    /// Method form of [`chown_recursive`](crate::chown_recursive).
    ///
    /// # Errors
    ///
    /// Same as the free function: fail-fast on the first inaccessible entry.
    fn chown_recursive(&self, path: &Path, owner: Ownership) -> Result<(), FsError> {
        crate::recurse::chown_recursive(self, path, owner)
    }

    /// Method form of [`chmod_recursive`](crate::chmod_recursive).
    ///
    /// # Errors
    ///
    /// Same as the free function: fail-fast on the first inaccessible entry.
    fn chmod_recursive(&self, path: &Path, mode: Mode) -> Result<(), FsError> {
        crate::recurse::chmod_recursive(self, path, mode)
    }
}

// Blanket implementation
impl<T: FsWalk + FsOwner + FsMode + ?Sized> FsAttrExt for T {}
