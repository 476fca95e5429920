//! Recursive attribute application over a directory tree.
//!
//! The two operations here share a single traversal: apply the change to
//! the root first, then descend depth-first, applying the change to every
//! entry before descending into it. Symbolic links that resolve to
//! directories are followed.
//!
//! # Failure semantics
//!
//! Both operations are fail-fast and non-atomic: the first error aborts
//! the walk and propagates to the caller, leaving entries visited before
//! the failure with the new attributes and everything after it untouched.
//! There is no rollback and no per-entry error aggregation.
//!
//! # Symlink cycles
//!
//! Because symlinks are followed during descent, a link pointing back at
//! one of its own ancestors makes the traversal unbounded. Nothing guards
//! against this; callers own the shape of the trees they pass in.

use std::path::Path;

use log::{debug, trace};

use crate::{FileType, FsError, FsMode, FsOwner, FsWalk, Mode, Ownership};

/// Set ownership on `path` and every entry reachable beneath it.
///
/// The root receives the change first, then each directory entry is
/// changed before its children are descended into. A `None` half of
/// `owner` leaves that attribute unchanged on every entry.
///
/// # Errors
///
/// Fails fast on the first inaccessible entry:
///
/// - [`FsError::NotFound`] if `path` (or a descendant resolved mid-walk)
///   does not exist
/// - [`FsError::PermissionDenied`] if the caller lacks privilege to change
///   ownership or to read a subdirectory
///
/// On error, entries already visited keep the new ownership.
///
/// # Example
///
/// ```rust,no_run
/// use treechattr::{chown_recursive, NativeFs, Ownership};
/// use std::path::Path;
///
/// let fs = NativeFs::new();
/// chown_recursive(&fs, Path::new("/var/lib/app"), Ownership::new(33, 33))?;
/// # Ok::<(), treechattr::FsError>(())
/// ```
pub fn chown_recursive<B>(fs: &B, path: &Path, owner: Ownership) -> Result<(), FsError>
where
    B: FsWalk + FsOwner + ?Sized,
{
    debug!("chown_recursive: {} uid={:?} gid={:?}", path.display(), owner.uid, owner.gid);
    fs.set_owner(path, owner)?;
    walk_apply(fs, path, &mut |p| {
        trace!("chown {}", p.display());
        fs.set_owner(p, owner)
    })
}

/// Set the permission mode on `path` and every entry reachable beneath it.
///
/// Same traversal and failure semantics as [`chown_recursive`]: root
/// first, each entry before its children, fail-fast with no rollback.
///
/// # Errors
///
/// - [`FsError::NotFound`] if `path` (or a descendant resolved mid-walk)
///   does not exist
/// - [`FsError::PermissionDenied`] if the caller does not own an entry or
///   cannot read a subdirectory
///
/// # Example
///
/// ```rust,no_run
/// use treechattr::{chmod_recursive, Mode, NativeFs};
/// use std::path::Path;
///
/// let fs = NativeFs::new();
/// chmod_recursive(&fs, Path::new("/var/lib/app"), Mode::from_mode(0o755))?;
/// # Ok::<(), treechattr::FsError>(())
/// ```
pub fn chmod_recursive<B>(fs: &B, path: &Path, mode: Mode) -> Result<(), FsError>
where
    B: FsWalk + FsMode + ?Sized,
{
    debug!("chmod_recursive: {} mode={:o}", path.display(), mode.mode());
    fs.set_mode(path, mode)?;
    walk_apply(fs, path, &mut |p| {
        trace!("chmod {}", p.display());
        fs.set_mode(p, mode)
    })
}

/// Depth-first descent below `dir`, calling `apply` on every entry before
/// descending into it.
///
/// Descends into plain directories and into symlinks whose target
/// classifies as a directory; plain files skip the extra metadata lookup.
fn walk_apply<B>(
    fs: &B,
    dir: &Path,
    apply: &mut dyn FnMut(&Path) -> Result<(), FsError>,
) -> Result<(), FsError>
where
    B: FsWalk + ?Sized,
{
    for entry in fs.read_dir(dir)? {
        let entry = entry?;
        apply(&entry.path)?;

        let descend = match entry.file_type {
            FileType::Directory => true,
            FileType::Symlink => fs.metadata(&entry.path)?.is_dir(),
            FileType::File => false,
        };
        if descend {
            walk_apply(fs, &entry.path, apply)?;
        }
    }
    Ok(())
}
