//! # treechattr
//!
//! Recursive ownership and permission changes over **pluggable filesystem
//! capabilities**.
//!
//! Two operations, one traversal: [`chown_recursive`] and
//! [`chmod_recursive`] apply an attribute change to a root path and to
//! every directory and file reachable beneath it, following symbolic
//! links that resolve to directories. Both are written against small
//! capability traits instead of `std::fs` directly, so the recursion can
//! be exercised against test doubles without touching a real filesystem.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use treechattr::{chmod_recursive, chown_recursive, Mode, NativeFs, Ownership};
//! use std::path::Path;
//!
//! let fs = NativeFs::new();
//!
//! // Hand the tree to the service account, then lock the modes down.
//! chown_recursive(&fs, Path::new("/var/lib/app"), Ownership::new(33, 33))?;
//! chmod_recursive(&fs, Path::new("/var/lib/app"), Mode::from_mode(0o750))?;
//! # Ok::<(), treechattr::FsError>(())
//! ```
//!
//! Or method-style via [`FsAttrExt`]:
//!
//! ```rust,no_run
//! use treechattr::{FsAttrExt, Mode, NativeFs};
//! use std::path::Path;
//!
//! let fs = NativeFs::new();
//! fs.chmod_recursive(Path::new("/srv/www"), Mode::from_mode(0o755))?;
//! # Ok::<(), treechattr::FsError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FsWalk`] | Capability: classify paths and list directories |
//! | [`FsOwner`] | Capability: set owning user/group |
//! | [`FsMode`] | Capability: set permission mode |
//! | [`FsAttr`] | Composite of all three (blanket-implemented) |
//! | [`NativeFs`] | Real-OS backend (Unix) |
//! | [`Ownership`] | (uid, gid) pair with `Option` "leave unchanged" halves |
//! | [`Mode`] | Permission bitmask (0o7777-masked) |
//! | [`FsError`] | Contextual error type |
//!
//! ---
//!
//! ## Failure Semantics
//!
//! Both operations are **fail-fast and non-atomic**. The first error —
//! a missing path, an unreadable subdirectory, a privilege failure —
//! aborts the traversal and propagates. Entries visited before the
//! failure keep the new attributes; entries after it are untouched.
//! There is no rollback, no retry, and no per-entry error aggregation.
//!
//! A nonexistent root fails with [`FsError::NotFound`] before anything
//! is changed.
//!
//! ---
//!
//! ## Symlink Policy
//!
//! Symbolic links are **followed**. A link inside the tree whose target
//! is a directory is descended into; attribute changes apply to link
//! targets, not the links themselves. A link pointing back at an
//! ancestor therefore makes the traversal unbounded — the crate does
//! not detect cycles.
//!
//! ---
//!
//! ## Thread Safety
//!
//! All capability traits require `Send + Sync` and take `&self`, so a
//! backend can be shared across threads behind `Arc<B>`. The operations
//! themselves hold no state; concurrent calls on overlapping trees race
//! on filesystem metadata with no ordering guarantee.
//!
//! ---
//!
//! ## Logging
//!
//! Emits through the [`log`] facade: `debug!` per top-level operation,
//! `trace!` per visited entry. No logger is installed by this crate.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`Ownership`], [`Mode`], [`Metadata`], [`DirEntry`], [`FileType`] |

// Private modules
mod error;
mod ext;
#[cfg(unix)]
mod native;
mod recurse;
mod traits;
mod types;

// Public re-exports - error types
pub use error::FsError;

// Public re-exports - core types
pub use types::{DirEntry, FileType, Metadata, Mode, Ownership};

// Public re-exports - capability traits
pub use traits::{FsAttr, FsMode, FsOwner, FsWalk, ReadDirIter};

// Public re-exports - recursive operations
pub use ext::FsAttrExt;
pub use recurse::{chmod_recursive, chown_recursive};

// Public re-exports - backends
#[cfg(unix)]
pub use native::NativeFs;
