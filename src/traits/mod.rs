//! # Filesystem Capability Traits
//!
//! The capability traits the recursive operations are written against.
//!
//! ## Components
//!
//! | Trait | Capability |
//! |-------|------------|
//! | [`FsWalk`] | Classify a path and list directory contents |
//! | [`FsOwner`] | Set the owning user/group of an entry |
//! | [`FsMode`] | Set the permission mode of an entry |
//!
//! [`chown_recursive`](crate::chown_recursive) needs `FsWalk + FsOwner`;
//! [`chmod_recursive`](crate::chmod_recursive) needs `FsWalk + FsMode`.
//! A backend providing all three gets the composite [`FsAttr`] trait (and
//! the [`FsAttrExt`](crate::FsAttrExt) convenience methods) for free.
//!
//! ## Blanket Implementation
//!
//! [`FsAttr`] has a blanket implementation. Implement the component traits
//! and the composite comes automatically:
//!
//! ```rust
//! use treechattr::{FsAttr, FsWalk, FsOwner, FsMode, ReadDirIter};
//! use std::path::Path;
//!
//! struct MyBackend;
//!
//! # impl FsWalk for MyBackend {
//! #     fn metadata(&self, _: &Path) -> Result<treechattr::Metadata, treechattr::FsError> {
//! #         Ok(treechattr::Metadata {
//! #             file_type: treechattr::FileType::File,
//! #             mode: treechattr::Mode::from_mode(0o644),
//! #             uid: 0,
//! #             gid: 0,
//! #         })
//! #     }
//! #     fn read_dir(&self, _: &Path) -> Result<ReadDirIter, treechattr::FsError> {
//! #         Ok(ReadDirIter::from_vec(vec![]))
//! #     }
//! # }
//! # impl FsOwner for MyBackend {
//! #     fn set_owner(&self, _: &Path, _: treechattr::Ownership) -> Result<(), treechattr::FsError> { Ok(()) }
//! # }
//! # impl FsMode for MyBackend {
//! #     fn set_mode(&self, _: &Path, _: treechattr::Mode) -> Result<(), treechattr::FsError> { Ok(()) }
//! # }
//!
//! // MyBackend automatically implements FsAttr.
//! fn use_backend<B: FsAttr>(_backend: &B) { /* ... */ }
//! use_backend(&MyBackend);
//! ```
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Methods take `&self` to enable
//! concurrent access; backends use interior mutability for state.
//!
//! ## Object Safety
//!
//! All component traits are object-safe and can be used as trait objects.

mod fs_mode;
mod fs_owner;
mod fs_walk;

pub use fs_mode::FsMode;
pub use fs_owner::FsOwner;
pub use fs_walk::{FsWalk, ReadDirIter};

/// Full attribute-management capability: walk + set-owner + set-mode.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type that implements all three
/// component traits. You never implement `FsAttr` directly.
pub trait FsAttr: FsWalk + FsOwner + FsMode {}

// Blanket implementation - any type implementing all three gets FsAttr for free
impl<T: FsWalk + FsOwner + FsMode> FsAttr for T {}
