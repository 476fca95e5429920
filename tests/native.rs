//! Real-filesystem tests for the native backend.
//!
//! Everything runs inside a `tempfile` tree. Ownership changes are tested
//! as no-op changes to the current uid/gid, which POSIX permits without
//! privilege, so these tests pass for unprivileged users.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use treechattr::{FsError, Mode, NativeFs, Ownership, chmod_recursive, chown_recursive};

/// Build `root/{b.txt, c/d.txt}` and return the four paths, root first.
fn build_tree(root: &Path) -> Vec<PathBuf> {
    let b = root.join("b.txt");
    let c = root.join("c");
    let d = c.join("d.txt");
    fs::write(&b, b"b").unwrap();
    fs::create_dir(&c).unwrap();
    fs::write(&d, b"d").unwrap();
    vec![root.to_path_buf(), b, c, d]
}

fn mode_of(path: &Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o7777
}

#[test]
fn chmod_recursive_sets_mode_on_every_entry() {
    let dir = tempfile::tempdir().unwrap();
    let paths = build_tree(dir.path());

    chmod_recursive(&NativeFs::new(), dir.path(), Mode::from_mode(0o755)).unwrap();

    for path in &paths {
        assert_eq!(mode_of(path), 0o755, "mode not applied to {}", path.display());
    }
}

#[test]
fn chown_recursive_to_current_ids_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let paths = build_tree(dir.path());

    let meta = fs::metadata(dir.path()).unwrap();
    let (uid, gid) = (meta.uid(), meta.gid());

    chown_recursive(&NativeFs::new(), dir.path(), Ownership::new(uid, gid)).unwrap();

    for path in &paths {
        let meta = fs::metadata(path).unwrap();
        assert_eq!(meta.uid(), uid);
        assert_eq!(meta.gid(), gid);
    }
}

#[test]
fn chown_recursive_with_both_halves_none_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = build_tree(dir.path());

    let before: Vec<_> = paths
        .iter()
        .map(|p| {
            let m = fs::metadata(p).unwrap();
            (m.uid(), m.gid())
        })
        .collect();

    let unchanged = Ownership {
        uid: None,
        gid: None,
    };
    chown_recursive(&NativeFs::new(), dir.path(), unchanged).unwrap();

    for (path, (uid, gid)) in paths.iter().zip(before) {
        let meta = fs::metadata(path).unwrap();
        assert_eq!((meta.uid(), meta.gid()), (uid, gid), "{} changed", path.display());
    }
}

#[test]
fn missing_root_fails_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = chmod_recursive(&NativeFs::new(), &missing, Mode::from_mode(0o700)).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));

    let err = chown_recursive(&NativeFs::new(), &missing, Ownership::new(0, 0)).unwrap_err();
    assert!(matches!(err, FsError::NotFound { .. }));
}

#[test]
fn symlinked_directory_targets_are_changed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    let target = dir.path().join("target");
    fs::create_dir(&root).unwrap();
    fs::create_dir(&target).unwrap();
    let inner = target.join("f.txt");
    fs::write(&inner, b"f").unwrap();
    std::os::unix::fs::symlink(&target, root.join("link")).unwrap();

    chmod_recursive(&NativeFs::new(), &root, Mode::from_mode(0o700)).unwrap();

    assert_eq!(mode_of(&target), 0o700);
    assert_eq!(mode_of(&inner), 0o700);
}
