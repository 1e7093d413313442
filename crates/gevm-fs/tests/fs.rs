use std::fs;

use gevm_fs::{locate, replace_symlink};
use tempfile::tempdir;

#[test]
fn locates_first_match_in_walk_order() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("4.2.1-stable");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a/Godot_v4.2.1-stable_linux.x86_64"), "").unwrap();
    fs::write(root.join("b/Godot_v4.2.1-stable_linux.x86_64"), "").unwrap();
    fs::write(root.join("README.md"), "").unwrap();

    let found = locate(&root, |name| name.starts_with("Godot"), false).unwrap();

    assert_eq!(found, root.join("a/Godot_v4.2.1-stable_linux.x86_64"));
}

#[test]
fn nothing_matching_is_not_found() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();

    let err = locate(dir.path(), |name| name.starts_with("Godot"), false).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn missing_root_is_a_walk_error() {
    let dir = tempdir().unwrap();

    let err = locate(&dir.path().join("gone"), |_| true, false).unwrap_err();

    assert!(!err.is_not_found());
}

#[cfg(unix)]
#[test]
fn replaces_existing_link() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old");
    let new = dir.path().join("new");
    fs::write(&old, "old").unwrap();
    fs::write(&new, "new").unwrap();
    let link = dir.path().join("bin").join("godot");

    replace_symlink(&old, &link).unwrap();
    assert_eq!(fs::read_to_string(&link).unwrap(), "old");

    replace_symlink(&new, &link).unwrap();
    assert_eq!(fs::read_link(&link).unwrap(), new);
    assert_eq!(fs::read_to_string(&link).unwrap(), "new");
}

#[cfg(unix)]
#[test]
fn refuses_to_replace_a_directory() {
    let dir = tempdir().unwrap();
    let link = dir.path().join("godot");
    fs::create_dir(&link).unwrap();

    assert!(replace_symlink(&dir.path().join("target"), &link).is_err());
    assert!(link.is_dir());
}
