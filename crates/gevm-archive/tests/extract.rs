use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use gevm_archive::{ArchiveError, extract};
use tempfile::tempdir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

fn options(mode: u32) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .unix_permissions(mode)
}

fn write_zip(path: &Path, build: impl FnOnce(&mut ZipWriter<File>)) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    build(&mut zip);
    zip.finish().unwrap();
}

#[test]
fn extracts_nested_entries() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("Godot_v4.2.1-stable_export_templates.tpz");
    write_zip(&archive, |zip| {
        zip.add_directory("templates/", options(0o755)).unwrap();
        zip.start_file("templates/version.txt", options(0o644)).unwrap();
        zip.write_all(b"4.2.1.stable").unwrap();
        zip.start_file("templates/web/nothreads/godot.js", options(0o644)).unwrap();
        zip.write_all(b"js").unwrap();
    });

    let dest = dir.path().join("out");
    let report = extract(&archive, &dest).unwrap();

    assert_eq!(report.entry_count, 3);
    assert_eq!(report.total_bytes, 14);
    assert_eq!(fs::read_to_string(dest.join("templates/version.txt")).unwrap(), "4.2.1.stable");
    assert!(dest.join("templates/web/nothreads/godot.js").is_file());
}

#[cfg(unix)]
#[test]
fn keeps_executable_bits() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let archive = dir.path().join("Godot_v4.2.1-stable_linux.x86_64.zip");
    write_zip(&archive, |zip| {
        zip.start_file("Godot_v4.2.1-stable_linux.x86_64", options(0o755)).unwrap();
        zip.write_all(b"\x7fELF").unwrap();
    });

    let dest = dir.path().join("4.2.1-stable");
    extract(&archive, &dest).unwrap();

    let mode = fs::metadata(dest.join("Godot_v4.2.1-stable_linux.x86_64"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[cfg(unix)]
#[test]
fn restores_bundle_symlinks() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("Godot_v4.2.1-stable_macos.universal.zip");
    write_zip(&archive, |zip| {
        zip.start_file("Godot.app/Contents/Resources/data", options(0o644)).unwrap();
        zip.write_all(b"data").unwrap();
        zip.add_symlink("Godot.app/Contents/MacOS/data", "../Resources/data", options(0o777))
            .unwrap();
    });

    let dest = dir.path().join("out");
    extract(&archive, &dest).unwrap();

    let link = dest.join("Godot.app/Contents/MacOS/data");
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&link).unwrap(), "data");
}

#[test]
fn rejects_entries_outside_destination() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("evil.zip");
    write_zip(&archive, |zip| {
        zip.start_file("../evil.txt", options(0o644)).unwrap();
        zip.write_all(b"x").unwrap();
    });

    let err = extract(&archive, &dir.path().join("out")).unwrap_err();

    assert!(matches!(err, ArchiveError::ZipSlip { .. }));
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn missing_or_corrupt_archives() {
    let dir = tempdir().unwrap();

    let err = extract(&dir.path().join("missing.zip"), dir.path()).unwrap_err();
    assert!(matches!(err, ArchiveError::Open { .. }));

    let junk = dir.path().join("junk.zip");
    fs::write(&junk, b"not a zip").unwrap();
    let err = extract(&junk, &dir.path().join("out")).unwrap_err();
    assert!(matches!(err, ArchiveError::Corrupted(_)));
}
