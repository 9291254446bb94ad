//! File-based workflows through the `mpo` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use mpo_rs::{decode_all, Container};

use super::test_utils::{green, nintendo_style_mpo, red};

fn mpo(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mpo"))
        .args(args)
        .current_dir(dir)
        .env_remove("MPO_FORMAT")
        .env_remove("MPO_OUTFILE")
        .env_remove("MPO_QUALITY")
        .output()
        .expect("failed to run mpo binary")
}

fn write_pair(dir: &Path) {
    red(10, 10).save(dir.join("left.png")).unwrap();
    green(10, 10).save(dir.join("right.png")).unwrap();
}

#[test]
fn test_encode_then_decode_files() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());

    let out = mpo(&["encode", "left.png", "right.png", "-o", "pair.mpo"], dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let bytes = std::fs::read(dir.path().join("pair.mpo")).unwrap();
    assert_eq!(decode_all(&bytes).unwrap().len(), 2);

    let out = mpo(&["decode", "pair.mpo", "-o", "stereo.jpg"], dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stereo = image::open(dir.path().join("stereo.jpg")).unwrap();
    assert_eq!((stereo.width(), stereo.height()), (20, 10));
}

#[test]
fn test_decode_anaglyph_file() {
    let dir = TempDir::new().unwrap();
    let bytes = Container::new(vec![red(8, 6), green(8, 6)])
        .encode(90)
        .unwrap();
    std::fs::write(dir.path().join("in.mpo"), bytes).unwrap();

    let out = mpo(&["decode", "in.mpo", "--format", "red-cyan"], dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    // Default output name
    let anaglyph = image::open(dir.path().join("output.jpg")).unwrap();
    assert_eq!((anaglyph.width(), anaglyph.height()), (8, 6));
}

#[test]
fn test_encode_default_outfile() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());

    let out = mpo(&["encode", "left.png", "right.png"], dir.path());
    assert!(out.status.success());
    assert!(dir.path().join("output.mpo").exists());
}

#[test]
fn test_info_reports_layout() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("3ds.mpo"), nintendo_style_mpo(b"vendor")).unwrap();

    let out = mpo(&["info", "3ds.mpo"], dir.path());
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Frames: 2"), "{}", stdout);
    assert!(stdout.contains("First frame: 10x10"), "{}", stdout);
    assert!(stdout.contains("MPF: none"), "{}", stdout);
    assert!(stdout.contains("Vendor: NINT (6 bytes)"), "{}", stdout);
}

#[test]
fn test_info_on_written_file() {
    let dir = TempDir::new().unwrap();
    let bytes = Container::new(vec![red(4, 4), green(4, 4)])
        .encode(90)
        .unwrap();
    std::fs::write(dir.path().join("pair.mpo"), bytes).unwrap();

    let out = mpo(&["info", "pair.mpo"], dir.path());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("MPF: version 0100"), "{}", stdout);
    assert!(stdout.contains("(representative)"), "{}", stdout);
    assert!(stdout.contains("Vendor: none"), "{}", stdout);
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let out = mpo(&["decode", "nope.mpo"], dir.path());
    assert!(!out.status.success());
    assert!(!dir.path().join("output.jpg").exists());
}

#[test]
fn test_invalid_quality_fails() {
    let dir = TempDir::new().unwrap();
    write_pair(dir.path());

    let out = mpo(&["encode", "left.png", "-q", "0"], dir.path());
    assert!(!out.status.success());
    assert!(!dir.path().join("output.mpo").exists());
}

#[test]
fn test_info_rejects_non_mpo() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("junk.bin"), b"hello").unwrap();

    let out = mpo(&["info", "junk.bin"], dir.path());
    assert!(!out.status.success());
}
