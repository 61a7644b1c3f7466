//! Asset loading against real PNG files in a scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use tui_flappy::assets::{required_files, AssetError, Assets};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tui-flappy-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &Path, name: &str, w: u32, h: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(color))
        .save(dir.join(name))
        .unwrap();
}

fn write_full_set(dir: &Path) {
    for name in ["bird1.png", "bird2.png", "bird3.png"] {
        write_png(dir, name, 34, 24, [250, 200, 20, 255]);
    }
    write_png(dir, "pipe.png", 52, 400, [40, 180, 40, 255]);
    write_png(dir, "background.png", 40, 60, [110, 190, 230, 255]);
}

#[test]
fn test_load_complete_set() {
    let dir = scratch_dir("complete");
    write_full_set(&dir);

    let assets = Assets::load(&dir).unwrap();
    assert_eq!(assets.actor_frames().len(), 3);

    let m = assets.metrics();
    assert_eq!((m.actor_width, m.actor_height), (34.0, 24.0));
    assert_eq!((m.obstacle_width, m.obstacle_height), (52.0, 400.0));
    assert_eq!(m.actor_frames, 3);
    assert_eq!(m.gap, 150);

    let px = assets.obstacle().pixel(0, 0).unwrap();
    assert_eq!((px.r, px.g, px.b, px.a), (40, 180, 40, 255));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_files_are_all_reported() {
    let dir = scratch_dir("missing");
    write_png(&dir, "bird1.png", 34, 24, [0, 0, 0, 255]);

    match Assets::load(&dir) {
        Err(AssetError::Missing { paths }) => {
            assert_eq!(paths.len(), required_files().count() - 1);
            assert!(paths.iter().any(|p| p.ends_with("pipe.png")));
            assert!(paths.iter().any(|p| p.ends_with("background.png")));
        }
        other => panic!("expected Missing, got {other:?}"),
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_corrupt_file_is_a_decode_error() {
    let dir = scratch_dir("corrupt");
    write_full_set(&dir);
    fs::write(dir.join("pipe.png"), b"not a png").unwrap();

    match Assets::load(&dir) {
        Err(AssetError::Decode { path, .. }) => assert!(path.ends_with("pipe.png")),
        other => panic!("expected Decode, got {other:?}"),
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_mismatched_frames_are_rejected() {
    let dir = scratch_dir("mismatch");
    write_full_set(&dir);
    write_png(&dir, "bird2.png", 30, 24, [0, 0, 0, 255]);

    match Assets::load(&dir) {
        Err(AssetError::FrameSizeMismatch { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected FrameSizeMismatch, got {other:?}"),
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_bundled_assets_load() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let assets = Assets::load(&dir).unwrap();
    let m = assets.metrics();
    assert_eq!((m.actor_width, m.actor_height), (34.0, 24.0));
    assert_eq!((m.obstacle_width, m.obstacle_height), (52.0, 400.0));
}
