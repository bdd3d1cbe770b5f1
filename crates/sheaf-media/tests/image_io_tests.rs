use image::{Rgba, RgbaImage};
use sheaf_media::{MediaError, open_image};
use std::fs;
use tempfile::tempdir;

fn write_test_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
    img.save(&path).unwrap();
    path
}

#[test]
fn test_open_image_decodes_to_rgba() {
    let dir = tempdir().unwrap();
    let path = write_test_png(dir.path(), "page.png", 3, 2);

    let img = open_image(&path).unwrap();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
}

#[test]
fn test_open_image_rejects_garbage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"this is not pixel data").unwrap();

    let err = open_image(&path).unwrap_err();
    match err {
        MediaError::NotAnImage { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected NotAnImage, got {other:?}"),
    }
}

#[test]
fn test_open_image_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.png");

    let err = open_image(&path).unwrap_err();
    match err {
        MediaError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_image_async() {
    let dir = tempdir().unwrap();
    let path = write_test_png(dir.path(), "page.png", 5, 4);

    let img = sheaf_media::load_image(&path).await.unwrap();
    assert_eq!(img.dimensions(), (5, 4));
}
