use image::{Rgba, RgbaImage};
use lopdf::{Document, Object};
use sheaf_media::{Rotation, render_pdf_bytes, save_pdf, write_pdf};
use tempfile::tempdir;

fn page(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]))
}

fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("unexpected MediaBox entry: {other:?}"),
    }
}

/// MediaBox width and height in points for a 1-based page number.
fn media_box(doc: &Document, page_number: u32) -> (f32, f32) {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let media_box = dict.get(b"MediaBox").unwrap().as_array().unwrap();
    let x0 = number(&media_box[0]);
    let y0 = number(&media_box[1]);
    let x1 = number(&media_box[2]);
    let y1 = number(&media_box[3]);
    (x1 - x0, y1 - y0)
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.5,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_export_one_page_per_bitmap_in_order() {
    let a = page(120, 80);
    let b = page(100, 60);
    let bytes = render_pdf_bytes(&[&a, &b]).unwrap();

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);

    let (w, h) = media_box(&doc, 1);
    assert_close(w, 120.0);
    assert_close(h, 80.0);

    let (w, h) = media_box(&doc, 2);
    assert_close(w, 100.0);
    assert_close(h, 60.0);
}

#[test]
fn test_export_preserves_rotated_orientation() {
    // First page turned 90 degrees, second untouched, third turned 270
    let first = Rotation::Clockwise90.apply(&page(120, 80));
    let second = page(100, 60);
    let third = Rotation::Clockwise270.apply(&page(90, 40));

    let bytes = render_pdf_bytes(&[&first, &second, &third]).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);

    let (w, h) = media_box(&doc, 1);
    assert_close(w, 80.0);
    assert_close(h, 120.0);

    let (w, h) = media_box(&doc, 2);
    assert_close(w, 100.0);
    assert_close(h, 60.0);

    let (w, h) = media_box(&doc, 3);
    assert_close(w, 40.0);
    assert_close(h, 90.0);
}

#[test]
fn test_write_pdf_creates_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("album.pdf");

    let single = page(64, 48);
    write_pdf(&out, &[&single]).unwrap();

    let doc = Document::load(&out).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_write_pdf_empty_sequence_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("album.pdf");

    write_pdf(&out, &[]).unwrap();
    assert!(!out.exists());
}

#[tokio::test]
async fn test_save_pdf_async() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("album.pdf");

    save_pdf(&out, vec![page(32, 32), page(20, 10)]).await.unwrap();

    let doc = Document::load(&out).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_save_pdf_empty_sequence_writes_nothing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("album.pdf");

    save_pdf(&out, Vec::new()).await.unwrap();
    assert!(!out.exists());
}
