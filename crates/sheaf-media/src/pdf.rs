//! PDF assembly: one page per bitmap, in sequence order

use crate::types::{MediaError, Result};
use ::image::RgbaImage;
use printpdf::*;
use std::io::Cursor;
use std::path::Path;

/// Pages are sized so one pixel maps to one PDF point.
const EXPORT_DPI: f32 = 72.0;

const MM_PER_INCH: f32 = 25.4;

/// Render `pages` into a single PDF document in memory.
///
/// Each bitmap becomes one full-bleed page whose MediaBox matches the
/// bitmap's pixel dimensions in points. An empty slice renders an empty
/// document; callers that write files skip the write instead.
pub fn render_pdf_bytes(pages: &[&RgbaImage]) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("Sheaf");
    let mut warnings = Vec::new();

    for image in pages {
        // printpdf ingests encoded bytes, so round each bitmap through PNG
        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), ::image::ImageFormat::Png)
            .map_err(|e| MediaError::Pdf(format!("encode page: {e}")))?;

        let raw = RawImage::decode_from_bytes(&encoded, &mut warnings).map_err(MediaError::Pdf)?;
        let image_id = doc.add_image(&raw);

        let width_mm = image.width() as f32 * MM_PER_INCH / EXPORT_DPI;
        let height_mm = image.height() as f32 * MM_PER_INCH / EXPORT_DPI;

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                dpi: Some(EXPORT_DPI),
                ..Default::default()
            },
        }];

        doc.pages.push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));
    }

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    Ok(bytes)
}

/// Write `pages` to `path` as a single PDF.
///
/// An empty sequence is a successful no-op: no file is created or touched.
pub fn write_pdf(path: impl AsRef<Path>, pages: &[&RgbaImage]) -> Result<()> {
    if pages.is_empty() {
        return Ok(());
    }

    let path = path.as_ref();
    let bytes = render_pdf_bytes(pages)?;
    std::fs::write(path, bytes).map_err(|source| MediaError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Async export: rendering is CPU-bound and runs on the blocking pool,
/// the file write goes through tokio. Same empty-sequence no-op as
/// [`write_pdf`].
pub async fn save_pdf(path: impl AsRef<Path>, pages: Vec<RgbaImage>) -> Result<()> {
    if pages.is_empty() {
        return Ok(());
    }

    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let refs: Vec<&RgbaImage> = pages.iter().collect();
        render_pdf_bytes(&refs)
    })
    .await??;

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| MediaError::Io { path, source })?;

    Ok(())
}
