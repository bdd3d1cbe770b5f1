//! Image loading for page assembly

use crate::types::{MediaError, Result};
use image::RgbaImage;
use std::path::Path;

/// Decode the image at `path` into an RGBA bitmap.
///
/// Filesystem failures and undecodable files are reported as separate
/// variants, both carrying the offending path so a batch import can name
/// each file it rejected.
pub fn open_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    match image::open(path) {
        Ok(decoded) => Ok(decoded.to_rgba8()),
        Err(image::ImageError::IoError(source)) => Err(MediaError::Io {
            path: path.to_owned(),
            source,
        }),
        Err(source) => Err(MediaError::NotAnImage {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Async wrapper around [`open_image`]; decoding is CPU-bound, so it runs
/// on the blocking pool.
pub async fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || open_image(&path)).await?
}
