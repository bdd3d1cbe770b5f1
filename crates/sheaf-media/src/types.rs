use image::RgbaImage;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("not a valid image: {path}")]
    NotAnImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, MediaError>;

/// Whole-page quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// Degrees of clockwise rotation
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Rotate a bitmap, returning a new buffer (quarter turns swap dimensions)
    pub fn apply(self, image: &RgbaImage) -> RgbaImage {
        match self {
            Rotation::Clockwise90 => image::imageops::rotate90(image),
            Rotation::Clockwise180 => image::imageops::rotate180(image),
            Rotation::Clockwise270 => image::imageops::rotate270(image),
        }
    }
}
