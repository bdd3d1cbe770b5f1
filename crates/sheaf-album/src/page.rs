use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Identity of a page, stable across reorders and rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub u64);

/// One album page: a decoded bitmap plus the file it was loaded from
#[derive(Debug, Clone)]
pub struct Page {
    id: PageId,
    image: RgbaImage,
    source_path: PathBuf,
}

impl Page {
    pub(crate) fn new(id: PageId, image: RgbaImage, source_path: PathBuf) -> Self {
        Self {
            id,
            image,
            source_path,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub(crate) fn replace_image(&mut self, image: RgbaImage) {
        self.image = image;
    }
}
