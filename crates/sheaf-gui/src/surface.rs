//! egui implementation of the navigator's surface contract
//!
//! Every bitmap the navigator hands over is copied onto the GPU right
//! here, in the same call; nothing keeps a reference into the album, so a
//! later in-place rotation cannot invalidate what is on screen.

use eframe::egui;
use image::RgbaImage;
use sheaf_album::{Page, PageId, PageSurface};
use std::collections::HashMap;
use std::path::Path;

/// Thumbnails are this many pixels wide; height follows the aspect ratio.
const THUMB_WIDTH: u32 = 48;

pub struct ViewSurface {
    ctx: egui::Context,
    preview: Option<egui::TextureHandle>,
    source_label: String,
    /// Keyed by page identity, so reorders cost nothing and a removal
    /// drops exactly one texture.
    thumbnails: HashMap<PageId, egui::TextureHandle>,
    highlight_row: Option<usize>,
    scroll_request: Option<usize>,
}

impl ViewSurface {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            preview: None,
            source_label: String::new(),
            thumbnails: HashMap::new(),
            highlight_row: None,
            scroll_request: None,
        }
    }

    pub fn preview(&self) -> Option<&egui::TextureHandle> {
        self.preview.as_ref()
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn thumbnail(&self, id: PageId) -> Option<&egui::TextureHandle> {
        self.thumbnails.get(&id)
    }

    pub fn highlight_row(&self) -> Option<usize> {
        self.highlight_row
    }

    /// The row the list should scroll into view this frame, if any.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }

    fn upload_thumbnail(&mut self, page: &Page) {
        let image = page.image();
        let height = (image.height() * THUMB_WIDTH / image.width().max(1)).max(1);
        let small = image::imageops::thumbnail(image, THUMB_WIDTH, height);
        let color = egui::ColorImage::from_rgba_unmultiplied(
            [small.width() as usize, small.height() as usize],
            small.as_raw(),
        );
        let texture = self.ctx.load_texture(
            format!("thumb-{}", page.id().0),
            color,
            egui::TextureOptions::LINEAR,
        );
        self.thumbnails.insert(page.id(), texture);
    }
}

impl PageSurface for ViewSurface {
    fn show_page(&mut self, image: &RgbaImage, source: &Path) {
        let color = egui::ColorImage::from_rgba_unmultiplied(
            [image.width() as usize, image.height() as usize],
            image.as_raw(),
        );
        if let Some(texture) = &mut self.preview {
            texture.set(color, egui::TextureOptions::LINEAR);
        } else {
            self.preview = Some(
                self.ctx
                    .load_texture("preview", color, egui::TextureOptions::LINEAR),
            );
        }
        self.source_label = source.display().to_string();
    }

    fn clear_page(&mut self) {
        self.preview = None;
        self.source_label.clear();
        self.highlight_row = None;
        self.scroll_request = None;
    }

    fn list_inserted(&mut self, _row: usize, page: &Page) {
        self.upload_thumbnail(page);
    }

    fn list_removed(&mut self, _row: usize, id: PageId) {
        self.thumbnails.remove(&id);
    }

    fn page_updated(&mut self, _row: usize, page: &Page) {
        self.upload_thumbnail(page);
    }

    fn highlight(&mut self, row: usize) {
        self.highlight_row = Some(row);
        self.scroll_request = Some(row);
    }
}
