use crate::page::{Page, PageId};
use image::RgbaImage;
use std::path::Path;

/// Everything the navigator tells the view layer.
///
/// References handed in are valid only for the duration of the call, so
/// implementations copy whatever they keep (the GUI uploads textures, the
/// test fake records paths). The list ops arrive once per mutation and
/// keep the visible list in lockstep with the collection.
pub trait PageSurface {
    /// Present `image` as the current page, labelled with its source file.
    fn show_page(&mut self, image: &RgbaImage, source: &Path);

    /// Blank the preview; the collection is empty.
    fn clear_page(&mut self);

    /// A page was inserted at `row`.
    fn list_inserted(&mut self, row: usize, page: &Page);

    /// The page at `row` was removed.
    fn list_removed(&mut self, row: usize, id: PageId);

    /// The page at `row` changed pixels and needs re-rendering.
    fn page_updated(&mut self, row: usize, page: &Page);

    /// Move the list selection to `row` and bring it into view.
    fn highlight(&mut self, row: usize);
}
