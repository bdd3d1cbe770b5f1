//! The ordered page collection backing the document

use crate::page::{Page, PageId};
use crate::types::{AlbumError, Result};
use image::RgbaImage;
use std::path::PathBuf;

/// Ordered, owned collection of pages. Collection order is exactly the
/// page order of an exported PDF.
///
/// The album mints every [`PageId`] itself, so identities are unique by
/// construction and survive any reorder.
#[derive(Debug, Default)]
pub struct Album {
    pages: Vec<Page>,
    next_id: u64,
}

impl Album {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page at the end, returning the new length.
    pub fn append(&mut self, image: RgbaImage, source_path: PathBuf) -> usize {
        let id = PageId(self.next_id);
        self.next_id += 1;
        self.pages.push(Page::new(id, image, source_path));
        self.pages.len()
    }

    /// Remove and return the page at a 0-based `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Page> {
        if index >= self.pages.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.pages.remove(index))
    }

    /// Replace the bitmap at `index`; identity and source path stay.
    pub fn set_image(&mut self, index: usize, image: RgbaImage) -> Result<()> {
        match self.pages.get_mut(index) {
            Some(page) => {
                page.replace_image(image);
                Ok(())
            }
            None => Err(self.out_of_range(index)),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Current position of a page, looked up by identity.
    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|page| page.id() == id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Move the contiguous block `start..=end_inclusive` in one splice.
    ///
    /// A `destination` past the block lands it with its last page at
    /// `destination`; a `destination` before it lands it with its first
    /// page there. Returns whether the order changed: destinations inside
    /// `start..=end_inclusive + 1` (both edges included) are successful
    /// no-ops, since dropping a block onto itself moves nothing.
    pub fn move_block(
        &mut self,
        start: usize,
        end_inclusive: usize,
        destination: usize,
    ) -> Result<bool> {
        if start > end_inclusive || end_inclusive >= self.pages.len() {
            return Err(self.out_of_range(end_inclusive.max(start)));
        }
        // Checked before the destination bound so a block at the tail may
        // report destination == len and still no-op.
        if (start..=end_inclusive + 1).contains(&destination) {
            return Ok(false);
        }

        let block = end_inclusive - start + 1;
        if destination > end_inclusive {
            if destination >= self.pages.len() {
                return Err(self.out_of_range(destination));
            }
            // Pages after the block shift left by its width; the block's
            // last page lands on `destination`.
            self.pages[start..=destination].rotate_left(block);
        } else {
            // Pages before the block shift right by its width; the block's
            // first page lands on `destination`.
            self.pages[destination..=end_inclusive].rotate_right(block);
        }
        Ok(true)
    }

    fn out_of_range(&self, index: usize) -> AlbumError {
        AlbumError::IndexOutOfRange {
            index,
            len: self.pages.len(),
        }
    }
}
