//! Selection state and the actions that drive the view
//!
//! Every mutation funnels through here: the navigator owns which page is
//! active, keeps that index valid across appends, removals and reorders,
//! and pushes the matching refresh to the [`PageSurface`]. User-driven
//! activation enters through [`Navigator::jump_to`]; programmatic
//! resynchronization goes through a private path, so a programmatic index
//! update can never masquerade as a user edit.

use crate::album::Album;
use crate::guard::SingleFlight;
use crate::surface::PageSurface;
use crate::types::{Controls, Result, RotateOutcome, RowMove};
use sheaf_media::{MediaError, Rotation, open_image};
use std::path::PathBuf;

/// Tracks the active page and drives every surface refresh.
#[derive(Debug, Default)]
pub struct Navigator {
    /// 0-based row into the album; `None` exactly when the album is empty.
    active: Option<usize>,
    rotate_gate: SingleFlight,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based index shown to the user, `None` when the album is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.active.map(|row| row + 1)
    }

    /// 0-based row for list highlighting.
    pub fn active_row(&self) -> Option<usize> {
        self.active
    }

    /// The gate serializing rotations, exposed so callers can probe it.
    pub fn rotate_gate(&self) -> &SingleFlight {
        &self.rotate_gate
    }

    /// Enablement for every page action. All flags are false exactly when
    /// the album is empty; stepping is cut off at either end.
    pub fn controls(&self, album: &Album) -> Controls {
        match self.active {
            None => Controls::default(),
            Some(row) => Controls {
                can_step_back: row > 0,
                can_step_forward: row + 1 < album.len(),
                can_remove: true,
                can_rotate: true,
                can_save: true,
            },
        }
    }

    /// User-driven jump to a 1-based index (spin box edit, double-clicked
    /// row). Out-of-range values clamp, matching the spin box they come
    /// from; an empty album ignores the jump.
    pub fn jump_to(&mut self, album: &Album, surface: &mut impl PageSurface, index: usize) {
        if album.is_empty() {
            return;
        }
        let row = index.clamp(1, album.len()) - 1;
        self.activate(album, surface, row);
    }

    pub fn step_back(&mut self, album: &Album, surface: &mut impl PageSurface) {
        if let Some(row) = self.active {
            if row > 0 {
                self.activate(album, surface, row - 1);
            }
        }
    }

    pub fn step_forward(&mut self, album: &Album, surface: &mut impl PageSurface) {
        if let Some(row) = self.active {
            if row + 1 < album.len() {
                self.activate(album, surface, row + 1);
            }
        }
    }

    /// Decode and append every readable file in `paths`, in order, each
    /// new page becoming the active one. Failures are collected per file
    /// and returned after the whole batch: one unreadable file never
    /// aborts the rest, and pages appended before it stay.
    pub fn import_files(
        &mut self,
        album: &mut Album,
        surface: &mut impl PageSurface,
        paths: &[PathBuf],
    ) -> Vec<MediaError> {
        let mut failures = Vec::new();
        for path in paths {
            match open_image(path) {
                Ok(image) => {
                    let row = album.append(image, path.clone()) - 1;
                    surface.list_inserted(row, &album.pages()[row]);
                    self.activate(album, surface, row);
                }
                Err(err) => failures.push(err),
            }
        }
        failures
    }

    /// Remove the active page. The page that slid into its position
    /// becomes active, or the new last page when the tail was removed;
    /// removing the only page clears selection and preview.
    pub fn remove_active(
        &mut self,
        album: &mut Album,
        surface: &mut impl PageSurface,
    ) -> Result<()> {
        let Some(row) = self.active else {
            return Ok(());
        };
        let removed = album.remove_at(row)?;
        surface.list_removed(row, removed.id());
        if album.is_empty() {
            self.active = None;
            surface.clear_page();
        } else {
            self.activate(album, surface, row.min(album.len() - 1));
        }
        Ok(())
    }

    /// Transpose the active page's bitmap. One rotation runs at a time: a
    /// trigger arriving while another is in flight is dropped silently and
    /// reported as [`RotateOutcome::Busy`], never queued.
    pub fn rotate_active(
        &mut self,
        album: &mut Album,
        surface: &mut impl PageSurface,
        rotation: Rotation,
    ) -> RotateOutcome {
        let Some(_permit) = self.rotate_gate.try_acquire() else {
            return RotateOutcome::Busy;
        };
        // Re-checked under the permit; the album may have emptied since
        // the trigger fired.
        let Some(row) = self.active else {
            return RotateOutcome::NothingToRotate;
        };
        let Some(page) = album.get(row) else {
            return RotateOutcome::NothingToRotate;
        };
        let rotated = rotation.apply(page.image());
        // `row` was validated by the lookup above.
        let _ = album.set_image(row, rotated);
        surface.page_updated(row, &album.pages()[row]);
        self.activate(album, surface, row);
        RotateOutcome::Applied
    }

    /// Apply a list reorder to the album, then keep the same page active,
    /// tracked by identity rather than position. The visible list is
    /// assumed already reordered by the toolkit; only the collection and
    /// the highlight are reconciled here.
    pub fn reconcile_rows_moved(
        &mut self,
        album: &mut Album,
        surface: &mut impl PageSurface,
        mv: RowMove,
    ) -> Result<()> {
        let followed = self
            .active
            .and_then(|row| album.get(row))
            .map(|page| page.id());
        let changed = album.move_block(mv.start, mv.end_inclusive, mv.destination)?;
        if !changed {
            return Ok(());
        }
        if let Some(id) = followed {
            if let Some(row) = album.index_of(id) {
                self.activate(album, surface, row);
            }
        }
        Ok(())
    }

    /// Programmatic activation: remember `row` and refresh preview and
    /// highlight for it. Callers pass rows validated against the album,
    /// keeping `active` in range whenever it is `Some`.
    fn activate(&mut self, album: &Album, surface: &mut impl PageSurface, row: usize) {
        self.active = Some(row);
        if let Some(page) = album.get(row) {
            surface.show_page(page.image(), page.source_path());
            surface.highlight(row);
        }
    }
}
