//! The reorderable page list
//!
//! Each row is a dnd drag source and the panel is the drop zone. While a
//! drag hovers a row, an insertion marker tracks the nearest gap; a
//! completed drop is reported as one [`RowMove`] for the navigator to
//! reconcile. The visual order here is always drawn straight from the
//! album, so the list can never disagree with the collection.

use crate::surface::ViewSurface;
use eframe::egui;
use sheaf_album::{Album, RowMove};

/// Row index carried as the dnd payload.
#[derive(Clone, Copy, PartialEq, Eq)]
struct DragRow(usize);

pub enum ListEvent {
    /// A row was double-clicked and should become the active page.
    Activate(usize),
    /// A drag finished; the album needs the matching splice.
    Moved(RowMove),
}

pub fn show_page_list(
    ui: &mut egui::Ui,
    album: &Album,
    surface: &mut ViewSurface,
) -> Option<ListEvent> {
    let mut event = None;
    let scroll_to = surface.take_scroll_request();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let frame = egui::Frame::default().inner_margin(4);
            let (_, dropped_past_rows) = ui.dnd_drop_zone::<DragRow, ()>(frame, |ui| {
                for (row, page) in album.pages().iter().enumerate() {
                    let item_id = egui::Id::new(("page-row", page.id()));
                    let selected = surface.highlight_row() == Some(row);

                    let inner = ui.dnd_drag_source(item_id, DragRow(row), |ui| {
                        ui.horizontal(|ui| {
                            if let Some(texture) = surface.thumbnail(page.id()) {
                                ui.image((texture.id(), texture.size_vec2()));
                            }
                            let name = page
                                .source_path()
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| page.source_path().display().to_string());
                            ui.selectable_label(selected, name)
                        })
                        .inner
                    });
                    let label = inner.inner;
                    let response = inner.response;

                    if scroll_to == Some(row) {
                        response.scroll_to_me(Some(egui::Align::Center));
                    }
                    if label.double_clicked() {
                        event = Some(ListEvent::Activate(row));
                    }

                    // Hovering drag: mark the nearest gap and resolve a
                    // release against it.
                    if let (Some(pointer), Some(hovered)) = (
                        ui.input(|i| i.pointer.interact_pos()),
                        response.dnd_hover_payload::<DragRow>(),
                    ) {
                        let rect = response.rect;
                        let stroke = egui::Stroke::new(2.0, ui.visuals().selection.bg_fill);
                        let gap = if *hovered == DragRow(row) {
                            row
                        } else if pointer.y < rect.center().y {
                            ui.painter().hline(rect.x_range(), rect.top(), stroke);
                            row
                        } else {
                            ui.painter().hline(rect.x_range(), rect.bottom(), stroke);
                            row + 1
                        };
                        if let Some(dragged) = response.dnd_release_payload::<DragRow>() {
                            if let Some(mv) = drop_row_move(dragged.0, gap) {
                                event = Some(ListEvent::Moved(mv));
                            }
                        }
                    }
                }
            });

            // Released over the panel but below every row: drop at the end.
            if let Some(dragged) = dropped_past_rows {
                if event.is_none() {
                    if let Some(mv) = drop_row_move(dragged.0, album.len()) {
                        event = Some(ListEvent::Moved(mv));
                    }
                }
            }
        });

    event
}

/// Translate "row `from` dropped at gap `gap`" into the album's block-move
/// parameters. Gaps are counted in the pre-drag row order (`0..=len`);
/// the two gaps touching the dragged row leave the order unchanged and
/// produce no move at all.
fn drop_row_move(from: usize, gap: usize) -> Option<RowMove> {
    if gap == from || gap == from + 1 {
        return None;
    }
    let destination = if gap > from { gap - 1 } else { gap };
    Some(RowMove {
        start: from,
        end_inclusive: from,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_gaps_are_no_moves() {
        assert!(drop_row_move(2, 2).is_none());
        assert!(drop_row_move(2, 3).is_none());
        assert!(drop_row_move(0, 0).is_none());
        assert!(drop_row_move(0, 1).is_none());
    }

    #[test]
    fn drop_below_lands_block_on_gap_minus_one() {
        // [A, B, C]: dragging A to the gap after C ends with A last.
        assert_eq!(
            drop_row_move(0, 3),
            Some(RowMove {
                start: 0,
                end_inclusive: 0,
                destination: 2,
            })
        );
    }

    #[test]
    fn drop_above_lands_block_on_the_gap() {
        // [A, B, C]: dragging C to the top gap ends with C first.
        assert_eq!(
            drop_row_move(2, 0),
            Some(RowMove {
                start: 2,
                end_inclusive: 2,
                destination: 0,
            })
        );
    }

    #[test]
    fn last_row_dropped_at_the_end_is_a_no_move() {
        assert!(drop_row_move(4, 5).is_none());
    }
}
