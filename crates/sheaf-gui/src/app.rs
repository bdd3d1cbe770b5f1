use eframe::egui;
use image::RgbaImage;
use sheaf_album::{Album, Navigator, RotateOutcome};
use sheaf_media::Rotation;
use std::path::PathBuf;

use crate::list::{self, ListEvent};
use crate::logger::AppLogger;
use crate::surface::ViewSurface;

pub struct SheafApp {
    album: Album,
    nav: Navigator,
    surface: ViewSurface,
    logger: AppLogger,

    /// Per-file import/export failures awaiting dismissal.
    diagnostics: Vec<String>,
    last_export: Option<PathBuf>,
    show_activity: bool,
}

impl SheafApp {
    pub fn new(cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        Self {
            album: Album::new(),
            nav: Navigator::new(),
            surface: ViewSurface::new(&cc.egui_ctx),
            logger,
            diagnostics: Vec::new(),
            last_export: None,
            show_activity: false,
        }
    }

    /// One import path for the dialog, the empty-state button and OS file
    /// drops. Failures land in the diagnostics modal per file; pages
    /// imported before a failure stay.
    fn import_paths(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        let failures = self
            .nav
            .import_files(&mut self.album, &mut self.surface, &paths);
        let added = paths.len() - failures.len();
        if added > 0 {
            log::info!("Added {added} page(s)");
        }
        for failure in failures {
            log::warn!("{failure}");
            self.diagnostics.push(failure.to_string());
        }
    }

    fn rotate(&mut self, rotation: Rotation) {
        match self
            .nav
            .rotate_active(&mut self.album, &mut self.surface, rotation)
        {
            RotateOutcome::Applied => {
                log::info!("Rotated page {}° clockwise", rotation.degrees());
            }
            // Dropped triggers show the user nothing.
            RotateOutcome::Busy | RotateOutcome::NothingToRotate => {}
        }
    }

    fn remove_active(&mut self) {
        match self.nav.remove_active(&mut self.album, &mut self.surface) {
            Ok(()) => log::info!("Removed page, {} left", self.album.len()),
            Err(err) => log::error!("remove failed: {err}"),
        }
    }

    fn export_pdf(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name("pages.pdf")
            .save_file()
        else {
            return;
        };
        let pages: Vec<&RgbaImage> = self.album.pages().iter().map(|page| page.image()).collect();
        match sheaf_media::write_pdf(&path, &pages) {
            Ok(()) => {
                log::info!("Saved {} page(s) → {}", pages.len(), path.display());
                self.last_export = Some(path);
            }
            Err(err) => {
                log::error!("Export failed: {err}");
                self.diagnostics.push(format!("{}: {err}", path.display()));
            }
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add Images…").clicked() {
                if let Some(paths) = pick_images() {
                    self.import_paths(paths);
                }
            }

            ui.separator();

            let controls = self.nav.controls(&self.album);
            if ui
                .add_enabled(controls.can_rotate, egui::Button::new("⟲ Rotate"))
                .clicked()
            {
                self.rotate(Rotation::Clockwise270);
            }
            if ui
                .add_enabled(controls.can_rotate, egui::Button::new("⟳ Rotate"))
                .clicked()
            {
                self.rotate(Rotation::Clockwise90);
            }
            if ui
                .add_enabled(controls.can_remove, egui::Button::new("Remove"))
                .clicked()
            {
                self.remove_active();
            }

            ui.separator();

            if ui
                .add_enabled(controls.can_step_back, egui::Button::new("◀ Previous"))
                .clicked()
            {
                self.nav.step_back(&self.album, &mut self.surface);
            }
            if let Some(active) = self.nav.active_index() {
                // The spin box is redrawn from the navigator each frame;
                // only a genuine widget edit routes back through jump_to.
                let mut value = active;
                let response = ui.add(egui::DragValue::new(&mut value).range(1..=self.album.len()));
                if response.changed() && value != active {
                    self.nav.jump_to(&self.album, &mut self.surface, value);
                }
                ui.label(format!("of {}", self.album.len()));
            }
            if ui
                .add_enabled(controls.can_step_forward, egui::Button::new("Next ▶"))
                .clicked()
            {
                self.nav.step_forward(&self.album, &mut self.surface);
            }

            ui.separator();

            if ui
                .add_enabled(controls.can_save, egui::Button::new("Save PDF…"))
                .clicked()
            {
                self.export_pdf();
            }
        });
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        if let Some(texture) = self.surface.preview() {
            let label_height = 24.0;
            let avail = ui.available_size() - egui::vec2(0.0, label_height);
            let size = texture.size_vec2();
            let scale = (avail.x / size.x).min(avail.y / size.y).max(0.0);
            let scaled = size * scale;
            let texture_id = texture.id();
            ui.vertical_centered(|ui| {
                ui.allocate_ui(avail, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.image((texture_id, scaled));
                    });
                });
                ui.label(self.surface.source_label());
            });
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.heading("Sheaf");
                ui.add_space(12.0);
                ui.label("Drop images here, or add some to start a document");
                ui.add_space(12.0);
                if ui.button("Add Images…").clicked() {
                    if let Some(paths) = pick_images() {
                        self.import_paths(paths);
                    }
                }
            });
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} page(s)", self.album.len()));
            if let Some(path) = &self.last_export {
                ui.separator();
                ui.label(format!("Saved → {}", path.display()));
            }
            if let Some(message) = self.logger.latest_message() {
                ui.separator();
                ui.label(message);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.toggle_value(&mut self.show_activity, "Activity");
            });
        });
    }

    fn diagnostics_window(&mut self, ctx: &egui::Context) {
        if self.diagnostics.is_empty() {
            return;
        }
        let mut open = true;
        egui::Window::new("Problems")
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Some files could not be processed:");
                ui.add_space(4.0);
                for line in &self.diagnostics {
                    ui.label(line);
                }
                ui.add_space(8.0);
                if ui.button("Dismiss").clicked() {
                    open = false;
                }
            });
        if !open {
            self.diagnostics.clear();
        }
    }
}

impl eframe::App for SheafApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // OS file drops go through the same import path as the dialog.
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        self.import_paths(dropped);

        if !ctx.wants_keyboard_input() {
            let (left, right) = ctx.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowLeft),
                    i.key_pressed(egui::Key::ArrowRight),
                )
            });
            if left {
                self.nav.step_back(&self.album, &mut self.surface);
            }
            if right {
                self.nav.step_forward(&self.album, &mut self.surface);
            }
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status_bar(ui);
        });

        if self.show_activity {
            egui::TopBottomPanel::bottom("activity")
                .resizable(true)
                .default_height(120.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in self.logger.entries() {
                                ui.monospace(entry.format());
                            }
                        });
                });
        }

        egui::SidePanel::left("pages")
            .default_width(180.0)
            .show(ctx, |ui| {
                match list::show_page_list(ui, &self.album, &mut self.surface) {
                    Some(ListEvent::Activate(row)) => {
                        self.nav.jump_to(&self.album, &mut self.surface, row + 1);
                    }
                    Some(ListEvent::Moved(mv)) => {
                        if let Err(err) =
                            self.nav
                                .reconcile_rows_moved(&mut self.album, &mut self.surface, mv)
                        {
                            // Indices came from the drawn rows, so this is a bug.
                            log::error!("reorder out of range: {err}");
                        }
                    }
                    None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.preview_panel(ui);
        });

        self.diagnostics_window(ctx);
    }
}

fn pick_images() -> Option<Vec<PathBuf>> {
    rfd::FileDialog::new()
        .add_filter(
            "Images",
            &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
        )
        .pick_files()
}
