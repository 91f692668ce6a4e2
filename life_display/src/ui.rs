// ui.rs - Panel layout, board painting, and click-to-edit

use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::LifeApp;
use life_grid::{Coord, patterns};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-advance while running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.advance_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_board();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.reseed_board();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click a cell to toggle it while paused. Start/Pause runs the simulation.");

            ui.separator();

            // The board: one rectangle per cell, placed by the cell's own
            // corner coordinates on a canvas sized to the board extent.
            let extent = self.grid.extent() as f32;
            let start_pos = ui.cursor().min;
            let (response, painter) =
                ui.allocate_painter(Vec2::splat(extent), Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, Vec2::splat(extent)),
                0.0,
                self.dead_color,
            );

            let mut clicked_cell: Option<Coord> = None;
            for cell in self.grid.cells() {
                let (x, y) = cell.coords();
                let (right, bottom) = cell.bottom_right();
                let rect = Rect::from_min_max(
                    egui::pos2(start_pos.x + x as f32, start_pos.y + y as f32),
                    egui::pos2(start_pos.x + right as f32, start_pos.y + bottom as f32),
                );

                let fill = if cell.is_alive() {
                    self.live_color
                } else {
                    self.dead_color
                };
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, Stroke::new(0.3, Color32::from_gray(60)));

                if !self.is_running && response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if rect.contains(pos) {
                            clicked_cell = Some(cell.coords());
                        }
                    }
                }
            }
            if let Some(coords) = clicked_cell {
                self.grid.toggle(coords);
            }

            ui.separator();

            // Population statistics
            let live_cells = self.grid.live_count();
            let total_cells = self.grid.cell_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live_cells}"));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total_cells as f32) * 100.0
                ));
            });
        });

        // Keep repainting while the simulation runs
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
