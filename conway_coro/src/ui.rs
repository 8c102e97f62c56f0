// ui.rs - egui front end: draws each screen and turns clicks into commands

use std::time::Instant;

use conway::{PATTERNS, RULE_PRESETS};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::config::{MAX_SPEED, MIN_SPEED, PANEL_WIDTH, frame_interval};
use crate::control::{Command, Controller, Screen};

const INSTRUCTIONS: &[&str] = &[
    "Conway's Game of Life - Rules and Controls:",
    "",
    "23/3 Rules:",
    "1. Any live cell with two or three live neighbours survives.",
    "2. Any dead cell with three live neighbours becomes a live cell.",
    "3. All other live cells die in the next generation.",
    "4. All other dead cells stay dead.",
    "",
    "Controls:",
    "- Click on the grid to toggle cells (while paused).",
    "- Start/Pause: run or pause the simulation.",
    "- Reset: clear the grid.",
    "- + Speed / - Speed: adjust simulation speed.",
    "- Rule Presets: choose different survival/birth rules from the side panel.",
    "- Back to Menu: return to the main menu.",
    "",
    "Press any key or click to return.",
];

const BUTTON_SIZE: [f32; 2] = [180.0, 30.0];
const MENU_BUTTON_SIZE: [f32; 2] = [200.0, 50.0];
const SELECTED_COLOR: Color32 = Color32::from_rgb(0, 160, 0);
const BACK_COLOR: Color32 = Color32::from_rgb(200, 0, 0);

pub struct ConwayApp {
    controller: Controller,
    cell_size: f32,
    last_frame: Instant,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl ConwayApp {
    pub fn new(controller: Controller, cell_size: f32) -> Self {
        Self {
            controller,
            cell_size,
            last_frame: Instant::now(),
            live_color: Color32::from_gray(200),
            dead_color: Color32::from_gray(60),
        }
    }

    fn menu(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Game of Life - Main Menu");
                ui.add_space(20.0);
                let entries = [
                    ("Start", Command::StartClean),
                    ("Presets", Command::OpenPresets),
                    ("Instructions", Command::OpenInstructions),
                    ("Quit", Command::Quit),
                ];
                for (label, command) in entries {
                    if ui.add_sized(MENU_BUTTON_SIZE, egui::Button::new(label)).clicked() {
                        commands.push(command);
                    }
                    ui.add_space(10.0);
                }
            });
        });
    }

    fn presets(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Select a Preset");
                ui.add_space(20.0);
                for (i, pattern) in PATTERNS.iter().enumerate() {
                    if ui.add_sized(MENU_BUTTON_SIZE, egui::Button::new(pattern.name)).clicked() {
                        commands.push(Command::LoadPreset(i));
                    }
                    ui.add_space(10.0);
                }
                if ui.add_sized(MENU_BUTTON_SIZE, egui::Button::new("Back")).clicked() {
                    commands.push(Command::BackToMenu);
                }
            });
        });
    }

    fn instructions(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            for line in INSTRUCTIONS {
                ui.label(*line);
            }
        });

        let dismissed = ctx.input(|i| {
            i.pointer.any_click()
                || i.events
                    .iter()
                    .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if dismissed {
            commands.push(Command::BackToMenu);
        }
    }

    fn side_panel(&mut self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        let state = *self.controller.ui();
        let engine = self.controller.engine();

        egui::SidePanel::right("controls")
            .exact_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                let run_label = if state.running { "⏸ PAUSE" } else { "▶ START" };
                if ui.add_sized(BUTTON_SIZE, egui::Button::new(run_label)).clicked() {
                    commands.push(Command::ToggleRun);
                }
                if ui.add_sized(BUTTON_SIZE, egui::Button::new("⏹ RESET")).clicked() {
                    commands.push(Command::Reset);
                }

                ui.horizontal(|ui| {
                    if ui.add_sized([85.0, 30.0], egui::Button::new("+ Speed")).clicked() {
                        commands.push(Command::SpeedUp);
                    }
                    if ui.add_sized([85.0, 30.0], egui::Button::new("- Speed")).clicked() {
                        commands.push(Command::SpeedDown);
                    }
                });
                let mut speed = state.speed;
                if ui
                    .add(egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).suffix(" gen/sec"))
                    .changed()
                {
                    commands.push(Command::SetSpeed(speed));
                }

                ui.separator();
                ui.label("Rules (S/B):");
                for (i, preset) in RULE_PRESETS.iter().enumerate() {
                    let mut button = egui::Button::new(*preset);
                    if state.selected_rule == Some(i) {
                        button = button.fill(SELECTED_COLOR);
                    }
                    if ui.add_sized(BUTTON_SIZE, button).clicked() {
                        commands.push(Command::SelectRule(i));
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label("Live:");
                    ui.color_edit_button_srgba(&mut self.live_color);
                    ui.label("Dead:");
                    ui.color_edit_button_srgba(&mut self.dead_color);
                });

                ui.separator();
                ui.label(format!("Gen: {}   Spd: {}", engine.generation(), state.speed));
                ui.label(format!("Rule: {}", engine.rule()));
                ui.label(format!("Live cells: {}", engine.live_count()));

                ui.add_space(20.0);
                let back = egui::Button::new("Back to menu").fill(BACK_COLOR);
                if ui.add_sized(MENU_BUTTON_SIZE, back).clicked() {
                    commands.push(Command::BackToMenu);
                }
            });
    }

    fn board(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        let engine = self.controller.engine();
        let running = self.controller.ui().running;
        let (width, height) = (engine.width(), engine.height());
        let cell = self.cell_size;

        egui::CentralPanel::default().show(ctx, |ui| {
            let total_size = Vec2::new(width as f32 * cell, height as f32 * cell);
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, Color32::BLACK);

            for y in 0..height {
                for x in 0..width {
                    let rect = Rect::from_min_size(
                        egui::pos2(origin.x + x as f32 * cell, origin.y + y as f32 * cell),
                        Vec2::splat(cell - 1.0),
                    );
                    if engine.is_alive(x, y) {
                        painter.rect_filled(rect, 0.0, self.live_color);
                    } else {
                        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, self.dead_color));
                    }
                }
            }

            if !running && response.clicked() {
                let hit = response
                    .interact_pointer_pos()
                    .and_then(|pos| cell_at(origin, cell, pos, width, height));
                if let Some((x, y)) = hit {
                    commands.push(Command::ToggleCell { x, y });
                }
            }
        });
    }
}

/// Maps a pointer position to the `(column, row)` under it, or `None` off-grid.
pub fn cell_at(origin: Pos2, cell_size: f32, pos: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    let gx = ((pos.x - origin.x) / cell_size).floor();
    let gy = ((pos.y - origin.y) / cell_size).floor();
    if gx < 0.0 || gy < 0.0 {
        return None;
    }
    let (x, y) = (gx as usize, gy as usize);
    (x < width && y < height).then_some((x, y))
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        let mut commands = Vec::new();
        match self.controller.screen() {
            Screen::Menu => self.menu(ctx, &mut commands),
            Screen::Presets => self.presets(ctx, &mut commands),
            Screen::Instructions => self.instructions(ctx, &mut commands),
            Screen::Playing => {
                if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
                    commands.push(Command::ToggleRun);
                }
                self.side_panel(ctx, &mut commands);
                self.board(ctx, &mut commands);
            }
        }

        for command in commands {
            self.controller.apply(command);
        }
        if self.controller.quit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if self.controller.advance(elapsed) {
            ctx.request_repaint();
        }
        // Keep the clock moving while the simulation runs.
        if self.controller.ui().running {
            ctx.request_repaint_after(frame_interval());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_cell() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(cell_at(origin, 15.0, egui::pos2(10.0, 20.0), 4, 3), Some((0, 0)));
        assert_eq!(cell_at(origin, 15.0, egui::pos2(41.0, 36.0), 4, 3), Some((2, 1)));
        assert_eq!(cell_at(origin, 15.0, egui::pos2(69.9, 64.9), 4, 3), Some((3, 2)));
    }

    #[test]
    fn pointer_off_grid_is_none() {
        let origin = egui::pos2(0.0, 0.0);
        assert_eq!(cell_at(origin, 15.0, egui::pos2(-0.5, 3.0), 4, 3), None);
        assert_eq!(cell_at(origin, 15.0, egui::pos2(3.0, -7.0), 4, 3), None);
        assert_eq!(cell_at(origin, 15.0, egui::pos2(60.0, 3.0), 4, 3), None);
        assert_eq!(cell_at(origin, 15.0, egui::pos2(3.0, 45.0), 4, 3), None);
    }
}
