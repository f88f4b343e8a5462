use super::{App, Config};
use crate::{Grid, SimulationState};
use eframe::egui::{
    pos2, vec2, Align2, Button, DragValue, FontId, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui, board: &Grid) {
        let aw = ui.available_width();

        ui.group(|ui| {
            ui.vertical(|ui| {
                let text = match self.sim.state() {
                    SimulationState::Running => "Stop",
                    SimulationState::Idle | SimulationState::GameOver => "Start",
                };
                if ui.add(Self::new_button(text)).clicked() {
                    self.sim.toggle_running();
                }

                ui.add_space(Config::WIDGET_GAP);

                ui.horizontal(|ui| {
                    ui.label(Self::new_text("Fill rate: "));
                    ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
                });

                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.use_seed, Self::new_text("Seed: "));
                    ui.add_enabled(self.use_seed, |ui: &mut Ui| {
                        ui.add(DragValue::new(&mut self.seed))
                    });
                });

                if ui.add(Self::new_button("Reseed")).clicked() {
                    let seed = self.use_seed.then_some(self.seed);
                    self.sim.reseed(seed, self.fill_rate);
                }

                ui.add_space(Config::WIDGET_GAP);

                let state = match self.sim.state() {
                    SimulationState::Idle => "idle",
                    SimulationState::Running => "running",
                    SimulationState::GameOver => "game over",
                };
                ui.label(Self::new_text(&format!("State: {state}")));
                ui.label(Self::new_text(&format!(
                    "Ticks survived: {}",
                    self.sim.ticks_survived()
                )));
                ui.label(Self::new_text(&format!(
                    "Population: {}",
                    board.population()
                )));
            });

            // to adjust the bounds
            ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
        });
    }

    fn draw_board(&mut self, ui: &mut Ui, board: &Grid, max_size: Vec2) {
        let (rows, cols) = (board.rows(), board.cols());
        let cell_px = (max_size.x / cols as f32).min(max_size.y / rows as f32);
        let size = vec2(cell_px * cols as f32, cell_px * rows as f32);

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0., Config::GRID_LINE_COLOR);
        for row in 0..rows {
            for col in 0..cols {
                let min = pos2(
                    rect.min.x + cell_px * col as f32,
                    rect.min.y + cell_px * row as f32,
                );
                let cell = Rect::from_min_size(min, Vec2::splat(cell_px)).shrink(0.5);
                let color = if board.cell(row, col) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(cell, 0., color);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let col = ((pos.x - rect.min.x) / cell_px) as usize;
                let row = ((pos.y - rect.min.y) / cell_px) as usize;
                // a click on the bottom or right edge rounds to one past the last cell
                if let Err(err) = self.sim.toggle(row, col) {
                    log::warn!("{err}");
                }
            }
        }

        if self.sim.state() == SimulationState::GameOver {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "GAME OVER",
                FontId::proportional(Config::GAME_OVER_TEXT_SIZE),
                Config::GAME_OVER_COLOR,
            );
            painter.text(
                rect.center() + vec2(0., Config::GAME_OVER_TEXT_SIZE),
                Align2::CENTER_CENTER,
                format!("Ticks survived: {}", self.sim.ticks_survived()),
                FontId::proportional(Config::TICKS_TEXT_SIZE),
                Config::GAME_OVER_COLOR,
            );
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let board = self.sim.snapshot();
        let area = ui.available_size();

        let board_size = vec2(
            area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN,
            area.y,
        );
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                self.draw_controls(ui, &board);
            });

            ui.add_space((ui.available_width() - board_size.x).max(0.));

            ui.vertical_centered(|ui| {
                self.draw_board(ui, &board, board_size);
            });
        });
    }
}
