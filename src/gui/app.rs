use super::Config;
use crate::{Grid, Simulation, DEFAULT_FILL_RATE};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, ViewportCommand};

pub struct App {
    pub(super) sim: Simulation, // Owns the board and the ticking worker thread.
    pub(super) fill_rate: f64,  // Alive probability used by the next reseed.
    pub(super) use_seed: bool,  // Whether the next reseed is deterministic.
    pub(super) seed: u64,       // Seed applied when `use_seed` is set.
}

impl App {
    pub fn new() -> Self {
        let board = Grid::random(
            Config::BOARD_ROWS,
            Config::BOARD_COLS,
            None,
            DEFAULT_FILL_RATE,
        );
        Self {
            sim: Simulation::new(board),
            fill_rate: DEFAULT_FILL_RATE,
            use_seed: false,
            seed: 0,
        }
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_run, toggle_fullscreen, fullscreen) = ctx.input(|input| {
            (
                input.key_pressed(Key::Enter),
                input.key_pressed(Key::F11),
                input.viewport().fullscreen.unwrap_or(false),
            )
        });

        if toggle_run {
            self.sim.toggle_running();
        }
        if toggle_fullscreen {
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(!fullscreen));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                // the worker advances the board between frames
                ctx.request_repaint();

                self.handle_input(ctx);

                self.draw(ui);
            });
    }
}
