use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const BOARD_ROWS: usize = 54;
    pub const BOARD_COLS: usize = 96;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 300.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;

    pub const ALIVE_COLOR: Color32 = Color32::GREEN;
    pub const DEAD_COLOR: Color32 = Color32::BLACK;
    pub const GRID_LINE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const GAME_OVER_COLOR: Color32 = Color32::RED;
    pub const GAME_OVER_TEXT_SIZE: f32 = 50.;
    pub const TICKS_TEXT_SIZE: f32 = 30.;
}
