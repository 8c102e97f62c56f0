// config.rs - Compile-time layout constants and runtime options

use std::time::Duration;

pub const GRID_W: usize = 100;
pub const GRID_H: usize = 80;
pub const CELL_SIZE: f32 = 15.0;
pub const PANEL_WIDTH: f32 = 220.0;
pub const WINDOW_W: f32 = GRID_W as f32 * CELL_SIZE + PANEL_WIDTH;
pub const WINDOW_H: f32 = GRID_H as f32 * CELL_SIZE + 40.0;

/// Frame cap; repaints are requested no more often than this.
pub const FPS_LIMIT: u32 = 60;

/// Simulation speed bounds, in generations per second.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 60;
pub const DEFAULT_SPEED: u32 = 10;

/// Setting this to `0` or `false` turns off the row-concurrent tick.
pub const CONCURRENT_ROWS_ENV: &str = "CONWAY_CONCURRENT_ROWS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: f32,
    pub default_speed: u32,
    /// Advance generations with one tokio task per row.
    pub concurrent_rows: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_W,
            grid_height: GRID_H,
            cell_size: CELL_SIZE,
            default_speed: DEFAULT_SPEED,
            concurrent_rows: true,
        }
    }
}

impl AppConfig {
    /// Defaults, with overrides from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(CONCURRENT_ROWS_ENV) {
            config.concurrent_rows = parse_flag(&value).unwrap_or(config.concurrent_rows);
        }
        config
    }
}

pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / FPS_LIMIT as f64)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
