// control.rs - Host-side state machine and command dispatch
//
// Widgets never touch the engine directly: each one yields a `Command`, and
// `Controller::apply` is the only place that mutates state.

use std::time::Duration;

use conway::{Engine, EngineError, PATTERNS, RULE_PRESETS, Rule};
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, MAX_SPEED, MIN_SPEED};

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Presets,
    Instructions,
    Playing,
}

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Menu: start with an empty grid and the standard rule.
    StartClean,
    OpenPresets,
    OpenInstructions,
    /// Presets: start with `PATTERNS[index]` loaded.
    LoadPreset(usize),
    BackToMenu,
    ToggleRun,
    Reset,
    SpeedUp,
    SpeedDown,
    SetSpeed(u32),
    /// Switch to `RULE_PRESETS[index]`.
    SelectRule(usize),
    /// Flip a cell; only honoured while paused.
    ToggleCell { x: usize, y: usize },
    Quit,
}

/// Playback state shown and edited by the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub running: bool,
    /// Generations per second, within `MIN_SPEED..=MAX_SPEED`.
    pub speed: u32,
    /// Index into `RULE_PRESETS` of the active rule, if it is a preset.
    pub selected_rule: Option<usize>,
}

impl UiState {
    fn new(speed: u32, rule: Rule) -> Self {
        Self {
            running: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            selected_rule: preset_index(rule),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed as f64)
    }
}

fn preset_index(rule: Rule) -> Option<usize> {
    RULE_PRESETS
        .iter()
        .position(|preset| preset.parse::<Rule>().is_ok_and(|p| p == rule))
}

pub struct Controller {
    engine: Engine,
    ui: UiState,
    screen: Screen,
    default_speed: u32,
    accumulator: Duration,
    runtime: Option<Runtime>,
    quit_requested: bool,
}

impl Controller {
    pub fn new(config: &AppConfig, runtime: Option<Runtime>) -> Result<Self, EngineError> {
        let engine = Engine::new(config.grid_width, config.grid_height)?;
        let ui = UiState::new(config.default_speed, engine.rule());
        Ok(Self {
            engine,
            ui,
            screen: Screen::Menu,
            default_speed: config.default_speed,
            accumulator: Duration::ZERO,
            runtime,
            quit_requested: false,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn goto(&mut self, screen: Screen) {
        if self.screen != screen {
            info!(from = ?self.screen, to = ?screen, "screen change");
            self.screen = screen;
        }
    }

    /// Fresh game: standard rule, empty grid, paused, default speed.
    fn new_game(&mut self) {
        self.engine.set_rules(Rule::conway());
        self.ui = UiState::new(self.default_speed, self.engine.rule());
        self.accumulator = Duration::ZERO;
    }

    pub fn apply(&mut self, command: Command) {
        debug!(?command, "apply");
        match command {
            Command::StartClean => {
                self.new_game();
                self.goto(Screen::Playing);
            }
            Command::OpenPresets => self.goto(Screen::Presets),
            Command::OpenInstructions => self.goto(Screen::Instructions),
            Command::LoadPreset(index) => {
                let Some(pattern) = PATTERNS.get(index) else {
                    warn!(index, "no such preset");
                    return;
                };
                self.new_game();
                self.engine.apply_pattern(pattern);
                self.goto(Screen::Playing);
            }
            Command::BackToMenu => {
                self.ui.running = false;
                self.goto(Screen::Menu);
            }
            Command::ToggleRun => {
                self.ui.running = !self.ui.running;
                self.accumulator = Duration::ZERO;
            }
            Command::Reset => self.engine.reset(),
            Command::SpeedUp => self.ui.speed = (self.ui.speed + 1).min(MAX_SPEED),
            Command::SpeedDown => self.ui.speed = self.ui.speed.saturating_sub(1).max(MIN_SPEED),
            Command::SetSpeed(speed) => self.ui.speed = speed.clamp(MIN_SPEED, MAX_SPEED),
            Command::SelectRule(index) => {
                let Some(rule) = RULE_PRESETS.get(index).and_then(|p| p.parse::<Rule>().ok()) else {
                    warn!(index, "no such rule preset");
                    return;
                };
                self.engine.set_rules(rule);
                self.ui.selected_rule = Some(index);
            }
            Command::ToggleCell { x, y } => {
                if !self.ui.running {
                    self.engine.toggle_cell(x, y);
                }
            }
            Command::Quit => self.quit_requested = true,
        }
    }

    /// Feeds elapsed wall time; runs at most one generation per call once
    /// `1 / speed` seconds have accumulated. Returns whether it ticked.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.ui.running || self.screen != Screen::Playing {
            return false;
        }
        self.accumulator += elapsed;
        if self.accumulator < self.ui.tick_interval() {
            return false;
        }
        self.accumulator = Duration::ZERO;
        self.step();
        true
    }

    fn step(&mut self) {
        match &self.runtime {
            Some(runtime) => {
                if let Err(err) = self.engine.tick_concurrent(runtime) {
                    warn!(%err, "concurrent tick failed, falling back to serial");
                    self.engine.tick();
                }
            }
            None => self.engine.tick(),
        }
    }
}
