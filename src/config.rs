use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::entities::Position;

/// Tuning values for the game and its clocks.
///
/// Board dimensions are fixed for players; they are skipped by serde and can
/// only be changed in code through [`GameConfig::with_board`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    #[serde(skip)]
    pub cols: i32,
    #[serde(skip)]
    pub rows: i32,
    /// Screen units per cell; effects are positioned in screen units.
    pub cell_size: f32,

    // Clocks
    pub base_interval_ms: u64,
    /// Floor for the boosted interval.
    pub min_interval_ms: u64,
    pub animation_interval_ms: u64,
    /// How often the game clock re-checks once the game is over.
    pub game_over_interval_ms: u64,
    /// Used to turn tick counters into seconds for the status line.
    pub ticks_per_second: u32,

    // Scoring
    pub food_points: u32,
    pub bonus_points: u32,

    // Power-ups
    pub power_up_chance: f64,
    pub power_up_lifetime: u32,
    pub power_up_effect_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 30,
            cell_size: 20.0,
            base_interval_ms: 150,
            min_interval_ms: 50,
            animation_interval_ms: 50,
            game_over_interval_ms: 1000,
            ticks_per_second: 10,
            food_points: 10,
            bonus_points: 50,
            power_up_chance: 0.3,
            power_up_lifetime: 100,
            power_up_effect_ticks: 50,
        }
    }
}

impl GameConfig {
    /// Same tuning on a different board.
    pub fn with_board(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// Read a JSON config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the clocks or the RNG cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            bail!("power_up_chance must be within 0..=1, got {}", self.power_up_chance);
        }
        if self.base_interval_ms == 0 || self.animation_interval_ms == 0 {
            bail!("tick intervals must be non-zero");
        }
        if self.game_over_interval_ms == 0 || self.ticks_per_second == 0 {
            bail!("game_over_interval_ms and ticks_per_second must be non-zero");
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        Ok(())
    }

    /// Centre of the board, where every game starts.
    pub fn start_cell(&self) -> Position {
        Position::new(self.cols / 2, self.rows / 2)
    }

    pub fn base_interval(&self) -> Duration {
        Duration::from_millis(self.base_interval_ms)
    }

    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }

    pub fn game_over_interval(&self) -> Duration {
        Duration::from_millis(self.game_over_interval_ms)
    }
}
