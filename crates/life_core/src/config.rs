use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::player::DEFAULT_DAY_LIMIT;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_day_limit")]
    pub day_limit: u32,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_day_limit() -> u32 {
    DEFAULT_DAY_LIMIT
}

impl GameConfig {
    pub fn from_env() -> Self {
        let seed = std::env::var("SIMULATION_SEED")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        let day_limit = std::env::var("LIFE_DAY_LIMIT")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(DEFAULT_DAY_LIMIT);
        Self { seed, day_limit }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let cfg: GameConfig = toml::from_str(&data)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            day_limit: DEFAULT_DAY_LIMIT,
        }
    }
}
