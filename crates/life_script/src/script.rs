use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use life_core::{Action, GameConfig, Location, ParseError, Session};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scripted playthrough loaded from toml.
///
/// ```toml
/// seed = 7
/// steps = ["go downtown", "go work", "work"]
///
/// [expect]
/// money = 150
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub day_limit: Option<u32>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub expect: Option<Expectations>,
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("invalid script {}", path.display()))
    }

    pub fn parse(data: &str) -> Result<Self> {
        let script: Script = toml::from_str(data)?;
        Ok(script)
    }

    pub fn game_config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            seed: self.seed.unwrap_or(defaults.seed),
            day_limit: self.day_limit.unwrap_or(defaults.day_limit),
        }
    }

    pub fn parsed_steps(&self) -> Result<Vec<Step>, StepError> {
        self.steps.iter().map(|raw| raw.parse()).collect()
    }
}

/// Final-state assertions checked after the last step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub money: Option<i32>,
    #[serde(default)]
    pub energy: Option<i32>,
    #[serde(default)]
    pub restarts: Option<u32>,
}

impl Expectations {
    /// Yields `(name, expected, actual)` for every expectation that is set.
    pub fn compare(&self, session: &Session) -> Vec<(&'static str, i64, i64)> {
        let player = session.player();
        [
            ("day", self.day.map(i64::from), i64::from(player.day)),
            ("money", self.money.map(i64::from), i64::from(player.money)),
            ("energy", self.energy.map(i64::from), i64::from(player.energy)),
            (
                "restarts",
                self.restarts.map(i64::from),
                i64::from(session.restarts()),
            ),
        ]
        .into_iter()
        .filter_map(|(name, expected, actual)| expected.map(|expected| (name, expected, actual)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Perform(Action),
    Travel(Location),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("empty step")]
    Empty,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(StepError::Empty);
        }
        let (head, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        match head.to_ascii_lowercase().as_str() {
            "go" | "travel" => Ok(Step::Travel(rest.parse()?)),
            _ => Ok(Step::Perform(trimmed.parse()?)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Perform(action) => write!(f, "{action}"),
            Step::Travel(to) => write!(f, "go {}", to.key()),
        }
    }
}
