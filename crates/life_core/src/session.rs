//! One run of the game, from the initial state to the end-of-game restart.

use thiserror::Error;
use tracing::{info, warn};

use crate::actions::{self, Action, ActionError};
use crate::config::GameConfig;
use crate::location::Location;
use crate::player::{PlayerState, Progress};
use crate::rng::SimulationRng;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Refused(#[from] ActionError),
    #[error("You can't {action} at {location}.")]
    Unavailable { action: Action, location: Location },
    #[error("There is no way from {from} to {to}.")]
    NoRoute { from: Location, to: Location },
}

/// What the presentation layer should show after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub action: Action,
    pub message: Option<String>,
    /// The day limit was crossed and the session has been restarted.
    pub ended: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    player: PlayerState,
    location: Location,
    rng: SimulationRng,
    restarts: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            player: PlayerState::new(config.day_limit),
            location: Location::Home,
            rng: SimulationRng::new(config.seed),
            restarts: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn describe(&self) -> String {
        self.player.describe()
    }

    pub fn perform(&mut self, action: Action) -> Result<Outcome, SessionError> {
        if !self.location.offers(action) {
            return Err(SessionError::Unavailable {
                action,
                location: self.location,
            });
        }

        let report = actions::perform(action, &mut self.player, &mut self.rng).map_err(|err| {
            warn!(target: "life_core.session", %action, reason = %err, "action refused");
            err
        })?;

        let ended = report.progress == Progress::Ended;
        if ended {
            self.end_game();
        }
        Ok(Outcome {
            action,
            message: report.message,
            ended,
        })
    }

    pub fn travel(&mut self, to: Location) -> Result<(), SessionError> {
        if !self.location.leads_to(to) {
            return Err(SessionError::NoRoute {
                from: self.location,
                to,
            });
        }
        info!(target: "life_core.session", from = %self.location, to = %to, "travel");
        self.location = to;
        Ok(())
    }

    /// Restarts from the initial state. The RNG stream carries on.
    pub fn end_game(&mut self) {
        info!(
            target: "life_core.session",
            day = self.player.day,
            money = self.player.money,
            restarts = self.restarts + 1,
            "game over, restarting"
        );
        self.restarts += 1;
        self.player = PlayerState::new(self.config.day_limit);
        self.location = Location::Home;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
