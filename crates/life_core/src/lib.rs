//! Rules for a small day-by-day life simulation.
//!
//! A [`Session`] owns the [`PlayerState`] and the player's current
//! [`Location`]; presentation layers drive it with [`Action`]s and travel
//! requests and render [`PlayerState::describe`] plus the returned messages.

pub mod actions;
pub mod config;
pub mod location;
pub mod player;
pub mod rng;
pub mod session;

#[cfg(feature = "frontend")]
pub mod frontend;

use thiserror::Error;

pub use actions::{Action, ActionError, ActionReport, Requirement};
pub use config::GameConfig;
pub use location::{Location, LocationInfo};
pub use player::{Attribute, AttributeDelta, PlayerState, Progress};
pub use rng::SimulationRng;
pub use session::{Outcome, Session, SessionError};

#[cfg(feature = "frontend")]
pub use frontend::{HudPlugin, LifeSimPlugin};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown action `{0}`")]
    UnknownAction(String),
    #[error("unknown location `{0}`")]
    UnknownLocation(String),
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
}
