//! Player actions: a precondition on energy/money, then an attribute delta.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::player::{Attribute, AttributeDelta, PlayerState, Progress, FULL_ENERGY};
use crate::rng::SimulationRng;
use crate::ParseError;

pub const GAMBLE_STAKE: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Work,
    Study,
    Converse,
    Drink,
    Fight,
    Gamble,
    Sleep,
}

/// Minimum energy and money an action needs before it runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirement {
    pub energy: i32,
    pub money: i32,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Work,
        Action::Study,
        Action::Converse,
        Action::Drink,
        Action::Fight,
        Action::Gamble,
        Action::Sleep,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Work => "work",
            Action::Study => "study",
            Action::Converse => "converse",
            Action::Drink => "drink",
            Action::Fight => "fight",
            Action::Gamble => "gamble",
            Action::Sleep => "sleep",
        }
    }

    /// Button caption shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Work => "Work",
            Action::Study => "Study",
            Action::Converse => "Converse",
            Action::Drink => "Drink",
            Action::Fight => "Fight for money",
            Action::Gamble => "Set 50 on bum fight",
            Action::Sleep => "Sleep",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Action::Work => Requirement {
                energy: 20,
                money: 0,
            },
            Action::Study | Action::Converse => Requirement {
                energy: 25,
                money: 0,
            },
            Action::Drink => Requirement {
                energy: 25,
                money: 10,
            },
            Action::Fight => Requirement {
                energy: 50,
                money: 0,
            },
            Action::Gamble => Requirement {
                energy: 0,
                money: GAMBLE_STAKE,
            },
            Action::Sleep => Requirement::default(),
        }
    }

    /// Fixed effect of a successful action. Gamble and sleep have none; their
    /// outcome is decided when they run.
    pub fn effect(&self) -> AttributeDelta {
        let delta = AttributeDelta::new();
        match self {
            Action::Work => delta
                .with(Attribute::Money, 50)
                .with(Attribute::Energy, -20),
            Action::Study => delta
                .with(Attribute::Intellect, 5)
                .with(Attribute::Coding, 5)
                .with(Attribute::Energy, -25),
            Action::Converse => delta
                .with(Attribute::Intellect, 5)
                .with(Attribute::Energy, -25),
            Action::Drink => delta
                .with(Attribute::Charm, 5)
                .with(Attribute::Money, -10)
                .with(Attribute::Energy, -25),
            Action::Fight => delta
                .with(Attribute::Endurance, 5)
                .with(Attribute::Energy, -50),
            Action::Gamble | Action::Sleep => delta,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Action::ALL
            .into_iter()
            .find(|action| action.name() == needle)
            .ok_or_else(|| ParseError::UnknownAction(s.to_string()))
    }
}

/// A refused action. The display text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough energy to {}!", .0.name())]
    NotEnoughEnergy(Action),
    #[error("Not enough money to {}!", .0.name())]
    NotEnoughMoney(Action),
    #[error("No need to sleep. You're already 100%")]
    AlreadyRested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: Action,
    pub message: Option<String>,
    pub progress: Progress,
}

/// Checks the action's precondition against the current state and applies
/// it. A refused action leaves `player` untouched.
pub fn perform(
    action: Action,
    player: &mut PlayerState,
    rng: &mut SimulationRng,
) -> Result<ActionReport, ActionError> {
    if action == Action::Sleep {
        return sleep(player);
    }

    let requirement = action.requirement();
    if !player.has_sufficient_energy(requirement.energy) {
        return Err(ActionError::NotEnoughEnergy(action));
    }
    if !player.has_enough_money(requirement.money) {
        return Err(ActionError::NotEnoughMoney(action));
    }

    let (delta, message) = if action == Action::Gamble {
        gamble_outcome(rng)
    } else {
        (action.effect(), None)
    };
    let progress = player.apply_delta(&delta);
    info!(target: "life_core.actions", %action, day = player.day, "action performed");

    Ok(ActionReport {
        action,
        message,
        progress,
    })
}

fn sleep(player: &mut PlayerState) -> Result<ActionReport, ActionError> {
    if player.energy == FULL_ENERGY {
        return Err(ActionError::AlreadyRested);
    }
    player.sleep_and_advance_day();
    Ok(ActionReport {
        action: Action::Sleep,
        message: None,
        progress: Progress::Ongoing,
    })
}

fn gamble_outcome(rng: &mut SimulationRng) -> (AttributeDelta, Option<String>) {
    if rng.coin_flip() {
        (
            AttributeDelta::new().with(Attribute::Money, GAMBLE_STAKE),
            Some(format!("Your bum won - you won {GAMBLE_STAKE}")),
        )
    } else {
        (
            AttributeDelta::new().with(Attribute::Money, -GAMBLE_STAKE),
            Some(format!("Your bum lost - you lost {GAMBLE_STAKE}")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with(energy: i32, money: i32) -> PlayerState {
        let mut player = PlayerState::default();
        player.energy = energy;
        player.money = money;
        player
    }

    #[test]
    fn work_at_exact_threshold_succeeds() {
        let mut player = player_with(20, 100);
        let mut rng = SimulationRng::new(1);
        let report = perform(Action::Work, &mut player, &mut rng).unwrap();
        assert_eq!(report.progress, Progress::Ongoing);
        assert_eq!(player.energy, 0);
        assert_eq!(player.money, 150);
    }

    #[test]
    fn work_below_threshold_is_refused() {
        let mut player = player_with(19, 100);
        let before = player.clone();
        let err = perform(Action::Work, &mut player, &mut SimulationRng::new(1)).unwrap_err();
        assert_eq!(err.to_string(), "Not enough energy to work!");
        assert_eq!(player, before);
    }

    #[test]
    fn study_and_converse_raise_skills() {
        let mut player = PlayerState::default();
        let mut rng = SimulationRng::new(1);
        perform(Action::Study, &mut player, &mut rng).unwrap();
        assert_eq!((player.intellect, player.coding, player.energy), (15, 15, 75));
        perform(Action::Converse, &mut player, &mut rng).unwrap();
        assert_eq!((player.intellect, player.coding, player.energy), (20, 15, 50));
    }

    #[test]
    fn drink_checks_energy_before_money() {
        let mut player = player_with(10, 10);
        let err = perform(Action::Drink, &mut player, &mut SimulationRng::new(1)).unwrap_err();
        assert_eq!(err, ActionError::NotEnoughEnergy(Action::Drink));
        assert_eq!(err.to_string(), "Not enough energy to drink!");

        let mut broke = player_with(100, 9);
        let err = perform(Action::Drink, &mut broke, &mut SimulationRng::new(1)).unwrap_err();
        assert_eq!(err.to_string(), "Not enough money to drink!");
        assert_eq!(broke.money, 9);
    }

    #[test]
    fn drink_success_reports_no_failure() {
        let mut player = player_with(25, 10);
        let report = perform(Action::Drink, &mut player, &mut SimulationRng::new(1)).unwrap();
        assert_eq!(report.message, None);
        assert_eq!((player.charm, player.money, player.energy), (15, 0, 0));
    }

    #[test]
    fn fight_costs_half_a_day() {
        let mut player = PlayerState::default();
        let mut rng = SimulationRng::new(1);
        perform(Action::Fight, &mut player, &mut rng).unwrap();
        perform(Action::Fight, &mut player, &mut rng).unwrap();
        assert_eq!(player.endurance, 20);
        let err = perform(Action::Fight, &mut player, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Not enough energy to fight!");
    }

    #[test]
    fn gamble_moves_exactly_the_stake() {
        for seed in 0..64 {
            let mut player = player_with(100, 50);
            let report =
                perform(Action::Gamble, &mut player, &mut SimulationRng::new(seed)).unwrap();
            assert!(player.money == 0 || player.money == 100, "seed {seed}");
            let expected = if player.money == 100 {
                "Your bum won - you won 50"
            } else {
                "Your bum lost - you lost 50"
            };
            assert_eq!(report.message.as_deref(), Some(expected));
            assert_eq!(player.energy, 100);
        }
    }

    #[test]
    fn gamble_needs_the_stake() {
        let mut player = player_with(100, 49);
        let err = perform(Action::Gamble, &mut player, &mut SimulationRng::new(1)).unwrap_err();
        assert_eq!(err.to_string(), "Not enough money to gamble!");
    }

    #[test]
    fn sleep_refused_when_rested() {
        let mut player = PlayerState::default();
        let err = perform(Action::Sleep, &mut player, &mut SimulationRng::new(1)).unwrap_err();
        assert_eq!(err.to_string(), "No need to sleep. You're already 100%");
        assert_eq!(player.day, 1);

        player.energy = 99;
        perform(Action::Sleep, &mut player, &mut SimulationRng::new(1)).unwrap();
        assert_eq!((player.day, player.energy), (2, 100));
    }

    #[test]
    fn sleep_does_not_end_the_game() {
        let mut player = player_with(0, 100);
        player.day = 30;
        let report = perform(Action::Sleep, &mut player, &mut SimulationRng::new(1)).unwrap();
        assert_eq!(report.progress, Progress::Ongoing);
        assert_eq!(player.day, 31);

        let report = perform(Action::Work, &mut player, &mut SimulationRng::new(1)).unwrap();
        assert_eq!(report.progress, Progress::Ended);
    }

    #[test]
    fn action_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>().unwrap(), action);
        }
        assert!("dance".parse::<Action>().is_err());
    }
}
