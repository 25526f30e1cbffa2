//! The player record and the arithmetic every action goes through.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ParseError;

pub const STARTING_DAY: u32 = 1;
pub const STARTING_MONEY: i32 = 100;
pub const STARTING_SKILL: i32 = 10;
pub const FULL_ENERGY: i32 = 100;
pub const MAX_EFFECTIVE_PENALTY: i32 = 75;
pub const DEFAULT_DAY_LIMIT: u32 = 30;

/// Attributes an action is allowed to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Money,
    Energy,
    Intellect,
    Charm,
    Coding,
    Endurance,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Money,
        Attribute::Energy,
        Attribute::Intellect,
        Attribute::Charm,
        Attribute::Coding,
        Attribute::Endurance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Money => "money",
            Attribute::Energy => "energy",
            Attribute::Intellect => "intellect",
            Attribute::Charm => "charm",
            Attribute::Coding => "coding",
            Attribute::Endurance => "endurance",
        }
    }

    /// Money and energy never drop below zero.
    pub fn has_zero_floor(&self) -> bool {
        matches!(self, Attribute::Money | Attribute::Energy)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.name() == needle)
            .ok_or_else(|| ParseError::UnknownAttribute(s.to_string()))
    }
}

/// A batch of signed changes applied together by [`PlayerState::apply_delta`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeDelta {
    changes: Vec<(Attribute, i32)>,
}

impl AttributeDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attr: Attribute, amount: i32) -> Self {
        self.changes.push((attr, amount));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        self.changes.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Whether the session may continue after an attribute update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Ongoing,
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub level: u32,
    pub day: u32,
    pub money: i32,
    pub intellect: i32,
    pub charm: i32,
    pub coding: i32,
    pub endurance: i32,
    pub energy: i32,
    pub energy_penalty: i32,
    pub has_job: bool,
    pub items: Vec<String>,
    #[serde(default = "default_day_limit")]
    day_limit: u32,
}

fn default_day_limit() -> u32 {
    DEFAULT_DAY_LIMIT
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_DAY_LIMIT)
    }
}

impl PlayerState {
    pub fn new(day_limit: u32) -> Self {
        Self {
            level: 1,
            day: STARTING_DAY,
            money: STARTING_MONEY,
            intellect: STARTING_SKILL,
            charm: STARTING_SKILL,
            coding: STARTING_SKILL,
            endurance: STARTING_SKILL,
            energy: FULL_ENERGY,
            energy_penalty: 0,
            has_job: false,
            items: Vec::new(),
            day_limit,
        }
    }

    pub fn day_limit(&self) -> u32 {
        self.day_limit
    }

    pub fn describe(&self) -> String {
        format!(
            "Day: {} | Energy: {} | Money: ${} | Charm: {}",
            self.day, self.energy, self.money, self.charm
        )
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Money => self.money,
            Attribute::Energy => self.energy,
            Attribute::Intellect => self.intellect,
            Attribute::Charm => self.charm,
            Attribute::Coding => self.coding,
            Attribute::Endurance => self.endurance,
        }
    }

    fn slot_mut(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Money => &mut self.money,
            Attribute::Energy => &mut self.energy,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Charm => &mut self.charm,
            Attribute::Coding => &mut self.coding,
            Attribute::Endurance => &mut self.endurance,
        }
    }

    /// Adds every change, floors money/energy at zero, then checks the day
    /// limit. Energy is not capped at 100 on this path.
    pub fn apply_delta(&mut self, changes: &AttributeDelta) -> Progress {
        for (attr, amount) in changes.iter() {
            let slot = self.slot_mut(attr);
            *slot = slot.saturating_add(amount);
            if attr.has_zero_floor() {
                *slot = (*slot).max(0);
            }
        }
        debug!(
            target: "life_core.player",
            day = self.day,
            money = self.money,
            energy = self.energy,
            "attributes updated"
        );

        if self.day > self.day_limit {
            info!(target: "life_core.player", day = self.day, limit = self.day_limit, "day limit exceeded");
            Progress::Ended
        } else {
            Progress::Ongoing
        }
    }

    pub fn sleep_and_advance_day(&mut self) {
        let effective_penalty = self.energy_penalty.min(MAX_EFFECTIVE_PENALTY);
        self.energy = FULL_ENERGY - effective_penalty;
        self.day += 1;
        info!(
            target: "life_core.player",
            day = self.day,
            energy = self.energy,
            penalty = effective_penalty,
            "slept"
        );
    }

    pub fn has_sufficient_energy(&self, required: i32) -> bool {
        self.energy >= required
    }

    pub fn has_enough_money(&self, required: i32) -> bool {
        self.money >= required
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_with_fixed_values() {
        let player = PlayerState::default();
        assert_eq!(player.level, 1);
        assert_eq!(player.day, 1);
        assert_eq!(player.money, 100);
        assert_eq!(player.energy, 100);
        assert_eq!(player.energy_penalty, 0);
        for attr in [
            Attribute::Intellect,
            Attribute::Charm,
            Attribute::Coding,
            Attribute::Endurance,
        ] {
            assert_eq!(player.get(attr), 10, "{attr}");
        }
        assert!(!player.has_job);
        assert!(player.items.is_empty());
    }

    #[test]
    fn describe_uses_fixed_format() {
        let player = PlayerState::default();
        assert_eq!(
            player.describe(),
            "Day: 1 | Energy: 100 | Money: $100 | Charm: 10"
        );
    }

    #[test]
    fn money_and_energy_clamp_to_zero() {
        let mut player = PlayerState::default();
        player.apply_delta(
            &AttributeDelta::new()
                .with(Attribute::Money, -500)
                .with(Attribute::Energy, -500)
                .with(Attribute::Charm, -500),
        );
        assert_eq!(player.money, 0);
        assert_eq!(player.energy, 0);
        assert_eq!(player.charm, -490);
    }

    #[test]
    fn energy_has_no_upper_clamp_through_deltas() {
        let mut player = PlayerState::default();
        player.apply_delta(&AttributeDelta::new().with(Attribute::Energy, 30));
        assert_eq!(player.energy, 130);
    }

    #[test]
    fn sleep_applies_capped_penalty() {
        let mut player = PlayerState::default();
        player.energy = 5;
        player.sleep_and_advance_day();
        assert_eq!(player.energy, 100);
        assert_eq!(player.day, 2);

        player.energy_penalty = 100;
        player.sleep_and_advance_day();
        assert_eq!(player.energy, 25);
        assert_eq!(player.day, 3);
        assert_eq!(player.energy_penalty, 100);

        player.energy_penalty = 40;
        player.sleep_and_advance_day();
        assert_eq!(player.energy, 60);
    }

    #[test]
    fn day_limit_only_checked_on_updates() {
        let mut player = PlayerState::default();
        player.day = 30;
        player.energy = 0;
        player.sleep_and_advance_day();
        assert_eq!(player.day, 31);
        assert_eq!(player.apply_delta(&AttributeDelta::new()), Progress::Ended);
    }

    #[test]
    fn day_thirty_is_still_playable() {
        let mut player = PlayerState::default();
        player.day = 30;
        let progress = player.apply_delta(&AttributeDelta::new().with(Attribute::Money, 1));
        assert_eq!(progress, Progress::Ongoing);
    }

    #[test]
    fn requirement_checks_are_inclusive() {
        let mut player = PlayerState::default();
        player.energy = 20;
        player.money = 10;
        assert!(player.has_sufficient_energy(20));
        assert!(!player.has_sufficient_energy(21));
        assert!(player.has_enough_money(10));
        assert!(!player.has_enough_money(11));
    }

    #[test]
    fn attribute_names_parse() {
        assert_eq!("Money".parse::<Attribute>().unwrap(), Attribute::Money);
        assert_eq!(" coding ".parse::<Attribute>().unwrap(), Attribute::Coding);
        assert!("luck".parse::<Attribute>().is_err());
    }

    fn any_attribute() -> impl Strategy<Value = Attribute> {
        prop::sample::select(Attribute::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn floors_hold_after_every_update(
            batches in prop::collection::vec(
                prop::collection::vec((any_attribute(), -200i32..200), 0..6),
                1..20,
            )
        ) {
            let mut player = PlayerState::default();
            for batch in batches {
                let delta = batch
                    .into_iter()
                    .fold(AttributeDelta::new(), |delta, (attr, amount)| delta.with(attr, amount));
                player.apply_delta(&delta);
                prop_assert!(player.money >= 0);
                prop_assert!(player.energy >= 0);
                prop_assert_eq!(player.day, 1);
            }
        }

        #[test]
        fn sleep_always_advances_one_day(penalty in 0i32..1_000, energy in 0i32..100) {
            let mut player = PlayerState::default();
            player.energy_penalty = penalty;
            player.energy = energy;
            player.sleep_and_advance_day();
            prop_assert_eq!(player.day, 2);
            prop_assert_eq!(player.energy, 100 - penalty.min(75));
        }
    }
}
