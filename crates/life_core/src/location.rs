use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Downtown,
    Work,
    Bar,
    Cafe,
    School,
    BackAlley,
    Gamble,
}

/// Static description of a location: what can be done there and where it leads.
#[derive(Debug, Clone, Copy)]
pub struct LocationInfo {
    pub name: &'static str,
    pub background: &'static str,
    pub actions: &'static [Action],
    pub exits: &'static [Location],
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Home,
        Location::Downtown,
        Location::Work,
        Location::Bar,
        Location::Cafe,
        Location::School,
        Location::BackAlley,
        Location::Gamble,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Location::Home => "home",
            Location::Downtown => "downtown",
            Location::Work => "work",
            Location::Bar => "bar",
            Location::Cafe => "cafe",
            Location::School => "school",
            Location::BackAlley => "backalley",
            Location::Gamble => "gamble",
        }
    }

    pub fn info(&self) -> LocationInfo {
        match self {
            Location::Home => LocationInfo {
                name: "Home",
                background: "images/house_repeat.png",
                actions: &[Action::Sleep],
                exits: &[Location::Downtown],
            },
            Location::Downtown => LocationInfo {
                name: "Downtown",
                background: "images/downtown_repeat.png",
                actions: &[],
                exits: &[
                    Location::Home,
                    Location::Work,
                    Location::Bar,
                    Location::Cafe,
                    Location::School,
                    Location::BackAlley,
                ],
            },
            Location::Work => LocationInfo {
                name: "Work",
                background: "images/call_center.png",
                actions: &[Action::Work],
                exits: &[Location::Downtown],
            },
            Location::Bar => LocationInfo {
                name: "Bar",
                background: "images/bar_repeat.png",
                actions: &[Action::Drink],
                exits: &[Location::Downtown],
            },
            Location::Cafe => LocationInfo {
                name: "Cafe",
                background: "images/cafe_repeat.png",
                actions: &[Action::Converse, Action::Study],
                exits: &[Location::Downtown],
            },
            Location::School => LocationInfo {
                name: "School",
                background: "images/school_repeat.png",
                actions: &[Action::Study],
                exits: &[Location::Downtown],
            },
            Location::BackAlley => LocationInfo {
                name: "Back Alley",
                background: "images/back_alley_repeat.png",
                actions: &[Action::Fight],
                exits: &[Location::Downtown, Location::Gamble],
            },
            Location::Gamble => LocationInfo {
                name: "Bum Fight Ring",
                background: "images/back_alley_repeat.png",
                actions: &[Action::Gamble],
                exits: &[Location::BackAlley],
            },
        }
    }

    pub fn offers(&self, action: Action) -> bool {
        self.info().actions.contains(&action)
    }

    pub fn leads_to(&self, to: Location) -> bool {
        self.info().exits.contains(&to)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        Location::ALL
            .into_iter()
            .find(|location| location.key() == needle)
            .ok_or_else(|| ParseError::UnknownLocation(s.to_string()))
    }
}
