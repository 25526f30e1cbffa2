//! Bevy glue: the session lives in a resource and is driven by events so
//! any input source (keyboard, UI buttons, tests) can play the game.

mod hud;

use bevy::prelude::*;

use crate::{Action, GameConfig, Location, Session};

pub use hud::HudPlugin;

const TOAST_SECONDS: f32 = 2.0;

pub struct LifeSimPlugin;

impl Plugin for LifeSimPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ActiveSession>() {
            app.insert_resource(ActiveSession(Session::new(GameConfig::from_env())));
        }

        app.init_resource::<Toast>()
            .add_event::<PlayerCommand>()
            .add_event::<SessionRestarted>()
            .configure_sets(
                Update,
                (LifeSimSet::Input, LifeSimSet::Apply, LifeSimSet::Present).chain(),
            )
            .add_systems(
                Update,
                (apply_player_commands, tick_toast)
                    .chain()
                    .in_set(LifeSimSet::Apply),
            );
    }
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeSimSet {
    Input,
    Apply,
    Present,
}

#[derive(Resource, Debug)]
pub struct ActiveSession(pub Session);

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Perform(Action),
    Travel(Location),
}

/// Sent when the day limit ends a session and a fresh one begins.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRestarted {
    pub restarts: u32,
}

/// Transient message shown for a couple of seconds after an action.
#[derive(Resource, Debug)]
pub struct Toast {
    text: String,
    timer: Timer,
    visible: bool,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            text: String::new(),
            timer: Timer::from_seconds(TOAST_SECONDS, TimerMode::Once),
            visible: false,
        }
    }
}

impl Toast {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timer.reset();
        self.visible = true;
    }

    pub fn text(&self) -> Option<&str> {
        self.visible.then_some(self.text.as_str())
    }
}

fn apply_player_commands(
    mut requests: EventReader<PlayerCommand>,
    mut session: ResMut<ActiveSession>,
    mut toast: ResMut<Toast>,
    mut restarted: EventWriter<SessionRestarted>,
) {
    for request in requests.read() {
        match *request {
            PlayerCommand::Perform(action) => match session.0.perform(action) {
                Ok(outcome) => {
                    if let Some(message) = outcome.message {
                        toast.show(message);
                    }
                    if outcome.ended {
                        restarted.send(SessionRestarted {
                            restarts: session.0.restarts(),
                        });
                    }
                }
                Err(err) => toast.show(err.to_string()),
            },
            PlayerCommand::Travel(to) => {
                if let Err(err) = session.0.travel(to) {
                    toast.show(err.to_string());
                }
            }
        }
    }
}

fn tick_toast(time: Res<Time>, mut toast: ResMut<Toast>) {
    if toast.visible && toast.timer.tick(time.delta()).finished() {
        toast.visible = false;
    }
}
