//! Helpers for deterministic regression tests.

use life_core::{Action, GameConfig, Session};
use life_script::{run_step, Step, StepRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

/// Plays `steps` on a fresh session seeded with `seed`.
pub fn scripted_records(seed: u64, steps: &[Step]) -> Vec<StepRecord> {
    let mut session = Session::new(GameConfig::from_seed(seed));
    steps
        .iter()
        .map(|step| run_step(&mut session, *step))
        .collect()
}

/// One line per step: `command | status | status line | message`.
pub fn render_records(records: &[StepRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let mut line = format!(
                "{} | {:?} | {}",
                record.command, record.status, record.status_line
            );
            if let Some(message) = &record.message {
                line.push_str(" | ");
                line.push_str(message);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wanders for `len` steps, picking uniformly among the moves the current
/// location offers. The walk and the session share nothing but the seed.
pub fn random_walk(seed: u64, len: usize) -> (Session, Vec<StepRecord>) {
    let mut chooser = StdRng::seed_from_u64(seed);
    let mut session = Session::new(GameConfig::from_seed(seed));
    let mut records = Vec::with_capacity(len);
    for _ in 0..len {
        let info = session.location().info();
        let options: Vec<Step> = info
            .actions
            .iter()
            .map(|action| Step::Perform(*action))
            .chain(info.exits.iter().map(|exit| Step::Travel(*exit)))
            .collect();
        let step = options[chooser.gen_range(0..options.len())];
        records.push(run_step(&mut session, step));
    }
    (session, records)
}

/// Money after each of `rounds` bets, starting from a bankroll large enough
/// never to run dry.
pub fn gamble_streak(seed: u64, rounds: usize) -> serde_json::Value {
    let mut session = Session::new(GameConfig::from_seed(seed));
    for step in ["go downtown", "go backalley", "go gamble"] {
        if let Ok(step) = step.parse::<Step>() {
            run_step(&mut session, step);
        }
    }
    session.player_mut().money = 50 * (rounds as i32 + 1);
    let start = session.player().money;
    let balances: Vec<i32> = (0..rounds)
        .map(|_| {
            run_step(&mut session, Step::Perform(Action::Gamble));
            session.player().money
        })
        .collect();
    serde_json::json!({ "seed": seed, "start": start, "balances": balances })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_is_deterministic() {
        let (_, a) = random_walk(DEFAULT_SEED, 50);
        let (_, b) = random_walk(DEFAULT_SEED, 50);
        assert_eq!(a, b);
    }

    #[test]
    fn streak_moves_in_stake_steps() {
        let streak = gamble_streak(DEFAULT_SEED, 10);
        let mut previous = streak["start"].as_i64().unwrap();
        for balance in streak["balances"].as_array().unwrap() {
            let balance = balance.as_i64().unwrap();
            assert_eq!((balance - previous).abs(), 50);
            previous = balance;
        }
    }
}
