use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use life_core::Session;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::report::{CheckResult, CheckStatus, StepRecord, StepStatus, Transcript};
use crate::script::{Script, Step};

pub struct RunOptions {
    pub run_id: String,
    pub script_path: Option<PathBuf>,
}

impl RunOptions {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            script_path: None,
        }
    }

    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }
}

/// Plays every step of `script` on a fresh session. Refused steps are
/// recorded and play continues.
pub fn run_script(script: &Script, options: &RunOptions) -> Result<Transcript> {
    let steps = script
        .parsed_steps()
        .with_context(|| format!("run {} has an invalid step", options.run_id))?;
    let config = script.game_config();
    let mut session = Session::new(config);

    let records: Vec<StepRecord> = steps
        .into_iter()
        .map(|step| run_step(&mut session, step))
        .collect();

    let checks = script
        .expect
        .as_ref()
        .map(|expect| {
            expect
                .compare(&session)
                .into_iter()
                .map(|(name, expected, actual)| check(name, expected, actual))
                .collect()
        })
        .unwrap_or_default();

    let transcript = Transcript::new(
        options.run_id.clone(),
        options.script_path.clone(),
        config.seed,
        records,
        session.player().clone(),
        session.restarts(),
        checks,
    );
    info!(
        target: "life_script",
        run = %transcript.id,
        status = ?transcript.summary.status,
        steps = transcript.steps.len(),
        "script finished"
    );
    Ok(transcript)
}

pub fn run_step(session: &mut Session, step: Step) -> StepRecord {
    let (status, message) = match step {
        Step::Perform(action) => match session.perform(action) {
            Ok(outcome) if outcome.ended => (StepStatus::Ended, outcome.message),
            Ok(outcome) => (StepStatus::Ok, outcome.message),
            Err(err) => (StepStatus::Refused, Some(err.to_string())),
        },
        Step::Travel(to) => match session.travel(to) {
            Ok(()) => (StepStatus::Ok, None),
            Err(err) => (StepStatus::Refused, Some(err.to_string())),
        },
    };
    debug!(target: "life_script", %step, ?status, "step");
    StepRecord {
        command: step.to_string(),
        status,
        message,
        status_line: session.describe(),
    }
}

fn check(name: &str, expected: i64, actual: i64) -> CheckResult {
    let status = if expected == actual {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };
    CheckResult {
        name: name.to_string(),
        status,
        details: format!("expected {expected}, got {actual}"),
    }
}

/// Finds `*.toml` scripts under `root`, sorted by path.
pub fn discover_scripts(root: &Path) -> Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| filter_entry(e.path()))
    {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            scripts.push(path.to_path_buf());
        }
    }
    scripts.sort();
    Ok(scripts)
}

fn filter_entry(path: &Path) -> bool {
    let ignored = ["target", ".git"];
    !path.components().any(|part| match part {
        std::path::Component::Normal(os_str) => os_str
            .to_str()
            .is_some_and(|part_str| ignored.contains(&part_str)),
        _ => false,
    })
}
