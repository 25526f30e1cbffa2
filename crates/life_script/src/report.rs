use std::path::PathBuf;

use chrono::Utc;
use life_core::PlayerState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub id: String,
    pub timestamp: String,
    pub script: Option<PathBuf>,
    pub seed: u64,
    pub summary: TranscriptSummary,
    pub steps: Vec<StepRecord>,
    pub final_state: PlayerState,
    pub checks: Vec<CheckResult>,
}

impl Transcript {
    pub fn new(
        id: impl Into<String>,
        script: Option<PathBuf>,
        seed: u64,
        steps: Vec<StepRecord>,
        final_state: PlayerState,
        restarts: u32,
        checks: Vec<CheckResult>,
    ) -> Self {
        let summary = summarize(&steps, &checks, restarts);
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            script,
            seed,
            summary,
            steps,
            final_state,
            checks,
        }
    }
}

fn summarize(steps: &[StepRecord], checks: &[CheckResult], restarts: u32) -> TranscriptSummary {
    let refused = steps
        .iter()
        .filter(|s| s.status == StepStatus::Refused)
        .count();
    let status = if checks.iter().any(|c| c.status == CheckStatus::Fail) {
        ReportStatus::Fail
    } else {
        ReportStatus::Pass
    };
    TranscriptSummary {
        status,
        performed: steps.len() - refused,
        refused,
        restarts,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSummary {
    pub status: ReportStatus,
    pub performed: usize,
    pub refused: usize,
    pub restarts: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub command: String,
    pub status: StepStatus,
    pub message: Option<String>,
    pub status_line: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Ok,
    Refused,
    /// The step crossed the day limit and the session restarted.
    Ended,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: StepStatus) -> StepRecord {
        StepRecord {
            command: "work".into(),
            status,
            message: None,
            status_line: String::new(),
        }
    }

    #[test]
    fn failed_check_fails_the_transcript() {
        let transcript = Transcript::new(
            "t",
            None,
            42,
            vec![record(StepStatus::Ok), record(StepStatus::Refused)],
            PlayerState::default(),
            0,
            vec![CheckResult {
                name: "money".into(),
                status: CheckStatus::Fail,
                details: "expected 1, got 100".into(),
            }],
        );
        assert_eq!(transcript.summary.status, ReportStatus::Fail);
        assert_eq!(transcript.summary.performed, 1);
        assert_eq!(transcript.summary.refused, 1);
    }

    #[test]
    fn refusals_alone_still_pass() {
        let transcript = Transcript::new(
            "t",
            None,
            42,
            vec![record(StepStatus::Refused)],
            PlayerState::default(),
            0,
            Vec::new(),
        );
        assert_eq!(transcript.summary.status, ReportStatus::Pass);
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["steps"][0]["status"], "refused");
    }
}
