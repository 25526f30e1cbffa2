//! Scripted playthroughs: toml step lists in, JSON transcripts out.

pub mod report;
pub mod runner;
pub mod script;

pub use report::{
    CheckResult, CheckStatus, ReportStatus, StepRecord, StepStatus, Transcript,
    TranscriptSummary,
};
pub use runner::{discover_scripts, run_script, run_step, RunOptions};
pub use script::{Expectations, Script, Step, StepError};
