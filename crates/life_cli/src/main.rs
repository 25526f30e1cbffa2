mod repl;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use life_core::GameConfig;
use life_script::{discover_scripts, run_script, ReportStatus, RunOptions, Script, Transcript};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Play the life sim in a terminal or replay scripted days")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one command per line.
    Play(PlayArgs),
    /// Run a toml script and emit a JSON transcript.
    Run(RunArgs),
    /// Run every script under a directory and summarize.
    RunAll(RunAllArgs),
    /// Pretty-print an existing transcript.
    Report(ReportArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    script: PathBuf,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    id: Option<String>,
}

#[derive(Args)]
struct RunAllArgs {
    #[arg(long, default_value = "demos/scripts")]
    dir: PathBuf,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Run(args) => handle_run(args),
        Commands::RunAll(args) => handle_run_all(args),
        Commands::Report(args) => handle_report(args),
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let mut config = match args.config.as_deref() {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::from_env(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    info!(
        target: "life_cli",
        seed = config.seed,
        day_limit = config.day_limit,
        "starting session"
    );
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(config, stdin.lock(), stdout.lock())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let script = Script::from_path(&args.script)?;
    let run_id = args.id.unwrap_or_else(default_run_id);
    let options = RunOptions::new(run_id).with_script_path(&args.script);

    let transcript = run_script(&script, &options)?;
    let json = serde_json::to_string_pretty(&transcript)?;
    println!("{json}");

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out, json)?;
        println!("Transcript written to {}", out.display());
    }
    Ok(())
}

fn handle_run_all(args: RunAllArgs) -> Result<()> {
    let scripts = discover_scripts(&args.dir)?;
    if scripts.is_empty() {
        bail!("no scripts found under {}", args.dir.display());
    }

    let run_id = default_run_id();
    let mut failures = 0;
    for path in &scripts {
        let script = Script::from_path(path)?;
        let options = RunOptions::new(run_id.clone()).with_script_path(path);
        let transcript = run_script(&script, &options)?;
        if transcript.summary.status == ReportStatus::Fail {
            failures += 1;
        }
        println!("{}: {}", path.display(), summary_line(&transcript));
    }

    if failures > 0 {
        bail!("{failures} of {} scripts failed", scripts.len());
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)?;
    let transcript: Transcript = serde_json::from_str(&data)?;
    println!("Transcript {} -> {}", transcript.id, summary_line(&transcript));
    for (idx, step) in transcript.steps.iter().enumerate() {
        let message = step.message.as_deref().unwrap_or("");
        println!(
            "{:>3}. {:<16} {:<8} {} {}",
            idx + 1,
            step.command,
            format!("{:?}", step.status).to_lowercase(),
            step.status_line,
            message
        );
    }
    for check in &transcript.checks {
        println!("check {}: {:?} ({})", check.name, check.status, check.details);
    }
    Ok(())
}

fn summary_line(transcript: &Transcript) -> String {
    format!(
        "{:?} ({} performed, {} refused, {} restarts) final: {}",
        transcript.summary.status,
        transcript.summary.performed,
        transcript.summary.refused,
        transcript.summary.restarts,
        transcript.final_state.describe()
    )
}

fn default_run_id() -> String {
    format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S"))
}
