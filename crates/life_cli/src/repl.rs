use std::io::{BufRead, Write};

use anyhow::Result;
use life_core::{GameConfig, Session};
use life_script::{run_step, Step, StepError, StepStatus};

const HELP: &str = "Commands: <action> | go <location> | look | status | help | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplCommand {
    Quit,
    Help,
    Look,
    Status,
    Step(Step),
}

impl ReplCommand {
    fn parse(line: &str) -> Result<Self, StepError> {
        match line.trim().to_ascii_lowercase().as_str() {
            "quit" | "exit" => Ok(Self::Quit),
            "help" | "?" => Ok(Self::Help),
            "look" => Ok(Self::Look),
            "status" => Ok(Self::Status),
            _ => line.parse().map(Self::Step),
        }
    }
}

pub fn run<R: BufRead, W: Write>(config: GameConfig, input: R, mut out: W) -> Result<()> {
    let mut session = Session::new(config);
    writeln!(out, "{HELP}")?;
    look(&session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match ReplCommand::parse(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(ReplCommand::Help) => writeln!(out, "{HELP}")?,
            Ok(ReplCommand::Look) => look(&session, &mut out)?,
            Ok(ReplCommand::Status) => writeln!(out, "{}", session.describe())?,
            Ok(ReplCommand::Step(step)) => {
                let record = run_step(&mut session, step);
                if let Some(message) = &record.message {
                    writeln!(out, "{message}")?;
                }
                match record.status {
                    StepStatus::Ended => {
                        writeln!(out, "Your month is over. Starting again from day 1.")?;
                        look(&session, &mut out)?;
                    }
                    StepStatus::Ok if matches!(step, Step::Travel(_)) => {
                        look(&session, &mut out)?;
                    }
                    _ => writeln!(out, "{}", record.status_line)?,
                }
            }
            Err(err) => writeln!(out, "{err}. Type `help` for commands.")?,
        }
    }
    Ok(())
}

fn look<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let info = session.location().info();
    writeln!(out, "== {} ==", info.name)?;
    writeln!(out, "{}", session.describe())?;
    if !info.actions.is_empty() {
        let actions: Vec<_> = info.actions.iter().map(|a| a.name()).collect();
        writeln!(out, "You can: {}", actions.join(", "))?;
    }
    let exits: Vec<_> = info.exits.iter().map(|l| l.key()).collect();
    writeln!(out, "Go to: {}", exits.join(", "))?;
    Ok(())
}
