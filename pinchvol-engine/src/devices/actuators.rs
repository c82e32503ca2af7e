use anyhow::{Context, Result, bail};
use log::{debug, info};
use pinchvol_messages::ActuationCommand;
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};

use super::Actuator;

/// Logs each nudge instead of touching the system mixer.
#[derive(Debug, Default)]
pub struct LogActuator {
    issued: u64,
}

impl LogActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}

impl Actuator for LogActuator {
    fn actuate(&mut self, command: ActuationCommand) -> Result<()> {
        self.issued += 1;
        info!("{command} (#{})", self.issued);
        Ok(())
    }
}

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ProgramSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Runs an external mixer command for each nudge, e.g. `pactl` or `amixer`.
#[derive(Debug, Clone)]
pub struct CommandActuator {
    increase: ProgramSpec,
    decrease: ProgramSpec,
}

impl CommandActuator {
    pub fn new(increase: ProgramSpec, decrease: ProgramSpec) -> Self {
        Self { increase, decrease }
    }

    /// PulseAudio/PipeWire default sink, 5% per nudge.
    pub fn pactl() -> Self {
        Self::new(
            ProgramSpec::new("pactl", &["set-sink-volume", "@DEFAULT_SINK@", "+5%"]),
            ProgramSpec::new("pactl", &["set-sink-volume", "@DEFAULT_SINK@", "-5%"]),
        )
    }
}

impl Actuator for CommandActuator {
    fn actuate(&mut self, command: ActuationCommand) -> Result<()> {
        let spec = match command {
            ActuationCommand::Increase => &self.increase,
            ActuationCommand::Decrease => &self.decrease,
        };
        debug!("{command}: running {} {:?}", spec.program, spec.args);

        let status = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", spec.program))?;

        if !status.success() {
            bail!("{} exited with {status}", spec.program);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_actuator_counts_nudges() {
        let mut actuator = LogActuator::new();
        actuator.actuate(ActuationCommand::Increase).unwrap();
        actuator.actuate(ActuationCommand::Decrease).unwrap();
        assert_eq!(actuator.issued(), 2);
    }

    #[test]
    fn missing_program_is_an_error() {
        let missing = ProgramSpec::new("/nonexistent/pinchvol-mixer", &[]);
        let mut actuator = CommandActuator::new(missing.clone(), missing);
        assert!(actuator.actuate(ActuationCommand::Increase).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_checked() {
        let mut actuator =
            CommandActuator::new(ProgramSpec::new("true", &[]), ProgramSpec::new("false", &[]));
        assert!(actuator.actuate(ActuationCommand::Increase).is_ok());
        assert!(actuator.actuate(ActuationCommand::Decrease).is_err());
    }
}
