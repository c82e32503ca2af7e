use anyhow::{Context, Result};
use pinchvol_engine::{
    Actuator, CommandActuator, Devices, LogActuator, ProgramSpec, SimulatedCamera,
    SimulatedCameraConfig, SimulatedTracker, SimulatedTrackerConfig,
};
use pinchvol_messages::{ControlConfig, RunState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything read from the optional JSON config file.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub control: ControlConfig,
    pub camera: SimulatedCameraConfig,
    pub tracker: SimulatedTrackerConfig,
    pub actuator: ActuatorConfig,
    /// Skip waiting for the Start button.
    pub start_running: bool,
    /// Show the camera as a mirror image, the way a selfie view reads.
    pub mirror: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            control: ControlConfig::default(),
            camera: SimulatedCameraConfig::default(),
            tracker: SimulatedTrackerConfig::default(),
            actuator: ActuatorConfig::default(),
            start_running: false,
            mirror: true,
        }
    }
}

/// Which actuator receives the volume nudges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActuatorConfig {
    /// Only log the nudges.
    #[default]
    Log,
    /// `pactl set-sink-volume @DEFAULT_SINK@ ±5%`.
    Pactl,
    /// Custom programs per direction.
    Command {
        increase: ProgramSpec,
        decrease: ProgramSpec,
    },
}

impl AppConfig {
    /// Defaults when no path is given; a given path must exist and parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn initial_run_state(&self) -> RunState {
        if self.start_running {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn build_devices(&self) -> Result<Devices> {
        let actuator: Box<dyn Actuator> = match &self.actuator {
            ActuatorConfig::Log => Box::new(LogActuator::new()),
            ActuatorConfig::Pactl => Box::new(CommandActuator::pactl()),
            ActuatorConfig::Command { increase, decrease } => {
                Box::new(CommandActuator::new(increase.clone(), decrease.clone()))
            }
        };
        Ok(Devices {
            source: Box::new(SimulatedCamera::new(self.camera.clone())?),
            tracker: Box::new(SimulatedTracker::new(self.tracker.clone())?),
            actuator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temp file with the given contents
    fn create_config_file(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.control, ControlConfig::default());
        assert_eq!(config.actuator, ActuatorConfig::Log);
        assert_eq!(config.initial_run_state(), RunState::Paused);
        assert!(config.mirror);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_file = create_config_file(
            r#"{
                "control": { "pinch_open_boundary": 50.0, "history_capacity": 20 },
                "start_running": true
            }"#,
        );

        let config = AppConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(config.control.pinch_open_boundary, 50.0);
        assert_eq!(config.control.history_capacity, 20);
        assert_eq!(config.control.debounce_margin, 5);
        assert_eq!(config.camera, SimulatedCameraConfig::default());
        assert_eq!(config.initial_run_state(), RunState::Running);
        assert!(config.mirror, "unset fields keep their defaults");
    }

    #[test]
    fn test_load_disables_mirror() {
        let temp_file = create_config_file(r#"{ "mirror": false }"#);
        let config = AppConfig::load(Some(temp_file.path())).unwrap();
        assert!(!config.mirror);
        assert_eq!(config.control, ControlConfig::default());
    }

    #[test]
    fn test_load_command_actuator() {
        let temp_file = create_config_file(
            r#"{
                "actuator": {
                    "kind": "command",
                    "increase": { "program": "amixer", "args": ["set", "Master", "5%+"] },
                    "decrease": { "program": "amixer", "args": ["set", "Master", "5%-"] }
                }
            }"#,
        );

        let config = AppConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(
            config.actuator,
            ActuatorConfig::Command {
                increase: ProgramSpec::new("amixer", &["set", "Master", "5%+"]),
                decrease: ProgramSpec::new("amixer", &["set", "Master", "5%-"]),
            }
        );
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp_file = create_config_file("{ not json");
        let err = AppConfig::load(Some(temp_file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/pinchvol.json")));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_devices_from_defaults() {
        let devices = AppConfig::default().build_devices().unwrap();
        assert!(devices.source.name().contains("640x480"));
    }

    #[test]
    fn test_build_devices_rejects_empty_camera() {
        let config = AppConfig {
            camera: SimulatedCameraConfig {
                height: 0,
                ..SimulatedCameraConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(config.build_devices().is_err());
    }
}
