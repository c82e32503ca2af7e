use serde::{Deserialize, Serialize};

/// Current state of the gesture engine.
#[derive(Debug, Clone)]
pub struct EngineState {
    /// Whether frames are being evaluated
    pub run_state: RunState,
    /// Thresholds and anchors the engine was started with
    pub config: ControlConfig,
    /// Human-readable name of the frame source
    pub source_name: String,
}

/// External Start/Pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    Running,
    #[default]
    Paused,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Thresholds and anchors for turning fingertip distance into volume actions.
///
/// Distances are in frame pixels. The default is the volume-control profile
/// (pinch/open boundary at 80 px).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Distances below this are a closed hand.
    pub closed_max: f32,
    /// Distances above this are an open hand; between the two is a pinch.
    pub pinch_open_boundary: f32,
    /// Distance mapped to level 0.
    pub low_anchor: f32,
    /// Distance mapped to level 100.
    pub high_anchor: f32,
    /// A level change must exceed this to trigger an actuation.
    pub debounce_margin: u8,
    /// Number of levels kept for the trend display.
    pub history_capacity: usize,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            closed_max: 20.0,
            pinch_open_boundary: 80.0,
            low_anchor: 20.0,
            high_anchor: 200.0,
            debounce_margin: 5,
            history_capacity: 50,
        }
    }
}

impl ControlConfig {
    /// Recognition-only profile with a tighter pinch band (open above 50 px).
    pub fn recognition_profile() -> Self {
        Self {
            pinch_open_boundary: 50.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ControlConfig =
            serde_json::from_str(r#"{ "debounce_margin": 8 }"#).unwrap();
        assert_eq!(config.debounce_margin, 8);
        assert_eq!(config.pinch_open_boundary, 80.0);
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn recognition_profile_only_moves_the_boundary() {
        let profile = ControlConfig::recognition_profile();
        assert_eq!(profile.pinch_open_boundary, 50.0);
        assert_eq!(profile.closed_max, ControlConfig::default().closed_max);
    }
}
