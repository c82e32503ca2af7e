use anyhow::Result;
use log::trace;
use pinchvol_messages::{ControlConfig, FrameOutcome, HandObservation, VolumeLevel};

use crate::classify::Classifier;
use crate::config::validate_config;
use crate::debounce::{ActuatorDriver, ControlState};
use crate::distance::fingertip_distance;

/// Per-frame evaluation: distance, classification, debounce, history.
///
/// Owns the [`ControlState`]; nothing else mutates it.
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: ControlConfig,
    classifier: Classifier,
    driver: ActuatorDriver,
    state: ControlState,
}

impl GestureEngine {
    /// Fails if the configuration does not pass [`validate_config`].
    pub fn new(config: ControlConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            classifier: Classifier::new(&config),
            driver: ActuatorDriver::new(config.debounce_margin),
            state: ControlState::new(config.history_capacity),
            config,
        })
    }

    /// Evaluate the hands seen in one frame.
    ///
    /// Only the first hand in tracker order is used. With no hand the
    /// outcome is [`FrameOutcome::no_observation`]: nothing is actuated and
    /// the committed level is kept, but the history still ticks with level 0
    /// so the trend stays evenly sampled.
    pub fn evaluate(&mut self, hands: &[HandObservation]) -> FrameOutcome {
        let Some(hand) = hands.first() else {
            self.state.history.push(VolumeLevel::MIN);
            return FrameOutcome::no_observation();
        };
        if hands.len() > 1 {
            trace!("{} hands in frame, evaluating the first", hands.len());
        }

        let distance = fingertip_distance(hand);
        let (gesture, level) = self.classifier.classify_and_map(distance);
        let command = self.driver.step(level, &mut self.state);
        trace!("distance {distance:.1}px -> {gesture:?} at {level}, command {command:?}");

        FrameOutcome {
            gesture,
            level,
            distance: Some(distance),
            command,
        }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn history_snapshot(&self) -> Vec<VolumeLevel> {
        self.state.history.snapshot()
    }
}
