use std::time::Duration;

use crate::{ActuationCommand, EngineState, Frame, GestureCategory, RunState, VolumeLevel};

/// Events sent from the engine to the UI.
#[derive(Debug)]
pub enum Event {
    /// Initial state snapshot sent on connection.
    StateSnapshot(EngineState),
    /// Start/Pause took effect.
    RunStateChanged(RunState),
    /// One frame went through the engine.
    Frame(FrameUpdate),
    /// A frame could not be acquired; the cycle was skipped.
    CaptureWarning(String),
}

/// Everything the presentation sink needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameUpdate {
    /// Captured frame, with fingertip markers drawn when a hand was seen.
    pub frame: Frame,
    /// `None` while paused.
    pub outcome: Option<FrameOutcome>,
    /// Copy of the trend buffer, oldest first.
    pub history: Vec<VolumeLevel>,
    /// Time from hand tracking to the drawn overlay, `None` while paused.
    pub latency: Option<Duration>,
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub gesture: GestureCategory,
    /// Level shown to the user; not necessarily the committed level.
    pub level: VolumeLevel,
    /// Fingertip separation in pixels, `None` when no hand was observed.
    pub distance: Option<f32>,
    pub command: Option<ActuationCommand>,
}

impl FrameOutcome {
    /// Outcome of a frame with no hand in view.
    pub fn no_observation() -> Self {
        Self {
            gesture: GestureCategory::None,
            level: VolumeLevel::MIN,
            distance: None,
            command: None,
        }
    }
}
