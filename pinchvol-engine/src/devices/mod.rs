//! Collaborators at the edge of the engine: where frames come from, who
//! finds the hands in them, and what a volume command turns into.

mod actuators;
mod simulated;

use anyhow::Result;
use pinchvol_messages::{ActuationCommand, Frame, HandLandmarks};

pub use actuators::{CommandActuator, LogActuator, ProgramSpec};
pub use simulated::{
    SimulatedCamera, SimulatedCameraConfig, SimulatedTracker, SimulatedTrackerConfig,
};

/// Produces frames on demand, blocking until the next one is available.
pub trait FrameSource: Send {
    fn name(&self) -> String;

    /// `Ok(None)` once the source has no more frames. Errors are transient;
    /// the caller may try again on the next cycle.
    fn capture(&mut self) -> Result<Option<Frame>>;
}

/// Finds hands in a frame.
pub trait HandTracker: Send {
    /// Landmarks are normalized to the frame size. Order is the tracker's own.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<HandLandmarks>>;
}

/// Performs one relative system-volume nudge per call.
pub trait Actuator: Send {
    fn actuate(&mut self, command: ActuationCommand) -> Result<()>;
}

/// The set of collaborators an [`Engine`](crate::Engine) drives.
pub struct Devices {
    pub source: Box<dyn FrameSource>,
    pub tracker: Box<dyn HandTracker>,
    pub actuator: Box<dyn Actuator>,
}
