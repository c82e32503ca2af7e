mod command;
mod event;
mod frame;
mod hand;
mod state;
mod units;

pub use command::Command;
pub use event::{Event, FrameOutcome, FrameUpdate};
pub use frame::Frame;
pub use hand::{ActuationCommand, GestureCategory, HandLandmarks, HandObservation, LandmarkPoint};
pub use state::{ControlConfig, EngineState, RunState};
pub use units::VolumeLevel;
