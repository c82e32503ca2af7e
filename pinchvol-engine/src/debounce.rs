use log::trace;
use pinchvol_messages::{ActuationCommand, VolumeLevel};

use crate::history::VolumeHistory;

/// The only state the engine keeps between frames.
#[derive(Debug, Clone)]
pub struct ControlState {
    /// Last level that set the actuation baseline; `None` before the first hand.
    pub previous_committed: Option<VolumeLevel>,
    pub history: VolumeHistory,
}

impl ControlState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            previous_committed: None,
            history: VolumeHistory::new(history_capacity),
        }
    }
}

/// Hysteresis between target levels and relative actuation commands.
#[derive(Debug, Clone, Copy)]
pub struct ActuatorDriver {
    margin: u8,
}

impl ActuatorDriver {
    pub fn new(margin: u8) -> Self {
        Self { margin }
    }

    /// Feed one frame's target level.
    ///
    /// Emits at most one command, and only when the level moved more than
    /// the margin away from the committed level. The level is appended to
    /// the history either way.
    pub fn step(
        &self,
        new_level: VolumeLevel,
        state: &mut ControlState,
    ) -> Option<ActuationCommand> {
        let command = match state.previous_committed {
            None => {
                state.previous_committed = Some(new_level);
                None
            }
            Some(previous) => {
                let delta = new_level.delta(previous);
                if delta.unsigned_abs() <= u16::from(self.margin) {
                    trace!("level {new_level} within margin of committed {previous}");
                    None
                } else {
                    state.previous_committed = Some(new_level);
                    if delta > 0 {
                        Some(ActuationCommand::Increase)
                    } else {
                        Some(ActuationCommand::Decrease)
                    }
                }
            }
        };
        state.history.push(new_level);
        command
    }
}
