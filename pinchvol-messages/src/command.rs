/// Commands sent from the UI to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin evaluating frames and actuating.
    Start,
    /// Keep reading frames for display, but stop evaluating gestures.
    Pause,
    /// Stop the engine and end the frame loop.
    Stop,
}
