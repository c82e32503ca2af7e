use flume::Sender;
use log::debug;

use crate::control_panel::ControlPanel;
use crate::metrics::Metrics;
use crate::trend::Trend;
use crate::video::Video;
use pinchvol_messages::{Command, EngineState, Event};

/// Local UI state derived from engine events.
pub(super) struct UiState {
    /// Current engine state (from StateSnapshot)
    pub engine_state: Option<EngineState>,

    /// Start/Pause widget state
    pub control_panel: ControlPanel,

    /// Gesture indicators and readouts
    pub metrics: Metrics,

    /// Latest camera frame
    pub video: Video,

    /// Volume history chart
    pub trend: Trend,
}

impl UiState {
    pub fn new(cmd_tx: Sender<Command>) -> Self {
        Self {
            engine_state: None,
            control_panel: ControlPanel::new(cmd_tx),
            metrics: Metrics::new(),
            video: Video::new(),
            trend: Trend::new(),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::StateSnapshot(state) => {
                debug!("Engine connected: {:?}", state);
                self.control_panel.update_from_engine_state(&state);
                self.trend.set_capacity(state.config.history_capacity);
                self.engine_state = Some(state);
            }
            Event::RunStateChanged(run_state) => {
                self.control_panel.update_run_state(run_state);
                if let Some(state) = self.engine_state.as_mut() {
                    state.run_state = run_state;
                }
            }
            Event::Frame(update) => {
                self.video.insert_frame(&update.frame);
                if let Some(outcome) = update.outcome {
                    self.metrics.update(&outcome, update.latency);
                    self.control_panel.clear_warning();
                }
                self.trend.set_history(update.history);
            }
            Event::CaptureWarning(message) => {
                self.control_panel.show_warning(message);
            }
        }
    }
}
