mod classify;
mod config;
mod debounce;
mod devices;
mod distance;
mod history;
mod overlay;
mod pipeline;

use std::time::Instant;

use anyhow::{Context, Result};
use flume::{Receiver, Sender, TryRecvError};
use log::{debug, info, trace, warn};
use pinchvol_messages::{
    Command, ControlConfig, EngineState, Event, Frame, FrameUpdate, HandObservation, RunState,
};

pub use classify::Classifier;
pub use config::validate_config;
pub use debounce::{ActuatorDriver, ControlState};
pub use devices::{
    Actuator, CommandActuator, Devices, FrameSource, HandTracker, LogActuator, ProgramSpec,
    SimulatedCamera, SimulatedCameraConfig, SimulatedTracker, SimulatedTrackerConfig,
};
pub use distance::{distance, fingertip_distance};
pub use history::VolumeHistory;
pub use pipeline::GestureEngine;

/// The gesture engine backend.
/// Pulls frames from the devices, evaluates them and reports to the UI.
pub struct Engine {
    cmd_rx: Receiver<Command>,
    event_tx: Sender<Event>,
    gestures: GestureEngine,
    devices: Devices,
    run_state: RunState,
    mirror: bool,
    should_exit: bool,
}

impl Engine {
    /// Create a new Engine instance. Starts paused and mirrors frames.
    ///
    /// Fails if `config` is rejected by [`validate_config`].
    pub fn new(
        cmd_rx: Receiver<Command>,
        event_tx: Sender<Event>,
        config: ControlConfig,
        devices: Devices,
    ) -> Result<Self> {
        debug!("Constructing a new engine");
        let gestures = GestureEngine::new(config).context("Invalid control configuration")?;
        Ok(Self {
            cmd_rx,
            event_tx,
            gestures,
            devices,
            run_state: RunState::Paused,
            mirror: true,
            should_exit: false,
        })
    }

    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    /// Flip every captured frame left to right before tracking and display.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Run the engine (blocking).
    /// Each cycle handles pending commands, then waits for and processes one frame.
    pub fn run(mut self) -> Result<()> {
        let state = EngineState {
            run_state: self.run_state,
            config: self.gestures.config().clone(),
            source_name: self.devices.source.name(),
        };
        self.event_tx.send(Event::StateSnapshot(state))?;

        while !self.should_exit {
            self.process_commands();
            if self.should_exit {
                break;
            }
            self.run_cycle();
        }

        info!("Engine stopped");
        Ok(())
    }

    fn process_commands(&mut self) {
        loop {
            let msg = self.cmd_rx.try_recv();
            match msg {
                Ok(Command::Start) => self.set_run_state(RunState::Running),
                Ok(Command::Pause) => self.set_run_state(RunState::Paused),
                Ok(Command::Stop) | Err(TryRecvError::Disconnected) => {
                    debug!("Engine received {:?}, exiting", msg);
                    self.should_exit = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }
    }

    fn set_run_state(&mut self, run_state: RunState) {
        if self.run_state == run_state {
            return;
        }
        info!("Run state {:?} -> {:?}", self.run_state, run_state);
        self.run_state = run_state;
        self.publish(Event::RunStateChanged(run_state));
    }

    fn run_cycle(&mut self) {
        let mut frame = match self.devices.source.capture() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!("Frame source {} is exhausted", self.devices.source.name());
                self.should_exit = true;
                return;
            }
            Err(e) => {
                self.skip_cycle(e.context("Failed to capture frame"));
                return;
            }
        };
        if self.mirror {
            frame.flip_horizontal();
        }

        let update = if self.run_state.is_running() {
            match self.evaluate(frame) {
                Ok(update) => update,
                Err(e) => {
                    self.skip_cycle(e);
                    return;
                }
            }
        } else {
            FrameUpdate {
                frame,
                outcome: None,
                history: self.gestures.history_snapshot(),
                latency: None,
            }
        };

        self.publish(Event::Frame(update));
    }

    fn evaluate(&mut self, mut frame: Frame) -> Result<FrameUpdate> {
        let started = Instant::now();
        let landmarks = self
            .devices
            .tracker
            .detect(&frame)
            .context("Hand tracker failed")?;
        let hands: Vec<HandObservation> = landmarks
            .iter()
            .map(|l| HandObservation::from_normalized(l, frame.width, frame.height))
            .collect();

        let outcome = self.gestures.evaluate(&hands);

        // The level is already committed; a failed nudge is not rolled back.
        if let Some(command) = outcome.command {
            if let Err(e) = self.devices.actuator.actuate(command) {
                warn!("Actuator failed on {command}: {e:#}");
            }
        }

        if let Some(hand) = hands.first() {
            overlay::draw_fingertips(&mut frame, hand);
        }
        let latency = started.elapsed();
        trace!("Frame {} evaluated in {latency:?}", frame.sequence);

        Ok(FrameUpdate {
            frame,
            outcome: Some(outcome),
            history: self.gestures.history_snapshot(),
            latency: Some(latency),
        })
    }

    /// Transient failure: leave the control state alone and tell the UI.
    fn skip_cycle(&mut self, error: anyhow::Error) {
        warn!("Skipping frame: {error:#}");
        self.publish(Event::CaptureWarning(format!("{error:#}")));
    }

    fn publish(&mut self, event: Event) {
        // Blocks on a bounded channel until the UI catches up.
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped, exiting");
            self.should_exit = true;
        }
    }
}
