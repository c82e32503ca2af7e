use eframe::egui::{Color32, Response, RichText, Ui, Widget};
use flume::Sender;
use log::warn;

use pinchvol_messages::{Command, EngineState, RunState};

const WARNING_COLOR: Color32 = Color32::from_rgb(0xE3, 0xB3, 0x41);

/// Control panel widget with the Start/Pause toggle.
pub struct ControlPanel {
    cmd_tx: Sender<Command>,
    run_state: RunState,
    source_name: String,
    /// Set after a button press until the engine confirms the new run state.
    waiting_for_engine: bool,
    last_warning: Option<String>,
}

impl ControlPanel {
    pub fn new(cmd_tx: Sender<Command>) -> Self {
        Self {
            cmd_tx,
            run_state: RunState::Paused,
            source_name: String::new(),
            waiting_for_engine: false,
            last_warning: None,
        }
    }

    /// Update from engine state snapshot.
    pub fn update_from_engine_state(&mut self, state: &EngineState) {
        self.run_state = state.run_state;
        self.source_name = state.source_name.clone();
        self.waiting_for_engine = false;
    }

    pub fn update_run_state(&mut self, run_state: RunState) {
        self.run_state = run_state;
        self.waiting_for_engine = false;
    }

    pub fn show_warning(&mut self, message: String) {
        self.last_warning = Some(message);
    }

    pub fn clear_warning(&mut self) {
        self.last_warning = None;
    }

    fn send(&mut self, command: Command) {
        if self.cmd_tx.send(command).is_err() {
            warn!("Engine is gone, dropping {:?}", command);
            return;
        }
        self.waiting_for_engine = true;
    }
}

impl Widget for &mut ControlPanel {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.heading("Live Gesture Feed");
        ui.separator();

        if !self.source_name.is_empty() {
            ui.label(format!("Source: {}", self.source_name));
        }

        let running = self.run_state.is_running();
        ui.horizontal(|ui| {
            let start = ui.add_enabled(
                !running && !self.waiting_for_engine,
                eframe::egui::Button::new("▶ Start"),
            );
            if start.clicked() {
                self.send(Command::Start);
            }
            let pause = ui.add_enabled(
                running && !self.waiting_for_engine,
                eframe::egui::Button::new("⏸ Pause"),
            );
            if pause.clicked() {
                self.send(Command::Pause);
            }
        });

        let status = match (self.run_state, self.waiting_for_engine) {
            (_, true) => "Waiting for engine...",
            (RunState::Running, false) => "Controlling volume",
            (RunState::Paused, false) => "Paused",
        };
        ui.label(status);

        if let Some(warning) = &self.last_warning {
            ui.label(RichText::new(format!("⚠ {warning}")).color(WARNING_COLOR));
        }

        ui.response()
    }
}
