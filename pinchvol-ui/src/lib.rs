mod control_panel;
mod metrics;
mod state;
mod trend;
mod video;

use pinchvol_messages::{Command, Event};
use state::UiState;

/// Main application struct implementing the egui App trait.
pub struct PinchVolApp {
    /// Receiver for events from engine
    event_rx: flume::Receiver<Event>,

    /// Local application state
    state: UiState,
}

impl PinchVolApp {
    fn new(event_rx: flume::Receiver<Event>, cmd_tx: flume::Sender<Command>) -> Self {
        Self {
            event_rx,
            state: UiState::new(cmd_tx),
        }
    }
}

impl eframe::App for PinchVolApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        // Pull everything the engine sent since the last repaint
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.handle_event(event);
        }

        ctx.request_repaint();

        // Right side panel for controls and metrics
        eframe::egui::SidePanel::right("control_panel")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.add(&mut self.state.control_panel);
                ui.add_space(12.0);
                ui.add(&mut self.state.metrics);
            });

        // Central panel for the camera feed and volume trend
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.engine_state.is_some() {
                ui.add(&mut self.state.video);
                ui.separator();
                ui.add(&mut self.state.trend);
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for engine connection...");
                });
            }
        });
    }
}

/// Entry point for the UI module.
///
/// Runs the eframe application on the main thread (blocking).
pub fn run(event_rx: flume::Receiver<Event>, cmd_tx: flume::Sender<Command>) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("PinchVol: Gesture Volume Control"),
        ..Default::default()
    };

    eframe::run_native(
        "PinchVol",
        options,
        Box::new(|_cc| Ok(Box::new(PinchVolApp::new(event_rx, cmd_tx)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
