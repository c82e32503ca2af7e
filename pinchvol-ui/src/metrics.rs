use std::time::Duration;

use eframe::egui::{Color32, ProgressBar, Response, RichText, Ui, Widget};

use pinchvol_messages::{ActuationCommand, FrameOutcome, GestureCategory, VolumeLevel};

const INACTIVE_BG: Color32 = Color32::from_rgb(0x30, 0x36, 0x3D);
const INACTIVE_TEXT: Color32 = Color32::from_rgb(0x8B, 0x94, 0x9E);
const ACTIVE_TEXT: Color32 = Color32::from_rgb(0x0D, 0x11, 0x17);
const VOLUME_COLOR: Color32 = Color32::from_rgb(0x58, 0xA6, 0xFF);

fn gesture_color(gesture: GestureCategory) -> Color32 {
    match gesture {
        GestureCategory::Open => Color32::from_rgb(0xFF, 0xD7, 0x00),
        GestureCategory::Pinch => Color32::from_rgb(0x58, 0xA6, 0xFF),
        GestureCategory::Closed => Color32::from_rgb(0xE3, 0x4C, 0x4C),
        GestureCategory::None => INACTIVE_BG,
    }
}

/// Gesture indicators plus volume, distance and actuation readouts.
pub struct Metrics {
    gesture: GestureCategory,
    level: Option<VolumeLevel>,
    distance: Option<f32>,
    latency: Option<Duration>,
    last_command: Option<ActuationCommand>,
    commands_issued: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            gesture: GestureCategory::None,
            level: None,
            distance: None,
            latency: None,
            last_command: None,
            commands_issued: 0,
        }
    }

    pub fn update(&mut self, outcome: &FrameOutcome, latency: Option<Duration>) {
        self.gesture = outcome.gesture;
        self.level = Some(outcome.level);
        self.distance = outcome.distance;
        self.latency = latency;
        if let Some(command) = outcome.command {
            self.last_command = Some(command);
            self.commands_issued += 1;
        }
    }
}

impl Widget for &mut Metrics {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.heading("Gesture Recognition");
        ui.separator();

        for gesture in GestureCategory::OBSERVED {
            let active = gesture == self.gesture;
            let (bg, fg) = if active {
                (gesture_color(gesture), ACTIVE_TEXT)
            } else {
                (INACTIVE_BG, INACTIVE_TEXT)
            };
            ui.label(
                RichText::new(format!("  {}  ", gesture.label()))
                    .background_color(bg)
                    .color(fg)
                    .strong(),
            );
        }
        if self.gesture == GestureCategory::None && self.level.is_some() {
            ui.label(RichText::new("No hand in view").color(INACTIVE_TEXT));
        }

        ui.add_space(12.0);
        ui.heading("Performance Metrics");
        ui.separator();

        let volume_text = self.level.map_or("--%".to_string(), |l| l.to_string());
        ui.label("Current Volume");
        ui.label(RichText::new(volume_text).size(32.0).color(VOLUME_COLOR).strong());
        ui.add(ProgressBar::new(self.level.map_or(0.0, VolumeLevel::fraction)));

        let distance_text = self.distance.map_or("-- px".to_string(), |d| format!("{d:.0} px"));
        ui.label(format!("Finger Distance: {distance_text}"));

        let latency_text = self.latency.map_or("-- ms".to_string(), |l| {
            format!("{:.1} ms", l.as_secs_f64() * 1000.0)
        });
        ui.label(format!("Response Time: {latency_text}"));

        let command_text = match self.last_command {
            Some(command) => format!("Last nudge: {command} ({} total)", self.commands_issued),
            None => "Last nudge: none".to_string(),
        };
        ui.label(command_text);

        ui.response()
    }
}
