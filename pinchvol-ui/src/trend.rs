use eframe::egui::{Color32, Pos2, Response, Sense, Shape, Stroke, Ui, Widget, vec2};

use pinchvol_messages::VolumeLevel;

const CHART_HEIGHT: f32 = 160.0;
const BG_COLOR: Color32 = Color32::from_rgb(0x16, 0x1B, 0x22);
const GRID_COLOR: Color32 = Color32::from_rgb(0x30, 0x36, 0x3D);
const LINE_COLOR: Color32 = Color32::from_rgb(0x58, 0xA6, 0xFF);

/// Line chart of the engine's volume history, oldest on the left.
///
/// The x axis always spans the full history capacity so the line grows in
/// from the left until the buffer is full, then scrolls.
pub struct Trend {
    history: Vec<VolumeLevel>,
    capacity: usize,
}

impl Trend {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            capacity: 0,
        }
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn set_history(&mut self, history: Vec<VolumeLevel>) {
        self.history = history;
    }
}

impl Widget for &mut Trend {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.label("Volume Trend");

        let (response, painter) =
            ui.allocate_painter(vec2(ui.available_width(), CHART_HEIGHT), Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, BG_COLOR);

        for fraction in [0.0, 0.5, 1.0] {
            let y = rect.bottom() - fraction * rect.height();
            painter.hline(rect.x_range(), y, Stroke::new(1.0, GRID_COLOR));
        }

        let slots = self.capacity.max(self.history.len());
        if slots < 2 || self.history.is_empty() {
            return response;
        }

        let step = rect.width() / (slots - 1) as f32;
        let points: Vec<Pos2> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, level)| {
                Pos2::new(
                    rect.left() + i as f32 * step,
                    rect.bottom() - level.fraction() * rect.height(),
                )
            })
            .collect();

        if points.len() == 1 {
            painter.circle_filled(points[0], 2.5, LINE_COLOR);
        } else {
            painter.add(Shape::line(points, Stroke::new(2.0, LINE_COLOR)));
        }

        response
    }
}
