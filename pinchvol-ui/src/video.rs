use eframe::egui::{ColorImage, Image, Response, TextureHandle, TextureOptions, Ui, Widget, vec2};

use pinchvol_messages::Frame;

/// Shows the most recent camera frame.
///
/// Pixel conversion happens in `insert_frame()`; rendering only uploads a
/// pending image, reusing the cached texture handle.
pub struct Video {
    pending: Option<ColorImage>,
    texture_handle: Option<TextureHandle>,
    /// Frame size in pixels, for keeping the aspect ratio.
    size: [usize; 2],
}

impl Video {
    pub fn new() -> Self {
        Self {
            pending: None,
            texture_handle: None,
            size: [0, 0],
        }
    }

    pub fn insert_frame(&mut self, frame: &Frame) {
        let size = [frame.width as usize, frame.height as usize];
        if frame.rgb.len() != size[0] * size[1] * 3 {
            return;
        }
        self.pending = Some(ColorImage::from_rgb(size, &frame.rgb));
        self.size = size;
    }
}

impl Widget for &mut Video {
    fn ui(self, ui: &mut Ui) -> Response {
        if let Some(image) = self.pending.take() {
            match &mut self.texture_handle {
                Some(handle) => handle.set(image, TextureOptions::LINEAR),
                None => {
                    self.texture_handle =
                        Some(ui.ctx().load_texture("camera", image, TextureOptions::LINEAR));
                }
            }
        }

        let Some(texture_handle) = &self.texture_handle else {
            ui.label("Waiting for camera frames...");
            return ui.response();
        };

        // Leave room below for the trend chart.
        let available = ui.available_size() - vec2(0.0, 200.0);
        let [width, height] = self.size.map(|d| d as f32);
        let scale = (available.x / width).min(available.y / height).max(0.1);
        ui.add(Image::new(texture_handle).fit_to_exact_size(vec2(width * scale, height * scale)));

        ui.response()
    }
}
