//! Fingertip markers drawn onto the frame before it is handed to the UI.

use pinchvol_messages::{Frame, HandObservation, LandmarkPoint};

const THUMB_COLOR: [u8; 3] = [255, 215, 10];
const INDEX_COLOR: [u8; 3] = [51, 87, 255];
const LINK_COLOR: [u8; 3] = [255, 0, 255];
const MARKER_RADIUS: i64 = 10;
const LINK_HALF_WIDTH: i64 = 2;

/// Connect the two fingertips and mark each with a filled disc.
pub fn draw_fingertips(frame: &mut Frame, hand: &HandObservation) {
    draw_line(frame, hand.thumb_tip, hand.index_tip, LINK_COLOR);
    fill_disc(frame, hand.thumb_tip, MARKER_RADIUS, THUMB_COLOR);
    fill_disc(frame, hand.index_tip, MARKER_RADIUS, INDEX_COLOR);
}

fn fill_disc(frame: &mut Frame, center: LandmarkPoint, radius: i64, color: [u8; 3]) {
    let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                frame.put_pixel(cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_line(frame: &mut Frame, from: LandmarkPoint, to: LandmarkPoint, color: [u8; 3]) {
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil().max(1.0) as i64;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (from.x + (to.x - from.x) * t).round() as i64;
        let y = (from.y + (to.y - from.y) * t).round() as i64;
        for dy in -LINK_HALF_WIDTH..=LINK_HALF_WIDTH {
            for dx in -LINK_HALF_WIDTH..=LINK_HALF_WIDTH {
                frame.put_pixel(x + dx, y + dy, color);
            }
        }
    }
}
