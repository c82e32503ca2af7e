/// One captured video frame as packed RGB8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Monotonic frame number assigned by the source.
    pub sequence: u64,
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes, row-major.
    pub rgb: Vec<u8>,
}

impl Frame {
    /// A black frame of the given size.
    pub fn blank(sequence: u64, width: u32, height: u32) -> Self {
        Self {
            sequence,
            width,
            height,
            rgb: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Set one pixel, ignoring coordinates outside the frame.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        self.rgb[offset..offset + 3].copy_from_slice(&color);
    }

    /// Mirror the frame left to right, in place.
    pub fn flip_horizontal(&mut self) {
        let row_len = self.width as usize * 3;
        if row_len == 0 {
            return;
        }
        for row in self.rgb.chunks_exact_mut(row_len) {
            // Reversing the whole row also reverses each pixel's channels.
            row.reverse();
            for pixel in row.chunks_exact_mut(3) {
                pixel.reverse();
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.rgb[offset], self.rgb[offset + 1], self.rgb[offset + 2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut frame = Frame::blank(0, 4, 3);
        frame.put_pixel(-1, 0, [255, 0, 0]);
        frame.put_pixel(4, 2, [255, 0, 0]);
        assert!(frame.rgb.iter().all(|&b| b == 0));

        frame.put_pixel(3, 2, [1, 2, 3]);
        assert_eq!(frame.pixel(3, 2), Some([1, 2, 3]));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn flip_horizontal_swaps_columns() {
        let mut frame = Frame::blank(0, 3, 2);
        frame.put_pixel(0, 0, [1, 2, 3]);
        frame.put_pixel(1, 0, [4, 5, 6]);
        frame.put_pixel(2, 1, [7, 8, 9]);

        frame.flip_horizontal();

        assert_eq!(frame.pixel(2, 0), Some([1, 2, 3]));
        assert_eq!(frame.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(frame.pixel(0, 1), Some([7, 8, 9]));
        assert_eq!(frame.pixel(2, 1), Some([0, 0, 0]));
    }

    #[test]
    fn flip_horizontal_twice_restores_frame() {
        let mut frame = Frame::blank(0, 5, 4);
        frame.put_pixel(1, 3, [10, 20, 30]);
        let original = frame.clone();

        frame.flip_horizontal();
        assert_ne!(frame, original);
        frame.flip_horizontal();
        assert_eq!(frame, original);
    }

    #[test]
    fn flip_horizontal_ignores_empty_frame() {
        let mut frame = Frame::blank(0, 0, 0);
        frame.flip_horizontal();
        assert!(frame.rgb.is_empty());
    }
}
