use anyhow::{Result, bail};
use pinchvol_messages::{Frame, HandLandmarks, LandmarkPoint};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::thread;
use std::time::{Duration, Instant};

use super::{FrameSource, HandTracker};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedCameraConfig {
    pub width: u32,
    pub height: u32,
    /// Frames per second; 0 delivers frames as fast as they are requested.
    pub fps: u32,
}

impl Default for SimulatedCameraConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

/// Stand-in for a webcam: paced gradient frames.
pub struct SimulatedCamera {
    config: SimulatedCameraConfig,
    sequence: u64,
    next_due: Option<Instant>,
}

impl SimulatedCamera {
    pub fn new(config: SimulatedCameraConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            bail!(
                "Simulated camera needs a non-empty frame size, got {}x{}",
                config.width,
                config.height
            );
        }
        Ok(Self {
            config,
            sequence: 0,
            next_due: None,
        })
    }

    fn wait_for_next_frame(&mut self) {
        if self.config.fps == 0 {
            return;
        }
        let interval = Duration::from_secs(1) / self.config.fps;
        let now = Instant::now();
        let due = self.next_due.unwrap_or(now);
        if due > now {
            thread::sleep(due - now);
        }
        // Don't try to catch up after a stall.
        self.next_due = Some(due.max(now) + interval);
    }

    fn render(&self) -> Frame {
        let SimulatedCameraConfig { width, height, .. } = self.config;
        let mut frame = Frame::blank(self.sequence, width, height);
        for (row, line) in frame.rgb.chunks_exact_mut(width as usize * 3).enumerate() {
            let shade = (24 + row * 40 / height as usize) as u8;
            for px in line.chunks_exact_mut(3) {
                px.copy_from_slice(&[shade / 2, shade / 2, shade]);
            }
        }
        frame
    }
}

impl FrameSource for SimulatedCamera {
    fn name(&self) -> String {
        format!("Simulated camera {}x{}", self.config.width, self.config.height)
    }

    fn capture(&mut self) -> Result<Option<Frame>> {
        self.wait_for_next_frame();
        let frame = self.render();
        self.sequence += 1;
        Ok(Some(frame))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedTrackerConfig {
    /// Frames for one full open-close sweep of the fingertips.
    pub sweep_frames: u32,
    /// Largest fingertip separation reached mid-sweep, in pixels.
    pub max_separation: f32,
    /// Frames without a hand after each sweep.
    pub absent_frames: u32,
}

impl Default for SimulatedTrackerConfig {
    fn default() -> Self {
        Self {
            sweep_frames: 240,
            max_separation: 220.0,
            absent_frames: 45,
        }
    }
}

/// Stand-in for a landmark detector: a single hand that slowly opens and
/// closes a pinch, then leaves the view for a while.
pub struct SimulatedTracker {
    config: SimulatedTrackerConfig,
}

impl SimulatedTracker {
    pub fn new(config: SimulatedTrackerConfig) -> Result<Self> {
        if config.sweep_frames == 0 {
            bail!("Simulated tracker needs sweep_frames > 0");
        }
        Ok(Self { config })
    }

    /// Pixel separation at a point in the sweep, `None` while the hand is away.
    pub fn separation_at(&self, sequence: u64) -> Option<f32> {
        let cycle = u64::from(self.config.sweep_frames) + u64::from(self.config.absent_frames);
        let phase = sequence % cycle;
        if phase >= u64::from(self.config.sweep_frames) {
            return None;
        }
        let t = phase as f32 / self.config.sweep_frames as f32;
        Some((1.0 - (t * TAU).cos()) / 2.0 * self.config.max_separation)
    }
}

impl HandTracker for SimulatedTracker {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<HandLandmarks>> {
        let Some(separation) = self.separation_at(frame.sequence) else {
            return Ok(Vec::new());
        };
        let thumb_tip = LandmarkPoint::new(0.5, 0.75);
        let index_tip = LandmarkPoint::new(0.5, 0.75 - separation / frame.height as f32);
        Ok(vec![HandLandmarks {
            thumb_tip,
            index_tip,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unpaced_camera() -> SimulatedCamera {
        SimulatedCamera::new(SimulatedCameraConfig {
            width: 8,
            height: 4,
            fps: 0,
        })
        .unwrap()
    }

    #[test]
    fn camera_numbers_frames() {
        let mut camera = unpaced_camera();
        let first = camera.capture().unwrap().unwrap();
        let second = camera.capture().unwrap().unwrap();
        assert_eq!(first.sequence, 0);
        assert_eq!(second.sequence, 1);
        assert_eq!(first.rgb.len(), 8 * 4 * 3);
    }

    #[test]
    fn camera_rejects_empty_frames() {
        let config = SimulatedCameraConfig {
            width: 0,
            ..SimulatedCameraConfig::default()
        };
        assert!(SimulatedCamera::new(config).is_err());
    }

    #[test]
    fn tracker_sweeps_then_disappears() {
        let tracker = SimulatedTracker::new(SimulatedTrackerConfig {
            sweep_frames: 100,
            max_separation: 200.0,
            absent_frames: 10,
        })
        .unwrap();

        assert_eq!(tracker.separation_at(0), Some(0.0));
        let mid = tracker.separation_at(50).unwrap();
        assert!((mid - 200.0).abs() < 0.01);
        assert_eq!(tracker.separation_at(105), None);
        assert_eq!(tracker.separation_at(110), Some(0.0));
    }

    #[test]
    fn tracker_reports_normalized_landmarks() {
        let mut tracker = SimulatedTracker::new(SimulatedTrackerConfig::default()).unwrap();
        let mut frame = Frame::blank(120, 640, 480);
        let hands = tracker.detect(&frame).unwrap();
        assert_eq!(hands.len(), 1);
        let hand = hands[0];
        let separation_px = (hand.thumb_tip.y - hand.index_tip.y) * 480.0;
        assert!((separation_px - 220.0).abs() < 0.1);

        frame.sequence = 250;
        assert!(tracker.detect(&frame).unwrap().is_empty());
    }
}
