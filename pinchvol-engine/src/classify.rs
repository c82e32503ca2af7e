use pinchvol_messages::{ControlConfig, GestureCategory, VolumeLevel};

/// Turns a fingertip distance into a gesture category and a target level.
///
/// Stateless: the same distance always yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    closed_max: f32,
    pinch_open_boundary: f32,
    low_anchor: f32,
    high_anchor: f32,
}

impl Classifier {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            closed_max: config.closed_max,
            pinch_open_boundary: config.pinch_open_boundary,
            low_anchor: config.low_anchor,
            high_anchor: config.high_anchor,
        }
    }

    pub fn classify(&self, distance: f32) -> GestureCategory {
        if distance < self.closed_max {
            GestureCategory::Closed
        } else if distance <= self.pinch_open_boundary {
            GestureCategory::Pinch
        } else {
            GestureCategory::Open
        }
    }

    /// Affine map from `[low_anchor, high_anchor]` onto `[0, 100]`, clamped.
    pub fn map_level(&self, distance: f32) -> VolumeLevel {
        let span = self.high_anchor - self.low_anchor;
        let scaled = ((distance - self.low_anchor) / span) * 100.0;
        VolumeLevel::saturating(scaled.round() as i64)
    }

    pub fn classify_and_map(&self, distance: f32) -> (GestureCategory, VolumeLevel) {
        (self.classify(distance), self.map_level(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&ControlConfig::default())
    }

    #[test]
    fn classifies_default_profile_bands() {
        let c = classifier();
        assert_eq!(c.classify(0.0), GestureCategory::Closed);
        assert_eq!(c.classify(19.9), GestureCategory::Closed);
        assert_eq!(c.classify(20.0), GestureCategory::Pinch);
        assert_eq!(c.classify(80.0), GestureCategory::Pinch);
        assert_eq!(c.classify(80.5), GestureCategory::Open);
    }

    #[test]
    fn recognition_profile_opens_earlier() {
        let c = Classifier::new(&ControlConfig::recognition_profile());
        assert_eq!(c.classify(50.0), GestureCategory::Pinch);
        assert_eq!(c.classify(60.0), GestureCategory::Open);
    }

    #[test]
    fn levels_clamp_outside_the_anchors() {
        let c = classifier();
        for d in [0.0, 5.0, 19.0, 20.0] {
            assert_eq!(c.map_level(d), VolumeLevel::MIN, "distance {d}");
        }
        for d in [200.0, 250.0, 10_000.0] {
            assert_eq!(c.map_level(d), VolumeLevel::MAX, "distance {d}");
        }
    }

    #[test]
    fn levels_are_monotonic_between_anchors() {
        let c = classifier();
        let mut previous = c.map_level(0.0);
        for step in 0..=500 {
            let level = c.map_level(step as f32 * 0.5);
            assert!(level >= previous, "level dropped at {}", step as f32 * 0.5);
            previous = level;
        }
    }

    #[test]
    fn levels_round_to_nearest() {
        let c = classifier();
        // 70 / 180 * 100 = 38.89
        assert_eq!(c.map_level(90.0).as_percent(), 39);
        // 90 / 180 * 100 = 50
        assert_eq!(c.map_level(110.0).as_percent(), 50);
    }

    #[test]
    fn classify_and_map_combines_both() {
        let (gesture, level) = classifier().classify_and_map(200.0);
        assert_eq!(gesture, GestureCategory::Open);
        assert_eq!(level, VolumeLevel::MAX);
    }
}
