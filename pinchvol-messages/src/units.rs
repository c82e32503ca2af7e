/// Normalized volume level, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VolumeLevel(u8);

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl VolumeLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamp an arbitrary integer into the valid range.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    pub const fn as_percent(self) -> u8 {
        self.0
    }

    /// Signed difference `self - other`.
    pub fn delta(self, other: VolumeLevel) -> i16 {
        i16::from(self.0) - i16::from(other.0)
    }

    /// Level as a fraction in `0.0..=1.0`, for progress bars and plots.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_clamps_both_ends() {
        assert_eq!(VolumeLevel::saturating(-12), VolumeLevel::MIN);
        assert_eq!(VolumeLevel::saturating(250), VolumeLevel::MAX);
        assert_eq!(VolumeLevel::saturating(42).as_percent(), 42);
    }

    #[test]
    fn delta_is_signed() {
        let low = VolumeLevel::saturating(10);
        let high = VolumeLevel::saturating(60);
        assert_eq!(high.delta(low), 50);
        assert_eq!(low.delta(high), -50);
    }

    #[test]
    fn displays_as_percent() {
        assert_eq!(VolumeLevel::saturating(7).to_string(), "7%");
    }
}
