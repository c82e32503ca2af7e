/// A 2D position in frame-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fingertip landmarks as reported by a tracker, normalized to `[0, 1]`
/// relative to the frame width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    pub thumb_tip: LandmarkPoint,
    pub index_tip: LandmarkPoint,
}

/// Thumb tip and index fingertip of one detected hand, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandObservation {
    pub thumb_tip: LandmarkPoint,
    pub index_tip: LandmarkPoint,
}

impl HandObservation {
    pub const fn new(thumb_tip: LandmarkPoint, index_tip: LandmarkPoint) -> Self {
        Self {
            thumb_tip,
            index_tip,
        }
    }

    /// Scale normalized tracker landmarks into pixel coordinates.
    pub fn from_normalized(landmarks: &HandLandmarks, width: u32, height: u32) -> Self {
        let scale = |p: LandmarkPoint| LandmarkPoint::new(p.x * width as f32, p.y * height as f32);
        Self {
            thumb_tip: scale(landmarks.thumb_tip),
            index_tip: scale(landmarks.index_tip),
        }
    }
}

/// Discrete hand shape derived from the fingertip separation of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureCategory {
    Open,
    Pinch,
    Closed,
    /// No hand was observed in the frame.
    #[default]
    None,
}

impl GestureCategory {
    /// The three categories a visible hand can be in, for indicator panels.
    pub const OBSERVED: [GestureCategory; 3] = [Self::Open, Self::Pinch, Self::Closed];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open Hand",
            Self::Pinch => "Pinch",
            Self::Closed => "Closed Hand",
            Self::None => "No Hand",
        }
    }
}

/// A single relative nudge of the system volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActuationCommand {
    Increase,
    Decrease,
}

impl std::fmt::Display for ActuationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increase => write!(f, "volume up"),
            Self::Decrease => write!(f, "volume down"),
        }
    }
}
