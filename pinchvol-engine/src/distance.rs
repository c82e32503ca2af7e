use pinchvol_messages::{HandObservation, LandmarkPoint};

/// Euclidean distance between two landmarks, in pixels.
pub fn distance(a: LandmarkPoint, b: LandmarkPoint) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Separation of the thumb tip and index fingertip of one hand.
pub fn fingertip_distance(hand: &HandObservation) -> f32 {
    distance(hand.thumb_tip, hand.index_tip)
}
