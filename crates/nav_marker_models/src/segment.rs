use glam::DVec3;

/// A straight line between two points in world space.
/// Kept in f64 like marker positions, to avoid jitter far away from the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    pub const fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    /// Whether at least one of the two endpoints is within `max_distance` of `point`.
    pub fn has_endpoint_within(&self, point: DVec3, max_distance: f64) -> bool {
        point.distance(self.start) <= max_distance || point.distance(self.end) <= max_distance
    }
}
