use std::collections::HashMap;

use glam::DVec3;
use nav_marker_models::{marker::Marker, segment::Segment};
use tracing::trace;

use crate::{error::Result, geometry::generate_sphere_segments};

/// What a cached wireframe was built from. Any difference means the wireframe is stale.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    center: DVec3,
    radius: f32,
    phi_segments: u32,
    theta_segments: u32,
}

impl CacheKey {
    fn of(marker: &Marker, phi_segments: u32, theta_segments: u32) -> Self {
        Self {
            center: marker.position,
            radius: marker.radius,
            phi_segments,
            theta_segments,
        }
    }
}

#[derive(Debug)]
struct CachedSegments {
    key: CacheKey,
    segments: Vec<Segment>,
}

/// Wireframes of markers, keyed by marker name.
/// Entries live until the marker is removed, so the size is bounded by the number of markers.
/// A marker whose sphere or requested resolution changed gets a fresh wireframe.
#[derive(Debug, Default)]
pub struct SegmentCache {
    entries: HashMap<String, CachedSegments>,
    hits: u64,
    misses: u64,
}

impl SegmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(
        &mut self,
        marker: &Marker,
        phi_segments: u32,
        theta_segments: u32,
    ) -> Result<&[Segment]> {
        let key = CacheKey::of(marker, phi_segments, theta_segments);
        let is_fresh = self
            .entries
            .get(&marker.name)
            .is_some_and(|cached| cached.key == key);
        if is_fresh {
            self.hits += 1;
        } else {
            let segments = generate_sphere_segments(
                marker.position,
                marker.radius_f64(),
                phi_segments,
                theta_segments,
            )?;
            trace!(
                marker = %marker.name,
                phi_segments,
                theta_segments,
                "generated {} segments",
                segments.len()
            );
            self.misses += 1;
            self.entries
                .insert(marker.name.clone(), CachedSegments { key, segments });
        }
        Ok(&self.entries[&marker.name].segments)
    }

    pub fn invalidate(&mut self, name: &str) {
        self.entries.remove(name);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
