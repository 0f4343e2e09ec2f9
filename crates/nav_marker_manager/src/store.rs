use glam::DVec3;
use indexmap::IndexMap;
use nav_marker_models::{
    data::NavMarkerData,
    marker::{Marker, MarkerColor},
};
use tracing::debug;

use crate::error::{NavMarkerError, Result};

/// Markers of a game session, keyed by their exact name, in insertion order.
/// Every successful mutation queues a save, which the session consumes once per tick.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: IndexMap<String, Marker>,
    save_queued: bool,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails without touching the store if the name is empty or taken, or if the radius cannot describe a sphere.
    pub fn add(
        &mut self,
        name: &str,
        position: DVec3,
        radius: f32,
        color: MarkerColor,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(NavMarkerError::EmptyName);
        }
        if self.markers.contains_key(name) {
            return Err(NavMarkerError::DuplicateName(name.to_string()));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(NavMarkerError::InvalidGeometryParameters {
                radius: radius as f64,
                phi_segments: 0,
                theta_segments: 0,
            });
        }
        debug!(name, ?position, radius, %color, "adding marker");
        self.markers
            .insert(name.to_string(), Marker::new(name, position, radius, color));
        self.save_queued = true;
        Ok(())
    }

    /// Removes the marker, keeping the relative order of the others.
    pub fn remove(&mut self, name: &str) -> Result<Marker> {
        let marker = self
            .markers
            .shift_remove(name)
            .ok_or_else(|| NavMarkerError::NotFound(name.to_string()))?;
        debug!(name, "removed marker");
        self.save_queued = true;
        Ok(marker)
    }

    pub fn list(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Marker> {
        self.markers.get(name)
    }

    /// First marker, in insertion order, whose name matches without regard to case.
    pub fn find_by_name_ignore_case(&self, name: &str) -> Option<&Marker> {
        let name = name.to_lowercase();
        self.markers
            .values()
            .find(|marker| marker.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Queues a save without changing the markers, used when a display flag changes.
    pub fn mark_dirty(&mut self) {
        self.save_queued = true;
    }

    pub fn is_save_queued(&self) -> bool {
        self.save_queued
    }

    /// Returns whether a save was queued, and clears the flag.
    pub fn take_save_queued(&mut self) -> bool {
        std::mem::take(&mut self.save_queued)
    }

    /// Rebuilds a store from saved markers.
    /// Entries whose key does not match the marker name, or whose radius is invalid, are dropped.
    pub fn from_markers(markers: IndexMap<String, Marker>) -> Self {
        let markers = markers
            .into_iter()
            .filter(|(key, marker)| {
                let valid = !key.is_empty()
                    && *key == marker.name
                    && marker.radius.is_finite()
                    && marker.radius > 0.0;
                if !valid {
                    debug!(%key, ?marker, "dropping invalid saved marker");
                }
                valid
            })
            .collect();
        Self {
            markers,
            save_queued: false,
        }
    }

    pub fn to_data(&self, enabled: bool, show_only_close: bool, show_partial: bool) -> NavMarkerData {
        NavMarkerData {
            enabled,
            show_only_close_markers: show_only_close,
            show_partial_markers: show_partial,
            markers: self.markers.clone(),
        }
    }
}
