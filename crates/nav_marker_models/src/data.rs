use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// Everything that is saved for a game session.
/// The map is keyed by marker name and keeps insertion order so that listing is stable across save/load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavMarkerData {
    pub enabled: bool,
    #[serde(default)]
    pub show_only_close_markers: bool,
    #[serde(default)]
    pub show_partial_markers: bool,
    pub markers: IndexMap<String, Marker>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::marker::MarkerColor;
    use glam::DVec3;
    use similar_asserts::assert_eq;

    #[test]
    fn older_files_without_display_flags() {
        let json = r#"{
            "enabled": true,
            "markers": {
                "Base": {"name": "Base", "position": [1.0, 2.0, 3.0], "radius": 5000.0, "color": {"r": 1, "g": 2, "b": 3, "a": 255}}
            }
        }"#;
        let data: NavMarkerData = serde_json::from_str(json).unwrap();
        assert!(data.enabled);
        assert!(!data.show_only_close_markers);
        assert!(!data.show_partial_markers);
        assert_eq!(
            data.markers["Base"],
            Marker::new(
                "Base",
                DVec3::new(1.0, 2.0, 3.0),
                5000.0,
                MarkerColor::rgba(1, 2, 3, 255)
            )
        );
    }
}
