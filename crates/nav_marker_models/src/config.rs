use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "navmarkers.toml";

/// Live rendering configuration. A snapshot of it is handed to every tick.
/// Missing keys in the config file take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMarkerConfig {
    /// Alpha applied to every marker color, whatever alpha the marker was created with.
    pub alpha_value: u8,
    /// When false, spheres are only drawn as wireframes.
    pub enable_solid_render: bool,
    /// Only meaningful when solid rendering is off: draw after post processing instead of additive.
    pub render_after_post_process: bool,
    /// Multiplier applied on top of the computed wireframe width.
    pub wireframe_width: f32,
    pub bloom_intensity: f32,
    /// In meters from the sphere surface. Used by the "show only close markers" mode.
    pub close_only_distance: f64,
    /// In meters. Used by the partial rendering mode, both to skip a whole marker and to pick lines.
    pub partial_line_distance: f64,
    /// Thickness of the lines drawn in partial mode.
    pub partial_line_thickness: f32,
}

impl Default for NavMarkerConfig {
    fn default() -> Self {
        Self {
            alpha_value: 40,
            enable_solid_render: true,
            render_after_post_process: false,
            wireframe_width: 1.0,
            bloom_intensity: 1.0,
            close_only_distance: 10_000.0,
            partial_line_distance: 5_000.0,
            partial_line_thickness: 200.0,
        }
    }
}
