use glam::DVec3;

use crate::{marker::MarkerColor, segment::Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterMode {
    SolidAndWireframe,
    Wireframe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Standard,
    Additive,
    /// Drawn after the post processing pass.
    PostProcess,
}

/// How much of a marker is drawn this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    FullSphere,
    PartialLines,
    Hidden,
}

/// Everything the level of detail policy decided for one marker during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub raster_mode: RasterMode,
    pub blend_mode: BlendMode,
    /// Number of wire segments per axis of the sphere.
    pub wire_segments: u32,
    /// Final width, configured multiplier included.
    pub wireframe_width: f32,
    /// Distance between the viewer and the sphere surface, in meters.
    pub distance_from_edge: f64,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereDraw {
    pub marker_name: String,
    pub center: DVec3,
    pub radius: f64,
    pub color: MarkerColor,
    pub raster_mode: RasterMode,
    pub wire_segments: u32,
    pub wireframe_width: f32,
    pub blend_mode: BlendMode,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineBatch {
    pub marker_name: String,
    pub color: MarkerColor,
    pub thickness: f32,
    pub blend_mode: BlendMode,
    pub segments: Vec<Segment>,
}

/// A fully resolved draw request. The engine never draws by itself, it hands these to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    Sphere(SphereDraw),
    Lines(LineBatch),
}

impl RenderInstruction {
    pub fn marker_name(&self) -> &str {
        match self {
            RenderInstruction::Sphere(sphere) => &sphere.marker_name,
            RenderInstruction::Lines(lines) => &lines.marker_name,
        }
    }
}
