//! Level of detail of markers.
//!
//! Every tick, each marker gets a set of [RenderParams] derived from how far the viewer is from the sphere surface:
//! 1. close to the surface, the wireframe gets more segments
//! 2. far from the surface, the wireframe gets thicker to offset aliasing
//! 3. inside the sphere, only the wireframe is drawn, additively unless it goes after post-processing
//! 4. the display modes (only close markers, partial markers) may hide the marker or switch it to a list of lines

use glam::DVec3;
use nav_marker_models::{
    config::NavMarkerConfig,
    marker::Marker,
    render::{
        BlendMode, LineBatch, RasterMode, RenderInstruction, RenderParams, SphereDraw, Visibility,
    },
};
use tracing::trace;

use crate::{cache::SegmentCache, error::Result};

/// Used instead of a zero distance to the surface, when the viewer stands exactly on it.
pub const MIN_DISTANCE_FROM_EDGE: f64 = 1e-3;
const MIN_WIRE_DENSITY: f64 = 2.0;
const WIRE_SEGMENTS_PER_DENSITY: f64 = 12.0;
pub const MAX_WIRE_SEGMENTS: u32 = 36;
const INSIDE_COARSE_WIRE_SEGMENTS: u32 = 24;
/// Rendered radius (km) above which the inside view uses the finer wireframe.
const INSIDE_FINE_RENDER_RADIUS: f32 = 100.0;
/// World radius is divided by this to get the rendered radius, which is also the minimal wireframe width.
const RENDER_RADIUS_DIVISOR: f32 = 1000.0;
/// Radius of the reference sphere the width factors are tuned for.
const REFERENCE_RADIUS: f64 = 100_000.0;
const WIDTH_PER_RELATIVE_DISTANCE: f64 = 250.0;
const MAX_WIDTH_FACTOR: f32 = 150.0;

/// Display modes toggled by the player. They are part of the saved state, not of the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    pub show_only_close: bool,
    pub show_partial: bool,
}

pub fn compute_render_params(
    viewer: DVec3,
    marker: &Marker,
    config: &NavMarkerConfig,
    flags: DisplayFlags,
) -> RenderParams {
    let radius = marker.radius_f64();
    let distance = marker.distance_to(viewer);
    let mut distance_from_edge = (distance - radius).abs();
    let size_multiplier = radius / REFERENCE_RADIUS;
    let rendered_radius = marker.radius / RENDER_RADIUS_DIVISOR;

    let density = (radius * 3.0 / distance_from_edge.max(MIN_DISTANCE_FROM_EDGE))
        .floor()
        .max(MIN_WIRE_DENSITY);
    let mut wire_segments = (density * WIRE_SEGMENTS_PER_DENSITY).min(MAX_WIRE_SEGMENTS as f64) as u32;
    let mut raster_mode = RasterMode::SolidAndWireframe;
    let mut blend_mode = BlendMode::Standard;

    if marker.contains(viewer) {
        raster_mode = RasterMode::Wireframe;
        blend_mode = BlendMode::Additive;
        distance_from_edge = radius - distance;
        wire_segments = if rendered_radius > INSIDE_FINE_RENDER_RADIUS {
            MAX_WIRE_SEGMENTS
        } else {
            INSIDE_COARSE_WIRE_SEGMENTS
        };
    }

    // thicker lines with distance, to offset aliasing
    let width = ((distance_from_edge.max(MIN_DISTANCE_FROM_EDGE) / radius)
        * WIDTH_PER_RELATIVE_DISTANCE
        * size_multiplier) as f32;
    let width = rendered_radius.max((MAX_WIDTH_FACTOR * size_multiplier as f32).min(width));
    wire_segments = wire_segments.min(MAX_WIRE_SEGMENTS);

    if !config.enable_solid_render {
        raster_mode = RasterMode::Wireframe;
        blend_mode = if config.render_after_post_process {
            BlendMode::PostProcess
        } else {
            BlendMode::Additive
        };
    }

    let visibility = if flags.show_partial {
        if distance_from_edge > config.partial_line_distance {
            Visibility::Hidden
        } else {
            Visibility::PartialLines
        }
    } else if flags.show_only_close && distance_from_edge > config.close_only_distance {
        Visibility::Hidden
    } else {
        Visibility::FullSphere
    };

    RenderParams {
        raster_mode,
        blend_mode,
        wire_segments,
        wireframe_width: width * config.wireframe_width,
        distance_from_edge,
        visibility,
    }
}

/// Turns the parameters of a marker into what the renderer receives.
/// Partial markers only keep the lines that have an end within the partial distance of the viewer.
/// Returns `None` when nothing of the marker is drawn this tick.
pub fn render_instruction(
    viewer: DVec3,
    marker: &Marker,
    params: &RenderParams,
    config: &NavMarkerConfig,
    cache: &mut SegmentCache,
) -> Result<Option<RenderInstruction>> {
    let color = marker.color.with_alpha(config.alpha_value);
    match params.visibility {
        Visibility::Hidden => Ok(None),
        Visibility::FullSphere => Ok(Some(RenderInstruction::Sphere(SphereDraw {
            marker_name: marker.name.clone(),
            center: marker.position,
            radius: marker.radius_f64(),
            color,
            raster_mode: params.raster_mode,
            wire_segments: params.wire_segments,
            wireframe_width: params.wireframe_width,
            blend_mode: params.blend_mode,
            intensity: config.bloom_intensity,
        }))),
        Visibility::PartialLines => {
            let segments = cache.get_or_generate(marker, params.wire_segments, params.wire_segments)?;
            trace!(marker = %marker.name, "found {} segments", segments.len());
            let near: Vec<_> = segments
                .iter()
                .filter(|segment| segment.has_endpoint_within(viewer, config.partial_line_distance))
                .copied()
                .collect();
            if near.is_empty() {
                return Ok(None);
            }
            Ok(Some(RenderInstruction::Lines(LineBatch {
                marker_name: marker.name.clone(),
                color,
                thickness: config.partial_line_thickness,
                blend_mode: params.blend_mode,
                segments: near,
            })))
        }
    }
}
