//! Latitude/longitude wireframe of a sphere.
//!
//! Point `ptAB` below has the phi value of ring A and the theta value B.
//! For example `pt01` is on the current ring (phi0) at the next theta (theta1).

use std::f64::consts::PI;

use glam::DVec3;
use nav_marker_models::segment::Segment;

use crate::error::{NavMarkerError, Result};

/// Number of segments produced for the given resolution.
pub const fn max_segment_count(phi_segments: u32, theta_segments: u32) -> usize {
    phi_segments as usize * (2 * theta_segments as usize + 1)
}

/// Builds the wireframe of a sphere as a list of segments.
/// phi (polar angle) in [0, pi] is split into `phi_segments` bands, theta (azimuth) in [0, 2pi) into `theta_segments` bands.
/// For every phi band:
/// 1. one line joining the two rings at theta = 0
/// 2. for every theta step, one line joining the two rings at the next theta
/// 3. for every theta step, one line along the lower ring
///
/// The upper ring of a band is the lower ring of the band above it, or the pole for the first band,
/// so it is never emitted twice.
/// The output is a pure function of the inputs, in a stable order.
pub fn generate_sphere_segments(
    center: DVec3,
    radius: f64,
    phi_segments: u32,
    theta_segments: u32,
) -> Result<Vec<Segment>> {
    if !radius.is_finite() || radius <= 0.0 || phi_segments == 0 || theta_segments == 0 {
        return Err(NavMarkerError::InvalidGeometryParameters {
            radius,
            phi_segments,
            theta_segments,
        });
    }
    let mut segments = Vec::with_capacity(max_segment_count(phi_segments, theta_segments));

    let dphi = PI / phi_segments as f64;
    let dtheta = 2.0 * PI / theta_segments as f64;
    let ring_point = |ring_radius: f64, z: f64, theta: f64| {
        center + DVec3::new(ring_radius * theta.cos(), ring_radius * theta.sin(), z)
    };

    let mut phi0: f64 = 0.0;
    let mut z0 = radius * phi0.cos();
    let mut r0 = radius * phi0.sin();
    for _ in 0..phi_segments {
        let phi1 = phi0 + dphi;
        let z1 = radius * phi1.cos();
        let r1 = radius * phi1.sin();

        let mut theta0: f64 = 0.0;
        let pt00 = ring_point(r0, z0, theta0);
        let mut pt10 = ring_point(r1, z1, theta0);
        segments.push(Segment::new(pt00, pt10));

        for _ in 0..theta_segments {
            let theta1 = theta0 + dtheta;
            let pt01 = ring_point(r0, z0, theta1);
            let pt11 = ring_point(r1, z1, theta1);

            segments.push(Segment::new(pt01, pt11));
            segments.push(Segment::new(pt10, pt11));

            theta0 = theta1;
            pt10 = pt11;
        }

        phi0 = phi1;
        z0 = z1;
        r0 = r1;
    }

    Ok(segments)
}
