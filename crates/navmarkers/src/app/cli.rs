//! Command line of the host, standing in for the in-game chat commands and terminal buttons.

use clap::{Parser, Subcommand, ValueEnum};
use glam::DVec3;
use nav_marker_models::marker::MarkerColor;

/// Meters in a kilometer. Ranges are typed in kilometers, markers are stored in meters.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

#[derive(Parser, Debug)]
#[command(name = "navmarkers", about = "Spherical navigation markers for a game session")]
pub struct CliArgs {
    /// Game session. Every session has its own markers.
    #[arg(long, short, default_value = "default")]
    pub session: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a marker: `add <range_km> <name>` or `add <name> <range_km>`.
    Add {
        first: String,
        second: String,
        /// Center of the marker, `x,y,z` in meters.
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        at: DVec3,
        /// `RRGGBB` or `RRGGBBAA`.
        #[arg(long, default_value = "ffffff")]
        color: MarkerColor,
    },
    /// Remove a marker. The name is not case sensitive.
    Remove { name: String },
    /// List the markers, in the order they were added.
    List,
    /// Switch a display setting. Without a state, the setting is flipped.
    Toggle {
        setting: Setting,
        state: Option<bool>,
    },
    /// Draw one frame as seen from the viewer position.
    Render {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        viewer: DVec3,
    },
    /// Find where a view direction first crosses a marker, and print the waypoint to create there.
    Intersect {
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        from: DVec3,
        #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
        direction: DVec3,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Enabled,
    CloseOnly,
    Partial,
}

/// `x,y,z` with optional spaces.
pub fn parse_position(s: &str) -> Result<DVec3, String> {
    let coordinates = s
        .split(',')
        .map(|c| c.trim().parse::<f64>().map_err(|e| format!("invalid coordinate `{c}`: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match coordinates[..] {
        [x, y, z] if x.is_finite() && y.is_finite() && z.is_finite() => Ok(DVec3::new(x, y, z)),
        [_, _, _] => Err(format!("coordinates must be finite, got `{s}`")),
        _ => Err(format!("expected x,y,z, got `{s}`")),
    }
}

/// Name and radius in meters out of the two arguments of `add`.
/// The range is looked for first in the first argument, then in the second one.
pub fn parse_add_args(first: &str, second: &str) -> Result<(String, f64), String> {
    let (name, range) = match first.trim().parse::<f64>() {
        Ok(range) => (second, range),
        Err(_) => match second.trim().parse::<f64>() {
            Ok(range) => (first, range),
            Err(_) => {
                return Err(format!(
                    "no range in `{first}` or `{second}`, expected a number of kilometers"
                ))
            }
        },
    };
    Ok((name.trim_matches('"').to_string(), range * METERS_PER_KILOMETER))
}
