use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A named sphere anchored in the world.
/// The name is the identity of the marker inside a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    #[serde(with = "nav_core::serde_glam::dvec3_field")]
    pub position: DVec3,
    /// In meters. Stored as single precision like the game does.
    pub radius: f32,
    pub color: MarkerColor,
}

impl Marker {
    pub fn new(name: impl Into<String>, position: DVec3, radius: f32, color: MarkerColor) -> Self {
        Self {
            name: name.into(),
            position,
            radius,
            color,
        }
    }

    pub fn radius_f64(&self) -> f64 {
        self.radius as f64
    }

    /// Distance between `point` and the center of the marker.
    pub fn distance_to(&self, point: DVec3) -> f64 {
        point.distance(self.position)
    }

    pub fn contains(&self, point: DVec3) -> bool {
        self.distance_to(point) < self.radius_f64()
    }
}

/// RGBA color. The alpha channel is replaced at render time by the configured alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for MarkerColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl MarkerColor {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl FromStr for MarkerColor {
    type Err = String;

    /// Accepts `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(format!("expected RRGGBB or RRGGBBAA, got `{s}`"));
        }
        let channel = |index: usize| {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16)
                .map_err(|e| format!("invalid color `{s}`: {e}"))
        };
        let a = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, a))
    }
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#ff8000", MarkerColor::rgba(255, 128, 0, 255))]
    #[case("00ff0080", MarkerColor::rgba(0, 255, 0, 128))]
    #[case(" #0A0b0C ", MarkerColor::rgba(10, 11, 12, 255))]
    fn parse_hex_colors(#[case] input: &str, #[case] expected: MarkerColor) {
        assert_eq!(input.parse::<MarkerColor>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("#fff")]
    #[case("gg0000")]
    #[case("#ff00ff00ff")]
    fn reject_bad_colors(#[case] input: &str) {
        assert!(input.parse::<MarkerColor>().is_err());
    }

    #[test]
    fn display_is_parseable() {
        let color = MarkerColor::rgba(1, 2, 3, 4);
        assert_eq!(color.to_string(), "#01020304");
        assert_eq!(color.to_string().parse::<MarkerColor>(), Ok(color));
    }

    #[test]
    fn inside_is_strict() {
        let marker = Marker::new("Alpha", DVec3::ZERO, 100.0, MarkerColor::WHITE);
        assert!(marker.contains(DVec3::new(99.0, 0.0, 0.0)));
        assert!(!marker.contains(DVec3::new(100.0, 0.0, 0.0)));
    }
}
