//! glam types stored as plain `[x, y, z]` sequences in save files.
//! World coordinates of markers can be millions of meters away from the origin,
//! so positions are always kept as f64.

mod dvec3;

pub use dvec3::DVec3;

/// Use with `#[serde(with = "nav_core::serde_glam::dvec3_field")]` on a `glam::DVec3` field.
pub mod dvec3_field {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DVec3;

    pub fn serialize<S>(value: &glam::DVec3, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DVec3(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<glam::DVec3, D::Error>
    where
        D: Deserializer<'de>,
    {
        DVec3::deserialize(deserializer).map(Into::into)
    }
}
