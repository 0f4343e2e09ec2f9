use serde::{
    de::{Error, SeqAccess, Visitor},
    Deserialize, Serialize,
};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DVec3(pub glam::DVec3);

impl From<DVec3> for glam::DVec3 {
    fn from(src: DVec3) -> glam::DVec3 {
        src.0
    }
}

impl From<glam::DVec3> for DVec3 {
    fn from(src: glam::DVec3) -> DVec3 {
        DVec3(src)
    }
}

struct DVec3Deserializer;
impl<'de> Visitor<'de> for DVec3Deserializer {
    type Value = DVec3;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of three numbers [x, y, z]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let x: f64 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let y: f64 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(1, &self))?;
        let z: f64 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(2, &self))?;
        if seq.next_element::<f64>()?.is_some() {
            return Err(A::Error::invalid_length(4, &self));
        }
        Ok(DVec3(glam::DVec3 { x, y, z }))
    }
}

impl Serialize for DVec3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.0.x)?;
        seq.serialize_element(&self.0.y)?;
        seq.serialize_element(&self.0.z)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for DVec3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DVec3Deserializer)
    }
}
