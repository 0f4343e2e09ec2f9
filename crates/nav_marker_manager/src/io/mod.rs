//! Saving and loading the markers of a game session.
//! The engine only knows the [MarkerPersistence] trait, the host decides where the data lives.

mod deserialize;
mod serialize;

use cap_std::fs_utf8::Dir;
use nav_core::sanitize_file_name;
use nav_marker_models::data::NavMarkerData;

use crate::error::Result;

pub trait MarkerPersistence {
    /// `Ok(None)` when nothing was saved yet for this session.
    fn load(&self) -> Result<Option<NavMarkerData>>;
    /// Replaces whatever was saved before.
    fn save(&self, data: &NavMarkerData) -> Result<()>;
}

/// One json file per game session, inside the data directory.
pub struct DirPersistence {
    dir: Dir,
    file_name: String,
}

impl DirPersistence {
    pub fn new(dir: Dir, session_name: &str) -> Self {
        Self {
            dir,
            file_name: data_file_name(session_name),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl MarkerPersistence for DirPersistence {
    fn load(&self) -> Result<Option<NavMarkerData>> {
        deserialize::load_marker_data_from_dir(&self.dir, &self.file_name)
    }

    fn save(&self, data: &NavMarkerData) -> Result<()> {
        serialize::save_marker_data_to_dir(data, &self.dir, &self.file_name)
    }
}

/// `NavMarkers<session>.json`, without the characters that are invalid in a file name.
pub fn data_file_name(session_name: &str) -> String {
    format!("NavMarkers{}.json", sanitize_file_name(session_name))
}
