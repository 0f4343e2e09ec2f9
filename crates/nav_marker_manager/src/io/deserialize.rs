use cap_std::fs_utf8::Dir;
use nav_marker_models::data::NavMarkerData;
use tracing::{info, instrument};

use crate::error::{NavMarkerError, Result};

#[instrument(skip_all, fields(file_name = %file_name))]
pub(crate) fn load_marker_data_from_dir(dir: &Dir, file_name: &str) -> Result<Option<NavMarkerData>> {
    let json = match dir.read_to_string(file_name) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no saved markers yet");
            return Ok(None);
        }
        Err(source) => {
            return Err(NavMarkerError::Io {
                file: file_name.to_string(),
                source,
            })
        }
    };
    let data: NavMarkerData =
        serde_json::from_str(&json).map_err(NavMarkerError::MalformedPersistedState)?;
    info!(
        "Loaded {} markers, enabled: {}",
        data.markers.len(),
        data.enabled
    );
    Ok(Some(data))
}
