use cap_std::fs_utf8::Dir;
use nav_marker_models::data::NavMarkerData;
use tracing::{info, instrument};

use crate::error::{NavMarkerError, Result};

/// Writes the data as pretty json.
/// The content goes to a temporary file first, then replaces the target, so a crash never leaves half a file behind.
#[instrument(skip_all, fields(file_name = %file_name))]
pub(crate) fn save_marker_data_to_dir(
    data: &NavMarkerData,
    dir: &Dir,
    file_name: &str,
) -> Result<()> {
    info!(
        "Saving {} markers, enabled: {}",
        data.markers.len(),
        data.enabled
    );
    let json = serde_json::to_string_pretty(data).map_err(NavMarkerError::MalformedPersistedState)?;
    let temp_name = format!("{file_name}.tmp");
    let io_err = |source| NavMarkerError::Io {
        file: file_name.to_string(),
        source,
    };
    dir.write(&temp_name, json.as_bytes()).map_err(io_err)?;
    dir.rename(&temp_name, dir, file_name).map_err(io_err)?;
    Ok(())
}
