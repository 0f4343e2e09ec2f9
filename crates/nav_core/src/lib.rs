/*
each part of the mod must have
1. a data model shared by everyone (nav_marker_models)
2. an engine that owns the state (nav_marker_manager)
3. a host that feeds it ticks, rays and config (navmarkers)

*/

pub mod serde_glam;
pub mod trace;

/// Characters that are refused in a file name on at least one of the platforms the game runs on.
const INVALID_FILE_NAME_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Strips every character that cannot appear in a file name.
/// Session names are user provided and are used to build the name of the marker save file.
/// 1. control characters are removed
/// 2. path separators and reserved punctuation are removed
/// 3. everything else (including spaces and non ascii letters) is kept as is
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control() && !INVALID_FILE_NAME_CHARS.contains(c))
        .collect()
}
