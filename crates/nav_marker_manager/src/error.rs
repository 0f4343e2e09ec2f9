/// Every failure the marker engine reports to its caller.
/// None of them is fatal to the host session.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum NavMarkerError {
    #[error("a marker named `{0}` already exists")]
    #[diagnostic(code(navmarkers::duplicate_name))]
    DuplicateName(String),

    #[error("no marker named `{0}`")]
    #[diagnostic(code(navmarkers::not_found))]
    NotFound(String),

    #[error("marker name cannot be empty")]
    #[diagnostic(code(navmarkers::empty_name))]
    EmptyName,

    #[error("invalid sphere geometry: radius {radius}, {phi_segments}x{theta_segments} segments")]
    #[diagnostic(
        code(navmarkers::invalid_geometry),
        help("radius must be a finite number above zero and both segment counts at least 1")
    )]
    InvalidGeometryParameters {
        radius: f64,
        phi_segments: u32,
        theta_segments: u32,
    },

    #[error("saved marker data is unreadable: {0}")]
    #[diagnostic(code(navmarkers::malformed_persisted_state))]
    MalformedPersistedState(#[source] serde_json::Error),

    #[error("failed to access marker file `{file}`")]
    #[diagnostic(code(navmarkers::io))]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = NavMarkerError> = std::result::Result<T, E>;
