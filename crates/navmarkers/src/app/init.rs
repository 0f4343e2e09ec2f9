use cap_std::{
    ambient_authority,
    fs_utf8::{
        camino::{Utf8Path, Utf8PathBuf},
        Dir,
    },
};
use miette::{Context, IntoDiagnostic, Result};

pub const DATA_DIR_ENV_VAR: &str = "NAVMARKERS_DATA_DIR";

/// Where the config file, the log and the marker files of every game session live.
/// `NAVMARKERS_DATA_DIR` wins, otherwise `navmarkers` inside the platform local data dir.
pub fn resolve_data_dir(env_dir: Option<String>) -> Result<Utf8PathBuf> {
    if let Some(env_dir) = env_dir {
        return Ok(Utf8PathBuf::from(env_dir));
    }
    let project_dir = directories_next::ProjectDirs::from("com.navmarkers", "", "navmarkers")
        .ok_or_else(|| miette::miette!("no home directory to keep navmarkers data in"))?;
    Utf8PathBuf::from_path_buf(project_dir.data_local_dir().to_path_buf())
        .map_err(|path| miette::miette!("data dir {} is not valid utf-8", path.display()))
}

/// Creates the directory if needed. Everything navmarkers writes goes through the returned handle.
pub fn open_data_dir(path: &Utf8Path) -> Result<Dir> {
    let authority = ambient_authority();
    Dir::create_ambient_dir_all(path, authority)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create navmarkers directory {path}"))?;
    Dir::open_ambient_dir(path, authority)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to open navmarkers directory {path}"))
}
