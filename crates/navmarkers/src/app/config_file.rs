use cap_std::fs_utf8::Dir;
use miette::{IntoDiagnostic, Result, WrapErr};
use nav_marker_models::config::{NavMarkerConfig, CONFIG_FILE_NAME};
use tracing::{info, warn};

/// Reads `navmarkers.toml` from the data dir.
/// A missing file is created with the defaults. A broken file is left alone and the defaults are used.
pub fn load_config(dir: &Dir) -> NavMarkerConfig {
    match dir.read_to_string(CONFIG_FILE_NAME) {
        Ok(text) => match config_from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!(?e, "failed to parse {CONFIG_FILE_NAME}, using default configuration");
                NavMarkerConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no {CONFIG_FILE_NAME} yet, writing the default configuration");
            let config = NavMarkerConfig::default();
            if let Err(e) = save_config(dir, &config) {
                warn!(?e, "failed to write default configuration");
            }
            config
        }
        Err(e) => {
            warn!(?e, "failed to read {CONFIG_FILE_NAME}, using default configuration");
            NavMarkerConfig::default()
        }
    }
}

pub fn save_config(dir: &Dir, config: &NavMarkerConfig) -> Result<()> {
    let serialized_string = toml::to_string(config)
        .into_diagnostic()
        .wrap_err("failed to serialize configuration")?;
    dir.write(CONFIG_FILE_NAME, serialized_string.as_bytes())
        .into_diagnostic()
        .wrap_err("failed to write configuration file")
}

pub fn config_from_toml(text: &str) -> Result<NavMarkerConfig, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod test {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn empty_file_is_the_default() {
        assert_eq!(config_from_toml("").unwrap(), NavMarkerConfig::default());
    }

    #[test]
    fn missing_keys_keep_their_default() {
        let config = config_from_toml(
            r#"
            alpha_value = 90
            enable_solid_render = false
            partial_line_distance = 2500.0
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            NavMarkerConfig {
                alpha_value: 90,
                enable_solid_render: false,
                partial_line_distance: 2500.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn written_config_reads_back() {
        let config = NavMarkerConfig {
            render_after_post_process: true,
            wireframe_width: 0.5,
            close_only_distance: 25_000.0,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(config_from_toml(&text).unwrap(), config);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(config_from_toml("alpha_value = 300").is_err());
        assert!(config_from_toml("enable_solid_render = \"yes\"").is_err());
    }
}
