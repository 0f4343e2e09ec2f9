use clap::Parser;
use glam::DVec3;
use miette::{Context, IntoDiagnostic, Result};
use nav_core::trace::install_tracing;
use nav_marker_manager::{
    DirPersistence, MarkerPersistence, NavMarkerError, NavMarkerSession, Ray,
};
use nav_marker_models::config::NavMarkerConfig;
use tracing::{error, info};

mod cli;
mod config_file;
mod init;
mod renderer;

use cli::{parse_add_args, CliArgs, Command, Setting};
use config_file::load_config;
use init::{open_data_dir, resolve_data_dir, DATA_DIR_ENV_VAR};
use renderer::ConsoleRenderer;

pub fn start_navmarkers() -> Result<()> {
    let args = CliArgs::parse();
    let navmarkers_path = resolve_data_dir(std::env::var(DATA_DIR_ENV_VAR).ok())?;
    let navmarkers_dir = open_data_dir(&navmarkers_path)?;

    let log_file_flush_guard =
        install_tracing(&navmarkers_dir).wrap_err("failed to install tracing")?;
    info!(path = %navmarkers_path, session = %args.session, "starting navmarkers");

    let config = load_config(&navmarkers_dir);
    let persistence = DirPersistence::new(
        navmarkers_dir
            .try_clone()
            .into_diagnostic()
            .wrap_err("failed to clone navmarkers dir")?,
        &args.session,
    );
    info!(file = persistence.file_name(), "marker file of the session");
    let mut session = NavMarkerSession::new(persistence);
    session.load();

    let result = execute(&mut session, &config, args.command);
    // the session ends here, so whatever is still queued is written now
    if session.is_save_queued() {
        if let Err(e) = session.save() {
            error!(?e, "failed to save marker data");
        }
    }
    std::mem::drop(log_file_flush_guard);

    for line in result? {
        println!("{line}");
    }
    Ok(())
}

/// Runs one command against the session and returns what should be shown to the player.
fn execute<P: MarkerPersistence>(
    session: &mut NavMarkerSession<P>,
    config: &NavMarkerConfig,
    command: Command,
) -> Result<Vec<String>> {
    let lines = match command {
        Command::Add {
            first,
            second,
            at,
            color,
        } => {
            let (name, radius) = parse_add_args(&first, &second).map_err(|e| miette::miette!(e))?;
            session
                .add_marker(&name, at, radius as f32, color)
                .wrap_err("Add Marker failed")?;
            vec![format!("Added a new marker: Radius = {radius}, Name = {name}")]
        }
        Command::Remove { name } => {
            let name = name.trim_matches('"');
            let Some(marker) = session.store().find_by_name_ignore_case(name) else {
                return Err(NavMarkerError::NotFound(name.to_string()))
                    .wrap_err("Remove Marker failed");
            };
            let exact_name = marker.name.clone();
            session.remove_marker(&exact_name)?;
            vec![format!("Removed nav marker: Name = {exact_name}")]
        }
        Command::List => {
            let mut lines = vec!["Active Nav Markers:".to_string()];
            lines.extend(
                session
                    .list_markers()
                    .enumerate()
                    .map(|(index, marker)| format!("{}. {}", index + 1, marker.name)),
            );
            lines
        }
        Command::Toggle { setting, state } => {
            let flags = session.display_flags();
            let (label, current) = match setting {
                Setting::Enabled => ("Nav markers", session.is_enabled()),
                Setting::CloseOnly => ("Show only close markers", flags.show_only_close),
                Setting::Partial => ("Show partial markers", flags.show_partial),
            };
            let next = state.unwrap_or(!current);
            match setting {
                Setting::Enabled => session.set_enabled(next),
                Setting::CloseOnly => session.set_show_only_close(next),
                Setting::Partial => session.set_show_partial(next),
            }
            vec![format!("{label}: {}", if next { "on" } else { "off" })]
        }
        Command::Render { viewer } => {
            let mut renderer = ConsoleRenderer::default();
            session.tick(viewer, config, &mut renderer);
            if !session.is_enabled() {
                vec!["Nav markers are disabled".to_string()]
            } else {
                renderer.describe()
            }
        }
        Command::Intersect { from, direction } => {
            let ray = Ray::new(from, direction)
                .ok_or_else(|| miette::miette!("view direction cannot be zero"))?;
            match session.query_nearest_intersection(&ray) {
                Some(hit) => vec![
                    format!(
                        "Intersected {} marker at distance of {}m",
                        hit.marker_name, hit.distance
                    ),
                    format!(
                        "{} at {} ({}), color {}",
                        hit.waypoint_name(),
                        format_position(hit.point),
                        hit.waypoint_description(),
                        hit.color
                    ),
                ],
                None => vec!["No marker in the view direction".to_string()],
            }
        }
    };
    Ok(lines)
}

fn format_position(position: DVec3) -> String {
    format!("{:.2},{:.2},{:.2}", position.x, position.y, position.z)
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use super::*;
    use nav_marker_models::{data::NavMarkerData, marker::MarkerColor};
    use rstest::{fixture, rstest};

    #[derive(Default)]
    struct MemoryPersistence(RefCell<Option<NavMarkerData>>);

    impl MarkerPersistence for MemoryPersistence {
        fn load(&self) -> nav_marker_manager::Result<Option<NavMarkerData>> {
            Ok(self.0.borrow().clone())
        }

        fn save(&self, data: &NavMarkerData) -> nav_marker_manager::Result<()> {
            *self.0.borrow_mut() = Some(data.clone());
            Ok(())
        }
    }

    #[fixture]
    fn session() -> NavMarkerSession<MemoryPersistence> {
        NavMarkerSession::new(MemoryPersistence::default())
    }

    fn add(first: &str, second: &str, at: DVec3) -> Command {
        Command::Add {
            first: first.to_string(),
            second: second.to_string(),
            at,
            color: MarkerColor::WHITE,
        }
    }

    fn run(session: &mut NavMarkerSession<MemoryPersistence>, command: Command) -> Result<Vec<String>> {
        execute(session, &NavMarkerConfig::default(), command)
    }

    #[rstest]
    fn add_takes_the_range_in_kilometers(mut session: NavMarkerSession<MemoryPersistence>) {
        let lines = run(&mut session, add("Home", "2.5", DVec3::ZERO)).unwrap();
        assert_eq!(lines, vec!["Added a new marker: Radius = 2500, Name = Home"]);
        assert_eq!(session.store().find_by_name("Home").unwrap().radius, 2500.0);
        assert!(session.is_save_queued());
    }

    #[rstest]
    fn numbered_listing(mut session: NavMarkerSession<MemoryPersistence>) {
        run(&mut session, add("1", "Alpha", DVec3::ZERO)).unwrap();
        run(&mut session, add("Beta", "1", DVec3::ONE)).unwrap();
        let lines = run(&mut session, Command::List).unwrap();
        assert_eq!(lines, vec!["Active Nav Markers:", "1. Alpha", "2. Beta"]);
    }

    #[rstest]
    fn duplicate_add_fails(mut session: NavMarkerSession<MemoryPersistence>) {
        run(&mut session, add("1", "Alpha", DVec3::ZERO)).unwrap();
        assert!(run(&mut session, add("2", "Alpha", DVec3::ONE)).is_err());
        assert_eq!(session.store().len(), 1);
    }

    #[rstest]
    fn remove_ignores_case(mut session: NavMarkerSession<MemoryPersistence>) {
        run(&mut session, add("1", "Alpha", DVec3::ZERO)).unwrap();
        let lines = run(&mut session, Command::Remove { name: "ALPHA".to_string() }).unwrap();
        assert_eq!(lines, vec!["Removed nav marker: Name = Alpha"]);
        assert!(session.store().is_empty());
        assert!(run(&mut session, Command::Remove { name: "alpha".to_string() }).is_err());
    }

    #[rstest]
    #[case(Setting::Enabled)]
    #[case(Setting::CloseOnly)]
    #[case(Setting::Partial)]
    fn toggle_flips_or_sets(mut session: NavMarkerSession<MemoryPersistence>, #[case] setting: Setting) {
        let on = run(&mut session, Command::Toggle { setting, state: None }).unwrap();
        assert!(on[0].ends_with(": on"));
        let still_on = run(&mut session, Command::Toggle { setting, state: Some(true) }).unwrap();
        assert!(still_on[0].ends_with(": on"));
        let off = run(&mut session, Command::Toggle { setting, state: None }).unwrap();
        assert!(off[0].ends_with(": off"));
        assert!(session.is_save_queued());
    }

    #[rstest]
    fn render_only_when_enabled(mut session: NavMarkerSession<MemoryPersistence>) {
        run(&mut session, add("1", "Alpha", DVec3::ZERO)).unwrap();
        let viewer = DVec3::new(5000.0, 0.0, 0.0);
        let disabled = run(&mut session, Command::Render { viewer }).unwrap();
        assert_eq!(disabled, vec!["Nav markers are disabled"]);
        // the render tick wrote the queued save
        assert!(!session.is_save_queued());

        session.set_enabled(true);
        let enabled = run(&mut session, Command::Render { viewer }).unwrap();
        assert_eq!(enabled.len(), 1);
        assert!(enabled[0].starts_with("Alpha: sphere of 1000m"));
    }

    #[rstest]
    fn intersect_prints_the_waypoint(mut session: NavMarkerSession<MemoryPersistence>) {
        run(&mut session, add("1", "Alpha", DVec3::new(0.0, 0.0, 10_000.0))).unwrap();
        let lines = run(
            &mut session,
            Command::Intersect {
                from: DVec3::ZERO,
                direction: DVec3::new(0.0, 0.0, 2.0),
            },
        )
        .unwrap();
        assert_eq!(lines[0], "Intersected Alpha marker at distance of 9000m");
        assert!(lines[1].starts_with("Intercept (Alpha) at 0.00,0.00,9000.00"));

        let miss = run(
            &mut session,
            Command::Intersect {
                from: DVec3::ZERO,
                direction: DVec3::X,
            },
        )
        .unwrap();
        assert_eq!(miss, vec!["No marker in the view direction"]);
        assert!(run(
            &mut session,
            Command::Intersect {
                from: DVec3::ZERO,
                direction: DVec3::ZERO,
            },
        )
        .is_err());
    }
}
