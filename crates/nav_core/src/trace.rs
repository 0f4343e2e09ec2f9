use cap_std::fs_utf8::Dir;
use miette::{IntoDiagnostic, Result, WrapErr};

pub const LOG_FILE_NAME: &str = "navmarkers.log";
pub const LOG_ENV_VAR: &str = "NAVMARKERS_LOG";

/// Installs the global tracing subscriber.
/// Everything is written to `navmarkers.log` inside the data dir. This also serves as a check that the directory is "writeable" by us.
/// The returned guard must be kept alive until the end of the program, otherwise buffered lines are lost.
pub fn install_tracing(data_dir: &Dir) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};
    // get the log level
    let filter_layer = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new("info"))
        .into_diagnostic()
        .wrap_err("failed to build log filter")?;
    let writer = std::io::BufWriter::new(
        data_dir
            .create(LOG_FILE_NAME)
            .into_diagnostic()
            .wrap_err("failed to create navmarkers.log file")?,
    );
    let (nb, guard) = tracing_appender::non_blocking(writer);
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(nb);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("failed to install tracing subscriber")?;
    Ok(guard)
}
