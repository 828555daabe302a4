use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;

/// Start file logging under `<data_dir>/logs`. The terminal belongs to the TUI, so nothing
/// is written to stdout. Keep the returned guard alive until exit to flush the writer.
pub fn enable_logging(data_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix("weekboard")
        .filename_suffix("log")
        .build(data_dir.join("logs"))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        )))
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}
