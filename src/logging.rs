use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Stdout plus a daily-rolling file under `log_dir`.
///
/// The returned guard flushes the file writer on drop, keep it alive for
/// the whole process.
pub fn init(log_dir: &str) -> Result<WorkerGuard, TryInitError> {
    let file_appender = tracing_appender::rolling::daily(log_dir, "intern-backend.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()?;

    Ok(guard)
}

pub fn init_stdout() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_target(false))
        .try_init()
}
