use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    fmt::time::FormatTime,
    EnvFilter,
};
use tracing_subscriber::fmt::format::Writer;

const DEFAULT_FILTER: &str = "feedback_pages=info,tower_http=info";

/// Local wall-clock timestamps, 24-hour format.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the JSON log subscriber. Keep the guard alive for the life of the
/// process, dropping it flushes and stops the background writer.
pub fn init_tracing() -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());

    // RUST_LOG=feedback_pages=debug,tower_http=debug
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .json()
        .with_timer(LocalTimer)
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_span_list(true)
        .init();

    guard
}
