use tracing_appender::non_blocking::WorkerGuard;
use tracing_forest::{printer::Printer, ForestLayer};
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

/// Logs go to stderr, stdout is for the formatted output.
///
/// Keep the returned guard alive until the end of the program, dropping it flushes the log file.
pub fn init() -> Option<WorkerGuard> {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(ForestLayer::from(Printer::new().writer(std::io::stderr)));

    if crate::cli::OPT.save_logs {
        // logging to files
        let file_appender = tracing_appender::rolling::daily("logs", "paradigm.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        subscriber
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        subscriber.init();

        None
    }
}
