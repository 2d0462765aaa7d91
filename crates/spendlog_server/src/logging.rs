use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "spendlog.log";

/// Filter used when `RUST_LOG` is not set
fn default_filter(level: &str) -> String {
    format!("spendlog_server={level},spendlog_core=warn,tower_http={level}")
}

/// Initialize logging to stdout and, when `log_dir` is given, to a daily
/// rolling `spendlog.log` in that directory.
///
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
/// The returned guard flushes the file writer on drop and must be kept alive
/// for the lifetime of the server.
pub fn init_logging(level: &str, log_dir: Option<&Path>) -> color_eyre::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()?;

    match log_dir {
        Some(dir) => tracing::info!(
            "spendlog logging initialized (log_dir={})",
            dir.display()
        ),
        None => tracing::info!("spendlog logging initialized"),
    }
    Ok(guard)
}
