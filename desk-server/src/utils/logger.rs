//! Logging Infrastructure
//!
//! Structured logging for development (pretty, stdout) and production
//! (JSON, optionally to a daily rolling file).

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (`info`, text, stdout)
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},sqlx=warn,tower_http=info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_dir = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str());

    match (file_dir, json) {
        (Some(dir), true) => {
            let appender = tracing_appender::rolling::daily(dir, "desk-server");
            builder.json().with_writer(appender).init();
        }
        (Some(dir), false) => {
            let appender = tracing_appender::rolling::daily(dir, "desk-server");
            builder.with_ansi(false).with_writer(appender).init();
        }
        (None, true) => builder.json().init(),
        (None, false) => builder.init(),
    }
}
