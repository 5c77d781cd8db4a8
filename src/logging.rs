use std::path::{Path, PathBuf};

use tracing::warn;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("usergql={},tower_http={}", level, level)
}

/// Daily-rotated appender writing next to `path`. Missing directories are
/// created.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "usergql.log".to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
}

/// Initialize the logging system
///
/// Logs go to stderr; with `log_file`, also as JSON lines to a daily-rotated
/// file. If the file cannot be opened the server keeps running with stderr
/// only and says so.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (appender, file_error) = match log_file.as_deref().map(file_appender) {
        Some(Ok(appender)) => (Some(appender), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };
    let file_layer = appender.map(|a| fmt::layer().with_writer(a).with_ansi(false).json());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let (Some(path), Some(e)) = (log_file, file_error) {
        warn!(path = %path.display(), error = %e, "file logging disabled");
    }
}
