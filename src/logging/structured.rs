//! Structured logging setup using tracing
//!
//! Human-readable events go to stderr so that `--json` output on stdout stays
//! machine readable. When `logging.local_enabled` is set, the same events are
//! also written as flat JSON lines (one object per event, fields at the top
//! level) so data-quality findings can be filtered with ordinary JSON tools.
//!
//! The filter defaults to `casemap=<level>` and can be replaced wholesale
//! through the `CASEMAP_LOG` environment variable using `EnvFilter` syntax.
//!
//! # Example
//!
//! ```no_run
//! use casemap::logging::init_logging;
//! use casemap::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{CaseMapError, Result};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable holding a full filter directive
pub const FILTER_ENV: &str = "CASEMAP_LOG";

/// File name prefix used by the rolling appender
pub const LOG_FILE_NAME: &str = "casemap.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer flushing until dropped
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber
///
/// `level` is one of trace, debug, info, warn or error and applies to the
/// `casemap` target unless `CASEMAP_LOG` is set. Keep the returned guard
/// alive until the process exits.
///
/// # Errors
///
/// Returns [`CaseMapError::Configuration`] for an unknown level or when the
/// log directory cannot be created.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = build_filter(parse_log_level(level)?);

    let console: BoxedLayer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter.clone())
        .boxed();

    let mut layers = vec![console];
    let mut file_guard = None;

    if config.local_enabled {
        let (layer, guard) = json_file_layer(config, filter)?;
        layers.push(layer);
        file_guard = Some(guard);
    }

    tracing_subscriber::registry().with(layers).init();

    tracing::debug!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        rotation = %config.local_rotation,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("casemap={level}")))
}

fn json_file_layer(config: &LoggingConfig, filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard)> {
    let directory = Path::new(&config.local_path);
    std::fs::create_dir_all(directory).map_err(|e| {
        CaseMapError::Configuration(format!(
            "Failed to create log directory {}: {}",
            directory.display(),
            e
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation(&config.local_rotation),
        directory,
        LOG_FILE_NAME,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

/// Maps a validated `logging.local_rotation` value to the appender rotation
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.parse::<Level>().map_err(|_| {
        CaseMapError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}
