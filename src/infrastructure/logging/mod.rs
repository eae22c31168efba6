//! Logging infrastructure with file output support for production.

use crate::infrastructure::config::{paths, LoggingConfig};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn console_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level {:?}: {}, using info", level, e);
        EnvFilter::new("info")
    })
}

/// Initialize logging with console and optional file output.
///
/// In production mode logs are also written to a daily rotating file under
/// the `logs` directory of the platform config directory.
pub fn setup(config: &LoggingConfig) {
    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter(&config.level));

    let file_layer = if config.production {
        let log_dir = paths::log_dir();

        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!(
                "Warning: Failed to create log directory {:?}: {}",
                log_dir, e
            );
            None
        } else {
            let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "foyer.log");

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false) // No ANSI colors in file output
                    .with_writer(file_appender)
                    .with_filter(EnvFilter::new("info")),
            )
        }
    } else {
        None
    };

    // A global subscriber may already be installed by an embedding application
    let installed = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
    if let Err(e) = installed {
        eprintln!("Warning: logging already initialized: {}", e);
        return;
    }

    if config.production {
        tracing::info!("File logging enabled: {:?}", paths::log_dir());
    }
    tracing::info!("Logging initialized (production={})", config.production);
}

