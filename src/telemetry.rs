use crate::config::LogConfig;
use color_eyre::Result;
use std::fs::create_dir_all;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber, writing to `<dir>/<file_name>`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a subscriber
/// is already installed.
pub fn setup_logger(config: &LogConfig) -> Result<()> {
    create_dir_all(&config.dir)?;

    let logfile = if cfg!(debug_assertions) {
        rolling::daily(&config.dir, &config.file_name)
    } else {
        rolling::never(&config.dir, &config.file_name)
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "bunyan")]
    {
        use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

        let formatter = BunyanFormattingLayer::new(env!("CARGO_PKG_NAME").into(), logfile);
        tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(formatter)
            .try_init()?;
    }

    #[cfg(not(feature = "bunyan"))]
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(logfile),
        )
        .try_init()?;

    Ok(())
}
