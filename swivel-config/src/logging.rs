use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// The `[logging]` table of `rotation.toml`. Levels are written the way `log` names
/// them, `level = "debug"` and `level = "DEBUG"` both work.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Leave the global logger alone, e.g. when the host installs its own
    pub enabled: bool,
    pub level: LevelFilter,
    /// Let `RUST_LOG` override `level`
    pub env: bool,
    pub threads: bool,
    pub color: bool,
    pub timestamp: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelFilter::Info,
            env: false,
            threads: true,
            color: true,
            timestamp: true,
        }
    }
}

/// Installs the global logger. Does nothing when logging is disabled.
pub fn init_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut logger = simple_logger::SimpleLogger::new()
        .with_level(config.level)
        .with_colors(config.color)
        .with_threads(config.threads);

    logger = if config.timestamp {
        logger.with_timestamp_format(time::macros::format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
    } else {
        logger.without_timestamps()
    };

    // env only overrides what is already set
    if config.env {
        logger = logger.env();
    }

    logger.init()
}
