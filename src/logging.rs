//! Log output for the terminal game.
//!
//! The UI owns the terminal, so records go to a file instead of stderr. With
//! no file configured nothing is installed and the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::path::PathBuf;

use log::LevelFilter;

use crate::error::LoggingError;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// File to append log records to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.level.parse().ok()
    }
}

/// Install the global logger. Returns `false` when logging stays disabled.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::LogFile {
            path: path.clone(),
            source,
        })?;

    env_logger::Builder::new()
        .filter_level(config.level_filter().unwrap_or(LevelFilter::Info))
        .parse_default_env()
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_parses() {
        let mut config = LoggingConfig::default();
        assert_eq!(config.level_filter(), Some(LevelFilter::Info));
        config.level = "DEBUG".into();
        assert_eq!(config.level_filter(), Some(LevelFilter::Debug));
        config.level = "loud".into();
        assert_eq!(config.level_filter(), None);
    }

    #[test]
    fn test_init_without_file_is_disabled() {
        let config = LoggingConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_init_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("missing").join("game.log")),
            ..LoggingConfig::default()
        };
        assert!(matches!(init(&config), Err(LoggingError::LogFile { .. })));
    }
}
