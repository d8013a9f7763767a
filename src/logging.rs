//! Logging setup.
//!
//! Uses the log4rs YAML file when it exists, otherwise logs to stderr at a
//! level chosen by the verbosity flag.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Map `-v` occurrences to a log level.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Stderr-only config used when no log config file is present.
pub fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log config: {e}"))?;
    Ok(config)
}

/// Initialise the global logger.
pub fn init_logging(config_file: &Path, verbose: u8) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config_file.display()))?;
        log::debug!("Logging configured from {}", config_file.display());
    } else {
        let level = level_for_verbosity(verbose);
        log4rs::init_config(fallback_config(level)?)
            .map_err(|e| format!("Error initializing log4rs: {e}"))?;
        log::debug!(
            "No log config at {}, logging to stderr at {level}",
            config_file.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_fallback_config() {
        let config = fallback_config(LevelFilter::Info).expect("Error building config");
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }

    #[test]
    fn test_repo_log_config_loads() {
        let config = log4rs::config::load_config_file("log4rs.yml", Default::default())
            .expect("Error loading log4rs.yml");
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }
}
