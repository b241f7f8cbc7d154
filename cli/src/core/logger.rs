use crate::core::error::ClirkError;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

pub const LOG_LEVEL_ENV: &str = "LOGGING_LEVEL";

pub struct Logger;

impl Logger {
    /// Installs the global logger. `LOGGING_LEVEL` picks the level (default `info`);
    /// `--debug` raises it to at least `debug`.
    pub fn init(debug: bool) -> Result<(), ClirkError> {
        let configured = std::env::var(LOG_LEVEL_ENV).ok();
        let mut level = parse_level(configured.as_deref())?;
        if debug && level < LevelFilter::Debug {
            level = LevelFilter::Debug;
        }

        let mut builder = Builder::new();
        builder
            .filter_level(level)
            .format(|buf, record| {
                if record.level() == Level::Info {
                    writeln!(buf, "{}", record.args())
                } else {
                    writeln!(
                        buf,
                        "{}: {}",
                        record.level().as_str().to_lowercase(),
                        record.args()
                    )
                }
            })
            .target(env_logger::Target::Stderr);

        // A second init (e.g. from tests) keeps the first logger.
        let _ = builder.try_init();
        Ok(())
    }
}

/// Accepts only the known level names; anything else is a configuration error.
pub fn parse_level(value: Option<&str>) -> Result<LevelFilter, ClirkError> {
    let Some(raw) = value else {
        return Ok(LevelFilter::Info);
    };

    match raw.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ClirkError::Config(format!(
            "{LOG_LEVEL_ENV} must be one of off, error, warn, info, debug, trace (got '{raw}')"
        ))),
    }
}
