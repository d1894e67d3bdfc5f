use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, warn, Level, LevelFilter};
use std::{str::FromStr, sync::Once};

const RUST_LOG_ENV: &str = "RUST_LOG";

fn color_from_level(level: Level) -> ColoredString {
    match level {
        log::Level::Error => "ERROR".red(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Info => "INFO".green(),
        log::Level::Debug => "DEBUG".blue(),
        log::Level::Trace => "TRACE".white(),
    }
}

/// Level requested through `RUST_LOG`, or `info`. An unparseable value is
/// handed back so it can be reported once logging is up.
fn requested_level(raw: Option<&str>) -> (LevelFilter, Option<&str>) {
    match raw {
        None => (LevelFilter::Info, None),
        Some(raw) => match parse_log_level_from_str(raw) {
            Some(level) => (level, None),
            None => (LevelFilter::Info, Some(raw)),
        },
    }
}

fn parse_log_level_from_str(log_level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(log_level.trim()).ok()
}

fn install(log_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stdout())
        .apply()
}

static INIT: Once = Once::new();

/// Installs the console logger, at the level named by `RUST_LOG` or `info`.
/// Later calls do nothing.
pub fn init_logging() {
    INIT.call_once(|| {
        let raw = std::env::var(RUST_LOG_ENV).ok();
        let (log_level, rejected) = requested_level(raw.as_deref());
        if let Err(e) = install(log_level) {
            eprintln!("💥 Failed to initialize logging with level `{log_level}`: {e}");
            return;
        }
        if let Some(rejected) = rejected {
            warn!("Invalid log level set with `{RUST_LOG_ENV}`, got: {rejected}, using info");
        }
        debug!("🪵 Logging initialized with level: {log_level}");
    });
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn falls_back_to_info() {
        assert_eq!(requested_level(None), (LevelFilter::Info, None));
        assert_eq!(requested_level(Some("trace")), (LevelFilter::Trace, None));
        assert_eq!(
            requested_level(Some("loud")),
            (LevelFilter::Info, Some("loud"))
        );
    }

    #[test]
    fn parses_log_levels() {
        assert_eq!(parse_log_level_from_str("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level_from_str(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level_from_str("off"), Some(LevelFilter::Off));
        assert_eq!(parse_log_level_from_str("foobar"), None);
    }

    #[test]
    fn test_color_from_level() {
        assert_eq!(
            color_from_level(Level::Error).to_string(),
            "ERROR".red().to_string()
        );
        assert_eq!(
            color_from_level(Level::Warn).to_string(),
            "WARN".yellow().to_string()
        );
        assert_eq!(
            color_from_level(Level::Info).to_string(),
            "INFO".green().to_string()
        );
        assert_eq!(
            color_from_level(Level::Debug).to_string(),
            "DEBUG".blue().to_string()
        );
        assert_eq!(
            color_from_level(Level::Trace).to_string(),
            "TRACE".white().to_string()
        );
    }
}
