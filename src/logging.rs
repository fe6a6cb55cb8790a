//! Logger setup for the `u-tsp` binary.
//!
//! The library only emits through the `log` facade; installing a logger is
//! left to the executable.

use std::io::{self, Write};

use clap::ValueEnum;
use env_logger::{fmt::Formatter, Builder, Target};
use log::LevelFilter;

/// Verbosity accepted on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Installs a stderr logger printing `LEVEL scope: message` lines.
///
/// `scope` is the emitting module relative to the crate root, e.g. `solver`
/// or `two_opt::runner`; records from the binary itself use `u-tsp`.
pub fn init_logger(level: LogLevel, timestamp: bool) -> io::Result<()> {
    Builder::new()
        .filter_level(level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf: &mut Formatter, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            writeln!(
                buf,
                "{:<5} {}: {}",
                record.level(),
                scope(record.target()),
                record.args()
            )
        })
        .try_init()
        .map_err(io::Error::other)
}

/// Log target with the crate prefix removed.
fn scope(target: &str) -> &str {
    if target == CRATE {
        return "u-tsp";
    }
    target
        .strip_prefix(CRATE)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

const CRATE: &str = "u_tsp";

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Off.to_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(LogLevel::from_str("debug", true), Ok(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("warning", true), Ok(LogLevel::Warn));
        assert!(LogLevel::from_str("loud", true).is_err());
    }

    #[test]
    fn test_scope_strips_crate_prefix() {
        assert_eq!(scope("u_tsp::solver"), "solver");
        assert_eq!(scope("u_tsp::two_opt::runner"), "two_opt::runner");
        assert_eq!(scope("u_tsp"), "u-tsp");
        assert_eq!(scope("env_logger"), "env_logger");
        assert_eq!(scope("u_tspx::a"), "u_tspx::a");
    }

    #[test]
    fn test_level_padding() {
        assert_eq!(format!("{:<5}|", Level::Info), "INFO |");
        assert_eq!(format!("{:<5}|", Level::Error), "ERROR|");
    }
}
