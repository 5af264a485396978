//! CLI support: log level selection and logger setup

use clap::ValueEnum;
use log::LevelFilter;

/// Verbosity of the diagnostics written to stderr
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Route `log` records to stderr; stdout stays free for probe output
pub fn init_logger(level: LogLevel) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}: {}", record.level().as_str().to_lowercase(), message))
        })
        .level(level.as_level_filter())
        .chain(std::io::stderr())
        .apply()
}
