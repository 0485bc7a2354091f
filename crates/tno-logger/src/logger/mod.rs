mod config;
mod error;
mod filter;
mod format;
mod level;
mod log;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{LoggerConfig, LoggerOption, with_color, with_log_level};
pub use error::LoggerError;
pub use level::{CRITICAL_FIELD, Severity};
pub use log::Logger;

/// Build a logger writing to stderr from options applied left to right over
/// the defaults (`info`, no color). Never fails: unknown levels resolve to
/// `info`.
pub fn new_logger(opts: impl IntoIterator<Item = LoggerOption>) -> Logger {
    opts.into_iter().collect::<LoggerConfig>().build()
}
