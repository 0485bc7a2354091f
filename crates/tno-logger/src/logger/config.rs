use serde::Deserialize;
use tracing_subscriber::fmt::MakeWriter;

use crate::logger::{level::Severity, log::Logger};

/// Level stays a string until build, unknown names never fail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: String,
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: false,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn severity(&self) -> Severity {
        Severity::from_name(&self.level)
    }

    pub fn build(self) -> Logger {
        Logger::new(&self, std::io::stderr)
    }

    pub fn build_with_writer<W>(self, writer: W) -> Logger
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Logger::new(&self, writer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerOption {
    Level(String),
    Color(bool),
}

impl LoggerOption {
    pub fn apply(self, cfg: &mut LoggerConfig) {
        match self {
            LoggerOption::Level(level) => cfg.level = level,
            LoggerOption::Color(enabled) => cfg.color = enabled,
        }
    }
}

/// Set the minimum level: `debug`, `info`, `warn`, `error` or `critical`.
pub fn with_log_level(level: impl Into<String>) -> LoggerOption {
    LoggerOption::Level(level.into())
}

pub fn with_color(enabled: bool) -> LoggerOption {
    LoggerOption::Color(enabled)
}

impl FromIterator<LoggerOption> for LoggerConfig {
    fn from_iter<I: IntoIterator<Item = LoggerOption>>(opts: I) -> Self {
        let mut cfg = LoggerConfig::default();
        for opt in opts {
            opt.apply(&mut cfg);
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.level, "info");
        assert!(!cfg.color);
        assert_eq!(cfg.severity(), Severity::Info);
    }

    #[test]
    fn options_apply_in_order_last_wins() {
        let cfg: LoggerConfig = [
            with_log_level("debug"),
            with_color(true),
            with_log_level("error"),
            with_color(false),
        ]
        .into_iter()
        .collect();

        assert_eq!(cfg.level, "error");
        assert!(!cfg.color);
        assert_eq!(cfg.severity(), Severity::Error);
    }

    #[test]
    fn no_options_equals_explicit_defaults() {
        let empty: LoggerConfig = std::iter::empty::<LoggerOption>().collect();
        let explicit: LoggerConfig = [with_log_level("info"), with_color(false)]
            .into_iter()
            .collect();
        assert_eq!(empty, explicit);
    }

    #[test]
    fn builder_setters() {
        let cfg = LoggerConfig::default().with_level("WARN").with_color(true);
        assert_eq!(cfg.severity(), Severity::Warn);
        assert!(cfg.color);
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let cfg: LoggerConfig = serde_json::from_str(r#"{"color": true}"#).unwrap();
        assert_eq!(cfg.level, "info");
        assert!(cfg.color);

        let cfg: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }

    #[test]
    fn deserialize_unknown_level_is_not_an_error() {
        let cfg: LoggerConfig = serde_json::from_str(r#"{"level": "verbose"}"#).unwrap();
        assert_eq!(cfg.level, "verbose");
        assert_eq!(cfg.severity(), Severity::Info);
    }
}
