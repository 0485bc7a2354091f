use tracing::{Level, Metadata};

/// Field name marking an `ERROR` event as [`Severity::Critical`].
pub const CRITICAL_FIELD: &str = "critical";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    /// Highest severity. A label only: nothing here ever exits the process.
    Critical,
}

impl Severity {
    /// Resolve a level name; unknown names fall back to [`Severity::Info`].
    pub fn from_name(name: &str) -> Self {
        let norm = name.trim().to_ascii_lowercase();
        match norm.as_str() {
            "debug" => Severity::Debug,
            "info" => Severity::Info,
            "warn" => Severity::Warn,
            "error" => Severity::Error,
            "critical" => Severity::Critical,
            _ => Severity::Info,
        }
    }

    /// Severity of a `tracing` callsite, `None` for `TRACE`.
    pub fn of(meta: &Metadata<'_>) -> Option<Self> {
        match *meta.level() {
            Level::TRACE => None,
            Level::DEBUG => Some(Severity::Debug),
            Level::INFO => Some(Severity::Info),
            Level::WARN => Some(Severity::Warn),
            Level::ERROR if meta.fields().field(CRITICAL_FIELD).is_some() => {
                Some(Severity::Critical)
            }
            Level::ERROR => Some(Severity::Error),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DBG",
            Severity::Info => "INF",
            Severity::Warn => "WRN",
            Severity::Error => "ERR",
            Severity::Critical => "CRT",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}
