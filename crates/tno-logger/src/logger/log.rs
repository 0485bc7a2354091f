use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::{Dispatch, dispatcher::DefaultGuard};
use tracing_subscriber::{
    Layer, fmt, fmt::MakeWriter, fmt::time::OffsetTime, layer::SubscriberExt,
};

use crate::logger::{
    config::LoggerConfig,
    error::LoggerError,
    filter::SeverityFilter,
    format::{ConsoleFields, ConsoleFormat},
    level::Severity,
};

/// Receives records only while it is the active dispatcher. Clones share it.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
    level: Severity,
    color: bool,
}

impl Logger {
    pub(crate) fn new<W>(cfg: &LoggerConfig, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let level = cfg.severity();
        let fmt_layer = fmt::layer()
            .fmt_fields(ConsoleFields)
            .event_format(ConsoleFormat::new(mk_timer()))
            .with_ansi(cfg.color)
            .with_writer(writer)
            .with_filter(SeverityFilter::new(level));

        let subscriber = tracing_subscriber::registry().with(fmt_layer);
        Self {
            dispatch: Dispatch::new(subscriber),
            level,
            color: cfg.color,
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Run `f` with this logger as the current thread's default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn set_default(&self) -> DefaultGuard {
        tracing::dispatcher::set_default(&self.dispatch)
    }

    /// Process-wide default; can only ever be set once.
    pub fn install(&self) -> Result<(), LoggerError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|_| LoggerError::AlreadyInitialized)
    }
}

fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}
