/// Emit a record at [`Severity::Critical`](crate::Severity::Critical).
///
/// Expands to an `ERROR` event carrying the `critical` marker field, so it
/// accepts the same fields and message syntax as `tracing::error!` (without a
/// `target:` or `parent:` override). Emitting never terminates the process.
///
/// ```no_run
/// let logger = tno_logger::new_logger([tno_logger::with_log_level("critical")]);
/// logger.in_scope(|| tno_logger::critical!(device = "sda", "disk full"));
/// ```
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        $crate::__tracing::error!(critical = true, $($arg)+)
    };
}
