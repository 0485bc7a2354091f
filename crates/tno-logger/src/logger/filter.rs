use tracing::Metadata;
use tracing_subscriber::layer::{Context, Filter};

use crate::logger::level::Severity;

/// Lets through events at or above the threshold. Spans always pass, their
/// fields are context for whatever gets emitted inside them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SeverityFilter {
    threshold: Severity,
}

impl SeverityFilter {
    pub(crate) fn new(threshold: Severity) -> Self {
        Self { threshold }
    }
}

impl<S> Filter<S> for SeverityFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        meta.is_span() || Severity::of(meta).is_some_and(|sev| sev >= self.threshold)
    }
}
