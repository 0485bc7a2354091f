use std::fmt::{self, Write as _};

use nu_ansi_term::{Color, Style};
use tracing::{
    Event, Metadata, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    field::RecordFields,
    fmt::{
        FmtContext, FormatEvent, FormatFields, FormattedFields,
        format::Writer,
        time::FormatTime,
    },
    registry::LookupSpan,
};

use crate::logger::level::{CRITICAL_FIELD, Severity};

const MESSAGE_FIELD: &str = "message";
const ERROR_FIELD: &str = "error";

/// `<timestamp> <LVL> <file>:<line> > <message> <span fields> <event fields>`
#[derive(Debug, Clone)]
pub(crate) struct ConsoleFormat<T> {
    timer: T,
}

impl<T> ConsoleFormat<T> {
    pub(crate) fn new(timer: T) -> Self {
        Self { timer }
    }
}

impl<S, N, T> FormatEvent<S, N> for ConsoleFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let ansi = writer.has_ansi_escapes();
        let meta = event.metadata();

        let dim = Color::DarkGray.normal();
        if ansi {
            write!(writer, "{}", dim.prefix())?;
        }
        self.timer.format_time(&mut writer)?;
        if ansi {
            write!(writer, "{}", dim.suffix())?;
        }

        let severity = Severity::of(meta).unwrap_or(Severity::Debug);
        write!(
            writer,
            " {} {}{}",
            styled(ansi, level_style(severity), severity.label()),
            styled(ansi, Style::new().bold(), Caller(meta)),
            styled(ansi, Color::Cyan.normal(), " >"),
        )?;

        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            write!(writer, " {}", visitor.message)?;
        }

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                let ext = span.extensions();
                if let Some(fields) = ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, " {fields}")?;
                    }
                }
            }
        }

        if !visitor.fields.is_empty() {
            write!(writer, " ")?;
            visitor.write_fields(&mut writer)?;
        }
        writeln!(writer)
    }
}

/// Span field formatter matching the event field layout.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleFields;

impl<'w> FormatFields<'w> for ConsoleFields {
    fn format_fields<R: RecordFields>(&self, mut writer: Writer<'w>, fields: R) -> fmt::Result {
        let mut visitor = ConsoleVisitor::default();
        fields.record(&mut visitor);
        if !visitor.message.is_empty() {
            visitor.fields.push((MESSAGE_FIELD, quote(&visitor.message)));
        }
        visitor.write_fields(&mut writer)
    }
}

fn level_style(severity: Severity) -> Style {
    match severity {
        Severity::Debug => Color::Yellow.normal(),
        Severity::Info => Color::Green.normal(),
        Severity::Warn => Color::Red.normal(),
        Severity::Error | Severity::Critical => Color::Red.bold(),
    }
}

fn key_style(name: &str) -> Style {
    if name == ERROR_FIELD {
        Color::Red.normal()
    } else {
        Color::Cyan.normal()
    }
}

struct Styled<D> {
    style: Option<Style>,
    value: D,
}

fn styled<D: fmt::Display>(ansi: bool, style: Style, value: D) -> Styled<D> {
    Styled {
        style: ansi.then_some(style),
        value,
    }
}

impl<D: fmt::Display> fmt::Display for Styled<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Some(style) => write!(f, "{}{}{}", style.prefix(), self.value, style.suffix()),
            None => self.value.fmt(f),
        }
    }
}

struct Caller<'a>(&'a Metadata<'a>);

impl fmt::Display for Caller<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.0.file().or(self.0.module_path()).unwrap_or("???");
        match self.0.line() {
            Some(line) => write!(f, "{file}:{line}"),
            None => f.write_str(file),
        }
    }
}

#[derive(Default)]
struct ConsoleVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl ConsoleVisitor {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() != CRITICAL_FIELD {
            self.fields.push((field.name(), value));
        }
    }

    /// `error` first, the rest by name.
    fn sort(&mut self) {
        self.fields
            .sort_by(|a, b| (a.0 != ERROR_FIELD, a.0).cmp(&(b.0 != ERROR_FIELD, b.0)));
    }

    fn write_fields(&mut self, writer: &mut Writer<'_>) -> fmt::Result {
        self.sort();
        let ansi = writer.has_ansi_escapes();
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                writer.write_char(' ')?;
            }
            write!(writer, "{}{value}", styled(ansi, key_style(name), format_args!("{name}=")))?;
        }
        Ok(())
    }
}

impl Visit for ConsoleVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_FIELD {
            self.message.push_str(value);
        } else {
            self.push(field, quote(value));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, quote(&value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == MESSAGE_FIELD {
            let _ = write!(self.message, "{value:?}");
        } else {
            let formatted = format!("{value:?}");
            if is_quoted(&formatted) {
                self.push(field, formatted);
            } else {
                self.push(field, quote(&formatted));
            }
        }
    }
}

/// Already a Debug-escaped string literal.
fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

fn quote(value: &str) -> String {
    let needs = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '"' || c == '=');
    if needs {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}
