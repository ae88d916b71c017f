use log::Level;
use rootline_core::Observer;
use rootline_solve::{Event, Row};

/// Logs every recorded row through the [`log`] facade.
///
/// Each event becomes one record of the form
/// `<name>: iter <n>: <column>=<value>, ...`, with `-` for missing cells.
/// Rows are logged at [`Level::Debug`] unless configured otherwise, and
/// formatting is skipped when the level is disabled. Never requests an
/// action.
#[derive(Debug, Clone)]
pub struct LogObserver {
    name: String,
    level: Level,
}

impl LogObserver {
    /// Creates an observer that prefixes its records with `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Debug,
        }
    }

    /// Sets the level records are logged at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the record prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formats one event as a log line.
    fn line<R: Row>(&self, event: &Event<'_, R>) -> String {
        let cells = event
            .row
            .columns()
            .into_iter()
            .zip(event.row.cells())
            .map(|(column, cell)| match cell {
                Some(value) => format!("{column}={value}"),
                None => format!("{column}=-"),
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("{}: iter {}: {cells}", self.name, event.iter)
    }
}

impl<R: Row, A> Observer<Event<'_, R>, A> for LogObserver {
    fn observe(&mut self, event: &Event<'_, R>) -> Option<A> {
        if log::log_enabled!(self.level) {
            log::log!(self.level, "{}", self.line(event));
        }
        None
    }
}
