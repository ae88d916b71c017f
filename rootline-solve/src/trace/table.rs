use std::fmt;

use super::{Row, Trace};

/// Formatting options for rendering a [`Trace`] as a text table.
///
/// Construct with [`TableFormat::new`] and chain builder methods as needed.
/// Options apply to a single rendering; nothing is stored globally.
///
/// # Example
///
/// ```ignore
/// println!("{}", trace.table(TableFormat::new().decimals(8).numbered()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    decimals: usize,
    numbered: bool,
    columns: Option<Vec<usize>>,
}

impl TableFormat {
    /// Creates a format with defaults: 6 decimals, no row numbers, all columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decimals: 6,
            numbered: false,
            columns: None,
        }
    }

    /// Sets the number of digits printed after the decimal point.
    #[must_use]
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Prefixes each row with its 0-based iteration number.
    #[must_use]
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Renders only the columns at the given indices, in the given order.
    ///
    /// Indices past the last column are ignored.
    #[must_use]
    pub fn columns(mut self, indices: &[usize]) -> Self {
        self.columns = Some(indices.to_vec());
        self
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// A trace paired with a [`TableFormat`], ready for display.
///
/// Created by [`Trace::table`]. Cells are right-aligned under their headers;
/// missing cells print as `-`.
#[derive(Debug)]
pub struct Table<'a, R> {
    trace: &'a Trace<R>,
    format: TableFormat,
}

impl<'a, R: Row> Table<'a, R> {
    pub(super) fn new(trace: &'a Trace<R>, format: TableFormat) -> Self {
        Self { trace, format }
    }

    /// Indices of the columns to render.
    fn selected(&self, available: usize) -> Vec<usize> {
        match &self.format.columns {
            Some(indices) => indices.iter().copied().filter(|&i| i < available).collect(),
            None => (0..available).collect(),
        }
    }
}

impl<R: Row> fmt::Display for Table<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.trace.columns();
        let selected = self.selected(columns.len());

        let mut header: Vec<String> = selected.iter().map(|&i| columns[i].clone()).collect();
        let mut body: Vec<Vec<String>> = self
            .trace
            .iter()
            .map(|row| {
                let cells = row.cells();
                selected
                    .iter()
                    .map(|&i| match cells.get(i).copied().flatten() {
                        Some(value) => format!("{value:.prec$}", prec = self.format.decimals),
                        None => "-".to_owned(),
                    })
                    .collect()
            })
            .collect();

        if self.format.numbered {
            header.insert(0, "k".to_owned());
            for (k, line) in body.iter_mut().enumerate() {
                line.insert(0, k.to_string());
            }
        }

        let widths: Vec<usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                body.iter()
                    .map(|line| line[i].chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_line(f, &header, &widths)?;
        for line in &body {
            writeln!(f)?;
            write_line(f, line, &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            write!(f, "  ")?;
        }
        write!(f, "{cell:>width$}")?;
    }
    Ok(())
}
