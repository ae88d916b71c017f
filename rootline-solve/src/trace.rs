//! Iteration traces and their tabular rendering.
//!
//! A [`Trace`] is the ordered log of rows a solver recorded, one per
//! iteration. It is both the convergence evidence and the source of the final
//! answer: [`Trace::answer`] projects the designated field of the last row.
//!
//! Rows expose their cells by column name through [`Row`], so callers can
//! render a trace without knowing the concrete row type:
//!
//! - [`Trace::table`]: a [`Display`](std::fmt::Display) text table, formatted
//!   per call with [`TableFormat`]
//! - [`Trace::write_csv`]: delimited text with a header line

mod table;

use std::io;

pub use table::{Table, TableFormat};

/// A single recorded iteration with named columns.
pub trait Row {
    /// The value a trace ending in this row reports as its result.
    type Answer;

    /// Column names, in the same order as [`Row::cells`].
    fn columns(&self) -> Vec<String>;

    /// Cell values; `None` marks a cell with no value for this row.
    fn cells(&self) -> Vec<Option<f64>>;

    /// Projects the answer from this row.
    fn answer(&self) -> Self::Answer;
}

/// The ordered rows recorded by a solver run.
///
/// Traces returned by solvers always contain at least one row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize))]
pub struct Trace<R> {
    rows: Vec<R>,
}

impl<R> Trace<R> {
    /// Wraps rows produced by a solver. `rows` must not be empty.
    pub(crate) fn from_rows(rows: Vec<R>) -> Self {
        debug_assert!(!rows.is_empty(), "a trace needs at least one row");
        Self { rows }
    }

    /// Returns the rows in iteration order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Iterates over the rows in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for traces returned by a solver.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the last row.
    #[must_use]
    pub fn last(&self) -> &R {
        &self.rows[self.rows.len() - 1]
    }
}

impl<R: Row> Trace<R> {
    /// Returns the answer held by the last row.
    ///
    /// Pure projection: repeated calls return equal values.
    #[must_use]
    pub fn answer(&self) -> R::Answer {
        self.last().answer()
    }

    /// Returns the column names shared by every row.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.last().columns()
    }

    /// Returns a text table of the trace, rendered with `format`.
    #[must_use]
    pub fn table(&self, format: TableFormat) -> Table<'_, R> {
        Table::new(self, format)
    }

    /// Writes the trace as delimited text: one header line with the column
    /// names, then one line per row. Missing cells are left empty.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn write_csv<W: io::Write>(&self, mut writer: W, delimiter: char) -> io::Result<()> {
        let separator = delimiter.to_string();

        writeln!(writer, "{}", self.columns().join(&separator))?;
        for row in &self.rows {
            let line = row
                .cells()
                .into_iter()
                .map(|cell| cell.map(|value| value.to_string()).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(&separator);
            writeln!(writer, "{line}")?;
        }

        writer.flush()
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(super) struct Pair {
        pub(super) x: f64,
        pub(super) delta: Option<f64>,
    }

    impl Row for Pair {
        type Answer = f64;

        fn columns(&self) -> Vec<String> {
            vec!["x".to_owned(), "|dx|".to_owned()]
        }

        fn cells(&self) -> Vec<Option<f64>> {
            vec![Some(self.x), self.delta]
        }

        fn answer(&self) -> f64 {
            self.x
        }
    }

    pub(super) fn sample() -> Trace<Pair> {
        Trace::from_rows(vec![
            Pair { x: 1.0, delta: None },
            Pair {
                x: 1.5,
                delta: Some(0.5),
            },
            Pair {
                x: 1.25,
                delta: Some(0.25),
            },
        ])
    }

    #[test]
    fn answer_comes_from_last_row() {
        let trace = sample();

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.answer(), 1.25);
        assert_eq!(trace.answer(), trace.answer());
        assert_eq!(trace.last(), &trace.rows()[2]);
    }

    #[test]
    fn rows_iterate_in_order() {
        let xs: Vec<f64> = sample().iter().map(|row| row.x).collect();
        assert_eq!(xs, vec![1.0, 1.5, 1.25]);
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let mut out = Vec::new();
        sample().write_csv(&mut out, ',').expect("write to vec");

        let text = String::from_utf8(out).expect("utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["x,|dx|", "1,", "1.5,0.5", "1.25,0.25"]);
    }

    #[test]
    fn csv_uses_delimiter() {
        let mut out = Vec::new();
        sample().write_csv(&mut out, ';').expect("write to vec");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("x;|dx|\n"));
    }
}
