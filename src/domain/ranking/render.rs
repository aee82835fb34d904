//! Diagnostic rendering of pipeline tables.
//!
//! Rendering is inspection-only: nothing here feeds back into the
//! computation, and no pipeline stage depends on it.

use std::fmt::Write as _;
use std::io;

use crate::domain::foundation::Table;

use super::pipeline::TraceSink;

/// Renders a table as tab-separated text: a title line, a header row of
/// column labels, then one labeled row per distinct row label with values
/// rounded to 3 decimal places. Missing cells render as `-`.
pub fn render_table(title: &str, table: &Table) -> String {
    let columns = table.columns();

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    let _ = write!(out, "\t");
    for column in &columns {
        let _ = write!(out, "{}\t", column);
    }
    let _ = writeln!(out);

    for row in table.rows() {
        let _ = write!(out, "{}\t", row);
        for column in &columns {
            match table.get(row, column) {
                Some(value) => {
                    let _ = write!(out, "{:.3}\t", value);
                }
                None => {
                    let _ = write!(out, "-\t");
                }
            }
        }
        let _ = writeln!(out);
    }

    out
}

/// A trace sink that renders each stage to an [`io::Write`] stream.
pub struct WriteSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: io::Write> TraceSink for WriteSink<W> {
    fn record(&mut self, stage: &str, table: &Table) {
        // A diagnostic side channel: a failed write must not abort the
        // computation it is observing.
        let _ = writeln!(self.writer, "\n{}", render_table(stage, table));
    }
}

/// A trace sink that emits each stage as a `tracing` debug event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, stage: &str, table: &Table) {
        tracing::debug!(stage, "\n{}", render_table(stage, table));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::LabeledEntry;

    fn sample() -> Table {
        Table::from_entries(vec![
            LabeledEntry::new("A", "c1", 0.12345),
            LabeledEntry::new("A", "c2", 2.0),
            LabeledEntry::new("B", "c1", 0.5),
            LabeledEntry::new("B", "c2", 1.9996),
        ])
        .unwrap()
    }

    #[test]
    fn render_starts_with_the_title() {
        let rendered = render_table("Decision Matrix", &sample());
        assert!(rendered.starts_with("Decision Matrix\n"));
    }

    #[test]
    fn render_lists_columns_in_the_header_row() {
        let rendered = render_table("t", &sample());
        let header = rendered.lines().nth(1).unwrap();
        assert_eq!(header, "\tc1\tc2\t");
    }

    #[test]
    fn render_rounds_values_to_three_decimals() {
        let rendered = render_table("t", &sample());
        assert!(rendered.contains("0.123"));
        assert!(rendered.contains("2.000"));
        assert!(!rendered.contains("0.12345"));
    }

    #[test]
    fn render_labels_each_row() {
        let rendered = render_table("t", &sample());
        let row_a = rendered.lines().nth(2).unwrap();
        assert!(row_a.starts_with("A\t"));
    }

    #[test]
    fn render_marks_missing_cells() {
        let ragged = Table::from_entries(vec![
            LabeledEntry::new("A", "c1", 1.0),
            LabeledEntry::new("B", "c2", 2.0),
        ])
        .unwrap();
        let rendered = render_table("t", &ragged);
        assert!(rendered.contains("-\t"));
    }

    #[test]
    fn write_sink_renders_each_stage() {
        let mut buffer: Vec<u8> = Vec::new();
        {
            let mut sink = WriteSink::new(&mut buffer);
            sink.record("Entropy Vector", &sample());
        }
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Entropy Vector"));
        assert!(text.contains("0.123"));
    }
}
