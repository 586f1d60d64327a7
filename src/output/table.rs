//! Fixed-width workflow table
//!
//! ```text
//! NAME                                   RUN_NUMBER   CREATED               STARTED               ENDED                 STATUS
//! myflow                                 3            2023-01-01T00:00:00   2023-01-01T00:01:00   2023-01-01T00:05:00   finished
//! ```
//!
//! Every column is left-justified and padded to its width; longer values are
//! printed in full and push the following columns right.

use crate::reana::workflows::{WorkflowName, WorkflowSummary};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Column headers and their widths, in output order.
pub const COLUMNS: [(&str, usize); 6] = [
    ("NAME", 38),
    ("RUN_NUMBER", 12),
    ("CREATED", 21),
    ("STARTED", 21),
    ("ENDED", 21),
    ("STATUS", 8),
];

/// Writes workflow summaries as a fixed-width text table.
pub struct WorkflowTable<W: Write> {
    out: W,
}

impl<W: Write> WorkflowTable<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header row followed by one row per workflow.
    ///
    /// Returns the number of data rows written.
    pub fn render(&mut self, workflows: &[WorkflowSummary]) -> io::Result<usize> {
        self.write_row(COLUMNS.map(|(header, _)| header))?;

        for workflow in workflows {
            let name = WorkflowName::parse(&workflow.name);
            if name.is_malformed() {
                log::warn!(
                    "Workflow name {} has no run number separator",
                    workflow.name.yellow()
                );
            }
            let (base, run_number) = name.parts();

            self.write_row([
                base,
                run_number,
                workflow.created.as_str(),
                workflow.progress.run_started_at.as_str(),
                workflow.progress.run_finished_at.as_str(),
                workflow.status.as_str(),
            ])?;
        }

        self.out.flush()?;
        Ok(workflows.len())
    }

    fn write_row(&mut self, cells: [&str; 6]) -> io::Result<()> {
        let line = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{}", line)
    }

    /// Consume the table and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
