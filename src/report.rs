//! Semicolon-separated benchmark table, one row per graph.

use std::io::{self, Write};
use std::path::PathBuf;

const HEADER: &str = "File; Clique; Time (sec)";
const WARNING: &str = "*** WARNING: incorrect clique ***";

/// Outcome of searching one graph file.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub file: PathBuf,
    pub clique_size: usize,
    pub seconds: f64,
    /// Whether the reported clique passed pairwise verification.
    pub verified: bool,
}

pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Writes the header and returns a writer ready for rows.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{}", HEADER)?;
        Ok(Self { out })
    }

    /// Appends one row, preceded by a warning line if verification failed.
    pub fn record(&mut self, row: &ReportRow) -> io::Result<()> {
        if !row.verified {
            writeln!(self.out, "{}", WARNING)?;
        }
        writeln!(
            self.out,
            "{}; {}; {:.3}",
            row.file.display(),
            row.clique_size,
            row.seconds
        )
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
