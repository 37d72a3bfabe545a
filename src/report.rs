//! Console report: one line per modified file and one per failure.

use crate::updater::FileOutcome;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Totals for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries visited, failures included
    pub scanned: usize,
    /// Files rewritten, or that would be rewritten in a dry run
    pub fixed: usize,
    /// Files left alone
    pub unchanged: usize,
    /// Files (or directories) that could not be processed
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Fixed | FileOutcome::WouldFix => self.fixed += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.scanned += 1;
        self.failed += 1;
    }
}

/// Writes the human-readable report lines.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Report a file outcome. Unchanged files print nothing.
    pub fn outcome(&mut self, path: &Path, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Fixed => self.line(format_args!("Fixed quotes in: {}", path.display())),
            FileOutcome::WouldFix => {
                self.line(format_args!("Would fix quotes in: {}", path.display()))
            }
            FileOutcome::Unchanged => {}
        }
    }

    /// Report a failure for `path`.
    pub fn error(&mut self, path: &Path, message: impl Display) {
        self.line(format_args!("Error processing {}: {}", path.display(), message));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write report line");
        }
    }
}
