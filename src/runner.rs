//! Run orchestration: walk the root, update each file, report outcomes.
//!
//! A failure on one file is reported and counted; the run always moves on to
//! the next file. Only run-level problems (missing root, bad config) abort.

use crate::config::FixerConfig;
use crate::error::FixError;
use crate::report::{Reporter, RunSummary};
use crate::updater::{update_file, DocumentStore, UpdateOptions};
use crate::walker::Walker;
use std::io::Write;
use tracing::{info, info_span, warn};

/// Process every matching file under `config.root`.
pub fn run<S, W>(
    config: &FixerConfig,
    store: &S,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary, FixError>
where
    S: DocumentStore + ?Sized,
    W: Write,
{
    config.validate()?;

    let span = info_span!("run", root = %config.root.display(), dry_run = config.dry_run);
    let _guard = span.enter();

    let walker = Walker::with_config(config.root.clone(), config.walker_config());
    let options = UpdateOptions {
        dry_run: config.dry_run,
    };
    let mut summary = RunSummary::default();

    for entry in walker.files()? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                skip_walk_error(e, reporter, &mut summary);
                continue;
            }
        };

        match update_file(store, &path, options) {
            Ok(outcome) => {
                reporter.outcome(&path, outcome);
                summary.record(outcome);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to process file");
                reporter.error(&path, e.io_error());
                summary.record_failure();
            }
        }
    }

    info!(
        scanned = summary.scanned,
        fixed = summary.fixed,
        unchanged = summary.unchanged,
        failed = summary.failed,
        "Run complete"
    );

    Ok(summary)
}

/// Report an error met below the root and count it as a failure.
fn skip_walk_error<W: Write>(
    err: FixError,
    reporter: &mut Reporter<W>,
    summary: &mut RunSummary,
) {
    warn!(error = %err, "Skipping unreadable directory entry");
    if let FixError::WalkEntry { ref path, ref message } = err {
        reporter.error(path, message);
    }
    summary.record_failure();
}
