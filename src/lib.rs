//! Titlefix: Frontmatter Title Quote Normalizer
//!
//! Walks a documentation tree and rewrites `title: ""Value""` or
//! `title: ''Value''` in markdown frontmatter to `title: "Value"`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod transform;
pub mod updater;
pub mod walker;

pub use error::{FileError, FixError};
pub use report::{Reporter, RunSummary};
pub use runner::run;
pub use transform::{needs_fixing, normalize_title_quotes};
pub use updater::{DocumentStore, FileOutcome, LocalStore};
