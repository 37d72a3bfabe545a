//! CLI parse: clap types for titlefix. No behavior beyond merging flags.

use crate::config::FixerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Normalize malformed quotes around frontmatter titles in markdown docs
#[derive(Parser, Debug)]
#[command(name = "titlefix")]
#[command(about = "Normalize malformed title quotes in markdown frontmatter")]
pub struct Cli {
    /// Documentation root to walk (default: "docs", or `root` from config)
    pub root: Option<PathBuf>,

    /// Configuration file path (overrides ./titlefix.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Extension to process, repeatable (default: md, mdx)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable logging
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply CLI flags on top of a loaded config. Flags win.
    pub fn apply_to(&self, config: &mut FixerConfig) {
        if let Some(ref root) = self.root {
            config.root = root.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        if self.dry_run {
            config.dry_run = true;
        }

        let logging = &mut config.logging;
        if self.quiet {
            logging.enabled = false;
        }
        if self.verbose {
            logging.level = "debug".to_string();
        }
        if let Some(ref level) = self.log_level {
            logging.level = level.clone();
        }
        if let Some(ref format) = self.log_format {
            logging.format = format.clone();
        }
        if let Some(ref output) = self.log_output {
            logging.output = output.clone();
        }
        if let Some(ref file) = self.log_file {
            logging.file = Some(file.clone());
        }
    }
}
