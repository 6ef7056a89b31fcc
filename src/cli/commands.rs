//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Travel-agency CRM list view pager
#[derive(Parser, Debug)]
#[command(name = "agency-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (overrides --verbose)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose) {
            (Some(level), _) => level,
            (None, true) => LogLevel::Debug,
            (None, false) => LogLevel::Info,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a record file and print one page of it
    Page {
        /// Built-in view name or view definition file (YAML)
        #[arg(long)]
        view: PathBuf,

        /// Record file (JSON array, wrapped JSON array, or JSONL)
        #[arg(short, long)]
        data: PathBuf,

        /// Free-text search over the view's search fields
        #[arg(short, long)]
        search: Option<String>,

        /// Filter expression (repeatable): field=value, field=a|b, field>=n,
        /// field<=n, field~text, field?, field@from..to
        #[arg(long = "filter", value_name = "EXPR")]
        filters: Vec<String>,

        /// Page to show (clamped into the valid range)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Override the view's page size
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Validate a view definition
    Validate {
        /// Built-in view name or view definition file (YAML)
        #[arg(long)]
        view: PathBuf,
    },

    /// List built-in views
    Views,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable table
    Table,
}
