//! Command-line argument parsing
//!
//! Supports:
//! - Normalizing and validating Markdown tables
//! - Converting between Markdown, CSV, TSV, JSON and HTML
//! - Transposing and sorting tables

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::table::SortOrder;

/// Markdown table toolkit
#[derive(Parser, Debug)]
#[command(name = "mdgrid", version, about = "Edit, convert and check Markdown tables")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite a Markdown table in normalized form
    Fmt {
        /// Markdown file containing a table
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Check that a file holds a valid Markdown table
    Check {
        file: PathBuf,
    },

    /// Convert a table to another format (input format from the extension)
    Convert {
        file: PathBuf,
        /// Output format: md, csv, html or json
        #[arg(long, value_name = "FORMAT")]
        to: ExportFormat,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Swap rows and columns
    Transpose {
        file: PathBuf,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Sort data rows by one column
    Sort {
        file: PathBuf,
        /// Zero-based column index
        #[arg(short, long, value_name = "N")]
        column: usize,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Sort direction requested by `--desc`
    pub fn sort_order(desc: bool) -> SortOrder {
        if desc {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}
