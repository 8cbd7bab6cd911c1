use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rss-digest")]
#[command(about = "Fetch a category of RSS/Atom feeds and print a short summary of each")]
#[command(version)]
pub struct Cli {
    /// Catalog file (JSON, or OPML with .opml/.xml extension); built-in sources if unset
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every source in a category and print their summaries
    Run {
        /// Category to read (defaults to the catalog's default category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show articles published on this day of the month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: Option<u32>,

        /// Maximum number of articles printed per source
        #[arg(short, long)]
        max_items: Option<usize>,
    },

    /// Fetch a single feed URL (or local file) and print its summary
    Show {
        /// Feed URL or path
        url: String,

        /// Only show articles published on this day of the month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=31))]
        day: Option<u32>,

        /// Maximum number of articles printed
        #[arg(short, long)]
        max_items: Option<usize>,
    },

    /// List the catalog's categories
    Categories,

    /// Export the catalog to OPML format
    Export {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
