pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "helptree",
    version,
    about = "Search indentation-structured help files, keeping the section tree around each match"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the sections of the help that mention a keyword (omit it for the full help)
    Query {
        /// Case-sensitive text to look for
        #[arg(default_value = "")]
        keyword: String,

        /// Help file to read
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate the nesting of a help file and summarise its shape
    Check {
        /// Help file to read
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a default .helptreerc.toml
    Init,
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
