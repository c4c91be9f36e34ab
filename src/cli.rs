use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "env-check")]
#[command(about = "Check that API keys and the Google Sheets credentials file are configured")]
pub struct Cli {
    /// Read this env file instead of discovering .env from the working directory
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
