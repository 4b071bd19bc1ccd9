use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown-style report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "seogeo",
    about = "SEO & GEO analysis for content",
    version,
    long_about = None
)]
pub struct Args {
    /// Content text, path to a file, or - to read stdin
    #[arg(required_unless_present = "init")]
    pub content: Option<String>,

    /// Comma-separated focus keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Target location for GEO analysis
    #[arg(short, long)]
    pub location: Option<String>,

    /// Path to custom location pattern file
    #[arg(short, long)]
    pub patterns: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Initialize location_patterns.txt with default patterns
    #[arg(long, conflicts_with = "content")]
    pub init: bool,
}
