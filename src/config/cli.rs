use crate::config::settings::SettingsOverrides;
use crate::core::WriteMode;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "page-rewriter")]
#[command(about = "Replace everything above a marker line in a source file with a fixed block")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Target file to rewrite [default: src/app/page.tsx]
    #[arg(short, long)]
    pub file: Option<String>,

    /// Substring identifying the first line to keep
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Inline replacement block
    #[arg(long, conflicts_with = "replacement_file")]
    pub replacement: Option<String>,

    /// Read the replacement block from a file
    #[arg(long)]
    pub replacement_file: Option<String>,

    /// Write through a temporary file and rename it over the target
    #[arg(long)]
    pub atomic: bool,

    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            path: self.file.clone(),
            marker: self.marker.clone(),
            replacement_text: self.replacement.clone(),
            replacement_file: self.replacement_file.clone(),
            mode: self.atomic.then_some(WriteMode::Atomic),
            dry_run: self.dry_run,
        }
    }
}
