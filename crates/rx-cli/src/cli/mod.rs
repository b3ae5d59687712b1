use clap::Parser;
use rx_config::RxConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rxc` binary.
#[derive(Debug, Parser)]
#[command(name = "rxc", version, about = "rxcheck - drug interaction checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Colour table cells: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read environment variables from this file instead of `./.env`
    #[arg(long, global = true)]
    pub env_file: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// An explicit `--format` wins over the configured default; an
    /// unrecognised configured default falls back to JSON.
    #[must_use]
    pub fn global_flags(&self, config: &RxConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_config(&config.general.default_format).unwrap_or(OutputFormat::Json)
        });
        GlobalFlags {
            format,
            color: self.color,
            quiet: self.quiet,
        }
    }
}
