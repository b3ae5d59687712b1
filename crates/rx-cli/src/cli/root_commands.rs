use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the drugs that can be selected.
    Drugs,
    /// Check a selection of drugs for harmful interactions.
    Check(CheckArgs),
    /// Check a selection and write the matches as CSV.
    Export(ExportArgs),
    /// Check a selection and print the interaction network.
    Graph(GraphArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Serve the checker over HTTP for browser or script clients.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Drug names (separate with spaces or commas).
    #[arg(value_delimiter = ',')]
    pub drugs: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Drug names (separate with spaces or commas).
    #[arg(value_delimiter = ',')]
    pub drugs: Vec<String>,
    /// Write the CSV to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
    /// Write the CSV to the configured export file name.
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct GraphArgs {
    /// Drug names (separate with spaces or commas).
    #[arg(value_delimiter = ',')]
    pub drugs: Vec<String>,
    /// Emit Graphviz DOT instead of node/edge data.
    #[arg(long)]
    pub dot: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (defaults to `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
}
