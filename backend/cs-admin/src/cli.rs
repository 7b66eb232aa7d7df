use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cs-admin")]
#[command(about = "Inspect and edit Clearspace connection settings")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the URI path for this invocation (not persisted, no leading '/')
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Use http instead of https for this invocation (not persisted)
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
