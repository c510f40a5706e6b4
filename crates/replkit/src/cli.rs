//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// replkit - scaffold Repl configurations and entry points
#[derive(Parser, Debug)]
#[command(name = "replkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory for configuration records (default: .repl-configs)
    #[arg(long, global = true)]
    pub config_dir: Option<Utf8PathBuf>,

    /// Directory the entry-point file is written to (default: current directory)
    #[arg(long, global = true)]
    pub work_dir: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a Repl configuration and entry-point file
    Create(CreateArgs),

    /// Verify an API token and show the account it belongs to
    Whoami(WhoamiArgs),

    /// List supported languages
    Languages,

    /// Show version information
    Version(VersionArgs),
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Title of the new Repl
    #[arg(long, required_unless_present = "wizard")]
    pub title: Option<String>,

    /// Programming language (python, nodejs)
    #[arg(long, required_unless_present = "wizard")]
    pub language: Option<String>,

    /// Make the Repl private
    #[arg(long)]
    pub private: bool,

    /// JSON template overriding the starter snippet
    #[arg(long)]
    pub template: Option<Utf8PathBuf>,

    /// Also create the Repl on the remote service
    #[arg(long)]
    pub create_remote: bool,

    /// Collect options interactively; other flags become the defaults
    #[arg(long)]
    pub wizard: bool,

    /// API token for --create-remote (overrides REPLIT_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// API token (overrides REPLIT_TOKEN)
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
