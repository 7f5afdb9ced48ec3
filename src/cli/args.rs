//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Import the spreadsheet and write locale assets and constants
//! - `inspect`: Decode locale assets and print their entries
//! - `lookup`: Resolve translation keys against locale assets
//! - `init`: Initialize locsheet configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Config file to use instead of searching for .locsheetrc.json
    #[arg(short, long, env = "LOCSHEET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Spreadsheet to import (overrides config file)
    #[arg(long)]
    pub sheet: Option<PathBuf>,

    /// Directory for the locale assets (overrides config file)
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Directory for the generated constant modules (overrides config file)
    #[arg(long)]
    pub scripts_dir: Option<PathBuf>,

    /// Do not generate constant modules
    #[arg(long)]
    pub skip_scripts: bool,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Asset files or directories of asset files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Only show these keys (can be repeated)
    #[arg(long = "key")]
    pub keys: Vec<String>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Locale to resolve the keys in
    #[arg(short, long)]
    pub locale: String,

    /// Directory holding the locale assets (overrides config file)
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Translation keys to look up
    #[arg(required = true)]
    pub keys: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import the spreadsheet into per-locale assets and constant modules
    Build(BuildCommand),
    /// Print the entries stored in locale assets
    Inspect(InspectCommand),
    /// Look up translation keys in the built locale assets
    Lookup(LookupCommand),
    /// Initialize a new .locsheetrc.json configuration file
    Init,
}
