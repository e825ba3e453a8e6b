//! CLI command implementations

use anyhow::Result;
use caseswitch_core::LocaleTag;
use clap::Subcommand;
use std::io;

pub mod list;
pub mod transform;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Transform text from arguments, files or stdin
    Transform(transform::TransformArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List transformation modes with their labels and shortcuts
    Modes {
        /// Locale used for the labels
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// List bundled locales
    Locales,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transform(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        match self {
            ListCommands::Modes { locale } => list::write_modes(&mut stdout, &LocaleTag::new(locale)),
            ListCommands::Locales => list::write_locales(&mut stdout),
        }
    }
}
