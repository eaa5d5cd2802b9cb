// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Commandoro: store named command packs in one place and run them on demand.
///
/// The configuration file is a JSON object mapping a pack name to a list of
/// shell commands:
///
///   {"default": ["echo hello"], "Ubuntu": ["apt update", "apt upgrade -y"]}
///
/// With no `--name`, an interactive menu lists the packs and lets you start
/// one, inspect its commands, or go back. A pack named `default` can be
/// chained after the selected pack with `--default`.
///
/// Examples:
///
///   commandoro --file config.json -d
///
///   commandoro --file config.json -d --name Ubuntu
#[derive(Parser, Debug, Default)]
#[command(author, version, about, disable_help_subcommand = true)]
pub struct Cli {
    /// The path to the file with the command packs.
    ///
    /// Falls back to `config.json` next to the executable when omitted or
    /// when the given path does not exist.
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Run the additional pack named `default` after the selected pack.
    #[arg(long, short)]
    pub default: bool,

    /// Test run: commands are reported as executed but never invoked.
    #[arg(long, short)]
    pub test: bool,

    /// Name of the pack to run automatically, skipping the interactive menu.
    ///
    /// Ignored (the menu is shown) when the name is not present in the
    /// configuration.
    #[arg(long, short)]
    pub name: Option<String>,
}
