//! Defines the command-line arguments and subcommands for the Folio CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Per-character, per-scene dialogue statistics for plays."
)]
pub struct FolioArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print total lines per character, ranked.
    Lines {
        #[command(flatten)]
        play: PlayArgs,
        /// Leave out roster entries that never speak.
        #[arg(long)]
        speakers_only: bool,
    },
    /// Print the scene labels in enumeration order.
    Scenes {
        #[command(flatten)]
        play: PlayArgs,
    },
    /// Export the character by scene grid as CSV.
    Grid {
        #[command(flatten)]
        play: PlayArgs,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave out roster entries that never speak.
        #[arg(long)]
        speakers_only: bool,
    },
    /// Export per-scene line series for charting as JSON.
    Chart {
        #[command(flatten)]
        play: PlayArgs,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Leave out roster entries that never speak.
        #[arg(long)]
        speakers_only: bool,
    },
    /// List the plays in a catalog, or the markup files in a directory.
    List {
        /// Catalog file with one `<name>,<slug>` per line.
        #[arg(long, conflicts_with = "dir")]
        catalog: Option<PathBuf>,
        /// Directory to search for `.xml` files.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Selects a play either by file path or by catalog index.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "play"])))]
pub struct PlayArgs {
    /// Path to the play markup file.
    pub file: Option<PathBuf>,

    /// 0-based index into the catalog.
    #[arg(short, long)]
    pub play: Option<usize>,

    /// Catalog file used with --play.
    #[arg(long, default_value = "plays.txt")]
    pub catalog: PathBuf,

    /// Directory holding `<slug>.xml` files, used with --play.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}
