//! The Folio Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions. It reads local files only; fetching markup
//! over the network is left to the caller.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use crate::catalog::{discover_plays, Catalog};
use crate::cli::args::{Command, FolioArgs, PlayArgs};
use crate::engine::PlayStats;
use crate::errors::{print_error, FolioError, FolioResult};
use crate::logging;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = FolioArgs::parse();
    logging::init(args.verbose);

    if let Err(e) = dispatch(args.command) {
        print_error(e);
        process::exit(1);
    }
}

fn dispatch(command: Command) -> FolioResult<()> {
    match command {
        Command::Lines {
            play,
            speakers_only,
        } => {
            let (name, stats) = load_stats(&play, speakers_only)?;
            output::print_totals(stats.title.as_deref().unwrap_or(&name), &stats.totals())
        }

        Command::Scenes { play } => {
            let (_, stats) = load_stats(&play, false)?;
            print!("{}", output::render_scenes(&stats.scenes));
            Ok(())
        }

        Command::Grid {
            play,
            output: destination,
            speakers_only,
        } => {
            let (_, stats) = load_stats(&play, speakers_only)?;
            match destination {
                Some(path) => {
                    output::write_grid_csv(&stats.grid, create_file(&path)?)?;
                    tracing::info!("saved line grid as {}", path.display());
                    Ok(())
                }
                None => output::write_grid_csv(&stats.grid, io::stdout().lock()),
            }
        }

        Command::Chart {
            play,
            output: destination,
            speakers_only,
        } => {
            let (_, stats) = load_stats(&play, speakers_only)?;
            let chart = stats.chart();
            match destination {
                Some(path) => {
                    output::write_chart_json(&chart, create_file(&path)?)?;
                    tracing::info!("saved chart series as {}", path.display());
                    Ok(())
                }
                None => output::write_chart_json(&chart, io::stdout().lock()),
            }
        }

        Command::List { catalog, dir } => list_plays(catalog, dir),
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Resolves the play source, reads it, and computes its statistics.
///
/// Returns a display name (the file stem, or the catalog name) alongside.
fn load_stats(args: &PlayArgs, speakers_only: bool) -> FolioResult<(String, PlayStats)> {
    let (name, path) = resolve_play(args)?;
    tracing::info!("reading {}", path.display());
    let source = std::fs::read_to_string(&path).map_err(|e| FolioError::io(&path, e))?;
    let stats = PlayStats::from_source(&source, &path.display().to_string())?;
    let stats = if speakers_only {
        stats.speakers_only()
    } else {
        stats
    };
    Ok((name, stats))
}

/// The `source` group guarantees exactly one of FILE and --play.
fn resolve_play(args: &PlayArgs) -> FolioResult<(String, PathBuf)> {
    match (&args.file, args.play) {
        (Some(path), _) => Ok((file_stem(path), path.clone())),
        (None, Some(index)) => {
            let catalog = Catalog::load(&args.catalog)?;
            let entry = catalog.get(index)?;
            let path = catalog.play_path(&args.dir, index)?;
            Ok((entry.name.clone(), path))
        }
        (None, None) => Err(FolioError::NoPlay),
    }
}

fn list_plays(catalog: Option<PathBuf>, dir: Option<PathBuf>) -> FolioResult<()> {
    if let Some(dir) = dir {
        let files = discover_plays(&dir)?;
        if files.is_empty() {
            println!("  No plays found.");
        }
        for file in files {
            println!("  {}", file.display());
        }
        return Ok(());
    }

    let catalog = Catalog::load(catalog.unwrap_or_else(|| PathBuf::from("plays.txt")))?;
    if catalog.is_empty() {
        println!("  No plays found.");
    }
    for (index, entry) in catalog.entries().iter().enumerate() {
        println!("{index}. {}", entry.name);
    }
    Ok(())
}

fn create_file(path: &Path) -> FolioResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FolioError::io(path, e))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
