//! Dirscout - local filesystem exploration toolkit
//!
//! Entry point for the dirscout command-line interface.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dirscout::observability::init_tracing;
use dirscout::tree::RenderOptions;
use dirscout::{diff_files, pattern, tree, Config, DirectoryCache};

/// Dirscout - local filesystem exploration toolkit
#[derive(Parser, Debug)]
#[command(name = "dirscout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root paths for the directory cache (defaults to home, /usr, /etc
    /// and the current directory)
    #[arg(long, env = "DIRSCOUT_ROOTS", value_delimiter = ',')]
    roots: Vec<PathBuf>,

    /// Soft cap on directories collected per cache build
    #[arg(long, env = "DIRSCOUT_CACHE_CAPACITY", default_value = "10000")]
    capacity: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DIRSCOUT_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging output
    #[arg(long, env = "DIRSCOUT_LOG_JSON")]
    log_json: bool,

    /// Emit results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the directory cache and print its entries
    Scan,
    /// Look a filename up in every cached directory
    Locate {
        /// Filename to probe for (single path component)
        name: String,
    },
    /// Recursive glob search, independent of the cache
    Find {
        /// Glob pattern matched against entry names
        pattern: String,
        /// Directory to search under
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Render a directory tree
    Tree {
        /// Directory to render
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Maximum listing depth (unlimited when omitted)
        #[arg(short, long)]
        depth: Option<usize>,
        /// Include hidden (dot-named) entries
        #[arg(long)]
        hidden: bool,
        /// List directories only
        #[arg(long)]
        dirs_only: bool,
    },
    /// Compare two files line by line
    Diff {
        /// First file
        path_a: PathBuf,
        /// Second file
        path_b: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.log_json);

    let mut config = Config {
        cache_capacity: cli.capacity,
        log_level: cli.log_level.clone(),
        ..Config::default()
    };
    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    }
    config.validate().context("invalid configuration")?;

    match cli.command {
        Command::Scan => {
            let cache = DirectoryCache::new(config.roots, config.cache_capacity);
            let stats = cache.build();
            print_paths(&cache.entries(), cli.json)?;
            tracing::info!(
                dirs = stats.dirs_found,
                skipped = stats.subtrees_skipped,
                capped = stats.capped,
                "Scan complete"
            );
        }
        Command::Locate { name } => {
            let cache = DirectoryCache::new(config.roots, config.cache_capacity);
            cache.build();
            let hits = cache.find_by_name(&name)?;
            print_paths(&hits, cli.json)?;
        }
        Command::Find { pattern, root } => {
            let hits = pattern::find(&pattern, &root)?;
            print_paths(&hits, cli.json)?;
        }
        Command::Tree {
            path,
            depth,
            hidden,
            dirs_only,
        } => {
            let options = RenderOptions {
                max_depth: depth.unwrap_or(usize::MAX),
                show_hidden: hidden,
                dirs_only,
            };
            let text = tree::render(&path, &options)?;
            print!("{text}");
        }
        Command::Diff { path_a, path_b } => {
            let outcome = diff_files(&path_a, &path_b)?;
            if cli.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                match outcome {
                    dirscout::DiffOutcome::Identical => println!("files are identical"),
                    dirscout::DiffOutcome::DiffersAt { line } => {
                        println!("files differ at line {line}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print a path list, one per line, or as a JSON array with `--json`.
fn print_paths(paths: &[PathBuf], json: bool) -> Result<()> {
    if json {
        let strings: Vec<String> = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        println!("{}", serde_json::to_string(&strings)?);
    } else {
        for path in paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}
