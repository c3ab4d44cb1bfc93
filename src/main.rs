//! CLI entry point for dirq

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use dirq::{
    DiskEntry, OutputConfig, ResultPrinter, SearchOutput, SizeBounds, TreeWalker, WalkerConfig,
    print_json,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirq")]
#[command(about = "List directory trees and search them by name, key, or size")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output in JSON format
    #[arg(long = "json", global = true)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto", global = true)]
    color: ColorMode,

    /// Visit entries in name order instead of filesystem order
    #[arg(long = "sort", global = true)]
    sort: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the immediate contents of a directory
    Ls { dir: PathBuf },

    /// List every file below a directory, at any depth
    Deep { dir: PathBuf },

    /// Find the first file with exactly this name and print its path
    Name { dir: PathBuf, name: String },

    /// List every file whose name contains KEY
    Key { dir: PathBuf, key: String },

    /// List every file whose size lies between MIN and MAX
    /// Sizes accept suffixes: K, M, G (e.g., 5M for 5MB). A negative MIN
    /// admits empty files.
    Size {
        dir: PathBuf,
        #[arg(value_parser = parse_file_size, allow_negative_numbers = true)]
        min: i64,
        #[arg(value_parser = parse_file_size, allow_negative_numbers = true)]
        max: i64,
        /// Include files whose size equals MIN or MAX
        #[arg(long = "inclusive")]
        inclusive: bool,
    },
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes. Negative values are allowed.
fn parse_file_size(s: &str) -> Result<i64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: i64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

/// Install a stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let size_bounds = match args.command {
        Command::Size {
            inclusive: true, ..
        } => SizeBounds::Inclusive,
        _ => SizeBounds::Exclusive,
    };
    let walker = TreeWalker::new(WalkerConfig {
        size_bounds,
        sort_entries: args.sort,
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        highlight: match &args.command {
            Command::Key { key, .. } => Some(key.clone()),
            _ => None,
        },
    };

    let result = match run(&args.command, &walker) {
        Ok(output) if args.json => print_json(&output),
        Ok(output) => {
            let mut printer = ResultPrinter::stdout(output_config);
            match &output {
                SearchOutput::Names { names, .. } => printer.print_names(names),
                SearchOutput::Path { path, .. } => printer.print_path(path),
            }
        }
        Err(e) => {
            eprintln!("dirq: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("dirq: error writing output: {}", e);
        process::exit(1);
    }
}

/// Run one subcommand against the real filesystem.
fn run(command: &Command, walker: &TreeWalker) -> dirq::Result<SearchOutput> {
    let listing = |dir: &PathBuf, names: Vec<String>| SearchOutput::Names {
        root: dir.clone(),
        names,
    };

    Ok(match command {
        Command::Ls { dir } => listing(dir, walker.list_contents(&DiskEntry::new(dir))?),
        Command::Deep { dir } => listing(dir, walker.deep_list_contents(&DiskEntry::new(dir))?),
        Command::Name { dir, name } => SearchOutput::Path {
            root: dir.clone(),
            path: walker.search_by_name(&DiskEntry::new(dir), name)?,
        },
        Command::Key { dir, key } => listing(dir, walker.search_by_key(&DiskEntry::new(dir), key)),
        Command::Size { dir, min, max, .. } => listing(
            dir,
            walker.search_by_size(&DiskEntry::new(dir), *min, *max),
        ),
    })
}
