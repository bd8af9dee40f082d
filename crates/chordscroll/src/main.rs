//! Binary entrypoint for chordscroll: inspect configurations and replay
//! keystroke scripts against a simulated page.
use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use config::{Config, load, resolve_config_path};
use thiserror::Error;
use tracing::debug;

/// Simulated page replay.
mod replay;
/// Keystroke script parsing.
mod script;

#[derive(Parser, Debug)]
#[command(name = "chordscroll", about = "Keyboard chord scrolling", version)]
/// Command-line interface for the `chordscroll` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,

    /// Optional path to the config file (defaults to ~/.chordscroll/config.ron)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate the configuration then exit.
    Check {
        /// Path to configuration file to check
        path: Option<PathBuf>,

        /// Dump the resolved configuration as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
    /// Print the binding table in priority order.
    Bindings,
    /// Replay a keystroke script and print the viewport after each event.
    Replay {
        /// Script file: one `<delay-ms> <combo> [@target]` per line
        script: PathBuf,

        /// Viewport width
        #[arg(long, default_value_t = 1280)]
        width: i64,

        /// Viewport height
        #[arg(long, default_value_t = 800)]
        height: i64,

        /// Content width
        #[arg(long, default_value_t = 1280)]
        content_width: i64,

        /// Content height
        #[arg(long, default_value_t = 10_000)]
        content_height: i64,

        /// Initial vertical offset
        #[arg(long, default_value_t = 0)]
        start_y: i64,
    },
}

/// Failures surfaced to the user.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration could not be loaded.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// Script file could not be read.
    #[error("Read error at {path}: {source}")]
    Read {
        /// Script path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Script contents are malformed.
    #[error("Script error in {path}: {source}")]
    Script {
        /// Script path.
        path: PathBuf,
        /// Parse failure.
        source: script::ScriptError,
    },
    /// JSON serialisation failed.
    #[error("Failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Execute the parsed command line.
fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Check { path, dump } => {
            let explicit = path.as_deref().or(cli.config.as_deref());
            let cfg = load(explicit)?;
            if dump {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                match resolve_config_path(explicit) {
                    Some(p) => println!("OK: {} ({} bindings)", p.display(), cfg.bindings.len()),
                    None => println!("OK: built-in defaults ({} bindings)", cfg.bindings.len()),
                }
            }
        }
        Command::Bindings => {
            let cfg = load(cli.config.as_deref())?;
            print!("{}", render_bindings(&cfg));
        }
        Command::Replay {
            script,
            width,
            height,
            content_width,
            content_height,
            start_y,
        } => {
            let cfg = load(cli.config.as_deref())?;
            let events = read_script(&script)?;
            debug!("replaying {} events from {}", events.len(), script.display());
            let page = replay::Page {
                width,
                height,
                content_width,
                content_height,
                start: (0, start_y),
            };
            for line in replay::replay(cfg, &events, page) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Read and parse a script file.
fn read_script(path: &Path) -> Result<Vec<script::ScriptEvent>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    script::parse(&text).map_err(|source| CliError::Script {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the binding table, one binding per line.
fn render_bindings(cfg: &Config) -> String {
    let width = cfg
        .bindings
        .iter()
        .map(|b| b.chord.to_string().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (i, b) in cfg.bindings.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}  {:<width$}  {:<16} {:?}\n",
            i,
            b.chord.to_string(),
            b.desc,
            b.action,
            width = width
        ));
    }
    out
}
