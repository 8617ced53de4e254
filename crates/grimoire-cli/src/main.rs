//! Grimoire terminal client.
//!
//! Loads the save, then runs a line-oriented REPL on stdin/stdout. Logs go to
//! stderr and are filtered by `RUST_LOG` (default `warn`).

mod app;
mod command;
mod render;

use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use grimoire_core::store::DEFAULT_SAVE_PATH;
use grimoire_core::{JsonStore, SeededRng, Session, Store};
use tracing_subscriber::EnvFilter;

use app::App;

/// A tiny text adventure: explore, hunt, rest, and level up.
#[derive(Parser, Debug)]
#[command(name = "grimoire")]
#[command(version, about, long_about = None)]
struct Args {
    /// Save file location
    #[arg(long, env = "GRIMOIRE_SAVE", default_value = DEFAULT_SAVE_PATH)]
    save: PathBuf,

    /// Seed for a reproducible run; omit for a fresh random one
    #[arg(long, env = "GRIMOIRE_SEED")]
    seed: Option<u64>,

    /// Disable colored output (also set by a non-empty `NO_COLOR`)
    #[arg(long)]
    no_color: bool,
}

/// Colour is off if asked for on the command line or if `NO_COLOR` holds any
/// non-empty value.
fn colors_disabled(flag: bool, no_color_env: Option<&OsStr>) -> bool {
    flag || no_color_env.is_some_and(|value| !value.is_empty())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    if colors_disabled(args.no_color, env::var_os("NO_COLOR").as_deref()) {
        console::set_colors_enabled(false);
    }

    let store = JsonStore::new(&args.save);
    let report = store.load();
    if let Some(warning) = &report.warning {
        eprintln!("{} {warning}", style("Warning:").yellow().bold());
        eprintln!("Starting a new game.");
    }

    let rng = args.seed.map_or_else(SeededRng::from_entropy, SeededRng::from_seed);
    tracing::info!(save = %args.save.display(), seed = ?rng.seed(), "starting");

    let mut app = App::new(Session::new(report.state, rng), store);
    let stdin = io::stdin();
    app.run(stdin.lock(), &mut io::stdout())
}
