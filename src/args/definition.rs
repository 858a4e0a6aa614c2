//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

/// craftlist - browse, search and rank Minecraft servers from the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "craftlist")]
#[command(version)]
#[command(about = "A terminal catalog of Minecraft servers with search, mode filters and a top-rated leaderboard", long_about = None)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Shortcut for `--log-level debug`.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print servers whose name or description contains TEXT, then exit.
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Print servers of the given mode (all, survival, skyblock, pvp, minigames, creative), then exit.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Print the top-rated servers, then exit. N defaults to `leaderboard_size`.
    #[arg(short, long, value_name = "N", num_args = 0..=1, conflicts_with_all = ["search", "mode"])]
    pub top: Option<Option<usize>>,

    /// Print JSON instead of a table in listing modes.
    #[arg(long)]
    pub json: bool,

    /// Load the server catalog from a JSON file.
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write the active catalog as JSON to PATH, then exit.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Args {
    /// Whether any flag asks for output instead of the TUI.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        self.search.is_some() || self.mode.is_some() || self.top.is_some() || self.export.is_some()
    }
}

/// What: Run the non-interactive modes requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Some(exit_code)` when a batch mode ran and the process should exit;
///   `None` to continue into the TUI.
///
/// Details:
/// - `--export` runs first; listing flags are then honored in the same invocation.
pub fn process_args(args: &Args) -> Option<i32> {
    if !args.is_batch() {
        return None;
    }
    let prefs = crate::theme::settings();
    let catalog = match super::list::load_catalog(args.catalog.as_deref(), &prefs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("craftlist: {e}");
            tracing::error!(error = %e, "failed to load catalog for CLI");
            return Some(1);
        }
    };

    if let Some(path) = &args.export {
        if let Err(e) = super::export::handle_export(&catalog, path) {
            eprintln!("craftlist: {e}");
            return Some(1);
        }
        if args.search.is_none() && args.mode.is_none() && args.top.is_none() {
            return Some(0);
        }
    }

    let request = super::list::ListRequest::from_args(args, prefs.leaderboard_size);
    match super::list::render(&catalog, &request) {
        Ok(out) => {
            print!("{out}");
            Some(0)
        }
        Err(e) => {
            eprintln!("craftlist: {e}");
            Some(1)
        }
    }
}
