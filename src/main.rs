//! craftlist binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use craftlist::{app, args, theme};

/// Log timestamp formatter: local time as `YYYY-MM-DD-T HH:MM:SS`.
struct CraftlistTimer;

impl tracing_subscriber::fmt::time::FormatTime for CraftlistTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `~/.config/craftlist/logs/craftlist.log`, or stderr on failure.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("craftlist.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CraftlistTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CraftlistTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    if let Some(code) = args::process_args(&args) {
        std::process::exit(code);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "craftlist starting");
    let opts = app::RunOptions {
        catalog: args.catalog.clone(),
    };
    if let Err(err) = app::run(opts).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("craftlist: {err}");
        std::process::exit(1);
    }
    tracing::info!("craftlist exited");
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a `YYYY-MM-DD-T HH:MM:SS` stamp
    #[test]
    fn craftlist_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let _ = super::CraftlistTimer.format_time(&mut writer);
        assert_eq!(buf.len(), "2026-01-01-T 00:00:00".len());
        assert!(buf.contains("-T "));
    }
}
