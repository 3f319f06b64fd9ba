//! tailview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tailview::config::{self, CliOverrides};
use tailview::model::LogViewConfig;
use tailview::view::{self, ColorConfig, HighlightStyles, TuiApp};
use tailview::viewer::RefreshCycle;
use tracing::info;

/// Live log-tailing viewer with bounded reads and line highlighting
#[derive(Parser, Debug)]
#[command(name = "tailview")]
#[command(version)]
#[command(about = "Tail a growing log file in a TUI, highlighting lines by category")]
pub struct Args {
    /// Path to the log file to tail
    pub file: PathBuf,

    /// Read the whole file instead of only the tail window
    #[arg(long)]
    pub full: bool,

    /// Tail window size in bytes
    #[arg(long)]
    pub view_size: Option<u64>,

    /// Start with following (autoscroll) disabled
    #[arg(long)]
    pub no_follow: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Poll interval in milliseconds
    #[arg(long)]
    pub interval: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the tracing log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Keep NO_COLOR handling consistent everywhere downstream.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → config file → env vars → CLI args.
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    let resolved = config::apply_cli_overrides(
        with_env,
        CliOverrides {
            full_view: if args.full { Some(true) } else { None },
            view_size_bytes: args.view_size,
            follow: if args.no_follow { Some(false) } else { None },
            interval_ms: args.interval,
        },
    );

    let log_file = args.log_file.unwrap_or_else(|| resolved.log_file_path.clone());
    tailview::logging::init(&log_file)?;

    info!(config = ?resolved, file = %args.file.display(), "starting tailview");

    let view_config = LogViewConfig {
        full_view: resolved.full_view,
        view_size_bytes: resolved.view_size_bytes,
        auto_scroll: resolved.follow,
        colorize: resolved.colorize,
    };
    let styles =
        HighlightStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    let cycle = RefreshCycle::new(&args.file);

    let mut app = TuiApp::new(
        cycle,
        view_config,
        styles,
        Duration::from_millis(resolved.interval_ms),
    )?;
    let result = app.run();
    view::restore_terminal()?;
    result?;

    info!("tailview exited cleanly");
    Ok(())
}
