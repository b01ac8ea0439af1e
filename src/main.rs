//! Focal - a focal-line terminal reader.
//!
//! # Usage
//!
//! ```bash
//! focal
//! focal --content-dir book/
//! focal --fresh intro.md chapter-two.md
//! ```

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use focal::app::App;
use focal::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags_or_default,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use focal::document::{ChapterSource, DEFAULT_CONTENT_DIR, DEFAULT_WRAP_WIDTH};
use focal::perf;
use focal::progress::{ProgressStore, default_progress_path};

/// Read text one focal line at a time
#[derive(Parser, Debug)]
#[command(name = "focal", version, about, long_about = None)]
struct Cli {
    /// Chapter files to read, in order (defaults to the bundled chapters)
    #[arg(value_name = "CHAPTER")]
    chapters: Vec<PathBuf>,

    /// Directory holding the default chapter files
    #[arg(long, value_name = "DIR")]
    content_dir: Option<PathBuf>,

    /// Maximum wrap width in columns
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,

    /// Do not read or write saved progress
    #[arg(long)]
    no_save: bool,

    /// Ignore and clear saved progress
    #[arg(long)]
    fresh: bool,

    /// Store reading progress at PATH
    #[arg(long, value_name = "PATH")]
    progress_file: Option<PathBuf>,

    /// Enable performance logging
    #[arg(long)]
    perf: bool,

    /// Write detailed event and render logs to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_path: Option<&PathBuf>) {
    // Once the terminal is taken over, stderr would draw over the reader.
    let writer = log_path
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .inspect_err(|err| {
                    eprintln!("[warn] Failed to open log {}: {err}", path.display());
                })
                .ok()
        })
        .map_or_else(
            || BoxMakeWriter::new(std::io::stderr),
            |file| BoxMakeWriter::new(Mutex::new(file)),
        );

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(log_path.is_none())
        .init();
}

fn progress_store(flags: &ConfigFlags) -> ProgressStore {
    if flags.no_save {
        return ProgressStore::disabled();
    }
    flags
        .progress_file
        .clone()
        .or_else(default_progress_path)
        .map_or_else(ProgressStore::disabled, ProgressStore::new)
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let mut config_warnings = Vec::new();
    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags_or_default(&global_path, &mut config_warnings);
        let local_flags = load_config_flags_or_default(&local_path, &mut config_warnings);
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("FOCAL_RENDER_DEBUG_LOG").map(PathBuf::from));
    init_logging(render_debug_log_path.as_ref());
    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    perf::set_timings_enabled(effective.perf);
    if let Err(err) = perf::set_event_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            "Failed to initialize render debug log {}: {err}",
            render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
        );
    }

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        anyhow::bail!("focal needs an interactive terminal");
    }

    let app = if cli.chapters.is_empty() {
        let dir = effective
            .content_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR));
        App::from_content_dir(&dir)
    } else {
        App::new(cli.chapters.into_iter().map(ChapterSource::from_path).collect())
    };

    let mut app = app
        .with_max_width(effective.width.unwrap_or(DEFAULT_WRAP_WIDTH))
        .with_progress_store(progress_store(&effective))
        .with_fresh_start(cli.fresh);

    app.run().context("Application error")
}
