pub mod error;
pub mod models;
pub mod services;

use anyhow::{bail, Context};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use error::AnalysisError;
use models::AnalysisSummary;
use services::{format_summary, load_config_file, AnalysisConfig, ConfigStore, TextAnalysis};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const PROMPT: &str = "Indsæt en tekst til analyse: ";
const LOGS_TO_KEEP: usize = 30;

fn env_truthy(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes") | Ok("YES")
    )
}

/// Initialize logging: stderr always, plus a per-session file when `LAESBARHED_LOG_DIR` is set.
pub fn init_logging() {
    // Quiet by default so log lines don't interleave with the report.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let logs_dir = match std::env::var("LAESBARHED_LOG_DIR") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => {
            init_console_only_logging(env_filter);
            return;
        }
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        init_console_only_logging(env_filter);
        warn!(error = %e, dir = %logs_dir.display(), "Falling back to console-only logging (log dir not writable)");
        return;
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("laesbarhed_{}.log", timestamp);

    // One file per session; writes stay non-blocking.
    let file_appender = rolling::never(&logs_dir, &log_filename);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(file_guard);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    info!("Log file: {}/{}", logs_dir.display(), log_filename);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if !env_truthy("LAESBARHED_DISABLE_LOG_CLEANUP") {
        std::thread::spawn(move || {
            cleanup_old_logs(&logs_dir, LOGS_TO_KEEP);
        });
    }
}

fn init_console_only_logging(env_filter: EnvFilter) {
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

fn cleanup_old_logs(logs_dir: &Path, keep: usize) {
    let mut entries: Vec<_> = match fs::read_dir(logs_dir) {
        Ok(rd) => rd.filter_map(|e| e.ok()).collect(),
        Err(_) => return,
    };

    entries.retain(|e| {
        let name = e.file_name().to_string_lossy().to_string();
        name.starts_with("laesbarhed_") && name.ends_with(".log")
    });

    if entries.len() <= keep {
        return;
    }

    entries.sort_by_key(|e| {
        e.metadata()
            .and_then(|m| m.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
    });

    let remove_count = entries.len().saturating_sub(keep);
    for entry in entries.into_iter().take(remove_count) {
        let _ = fs::remove_file(entry.path());
    }
}

pub fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

pub fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// Explicit `--config <path>` wins; otherwise the default store (defaults if absent).
pub fn resolve_config(args: &[String]) -> anyhow::Result<AnalysisConfig> {
    if let Some(path) = parse_arg_value(args, "--config") {
        return load_config_file(Path::new(&path))
            .with_context(|| format!("kunne ikke indlæse konfiguration fra {}", path));
    }
    match ConfigStore::open_default() {
        Ok(store) => Ok(store.load().context("kunne ikke indlæse standardkonfigurationen")?),
        Err(e) => {
            warn!(error = %e, "config.default_dir_unavailable");
            Ok(AnalysisConfig::default())
        }
    }
}

fn read_input(args: &[String]) -> anyhow::Result<String> {
    if let Some(text) = parse_arg_value(args, "--text") {
        return Ok(text);
    }
    if let Some(path) = parse_arg_value(args, "--file") {
        return fs::read_to_string(&path).with_context(|| format!("kunne ikke læse {}", path));
    }

    print!("{}", PROMPT);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn print_usage() {
    eprintln!(
        "Usage:\n  laesbarhed [--text <tekst> | --file <sti>] [--config <sti>] [--json]\n  laesbarhed --write-default-config\n\nUden --text/--file læses teksten interaktivt fra stdin."
    );
}

fn describe_analysis_error(err: &AnalysisError) -> String {
    match err {
        AnalysisError::DivisionByZero { quantity } => format!(
            "teksten kan ikke analyseres: {} er 0 (tom tekst eller kun tegnsætning)",
            quantity
        ),
    }
}

/// Full summary of `text`; zero-count input becomes a Danish error for the user.
pub fn analyze_text(text: String, config: AnalysisConfig) -> anyhow::Result<AnalysisSummary> {
    let mut analysis = TextAnalysis::with_config(text, config);
    match analysis.summary() {
        Ok(summary) => Ok(summary),
        Err(err) => bail!(describe_analysis_error(&err)),
    }
}

/// Entry point of the interactive tool. An `Err` makes `main` exit with status 1.
pub fn run() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();

    if has_flag(&args, "--help") || has_flag(&args, "-h") {
        print_usage();
        return Ok(());
    }

    if has_flag(&args, "--write-default-config") {
        let store = ConfigStore::open_default()?;
        store.save(&AnalysisConfig::default())?;
        println!("Skrev standardkonfiguration til {}", store.config_path().display());
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let text = read_input(&args)?;

    let summary = analyze_text(text, config)?;

    if has_flag(&args, "--json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}
