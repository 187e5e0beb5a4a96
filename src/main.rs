mod collectors;
mod config;
mod error;
mod models;
mod predictor;
mod status;
mod util;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sanpredict",
    about = "Predict when the SAN backup quota runs out",
    version = "0.1"
)]
struct Cli {
    /// Directory holding the log and output files (default: next to the executable)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Print the latest logged backup and the stored prediction date, then exit
    #[arg(long)]
    status: bool,

    /// Print the backup log, newest first, then exit
    #[arg(long)]
    log: bool,

    /// Number of log entries to show (used with --log)
    #[arg(long)]
    last: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::Config::load();

    let result = if cli.config {
        run_print_config(&cfg, &cli)
    } else if cli.status {
        run_status(&cfg, &cli)
    } else if cli.log {
        run_log(&cfg, &cli)
    } else {
        run_predict(&cfg, &cli)
    };

    // Every failure is reported, none changes the exit code.
    if let Err(e) = result {
        println!("Error: {e:#}");
    }
    Ok(())
}

fn run_predict(cfg: &config::Config, cli: &Cli) -> Result<()> {
    let paths = cfg.file_paths(cli.dir.as_deref());
    let today = chrono::Local::now().date_naive();
    tracing::debug!(log = %paths.log.display(), %today, "starting prediction");
    print!("{}", predict_output(&paths, today, cli.json)?);
    Ok(())
}

/// Text printed by a prediction run. Prediction failures become the message
/// itself; only a failure to render the result is an error.
fn predict_output(paths: &config::FilePaths, today: chrono::NaiveDate, json: bool) -> Result<String> {
    let prediction = match predictor::run(paths, today) {
        Ok(p)  => p,
        Err(e) => return Ok(format!("{e}\n")),
    };

    let mut out = format!("Prediction written to {}\n", paths.prediction.display());
    if json {
        out.push_str(&serde_json::to_string_pretty(&prediction)?);
        out.push('\n');
    } else {
        out.push_str(&util::report::prediction(&prediction));
    }
    Ok(out)
}

fn run_status(cfg: &config::Config, cli: &Cli) -> Result<()> {
    let paths = cfg.file_paths(cli.dir.as_deref());
    let san = status::read_status(&paths)?;

    match (san, cli.json) {
        (Some(s), true)  => println!("{}", serde_json::to_string_pretty(&s)?),
        (Some(s), false) => print!("{}", util::report::status(&s)),
        (None, true)     => println!("{}", serde_json::json!({ "message": "No SAN usage log yet" })),
        (None, false)    => println!("No SAN usage log yet"),
    }
    Ok(())
}

fn run_log(cfg: &config::Config, cli: &Cli) -> Result<()> {
    let paths = cfg.file_paths(cli.dir.as_deref());
    let log = status::read_log_or_empty(&paths)?;
    let rows = log.newest_first(cli.last);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No backups logged yet.");
    } else {
        print!("{}", util::report::backup_log(&rows));
    }
    Ok(())
}

fn run_print_config(cfg: &config::Config, cli: &Cli) -> Result<()> {
    let path = config::Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let paths = cfg.file_paths(cli.dir.as_deref());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    match &cfg.general.data_dir {
        Some(d) => println!("  data_dir = {}", d.display()),
        None    => println!("  data_dir = (executable directory)"),
    }
    println!();
    println!("[files]");
    println!("  log_file        = {}", paths.log.display());
    println!("  prediction_file = {}", paths.prediction.display());
    println!("  debug_file      = {}", paths.debug.display());
    Ok(())
}
