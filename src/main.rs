use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use latreport::config::{Config, ReportFormat};
use latreport::pipeline::run_file;
use latreport::report::{render_json, render_text};

fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let cli_input = std::env::args().nth(1).map(PathBuf::from);
    let cfg = Config::load(cli_input)?;
    info!("analyzing latency log {}", cfg.input_path.display());

    let report = run_file(&cfg.input_path)?;

    match cfg.format {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => println!("{}", render_json(&report)?),
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
