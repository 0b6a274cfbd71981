use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;

/// Run configuration. Precedence: CLI argument, then environment, then the
/// optional config file, then defaults. The default input name `latencies`
/// matches the log the system under test writes by convention.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => anyhow::bail!("unknown report format {other:?} (expected text or json)"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    input_path: Option<PathBuf>,
    format: Option<String>,
}

impl Config {
    pub fn load(cli_input: Option<PathBuf>) -> Result<Self> {
        Self::load_from(cli_input, default_config_path())
    }

    /// Same as `load`, with an explicit config file location.
    pub fn load_from(cli_input: Option<PathBuf>, config_path: PathBuf) -> Result<Self> {
        let raw = read_config_file(&config_path)?;

        let input_path = cli_input
            .or_else(|| env::var("LATENCY_LOG").ok().map(PathBuf::from))
            .or(raw.input_path)
            .unwrap_or_else(|| PathBuf::from("latencies"));

        let format = match env::var("REPORT_FORMAT").ok().or(raw.format) {
            Some(v) => ReportFormat::parse(&v)?,
            None => ReportFormat::Text,
        };

        Ok(Self { input_path, format })
    }
}

fn read_config_file(path: &Path) -> Result<RawConfig> {
    if !path.exists() {
        return Ok(RawConfig::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from("com", "latreport", "latreport")
        .map(|p| p.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from(".latreport/config.toml"))
}
