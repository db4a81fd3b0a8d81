use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OUTPUT_FORMATS};

const APP_NAME: &str = "seoscope";
const DEFAULT_OUTPUT: &str = "text";
const DEFAULT_TIMEOUT: u64 = 30;
const DEFAULT_CONCURRENCY: usize = 5;

/// Optional settings read from a config file. Every field mirrors a CLI flag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Output format: text, json or csv
    pub output: Option<String>,

    /// File the reports are saved to
    pub save: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Number of pages analyzed concurrently
    pub concurrency: Option<usize>,

    /// Maximum requests per second
    pub rate_limit: Option<f64>,

    pub verbose: Option<bool>,
}

/// Config file format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Search order when several default files exist
    pub const ALL: [ConfigFormat; 3] = [ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml];

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Yaml => "YAML",
        }
    }
}

/// `<stem>.json`, `<stem>.toml`, `<stem>.yaml`, `<stem>.yml`
fn candidate_files(dir: &Path, stem: &str) -> impl Iterator<Item = PathBuf> {
    ConfigFormat::ALL
        .into_iter()
        .flat_map(|format| format.extensions().iter())
        .map(move |ext| dir.join(format!("{}.{}", stem, ext)))
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents, format)
            .with_context(|| format!("Failed to parse {} config: {}", format.label(), path.display()))
    }

    /// Parses and validates config text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self> {
        let config: Config = match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output
            && !OUTPUT_FORMATS.contains(&output.as_str())
        {
            bail!(
                "unknown output format '{}', expected one of: {}",
                output,
                OUTPUT_FORMATS.join(", ")
            );
        }
        if self.concurrency == Some(0) {
            bail!("concurrency must be at least 1");
        }
        Ok(())
    }

    /// Files checked when `--config` is not given, highest priority first:
    /// `./seoscope.*`, then `config.*` under `$XDG_CONFIG_HOME/seoscope` or `~/.config/seoscope`.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = candidate_files(Path::new(""), APP_NAME).collect();

        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            paths.extend(candidate_files(&config_home.join(APP_NAME), "config"));
        }

        paths
    }

    /// The first default config file that exists, if any
    pub fn from_default_paths() -> Result<Option<Self>> {
        match Self::default_paths().into_iter().find(|path| path.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config file");
                Self::from_file(&path).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Loads `--config` when given, otherwise the first default path found
    pub fn load_for(cli: &Cli) -> Result<Option<Self>> {
        match &cli.config {
            Some(path) => Self::from_file(Path::new(path)).map(Some),
            None => Self::from_default_paths(),
        }
    }

    /// A CLI value that differs from its default wins over the config file.
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        let output = match &self.output {
            Some(output) if cli.output == DEFAULT_OUTPUT => output.clone(),
            _ => cli.output.clone(),
        };
        let timeout = match self.timeout {
            Some(timeout) if cli.timeout == DEFAULT_TIMEOUT => timeout,
            _ => cli.timeout,
        };
        let concurrency = match self.concurrency {
            Some(concurrency) if cli.concurrency == DEFAULT_CONCURRENCY => concurrency,
            _ => cli.concurrency,
        };

        Cli {
            urls: cli.urls.clone(),
            output,
            save: cli.save.clone().or_else(|| self.save.clone()),
            timeout,
            concurrency,
            rate_limit: cli.rate_limit.or(self.rate_limit),
            verbose: cli.verbose || self.verbose.unwrap_or(false),
            config: cli.config.clone(),
        }
    }
}
