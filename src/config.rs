use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::license::critical::{CriticalPolicy, DEFAULT_CRITICAL};

/// Root configuration structure, deserialized from `.vendor-licenses/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Thresholds applied to the best template match.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// At or above this score the label carries no `+words`/`-words` diagnostics.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// A best match scoring at or below this is reported as unresolved (`?`).
    #[serde(default)]
    pub min_score: f64,
}

fn default_confidence() -> f64 {
    0.95
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence: default_confidence(),
            min_score: 0.0,
        }
    }
}

/// Which licenses stop a run.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// License identifiers treated as critical. `NOLICENSE` stands for
    /// "no license could be identified".
    #[serde(default = "default_critical")]
    pub critical: Vec<String>,
    /// Record critical licenses and continue instead of failing the run.
    #[serde(default)]
    pub ignore_critical: bool,
}

fn default_critical() -> Vec<String> {
    DEFAULT_CRITICAL.iter().map(|s| s.to_string()).collect()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            critical: default_critical(),
            ignore_critical: false,
        }
    }
}

impl PolicyConfig {
    pub fn critical_policy(&self) -> CriticalPolicy {
        CriticalPolicy::new(self.critical.iter().cloned())
    }
}

impl Config {
    fn validate(self) -> Result<Self> {
        for (key, value) in [
            ("classifier.confidence", self.classifier.confidence),
            ("classifier.min_score", self.classifier.min_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("{key} must be between 0 and 1, got {value}");
            }
        }
        Ok(self)
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.vendor-licenses/config.toml`
/// 3. `~/.config/vendor-licenses/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".vendor-licenses").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("vendor-licenses")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}
