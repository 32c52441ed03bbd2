use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::extract::DEFAULT_CONTENT_CAP;
use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per descriptor (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        let p = RetryPolicy::default();
        Self {
            max_attempts: p.max_attempts,
            base_delay_secs: p.base_delay.as_secs_f64(),
            max_delay_secs: p.max_delay.as_secs(),
        }
    }
}

/// Global configuration loaded from `~/.config/pagefetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Default worker pool size for a batch.
    pub max_workers: usize,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Cap on normalized text per page, in characters.
    pub content_cap_chars: usize,
    /// User agents to rotate through; empty = built-in browser pool.
    #[serde(default)]
    pub user_agents: Vec<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_workers: 8,
            request_timeout_secs: 20,
            connect_timeout_secs: 10,
            content_cap_chars: DEFAULT_CONTENT_CAP,
            user_agents: Vec::new(),
            retry: None,
        }
    }
}

impl FetcherConfig {
    /// Retry policy from the `[retry]` section, or the built-in default.
    pub fn retry_policy(&self) -> RetryPolicy {
        match &self.retry {
            None => RetryPolicy::default(),
            Some(r) => RetryPolicy {
                max_attempts: r.max_attempts.max(1),
                base_delay: Duration::try_from_secs_f64(r.base_delay_secs.max(0.0))
                    .unwrap_or(RetryPolicy::default().base_delay),
                max_delay: Duration::from_secs(r.max_delay_secs),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.content_cap_chars == 0 {
            anyhow::bail!("content_cap_chars must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagefetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetcherConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetcherConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<FetcherConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
