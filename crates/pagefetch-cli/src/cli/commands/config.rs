//! `pagefetch config` – show where the config lives and what is in effect.

use anyhow::Result;
use pagefetch_core::config::{self, FetcherConfig};
use std::path::Path;

pub fn run_config(cfg: &FetcherConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    let policy = cfg.retry_policy();
    println!(
        "# retry: {} attempt(s), base delay {:?}, max delay {:?}",
        policy.max_attempts, policy.base_delay, policy.max_delay
    );
    Ok(())
}
