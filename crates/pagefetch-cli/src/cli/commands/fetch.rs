//! `pagefetch fetch` – run one batch and print the result mapping.

use anyhow::Result;
use pagefetch_core::config::FetcherConfig;
use pagefetch_core::{ConcurrentFetcher, FetchResult, ResultMapping};
use std::path::PathBuf;

use crate::cli::input;

#[derive(Debug)]
pub struct FetchArgs {
    pub urls: Vec<String>,
    pub file: Option<PathBuf>,
    pub workers: Option<usize>,
    pub json: bool,
}

/// Results sorted by id so output is stable across runs.
fn sorted(mapping: &ResultMapping) -> Vec<&FetchResult> {
    let mut results: Vec<&FetchResult> = mapping.values().collect();
    results.sort_by(|a, b| a.id.cmp(&b.id));
    results
}

pub async fn run_fetch(cfg: &FetcherConfig, args: FetchArgs) -> Result<()> {
    let descriptors = input::collect(&args.urls, args.file.as_deref())?;
    if descriptors.is_empty() {
        anyhow::bail!("nothing to fetch: pass URLs or --file");
    }
    let workers = args.workers.unwrap_or(cfg.max_workers);

    let fetcher = ConcurrentFetcher::from_config(cfg);
    let mapping = fetcher.fetch_all(&descriptors, workers).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&mapping)?);
    } else {
        for result in sorted(&mapping) {
            println!("{}\n", result.render());
        }
    }

    let ok = mapping.values().filter(|r| r.is_ok()).count();
    eprintln!("{} ok, {} failed", ok, mapping.len() - ok);
    Ok(())
}
