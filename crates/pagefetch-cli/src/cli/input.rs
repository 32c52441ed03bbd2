//! Turning command-line input into descriptors.

use anyhow::{Context, Result};
use pagefetch_core::ResourceDescriptor;
use std::fs;
use std::path::Path;

/// Parse a descriptor list: one `URL` or `URL<TAB>LABEL` per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_lines(text: &str) -> Vec<ResourceDescriptor> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((url, label)) if !label.trim().is_empty() => {
                ResourceDescriptor::labeled(url.trim(), label.trim())
            }
            Some((url, _)) => ResourceDescriptor::new(url.trim()),
            None => ResourceDescriptor::new(line),
        })
        .collect()
}

/// Load descriptors from a file; `.json` files hold an array of
/// `{"id": ..., "label": ...}` objects, anything else uses [`parse_lines`].
pub fn load_file(path: &Path) -> Result<Vec<ResourceDescriptor>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
    } else {
        Ok(parse_lines(&data))
    }
}

/// Positional URLs first, then file entries, in order.
pub fn collect(urls: &[String], file: Option<&Path>) -> Result<Vec<ResourceDescriptor>> {
    let mut descriptors: Vec<ResourceDescriptor> = urls
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .map(ResourceDescriptor::new)
        .collect();
    if let Some(path) = file {
        descriptors.extend(load_file(path)?);
    }
    Ok(descriptors)
}
