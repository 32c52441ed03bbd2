//! Batch input and output records.
//!
//! A batch is a list of [`ResourceDescriptor`]s in and a [`ResultMapping`] out,
//! with exactly one terminal [`FetchResult`] per distinct descriptor id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label used when a descriptor carries none.
pub const DEFAULT_LABEL: &str = "No title";

/// One target to retrieve. `id` is the target itself (typically a URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ResourceDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    pub fn labeled(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
        }
    }

    /// Human-readable label, or [`DEFAULT_LABEL`] when none was supplied.
    pub fn label(&self) -> &str {
        match self.label.as_deref() {
            Some(l) if !l.trim().is_empty() => l,
            _ => DEFAULT_LABEL,
        }
    }
}

/// Terminal state of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Ok,
    Failed,
}

/// Either the labeled content record or a short, non-sensitive failure note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchOutcome {
    Ok { content: String },
    Failed { note: String },
}

/// Result for one descriptor. Built once by the fetcher and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub outcome: FetchOutcome,
}

impl FetchResult {
    pub fn ok(descriptor: &ResourceDescriptor, content: String) -> Self {
        Self {
            id: descriptor.id.clone(),
            label: descriptor.label().to_string(),
            outcome: FetchOutcome::Ok { content },
        }
    }

    pub fn failed(descriptor: &ResourceDescriptor, note: impl Into<String>) -> Self {
        Self {
            id: descriptor.id.clone(),
            label: descriptor.label().to_string(),
            outcome: FetchOutcome::Failed { note: note.into() },
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self.outcome {
            FetchOutcome::Ok { .. } => FetchStatus::Ok,
            FetchOutcome::Failed { .. } => FetchStatus::Failed,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status() == FetchStatus::Ok
    }

    /// Labeled content; `Some` iff the status is `Ok`.
    pub fn content(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Ok { content } => Some(content),
            FetchOutcome::Failed { .. } => None,
        }
    }

    /// Failure note; `Some` iff the status is `Failed`.
    pub fn error_note(&self) -> Option<&str> {
        match &self.outcome {
            FetchOutcome::Ok { .. } => None,
            FetchOutcome::Failed { note } => Some(note),
        }
    }

    /// Record suitable for feeding to a summarizer. Failed entries keep the
    /// SOURCE/URL header so the gap can still be attributed.
    pub fn render(&self) -> String {
        match &self.outcome {
            FetchOutcome::Ok { content } => content.clone(),
            FetchOutcome::Failed { note } => {
                crate::extract::compose_record(&self.label, &self.id, note)
            }
        }
    }
}

/// Descriptor id -> result, one entry per distinct id.
pub type ResultMapping = HashMap<String, FetchResult>;
