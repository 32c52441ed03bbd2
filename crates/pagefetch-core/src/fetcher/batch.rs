//! Bounded-parallel batch dispatch.
//!
//! Keeps up to `max_workers` descriptors in flight at once; when one
//! finishes, the next pending descriptor is started until none are left.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use tokio::task::JoinSet;

use super::{ConcurrentFetcher, UNAVAILABLE_NOTE};
use crate::descriptor::{FetchResult, ResourceDescriptor, ResultMapping};

/// Result slots keyed by id, remembering the input index that produced each
/// entry so duplicate ids resolve by input order, not completion order.
#[derive(Debug, Default)]
struct Collected {
    by_id: HashMap<String, (usize, FetchResult)>,
}

impl Collected {
    /// Last write wins: the descriptor appearing later in the input keeps the slot.
    fn record(&mut self, index: usize, result: FetchResult) {
        match self.by_id.entry(result.id.clone()) {
            Entry::Occupied(mut slot) => {
                if index >= slot.get().0 {
                    slot.insert((index, result));
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((index, result));
            }
        }
    }

    fn into_mapping(self) -> ResultMapping {
        self.by_id
            .into_iter()
            .map(|(id, (_, result))| (id, result))
            .collect()
    }
}

impl ConcurrentFetcher {
    /// Fetch every descriptor with at most `max_workers` running at once.
    ///
    /// Returns only when every descriptor has reached a terminal state. The
    /// mapping has one entry per distinct id; for duplicate ids the later
    /// descriptor in `descriptors` wins. `max_workers` is clamped to at least 1.
    /// Must be called from within a tokio runtime.
    pub async fn fetch_all(
        &self,
        descriptors: &[ResourceDescriptor],
        max_workers: usize,
    ) -> ResultMapping {
        let max_workers = max_workers.max(1);
        if descriptors.is_empty() {
            return ResultMapping::new();
        }

        let started = Instant::now();
        let mut collected = Collected::default();
        let mut finished = vec![false; descriptors.len()];
        let mut pending = descriptors.iter().cloned().enumerate();
        let mut join_set = JoinSet::new();

        loop {
            while join_set.len() < max_workers {
                let Some((index, descriptor)) = pending.next() else {
                    break;
                };
                let fetcher = self.clone();
                join_set.spawn_blocking(move || {
                    let result = catch_unwind(AssertUnwindSafe(|| fetcher.fetch_one(&descriptor)))
                        .unwrap_or_else(|_| {
                            tracing::error!(target_id = %descriptor.id, "worker panicked");
                            FetchResult::failed(&descriptor, UNAVAILABLE_NOTE)
                        });
                    (index, result)
                });
            }

            let Some(joined) = join_set.join_next().await else {
                break;
            };
            match joined {
                Ok((index, result)) => {
                    finished[index] = true;
                    collected.record(index, result);
                }
                Err(e) => tracing::error!("fetch task join: {}", e),
            }
        }

        // A task lost to a join error still owes its descriptor a result.
        for (index, done) in finished.iter().enumerate() {
            if !done {
                collected.record(index, FetchResult::failed(&descriptors[index], UNAVAILABLE_NOTE));
            }
        }

        let mapping = collected.into_mapping();
        let ok = mapping.values().filter(|r| r.is_ok()).count();
        tracing::info!(
            descriptors = descriptors.len(),
            distinct = mapping.len(),
            ok,
            failed = mapping.len() - ok,
            elapsed_ms = started.elapsed().as_millis() as u64,
            max_workers,
            "batch complete"
        );
        mapping
    }
}
