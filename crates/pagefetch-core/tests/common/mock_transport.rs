//! Scripted in-memory transport for fetcher tests.
//!
//! Each target gets a list of responses consumed one per call; the last one
//! repeats once the list is exhausted. Unknown targets fail with `Connect`.

use pagefetch_core::{RawResponse, Transport, TransportError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Reply = Result<RawResponse, TransportError>;

#[derive(Default)]
pub struct MockTransport {
    scripts: HashMap<String, Vec<Reply>>,
    latency: Duration,
    panic_on: Option<String>,
    calls: Mutex<HashMap<String, usize>>,
    identities: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Panic (inside the worker) whenever `target` is fetched.
    pub fn panic_on(mut self, target: &str) -> Self {
        self.panic_on = Some(target.to_string());
        self
    }

    pub fn script(mut self, target: &str, replies: Vec<Reply>) -> Self {
        self.scripts.insert(target.to_string(), replies);
        self
    }

    pub fn html(self, target: &str, body: &str) -> Self {
        self.script(target, vec![Ok(RawResponse::new(200, body))])
    }

    pub fn status(self, target: &str, code: u16) -> Self {
        self.script(target, vec![Ok(RawResponse::new(code, "error page"))])
    }

    pub fn calls(&self, target: &str) -> usize {
        self.calls.lock().unwrap().get(target).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    pub fn identities_seen(&self) -> Vec<String> {
        self.identities.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Transport for MockTransport {
    fn fetch(&self, target: &str, identity: &str) -> Result<RawResponse, TransportError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.identities.lock().unwrap().push(identity.to_string());

        let n = {
            let mut calls = self.calls.lock().unwrap();
            let c = calls.entry(target.to_string()).or_insert(0);
            *c += 1;
            *c
        };
        if self.panic_on.as_deref() == Some(target) {
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            panic!("transport exploded on {}", target);
        }
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        let reply = match self.scripts.get(target) {
            Some(replies) if !replies.is_empty() => replies[(n - 1).min(replies.len() - 1)].clone(),
            _ => Err(TransportError::Connect(format!("connection refused: {}", target))),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        reply
    }
}
