//! Per-address and per-endpoint aggregation with brute-force detection.
//!
//! An [`AccessAggregator`] is created empty for each analysis run, fed one
//! [`LogEntry`] at a time, then sealed into a read-only [`TrafficSummary`]
//! once the stream is exhausted. Sealing consumes the aggregator, so no
//! counter can be mutated after reporting begins.

use std::collections::HashMap;

use auditor_core::models::LogEntry;
use serde::{Deserialize, Serialize};

// ── AddressRow ────────────────────────────────────────────────────────────────

/// One row of the per-address output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRow {
    /// Client address in textual form.
    pub address: String,
    /// Total requests seen from this address.
    pub request_count: u64,
    /// Failed-login triggers from this address; 0 when never triggered.
    pub failed_logins: u64,
}

// ── AccessAggregator ──────────────────────────────────────────────────────────

/// Mutable aggregation state for one analysis run.
///
/// Each counter map is paired with a first-seen order vector so ranked
/// output stays deterministic: ties are broken by the order in which a key
/// was first observed.
#[derive(Debug, Default)]
pub struct AccessAggregator {
    requests_by_address: HashMap<String, u64>,
    requests_by_endpoint: HashMap<String, u64>,
    failed_logins_by_address: HashMap<String, u64>,
    address_order: Vec<String>,
    endpoint_order: Vec<String>,
    failed_login_order: Vec<String>,
}

impl AccessAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one entry into the running counters.
    ///
    /// The address and endpoint counters are always bumped; the
    /// failed-login counter only when the entry matches the brute-force
    /// signature. The entry still counts toward the first two regardless.
    pub fn record(&mut self, entry: &LogEntry) {
        bump(
            &mut self.requests_by_address,
            &mut self.address_order,
            &entry.address,
        );
        bump(
            &mut self.requests_by_endpoint,
            &mut self.endpoint_order,
            &entry.endpoint,
        );
        if entry.is_failed_login() {
            bump(
                &mut self.failed_logins_by_address,
                &mut self.failed_login_order,
                &entry.address,
            );
        }
    }

    /// Finalize the run: consume the aggregator and return the read-only
    /// query surface. No further recording is possible afterwards.
    pub fn seal(self) -> TrafficSummary {
        TrafficSummary {
            requests_by_address: self.requests_by_address,
            requests_by_endpoint: self.requests_by_endpoint,
            failed_logins_by_address: self.failed_logins_by_address,
            address_order: self.address_order,
            endpoint_order: self.endpoint_order,
            failed_login_order: self.failed_login_order,
        }
    }
}

/// Increment `map[key]`, registering first-seen order on insertion.
fn bump(map: &mut HashMap<String, u64>, order: &mut Vec<String>, key: &str) {
    match map.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            map.insert(key.to_string(), 1);
            order.push(key.to_string());
        }
    }
}

// ── TrafficSummary ────────────────────────────────────────────────────────────

/// Sealed, read-only view over one run's aggregated counters.
#[derive(Debug, Clone)]
pub struct TrafficSummary {
    requests_by_address: HashMap<String, u64>,
    requests_by_endpoint: HashMap<String, u64>,
    failed_logins_by_address: HashMap<String, u64>,
    address_order: Vec<String>,
    endpoint_order: Vec<String>,
    failed_login_order: Vec<String>,
}

impl TrafficSummary {
    /// Up to `n` addresses ranked by request count, descending.
    ///
    /// Ties are broken by first-seen order. An empty result simply means
    /// no requests were recorded; it is not an error.
    pub fn top_addresses(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = rank(&self.requests_by_address, &self.address_order);
        ranked.truncate(n);
        ranked
    }

    /// The single most-accessed endpoint and its count.
    ///
    /// Returns `None` when zero endpoints were recorded; ties go to the
    /// endpoint observed first.
    pub fn most_accessed_endpoint(&self) -> Option<(&str, u64)> {
        let mut best: Option<(&str, u64)> = None;
        for endpoint in &self.endpoint_order {
            let count = self.requests_by_endpoint[endpoint];
            // Strictly greater keeps the first-seen endpoint on ties.
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((endpoint, count));
            }
        }
        best
    }

    /// Addresses that triggered the failed-login signature at least once,
    /// ranked by failed count descending, first-trigger order on ties.
    ///
    /// An empty vector means no suspicious activity, a normal outcome.
    pub fn suspicious_addresses(&self) -> Vec<(String, u64)> {
        rank(&self.failed_logins_by_address, &self.failed_login_order)
    }

    /// One row per distinct address ever seen, in first-seen order.
    pub fn rows(&self) -> Vec<AddressRow> {
        self.address_order
            .iter()
            .map(|address| AddressRow {
                address: address.clone(),
                request_count: self.requests_by_address[address],
                failed_logins: self
                    .failed_logins_by_address
                    .get(address)
                    .copied()
                    .unwrap_or(0),
            })
            .collect()
    }

    /// Total number of distinct addresses observed.
    pub fn address_count(&self) -> usize {
        self.address_order.len()
    }
}

/// Pairs in first-seen order, stable-sorted by count descending.
fn rank(map: &HashMap<String, u64>, order: &[String]) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = order
        .iter()
        .map(|key| (key.clone(), map[key]))
        .collect();
    // sort_by is stable, so equal counts keep first-seen order.
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

// ── Tests ─────────────────────────────────────────────────────────────────────
