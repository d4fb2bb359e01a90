//! Cumulative per-domain counters.
//!
//! # Design Decisions
//! - One `StatsBook` per monitor; no process-wide state
//! - A domain enters the book on its first attempt, so `total >= 1` always
//! - Counters only grow; nothing here resets them

use std::collections::btree_map::{BTreeMap, Entry};

use crate::endpoint::Domain;
use crate::monitor::report::{CycleReport, DomainAvailability};
use crate::probe::ProbeOutcome;

/// Attempt counters for a single domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStats {
    total_attempts: u64,
    success_attempts: u64,
}

impl DomainStats {
    fn first(outcome: ProbeOutcome) -> Self {
        Self {
            total_attempts: 1,
            success_attempts: u64::from(outcome.is_success()),
        }
    }

    fn record(&mut self, outcome: ProbeOutcome) {
        self.total_attempts += 1;
        if outcome.is_success() {
            self.success_attempts += 1;
        }
    }

    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    pub fn success_attempts(&self) -> u64 {
        self.success_attempts
    }

    /// Success ratio as a whole percentage, rounded half up.
    pub fn availability_percent(&self) -> u8 {
        let percent = (self.success_attempts * 200 + self.total_attempts) / (self.total_attempts * 2);
        // success <= total keeps this within 0..=100.
        percent as u8
    }
}

/// Aggregator owning the counters for every domain seen so far.
#[derive(Debug, Clone, Default)]
pub struct StatsBook {
    domains: BTreeMap<Domain, DomainStats>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into its domain's counters.
    pub fn record(&mut self, domain: &Domain, outcome: ProbeOutcome) {
        match self.domains.entry(domain.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().record(outcome),
            Entry::Vacant(entry) => {
                entry.insert(DomainStats::first(outcome));
            }
        }
    }

    pub fn get(&self, domain: &Domain) -> Option<&DomainStats> {
        self.domains.get(domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = (&Domain, &DomainStats)> {
        self.domains.iter()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Availability for every domain ever seen, in domain order.
    pub fn report(&self, cycle: u64) -> CycleReport {
        let lines = self
            .domains
            .iter()
            .map(|(domain, stats)| DomainAvailability {
                domain: domain.clone(),
                percent: stats.availability_percent(),
            })
            .collect();

        CycleReport { cycle, lines }
    }
}
