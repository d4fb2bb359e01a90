//! The perpetual measurement cycle.
//!
//! # Responsibilities
//! - Dispatch one probe per endpoint, concurrently, capped at `max_in_flight`
//! - Collect every outcome before aggregating (join, not race)
//! - Fold outcomes into the owned `StatsBook` and produce the report
//! - Keep a fixed cadence between cycle starts

use std::time::Duration;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::MonitorSettings;
use crate::endpoint::{Domain, EndpointDefinition};
use crate::lifecycle::ShutdownSignal;
use crate::monitor::report::CycleReport;
use crate::monitor::stats::StatsBook;
use crate::observability::metrics;
use crate::probe::{Probe, ProbeOutcome};

/// Drives probe cycles over a fixed endpoint list.
pub struct Monitor<P> {
    endpoints: Vec<EndpointDefinition>,
    prober: P,
    stats: StatsBook,
    interval: Duration,
    max_in_flight: usize,
    cycles: u64,
}

impl<P: Probe> Monitor<P> {
    pub fn new(endpoints: Vec<EndpointDefinition>, prober: P, settings: &MonitorSettings) -> Self {
        Self {
            endpoints,
            prober,
            stats: StatsBook::new(),
            interval: settings.interval(),
            max_in_flight: settings.max_in_flight.max(1),
            cycles: 0,
        }
    }

    /// Override the cycle period from the settings.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Counters accumulated since the monitor was created.
    pub fn stats(&self) -> &StatsBook {
        &self.stats
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    pub fn endpoints(&self) -> &[EndpointDefinition] {
        &self.endpoints
    }

    /// Run one cycle: dispatch, collect, aggregate, report. Does not sleep.
    pub async fn run_cycle(&mut self) -> CycleReport {
        let started = Instant::now();

        let outcomes = self.dispatch().await;
        debug_assert_eq!(outcomes.len(), self.endpoints.len());

        let mut successes = 0usize;
        for (domain, outcome) in &outcomes {
            if outcome.is_success() {
                successes += 1;
            }
            self.stats.record(domain, *outcome);
            metrics::record_probe(domain, *outcome);
        }
        self.cycles += 1;

        let report = self.stats.report(self.cycles);

        let elapsed = started.elapsed();
        let overrun = elapsed > self.interval;
        metrics::record_cycle(elapsed, overrun);
        tracing::debug!(
            cycle = self.cycles,
            endpoints = outcomes.len(),
            successes,
            elapsed_ms = elapsed.as_millis() as u64,
            "Cycle complete"
        );
        if overrun {
            tracing::warn!(
                cycle = self.cycles,
                elapsed_ms = elapsed.as_millis() as u64,
                interval_secs = self.interval.as_secs(),
                "Cycle took longer than the interval; next cycle starts immediately"
            );
        }

        report
    }

    /// Probe every endpoint once and wait for all outcomes.
    ///
    /// At most `max_in_flight` probes run at once; a finished probe frees a
    /// slot for the next endpoint.
    async fn dispatch(&self) -> Vec<(Domain, ProbeOutcome)> {
        let mut pending = self.endpoints.iter();
        let mut in_flight = FuturesUnordered::new();
        let mut outcomes = Vec::with_capacity(self.endpoints.len());

        for endpoint in pending.by_ref().take(self.max_in_flight) {
            in_flight.push(probe_one(&self.prober, endpoint));
        }

        while let Some(result) = in_flight.next().await {
            outcomes.push(result);
            if let Some(endpoint) = pending.next() {
                in_flight.push(probe_one(&self.prober, endpoint));
            }
        }

        outcomes
    }

    /// Run cycles on a fixed cadence until shutdown, then return the counters.
    ///
    /// Shutdown is observed between cycles and while sleeping; a cycle that
    /// has started always completes and reports.
    pub async fn run(mut self, mut shutdown: ShutdownSignal) -> StatsBook {
        tracing::info!(
            endpoints = self.endpoints.len(),
            interval_secs = self.interval.as_secs_f64(),
            max_in_flight = self.max_in_flight,
            "Monitor starting"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                _ = ticker.tick() => {}
            }
            if shutdown.is_triggered() {
                break;
            }

            self.run_cycle().await.emit();
        }

        tracing::info!(
            cycles = self.cycles,
            domains = self.stats.len(),
            "Monitor stopped"
        );
        self.stats
    }

    /// Run exactly one cycle and return its report along with the counters.
    pub async fn run_once(mut self) -> (CycleReport, StatsBook) {
        let report = self.run_cycle().await;
        (report, self.stats)
    }
}

async fn probe_one<P: Probe>(prober: &P, endpoint: &EndpointDefinition) -> (Domain, ProbeOutcome) {
    let outcome = prober.probe(endpoint).await;
    (endpoint.domain().clone(), outcome)
}
