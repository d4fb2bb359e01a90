//! HTTP prober.
//!
//! # Responsibilities
//! - Issue one request using the endpoint's method, headers and body
//! - Bound the attempt (headers and body) with a timeout
//! - Classify the result without ever returning an error

use std::time::Duration;

use reqwest::Client;
use tokio::time;

use crate::config::MonitorSettings;
use crate::endpoint::EndpointDefinition;
use crate::probe::{Probe, ProbeOutcome, TIMEOUT_LOG_TARGET};

/// Probes endpoints over HTTP(S) with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
    timeout: Duration,
}

impl HttpProber {
    /// Build a prober from monitor settings.
    pub fn new(settings: &MonitorSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self::with_client(client, settings.probe_timeout()))
    }

    /// Build a prober around an existing client.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn send(&self, endpoint: &EndpointDefinition) -> Result<u16, reqwest::Error> {
        let mut request = self
            .client
            .request(endpoint.method().clone(), endpoint.url().clone())
            .headers(endpoint.headers().clone());

        if let Some(body) = endpoint.body() {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        // The attempt is complete only once the body has arrived.
        response.bytes().await?;

        Ok(status)
    }
}

impl Probe for HttpProber {
    async fn probe(&self, endpoint: &EndpointDefinition) -> ProbeOutcome {
        let outcome = match time::timeout(self.timeout, self.send(endpoint)).await {
            Ok(Ok(status)) => {
                let outcome = ProbeOutcome::from_status(status);
                if !outcome.is_success() {
                    tracing::debug!(
                        endpoint = endpoint.name(),
                        url = %endpoint.url(),
                        status,
                        "Probe failed: non-success status"
                    );
                }
                outcome
            }
            Ok(Err(e)) if e.is_timeout() => ProbeOutcome::Timeout,
            Ok(Err(e)) => {
                tracing::debug!(
                    endpoint = endpoint.name(),
                    url = %endpoint.url(),
                    error = %e,
                    "Probe failed: transport error"
                );
                ProbeOutcome::Failure
            }
            Err(_) => ProbeOutcome::Timeout,
        };

        if outcome == ProbeOutcome::Timeout {
            tracing::warn!(
                target: TIMEOUT_LOG_TARGET,
                endpoint = endpoint.name(),
                method = %endpoint.method(),
                url = %endpoint.url(),
                "{} at {} request timed out",
                endpoint.method(),
                endpoint.url()
            );
        }

        outcome
    }
}
