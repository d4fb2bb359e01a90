//! Endpoint definitions and the domain key derived from them.
//!
//! # Responsibilities
//! - Hold a validated, immutable endpoint record
//! - Derive the `host[:port]` authority used as the aggregation key
//!
//! # Design Decisions
//! - Definitions are only built by `config::validation`; fields are private
//! - The domain is derived once at construction and cached
//! - A port is part of the domain exactly when the URL text spells one out

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// Network authority (`host[:port]`) of an endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain(String);

impl Domain {
    /// Extract the authority from URL text. Returns `None` for unparsable
    /// or host-less URLs.
    ///
    /// `Url` normalizes a spelled-out default port away, so the port is taken
    /// from the original text: `https://a.com:443/x` yields `a.com:443`.
    pub fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        let host = url.host_str()?;
        if host.is_empty() {
            return None;
        }
        let authority = match explicit_port(raw).or(url.port()) {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        Some(Self(authority))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port written in the authority of `raw`, if any.
fn explicit_port(raw: &str) -> Option<u16> {
    let (_, rest) = raw.trim().split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let port = match host_port.rfind(']') {
        // IPv6 literal: the port, if any, follows the closing bracket.
        Some(end) => host_port[end + 1..].strip_prefix(':')?,
        None => host_port.rsplit_once(':')?.1,
    };
    port.parse().ok()
}

/// A single endpoint to probe every cycle.
#[derive(Debug, Clone)]
pub struct EndpointDefinition {
    name: String,
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
    domain: Domain,
}

impl EndpointDefinition {
    /// Build a definition from already-validated parts.
    pub(crate) fn from_parts(
        name: String,
        url: Url,
        domain: Domain,
        method: Method,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            name,
            url,
            method,
            headers,
            body,
            domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Aggregation key for this endpoint.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }
}
