//! Per-cycle availability report.

use std::fmt;
use std::io::{self, Write};

use crate::endpoint::Domain;
use crate::observability::metrics;

/// Cumulative availability of one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainAvailability {
    pub domain: Domain,
    pub percent: u8,
}

impl fmt::Display for DomainAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has {}% availability", self.domain, self.percent)
    }
}

/// Report produced at the end of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    pub lines: Vec<DomainAvailability>,
}

impl CycleReport {
    /// Availability of a single domain, if it has been seen.
    pub fn percent_for(&self, domain: &str) -> Option<u8> {
        self.lines
            .iter()
            .find(|line| line.domain.as_str() == domain)
            .map(|line| line.percent)
    }

    /// Print one line per domain to stdout and record it.
    pub fn emit(&self) {
        self.emit_to(&mut io::stdout().lock());
    }

    /// Write one line per domain to `out` and record it.
    ///
    /// A failed write (e.g. a closed pipe) is logged once; the remaining
    /// lines are still recorded as events and metrics.
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let mut writable = true;
        for line in &self.lines {
            if writable {
                if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
                    tracing::warn!(error = %e, cycle = self.cycle, "Failed to write report");
                    writable = false;
                }
            }
            tracing::info!(
                cycle = self.cycle,
                domain = %line.domain,
                availability_percent = line.percent,
                "Domain availability"
            );
            metrics::record_availability(&line.domain, line.percent);
        }
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CycleReport {
        let domain = |raw: &str| Domain::parse(raw).unwrap();
        CycleReport {
            cycle: 3,
            lines: vec![
                DomainAvailability { domain: domain("https://a.com/x"), percent: 100 },
                DomainAvailability { domain: domain("https://b.com:8443/"), percent: 67 },
            ],
        }
    }

    struct ClosedPipe {
        writes: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emit_writes_one_line_per_domain() {
        let mut out = Vec::new();
        report().emit_to(&mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a.com has 100% availability\nb.com:8443 has 67% availability\n"
        );
    }

    #[test]
    fn test_emit_survives_closed_output() {
        let mut out = ClosedPipe { writes: 0 };
        report().emit_to(&mut out);
        // Writing stops after the first failure.
        assert_eq!(out.writes, 1);
    }

    #[test]
    fn test_percent_for() {
        let report = report();
        assert_eq!(report.percent_for("b.com:8443"), Some(67));
        assert_eq!(report.percent_for("c.com"), None);
    }
}
