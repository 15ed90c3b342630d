//! Timed serialization loops
//!
//! Candidates run strictly one after another; wall-clock numbers are only
//! comparable when nothing else is measured at the same time.

use super::probe::{AllocationProbe, NoAllocationProbe};
use super::report::{Measurement, ThroughputReport};
use super::workload::Workload;
use crate::conformance::Candidate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hint::black_box;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Throughput run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThroughputConfig {
    /// Serializations per candidate
    pub iterations: usize,
}

impl ThroughputConfig {
    /// Default iteration count
    pub const DEFAULT_ITERATIONS: usize = 10_000;

    /// Configuration with a custom iteration count
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for zero iterations.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::invalid_config("iterations must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ThroughputConfig {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

/// Runs every candidate over the same workload
#[derive(Clone)]
pub struct ThroughputHarness {
    candidates: Vec<Candidate>,
    config: ThroughputConfig,
    probe: Arc<dyn AllocationProbe>,
}

impl std::fmt::Debug for ThroughputHarness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThroughputHarness")
            .field("candidates", &self.candidates)
            .field("config", &self.config)
            .field("probe", &self.probe.name())
            .finish()
    }
}

impl ThroughputHarness {
    /// Create a harness with no candidates and no allocation probe
    pub fn new(config: ThroughputConfig) -> Self {
        Self {
            candidates: Vec::new(),
            config,
            probe: Arc::new(NoAllocationProbe),
        }
    }

    /// Append a candidate
    #[must_use]
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Append several candidates in order
    #[must_use]
    pub fn with_candidates(mut self, candidates: impl IntoIterator<Item = Candidate>) -> Self {
        self.candidates.extend(candidates);
        self
    }

    /// Replace the allocation probe
    #[must_use]
    pub fn with_probe(mut self, probe: impl AllocationProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Candidates in declaration order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Run configuration
    pub fn config(&self) -> &ThroughputConfig {
        &self.config
    }

    /// Keep only the named candidates, preserving declaration order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a label names no candidate.
    pub fn retain_candidates<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<()> {
        for label in labels {
            let label = label.as_ref();
            if !self.candidates.iter().any(|c| c.label() == label) {
                return Err(Error::invalid_config(format!("unknown candidate: {label}")));
            }
        }
        self.candidates
            .retain(|c| labels.iter().any(|label| label.as_ref() == c.label()));
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.config.validate()?;
        if self.candidates.is_empty() {
            return Err(Error::invalid_config("no candidates to measure"));
        }
        let mut seen = HashSet::new();
        for candidate in &self.candidates {
            if !seen.insert(candidate.label()) {
                return Err(Error::invalid_config(format!(
                    "duplicate candidate label: {}",
                    candidate.label()
                )));
            }
        }
        Ok(())
    }

    /// Time one candidate over the workload
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for zero iterations and
    /// `Error::Benchmark` for any failure inside the loop.
    pub fn measure(&self, candidate: &Candidate, workload: &Workload) -> Result<Measurement> {
        self.config.validate()?;
        let label = candidate.label();
        let sample = workload.sample();

        let before = self.probe.snapshot();
        let start = Instant::now();
        let mut output_bytes = 0;
        for iteration in 0..self.config.iterations {
            let bytes = candidate
                .serialize(black_box(sample))
                .map_err(|err| Error::benchmark(label, iteration, err))?;
            output_bytes = black_box(bytes).len();
        }
        let elapsed = start.elapsed();
        let allocations = before
            .zip(self.probe.snapshot())
            .map(|(before, after)| after.since(&before));

        debug!(candidate = label, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "Measured");
        Ok(Measurement {
            candidate: label.to_string(),
            iterations: self.config.iterations,
            elapsed,
            output_bytes,
            allocations,
        })
    }

    /// Measure every candidate in declaration order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` for an unusable configuration and the
    /// first `Error::Benchmark` raised by a candidate.
    pub fn run(&self, workload: &Workload) -> Result<ThroughputReport> {
        self.validate()?;
        info!(
            candidates = self.candidates.len(),
            iterations = self.config.iterations,
            fixtures = workload.len(),
            probe = self.probe.name(),
            "Starting throughput run"
        );

        let measurements = self
            .candidates
            .iter()
            .map(|candidate| self.measure(candidate, workload))
            .collect::<Result<Vec<_>>>()?;

        Ok(ThroughputReport {
            iterations: self.config.iterations,
            fixtures: workload.len(),
            measurements,
        })
    }
}
