//! Conformance harness
//!
//! Every fixture is serialized once by the reference and once per candidate.
//! Candidates run one after another with their own options, so no candidate
//! can observe configuration left behind by another.

use super::candidate::Candidate;
use super::expected::ExpectedFailures;
use super::report::{ComparisonReport, ComparisonResult, Outcome, ReportRow};
use crate::error::{Error, Result, SerializeError};
use jsonprobe_domain::{Fixture, FixtureCatalogue, Sample};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// How candidate output is compared with the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equality {
    /// Byte equality
    #[default]
    Exact,
    /// Equality of the parsed JSON values; falls back to bytes if either
    /// side is not valid JSON
    Semantic,
}

impl Equality {
    fn equal(self, reference: &[u8], candidate: &[u8]) -> bool {
        match self {
            Self::Exact => reference == candidate,
            Self::Semantic => {
                let parsed = serde_json::from_slice::<serde_json::Value>(reference)
                    .and_then(|r| serde_json::from_slice::<serde_json::Value>(candidate).map(|c| (r, c)));
                match parsed {
                    Ok((reference, candidate)) => reference == candidate,
                    Err(_) => reference == candidate,
                }
            }
        }
    }
}

/// Conformance run configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    /// Output comparison rule
    pub equality: Equality,
}

/// Compares candidates against a reference over a fixture catalogue
#[derive(Debug, Clone)]
pub struct ConformanceHarness {
    reference: Candidate,
    candidates: Vec<Candidate>,
    expected: ExpectedFailures,
    config: ConformanceConfig,
}

impl ConformanceHarness {
    /// Create a harness with no candidates
    pub fn new(reference: Candidate) -> Self {
        Self {
            reference,
            candidates: Vec::new(),
            expected: ExpectedFailures::default(),
            config: ConformanceConfig::default(),
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

    /// Replace the expected failure table
    #[must_use]
    pub fn with_expected_failures(mut self, expected: ExpectedFailures) -> Self {
        self.expected = expected;
        self
    }

    /// Replace the run configuration
    #[must_use]
    pub fn with_config(mut self, config: ConformanceConfig) -> Self {
        self.config = config;
        self
    }

    /// Reference candidate
    pub fn reference(&self) -> &Candidate {
        &self.reference
    }

    /// Candidates in declaration order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
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

    /// Check the harness can run
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` when there are no candidates, when two
    /// labels collide, or when an option set is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(Error::invalid_config("no candidates to compare"));
        }
        let mut seen = HashSet::new();
        for candidate in std::iter::once(&self.reference).chain(&self.candidates) {
            if !seen.insert(candidate.label()) {
                return Err(Error::invalid_config(format!(
                    "duplicate candidate label: {}",
                    candidate.label()
                )));
            }
            candidate.options().validate().map_err(|err| {
                Error::invalid_config(format!("{}: {err}", candidate.label()))
            })?;
        }
        Ok(())
    }

    /// Classify every candidate on one fixture
    ///
    /// # Errors
    ///
    /// Returns `Error::Candidate` when a candidate fails with an ordinary
    /// (non-fatal) error.
    pub fn compare_fixture(&self, fixture: &Fixture) -> Result<ReportRow> {
        let name = fixture.name();
        let value = fixture.value();

        let baseline = match guarded(&self.reference, value) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(fixture = name, error = %err, "Reference failed, no baseline");
                let detail = err.to_string();
                return Ok(ReportRow {
                    fixture: name.to_string(),
                    reference: None,
                    results: self
                        .candidates
                        .iter()
                        .map(|c| {
                            ComparisonResult::new(c.label(), Outcome::NoBaseline, Some(detail.clone()))
                        })
                        .collect(),
                });
            }
        };

        let mut results = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            let label = candidate.label();
            if let Some(expected) = self.expected.lookup(name, label) {
                debug!(fixture = name, candidate = label, reason = %expected.reason, "Expected failure");
                results.push(ComparisonResult::new(
                    label,
                    Outcome::Crash,
                    Some(expected.reason.clone()),
                ));
                continue;
            }

            let result = match guarded(candidate, value) {
                Ok(output) => {
                    let outcome = if self.config.equality.equal(&baseline, &output) {
                        Outcome::Match
                    } else {
                        Outcome::Mismatch
                    };
                    ComparisonResult::new(label, outcome, Some(lossy(&output)))
                }
                Err(err) if err.is_fatal() => {
                    debug!(fixture = name, candidate = label, error = %err, "Candidate crashed");
                    ComparisonResult::new(label, Outcome::Crash, Some(err.to_string()))
                }
                Err(err) => return Err(Error::candidate(label, name, err)),
            };
            results.push(result);
        }

        Ok(ReportRow {
            fixture: name.to_string(),
            reference: Some(lossy(&baseline)),
            results,
        })
    }

    /// Run every fixture of the catalogue
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if validation fails and `Error::Candidate`
    /// on the first ordinary candidate failure.
    pub fn run(&self, catalogue: &FixtureCatalogue) -> Result<ComparisonReport> {
        self.validate()?;
        info!(
            reference = self.reference.label(),
            candidates = self.candidates.len(),
            fixtures = catalogue.len(),
            "Starting conformance run"
        );

        let rows = catalogue
            .iter()
            .map(|fixture| self.compare_fixture(fixture))
            .collect::<Result<Vec<_>>>()?;

        info!(rows = rows.len(), "Conformance run complete");
        Ok(ComparisonReport {
            reference: self.reference.label().to_string(),
            candidates: self.candidates.iter().map(|c| c.label().to_string()).collect(),
            rows,
        })
    }
}

/// Serialize with panics turned into `SerializeError::Panicked`
fn guarded(candidate: &Candidate, value: &Sample) -> std::result::Result<Vec<u8>, SerializeError> {
    panic::catch_unwind(AssertUnwindSafe(|| candidate.serialize(value))).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        warn!(candidate = candidate.label(), %message, "Serializer panicked");
        Err(SerializeError::Panicked(message))
    })
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
