//! Conformance report model and rendering

use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// Classification of one (fixture, candidate) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Output equals the reference output
    Match,
    /// Both produced output and it differs
    Mismatch,
    /// The candidate failed fatally, or the pair is a declared failure
    Crash,
    /// The reference could not serialize the fixture
    NoBaseline,
}

impl Outcome {
    /// Literal table marker
    pub fn marker(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::Crash => "crash",
            Self::NoBaseline => "no-baseline",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.marker())
    }
}

/// One cell of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Candidate label
    pub candidate: String,
    /// Classification
    pub outcome: Outcome,
    /// Candidate output, failure text or declared reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ComparisonResult {
    /// Create a result
    pub fn new(candidate: impl Into<String>, outcome: Outcome, detail: Option<String>) -> Self {
        Self {
            candidate: candidate.into(),
            outcome,
            detail,
        }
    }
}

/// One fixture's results, in candidate declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Fixture name
    pub fixture: String,
    /// Reference output, `None` when the reference failed
    pub reference: Option<String>,
    /// One result per candidate
    pub results: Vec<ComparisonResult>,
}

impl ReportRow {
    /// Outcome for a candidate label
    pub fn outcome(&self, candidate: &str) -> Option<Outcome> {
        self.results
            .iter()
            .find(|r| r.candidate == candidate)
            .map(|r| r.outcome)
    }
}

/// Outcome counts for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// `match` cells
    pub matches: usize,
    /// `mismatch` cells
    pub mismatches: usize,
    /// `crash` cells
    pub crashes: usize,
    /// `no-baseline` cells
    pub no_baseline: usize,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Match => self.matches += 1,
            Outcome::Mismatch => self.mismatches += 1,
            Outcome::Crash => self.crashes += 1,
            Outcome::NoBaseline => self.no_baseline += 1,
        }
    }

    /// Total cells counted
    pub fn total(&self) -> usize {
        self.matches + self.mismatches + self.crashes + self.no_baseline
    }
}

/// Result of one conformance run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    /// Reference label
    pub reference: String,
    /// Candidate labels in declaration order
    pub candidates: Vec<String>,
    /// One row per fixture, in catalogue order
    pub rows: Vec<ReportRow>,
}

impl ComparisonReport {
    /// Row for a fixture
    pub fn row(&self, fixture: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.fixture == fixture)
    }

    /// Outcome for a (fixture, candidate) pair
    pub fn outcome(&self, fixture: &str, candidate: &str) -> Option<Outcome> {
        self.row(fixture).and_then(|row| row.outcome(candidate))
    }

    /// Per-candidate tallies in declaration order
    pub fn summary(&self) -> Vec<(String, Tally)> {
        self.candidates
            .iter()
            .map(|label| {
                let mut tally = Tally::default();
                for outcome in self.rows.iter().filter_map(|row| row.outcome(label)) {
                    tally.record(outcome);
                }
                (label.clone(), tally)
            })
            .collect()
    }

    /// Report as a JSON value
    ///
    /// # Errors
    ///
    /// Returns `Error::Report` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `Error::Report` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FIXTURE_HEADER: &str = "fixture";

        let first = self
            .rows
            .iter()
            .map(|row| row.fixture.chars().count())
            .chain(std::iter::once(FIXTURE_HEADER.len()))
            .max()
            .unwrap_or(FIXTURE_HEADER.len());
        let widths: Vec<usize> = self
            .candidates
            .iter()
            .map(|label| label.chars().count().max(Outcome::NoBaseline.marker().len()))
            .collect();

        let border = {
            let mut line = format!("+{}+", "-".repeat(first + 2));
            for width in &widths {
                line.push_str(&"-".repeat(width + 2));
                line.push('+');
            }
            line
        };

        writeln!(f, "Conformance against {}", self.reference)?;
        writeln!(f, "{border}")?;
        write!(f, "| {FIXTURE_HEADER:<first$} |")?;
        for (label, width) in self.candidates.iter().zip(&widths) {
            write!(f, " {label:<width$} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{border}")?;

        for row in &self.rows {
            write!(f, "| {:<first$} |", row.fixture)?;
            for (label, width) in self.candidates.iter().zip(&widths) {
                let marker = row.outcome(label).map_or("", Outcome::marker);
                write!(f, " {marker:<width$} |")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{border}")?;

        writeln!(f, "{} fixtures", self.rows.len())?;
        for (label, tally) in self.summary() {
            writeln!(
                f,
                "  {label}: {} match, {} mismatch, {} crash, {} no-baseline",
                tally.matches, tally.mismatches, tally.crashes, tally.no_baseline
            )?;
        }
        Ok(())
    }
}
