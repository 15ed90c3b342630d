//! Conformance comparison against a reference serializer

mod candidate;
mod expected;
mod harness;
mod report;

pub use candidate::Candidate;
pub use expected::{ExpectedFailure, ExpectedFailures};
pub use harness::{ConformanceConfig, ConformanceHarness, Equality};
pub use report::{ComparisonReport, ComparisonResult, Outcome, ReportRow, Tally};
