//! # jsonprobe
//!
//! Compares JSON serializers against a reference serializer over a fixed
//! catalogue of awkward values, and measures how fast each one serializes the
//! whole catalogue.
//!
//! Serializers are opaque collaborators behind the [`Backend`] trait. Their
//! configuration travels with every call as [`SerializerOptions`]; nothing is
//! configured through shared state, so candidates never observe each other.
//!
//! Two independent harnesses share the fixture catalogue:
//!
//! - [`ConformanceHarness`] classifies every (fixture, candidate) pair as
//!   `match`, `mismatch`, `crash` or `no-baseline`
//! - [`ThroughputHarness`] times a fixed number of serializations of one
//!   merged workload per candidate and ranks the results

#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod backend;
pub mod conformance;
pub mod encode;
pub mod error;
pub mod options;
pub mod presets;
pub mod throughput;

pub use backend::{Backend, MessagePackBackend, SerdeJsonBackend, SimdJsonBackend, SonicRsBackend};
pub use conformance::{
    Candidate, ComparisonReport, ComparisonResult, ConformanceConfig, ConformanceHarness,
    Equality, ExpectedFailure, ExpectedFailures, Outcome, ReportRow, Tally,
};
pub use error::{Error, Result, SerializeError};
pub use options::{Mode, NonFinitePolicy, SerializerOptions, SerializerProfile};
pub use throughput::{
    AllocationProbe, AllocationStats, Measurement, NoAllocationProbe, Ranked, ThroughputConfig,
    ThroughputHarness, ThroughputReport, Workload,
};

#[cfg(feature = "dhat-heap")]
pub use throughput::DhatProbe;

// Domain re-exports so callers need a single dependency
pub use jsonprobe_domain::{DomainError, Fixture, FixtureCatalogue, FixtureFlags, Sample};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        Backend, Candidate, ComparisonReport, ConformanceHarness, Error, FixtureCatalogue, Mode,
        Outcome, Result, Sample, SerializeError, SerializerOptions, ThroughputHarness,
        ThroughputReport, Workload,
    };
}
