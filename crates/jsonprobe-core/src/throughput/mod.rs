//! Throughput measurement over a merged fixture workload

mod harness;
mod probe;
mod report;
mod workload;

pub use harness::{ThroughputConfig, ThroughputHarness};
#[cfg(feature = "dhat-heap")]
pub use probe::DhatProbe;
pub use probe::{AllocationProbe, AllocationStats, NoAllocationProbe};
pub use report::{Measurement, Ranked, ThroughputReport};
pub use workload::Workload;
