//! Default candidate sets for the bundled serializers

use crate::backend::{MessagePackBackend, SerdeJsonBackend, SimdJsonBackend, SonicRsBackend};
use crate::conformance::{Candidate, ConformanceHarness, ExpectedFailures};
use crate::options::{Mode, NonFinitePolicy, SerializerOptions};

/// Label of the reference serializer
pub const REFERENCE_LABEL: &str = "serde_json (reference)";

/// Label of the object-mode profile
pub const OBJECT_PROFILE_LABEL: &str = "sonic-rs (object)";

/// `serde_json` in lenient mode with hooks; decimals as strings, non-finite
/// floats rejected
pub fn reference_candidate() -> Candidate {
    Candidate::new(
        REFERENCE_LABEL,
        SerdeJsonBackend::compact(),
        SerializerOptions::reference(),
    )
}

/// Conformance candidates in report column order
pub fn conformance_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("serde_json (strict)", SerdeJsonBackend::compact(), SerializerOptions::strict()),
        Candidate::new(OBJECT_PROFILE_LABEL, SonicRsBackend, SerializerOptions::object()),
        Candidate::new("sonic-rs (compat)", SonicRsBackend, SerializerOptions::compat()),
        Candidate::new(
            "sonic-rs (compat, hook)",
            SonicRsBackend,
            SerializerOptions::compat_with_hook(),
        ),
        Candidate::new(
            "simd-json (compat, hook)",
            SimdJsonBackend,
            SerializerOptions::compat_with_hook(),
        ),
    ]
}

/// Declared failures: the object-mode profile is not run on `DateTime`
pub fn expected_failures() -> ExpectedFailures {
    ExpectedFailures::new().with("DateTime", OBJECT_PROFILE_LABEL, "unknown error")
}

/// Reference, candidates and declared failures
pub fn conformance_harness() -> ConformanceHarness {
    ConformanceHarness::new(reference_candidate())
        .with_candidates(conformance_candidates())
        .with_expected_failures(expected_failures())
}

/// Options shared by every throughput candidate
///
/// Non-finite floats become `null` so the merged workload never fails.
pub fn throughput_options() -> SerializerOptions {
    SerializerOptions::default()
        .with_mode(Mode::Lenient)
        .with_serialize_hook(true)
        .with_non_finite(NonFinitePolicy::Null)
}

/// Throughput candidates in declaration order
pub fn throughput_candidates() -> Vec<Candidate> {
    let options = throughput_options();
    vec![
        Candidate::new("serde_json", SerdeJsonBackend::compact(), options.clone()),
        Candidate::new("msgpack", MessagePackBackend, options.clone()),
        Candidate::new("sonic-rs", SonicRsBackend, options.clone()),
        Candidate::new("simd-json", SimdJsonBackend, options),
    ]
}
