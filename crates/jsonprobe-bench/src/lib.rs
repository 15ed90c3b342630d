//! jsonprobe benchmarking suite
//!
//! Shared setup for the Criterion benches. The timing loop in the `jsonprobe`
//! crate gives one number per candidate; these benches give Criterion's
//! statistics for the same candidates and workload.

pub use jsonprobe::{Candidate, Error, FixtureCatalogue, Result, Workload};

/// Workload merged from the standard catalogue
///
/// # Errors
///
/// Returns an error if the catalogue or the workload cannot be built.
pub fn standard_workload() -> Result<Workload> {
    let catalogue = FixtureCatalogue::standard()?;
    Workload::from_catalogue(&catalogue)
}

/// Throughput candidates paired with the size of one serialized workload
///
/// # Errors
///
/// Returns `Error::Benchmark` if a candidate cannot serialize the workload.
pub fn sized_candidates(workload: &Workload) -> Result<Vec<(Candidate, usize)>> {
    jsonprobe::presets::throughput_candidates()
        .into_iter()
        .map(|candidate| {
            let size = candidate
                .serialize(workload.sample())
                .map_err(|err| Error::benchmark(candidate.label(), 0, err))?
                .len();
            Ok((candidate, size))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_candidate_serializes_workload() {
        let workload = standard_workload().unwrap();
        let sized = sized_candidates(&workload).unwrap();
        assert_eq!(sized.len(), 4);
        assert!(sized.iter().all(|(_, size)| *size > 0));
    }
}
