//! Throughput report and ranking

use super::probe::AllocationStats;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Timing of one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Candidate label
    pub candidate: String,
    /// Completed iterations
    pub iterations: usize,
    /// Wall time of the whole loop
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
    /// Size of one serialized workload
    pub output_bytes: usize,
    /// Allocations during the loop, when a probe is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocations: Option<AllocationStats>,
}

impl Measurement {
    /// Mean time per iteration
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.iterations as f64)
    }
}

/// Position of a candidate in the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    /// Candidate label
    pub candidate: String,
    /// Wall time of the whole loop
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
    /// Elapsed time relative to the fastest candidate
    pub ratio: f64,
}

/// Result of one throughput run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputReport {
    /// Iterations per candidate
    pub iterations: usize,
    /// Fixtures merged into the workload
    pub fixtures: usize,
    /// Measurements in candidate declaration order
    pub measurements: Vec<Measurement>,
}

impl ThroughputReport {
    /// Candidates from fastest to slowest, with ratios to the fastest
    pub fn ranking(&self) -> Vec<Ranked> {
        let mut ordered: Vec<&Measurement> = self.measurements.iter().collect();
        ordered.sort_by_key(|m| m.elapsed);
        let fastest = ordered.first().map_or(Duration::ZERO, |m| m.elapsed);

        ordered
            .into_iter()
            .map(|m| Ranked {
                candidate: m.candidate.clone(),
                elapsed: m.elapsed,
                ratio: ratio(m.elapsed, fastest),
            })
            .collect()
    }

    /// Fastest candidate, if any ran
    pub fn fastest(&self) -> Option<&Measurement> {
        self.measurements.iter().min_by_key(|m| m.elapsed)
    }

    /// Report as a JSON value, including the ranking
    ///
    /// # Errors
    ///
    /// Returns `Error::Report` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        #[derive(Serialize)]
        struct Rendered<'a> {
            #[serde(flatten)]
            report: &'a ThroughputReport,
            ranking: Vec<Ranked>,
        }

        Ok(serde_json::to_value(Rendered {
            report: self,
            ranking: self.ranking(),
        })?)
    }

    /// Render as pretty JSON, including the ranking
    ///
    /// # Errors
    ///
    /// Returns `Error::Report` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}

fn ratio(elapsed: Duration, fastest: Duration) -> f64 {
    if fastest.is_zero() {
        if elapsed.is_zero() { 1.0 } else { f64::INFINITY }
    } else {
        elapsed.as_secs_f64() / fastest.as_secs_f64()
    }
}

fn as_millis<S: serde::Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_secs_f64() * 1000.0)
}

impl fmt::Display for ThroughputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .measurements
            .iter()
            .map(|m| m.candidate.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "Throughput: {} iterations over {} fixtures",
            self.iterations, self.fixtures
        )?;
        for m in &self.measurements {
            write!(
                f,
                "  {:<width$}  {:>10.3} ms  ({:.2} us/iter, {} bytes out",
                m.candidate,
                m.elapsed.as_secs_f64() * 1000.0,
                m.per_iteration().as_secs_f64() * 1_000_000.0,
                m.output_bytes
            )?;
            if let Some(stats) = m.allocations {
                write!(f, ", {} allocations, {} bytes allocated", stats.blocks, stats.bytes)?;
            }
            writeln!(f, ")")?;
        }

        writeln!(f, "Ranking:")?;
        for (position, ranked) in self.ranking().iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<width$}  {:.2}x",
                position + 1,
                ranked.candidate,
                ranked.ratio
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement(candidate: &str, millis: u64) -> Measurement {
        Measurement {
            candidate: candidate.into(),
            iterations: 10,
            elapsed: Duration::from_millis(millis),
            output_bytes: 42,
            allocations: None,
        }
    }

    fn report() -> ThroughputReport {
        ThroughputReport {
            iterations: 10,
            fixtures: 3,
            measurements: vec![
                measurement("slow", 300),
                measurement("fast", 100),
                measurement("mid", 200),
            ],
        }
    }

    #[test]
    fn test_ranking_is_ascending() {
        let ranking = report().ranking();
        let labels: Vec<&str> = ranking.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(labels, ["fast", "mid", "slow"]);
        assert_eq!(ranking[0].ratio, 1.0);
        assert!((ranking[2].ratio - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_iteration() {
        assert_eq!(measurement("x", 100).per_iteration(), Duration::from_millis(10));
    }

    #[test]
    fn test_per_iteration_beyond_u32_iterations() {
        let mut m = measurement("x", 0);
        m.iterations = u32::MAX as usize * 2;
        m.elapsed = Duration::from_secs(u64::from(u32::MAX) * 2);
        assert_eq!(m.per_iteration(), Duration::from_secs(1));

        m.iterations = 0;
        assert_eq!(m.per_iteration(), Duration::ZERO);
    }

    #[test]
    fn test_display_lines() {
        let text = report().to_string();
        assert!(text.starts_with("Throughput: 10 iterations over 3 fixtures"));
        assert!(text.contains("  1. fast  1.00x"));
        assert!(text.contains("  3. slow  3.00x"));
    }

    #[test]
    fn test_zero_elapsed_ratios() {
        assert_eq!(ratio(Duration::ZERO, Duration::ZERO), 1.0);
        assert!(ratio(Duration::from_nanos(1), Duration::ZERO).is_infinite());
    }

    #[test]
    fn test_json_contains_ranking() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ranking"][0]["candidate"], "fast");
        let elapsed = value["measurements"][0]["elapsed"].as_f64().unwrap();
        assert!((elapsed - 300.0).abs() < 1e-9);
    }
}
