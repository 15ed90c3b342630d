//! Error types for jsonprobe operations

use crate::options::Mode;
use jsonprobe_domain::DomainError;

/// Result type alias for jsonprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single serializer call
///
/// The fatal kinds describe a value the serializer cannot represent; a
/// conformance run records them as a crash and moves on. The remaining kinds
/// point at a broken setup and stop the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerializeError {
    /// The value's type has no representation under the active options
    #[error("{type_name} has no representation in {mode} mode")]
    Unsupported {
        /// Type label of the rejected value
        type_name: String,
        /// Mode that rejected it
        mode: String,
    },

    /// Infinite or NaN number with non-finite numbers rejected
    #[error("Non-finite number {0} cannot be represented")]
    NonFinite(String),

    /// The serializer panicked
    #[error("Serializer panicked: {0}")]
    Panicked(String),

    /// Options failed validation
    #[error("Invalid serializer options: {0}")]
    InvalidOptions(String),

    /// Backend error not caused by the value itself
    #[error("{backend} failed: {message}")]
    Backend {
        /// Backend name
        backend: String,
        /// Backend error text
        message: String,
    },
}

impl SerializeError {
    /// Create an unsupported value error
    pub fn unsupported(type_name: impl Into<String>, mode: Mode) -> Self {
        Self::Unsupported {
            type_name: type_name.into(),
            mode: mode.to_string(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions(message.into())
    }

    /// Create a backend error
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Whether the failure is attributable to the value being serialized
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Unsupported { .. } | Self::NonFinite(_) | Self::Panicked(_)
        )
    }
}

/// Main error type for jsonprobe operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Fixture catalogue could not be built
    #[error("Fixture catalogue error: {0}")]
    Catalogue(#[from] DomainError),

    /// A candidate failed in a way the conformance run does not absorb
    #[error("Candidate {candidate} failed on fixture {fixture}: {source}")]
    Candidate {
        /// Candidate label
        candidate: String,
        /// Fixture name
        fixture: String,
        /// Underlying failure
        source: SerializeError,
    },

    /// A candidate failed inside a timed loop
    #[error("Benchmark {candidate} failed at iteration {iteration}: {source}")]
    Benchmark {
        /// Candidate label
        candidate: String,
        /// Zero-based iteration that failed
        iteration: usize,
        /// Underlying failure
        source: SerializeError,
    },

    /// Harness configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Report could not be rendered
    #[error("Report rendering failed: {0}")]
    Report(String),
}

impl Error {
    /// Create a candidate error
    pub fn candidate(
        candidate: impl Into<String>,
        fixture: impl Into<String>,
        source: SerializeError,
    ) -> Self {
        Self::Candidate {
            candidate: candidate.into(),
            fixture: fixture.into(),
            source,
        }
    }

    /// Create a benchmark error
    pub fn benchmark(candidate: impl Into<String>, iteration: usize, source: SerializeError) -> Self {
        Self::Benchmark {
            candidate: candidate.into(),
            iteration,
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(SerializeError::unsupported("Opaque", Mode::Strict).is_fatal());
        assert!(SerializeError::NonFinite("inf".into()).is_fatal());
        assert!(SerializeError::Panicked("boom".into()).is_fatal());
        assert!(!SerializeError::invalid_options("precision").is_fatal());
        assert!(!SerializeError::backend("serde_json", "io").is_fatal());
    }

    #[test]
    fn test_unsupported_message() {
        let err = SerializeError::unsupported("Opaque", Mode::Compat);
        assert_eq!(err.to_string(), "Opaque has no representation in compat mode");
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: Error = DomainError::EmptyCatalogue.into();
        assert!(matches!(err, Error::Catalogue(DomainError::EmptyCatalogue)));
    }

    #[test]
    fn test_candidate_error_display() {
        let err = Error::candidate("sonic-rs", "Range", SerializeError::backend("sonic-rs", "io"));
        assert_eq!(
            err.to_string(),
            "Candidate sonic-rs failed on fixture Range: sonic-rs failed: io"
        );
    }
}
