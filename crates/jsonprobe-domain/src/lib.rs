//! jsonprobe Domain Layer - Sample Values and Fixtures
//!
//! This crate contains the value model that serializers are probed with,
//! together with the fixture catalogue that names each probe.
//!
//! Nothing in here knows how to produce JSON. The catalogue only supplies
//! typed values; turning them into bytes is the job of the serializers under
//! test in the `jsonprobe` crate.
//!
//! ## Architecture
//!
//! - **Value Objects**: `Sample` and the non-JSON types it can carry
//!   (decimals, records, enumerables, validation errors)
//! - **Fixtures**: named samples, pluggable providers and the catalogue
//!   built from them

#![warn(missing_docs)]

pub mod fixtures;
pub mod value_objects;

// Re-export core types
pub use fixtures::{
    CatalogueBuilder, CoreFixtures, ExtendedFixtures, Fixture, FixtureCatalogue, FixtureFlags,
    FixtureProvider, SkippedFixture,
};
pub use value_objects::{
    Colors, DecimalValue, Enumerable, Opaque, Record, Sample, ValidationErrors, ValidationKind,
    ValidationMessage,
};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// Only `DuplicateFixture` and `EmptyCatalogue` abort catalogue construction;
/// the remaining variants describe a single fixture or provider and are
/// recorded as skips.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Two fixtures were registered under the same name
    #[error("Duplicate fixture name: {0}")]
    DuplicateFixture(String),

    /// No fixture could be constructed at all
    #[error("Fixture catalogue is empty")]
    EmptyCatalogue,

    /// A fixture value could not be built in this environment
    #[error("Cannot construct fixture {name}: {reason}")]
    FixtureConstruction {
        /// Fixture name
        name: String,
        /// Why construction failed
        reason: String,
    },

    /// A fixture provider is not available in this environment
    #[error("Fixture provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl DomainError {
    /// Create a fixture construction error
    pub fn construction(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FixtureConstruction {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a provider unavailable error
    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }
}
