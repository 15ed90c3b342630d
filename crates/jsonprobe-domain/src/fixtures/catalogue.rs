//! Fixture catalogue construction
//!
//! Values are built eagerly, one constructor at a time. A constructor that
//! fails only costs its own fixture: the failure is logged and kept in
//! [`FixtureCatalogue::skipped`] so reports can mention it.

use super::{CoreFixtures, ExtendedFixtures, Fixture, FixtureFlags, FixtureProvider};
use crate::value_objects::Sample;
use crate::{DomainError, DomainResult};
use tracing::{debug, warn};

/// A fixture or provider that was left out of the catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFixture {
    /// Fixture or provider name
    pub name: String,
    /// Why it was skipped
    pub reason: String,
}

/// Incremental catalogue construction
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    fixtures: Vec<Fixture>,
    skipped: Vec<SkippedFixture>,
    duplicates: Vec<String>,
}

impl CatalogueBuilder {
    /// Start an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and register an unflagged fixture
    pub fn fixture<F>(&mut self, name: &str, construct: F) -> &mut Self
    where
        F: FnOnce() -> DomainResult<Sample>,
    {
        self.flagged_fixture(name, FixtureFlags::empty(), construct)
    }

    /// Construct and register a fixture with flags
    pub fn flagged_fixture<F>(&mut self, name: &str, flags: FixtureFlags, construct: F) -> &mut Self
    where
        F: FnOnce() -> DomainResult<Sample>,
    {
        match construct() {
            Ok(value) => {
                self.insert(Fixture::new(name, value).with_flags(flags));
            }
            Err(err) => {
                warn!(fixture = name, error = %err, "Skipping fixture");
                self.skipped.push(SkippedFixture {
                    name: name.to_string(),
                    reason: err.to_string(),
                });
            }
        }
        self
    }

    /// Register an already built fixture
    pub fn insert(&mut self, fixture: Fixture) -> &mut Self {
        if self.fixtures.iter().any(|f| f.name() == fixture.name()) {
            self.duplicates.push(fixture.name().to_string());
        } else {
            debug!(fixture = fixture.name(), "Registered fixture");
            self.fixtures.push(fixture);
        }
        self
    }

    /// Pull every fixture a provider offers
    ///
    /// An unavailable provider is recorded as skipped. Fixtures it managed to
    /// register before failing are kept.
    pub fn provider(&mut self, provider: &dyn FixtureProvider) -> &mut Self {
        if let Err(err) = provider.register(self) {
            warn!(provider = provider.name(), error = %err, "Skipping fixture provider");
            self.skipped.push(SkippedFixture {
                name: provider.name().to_string(),
                reason: err.to_string(),
            });
        }
        self
    }

    /// Finish the catalogue
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateFixture` if a name was registered twice
    /// and `DomainError::EmptyCatalogue` if nothing could be constructed.
    pub fn build(self) -> DomainResult<FixtureCatalogue> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(DomainError::DuplicateFixture(name));
        }
        if self.fixtures.is_empty() {
            return Err(DomainError::EmptyCatalogue);
        }
        Ok(FixtureCatalogue {
            fixtures: self.fixtures,
            skipped: self.skipped,
        })
    }
}

/// Read-only, insertion-ordered set of fixtures
#[derive(Debug, Clone)]
pub struct FixtureCatalogue {
    fixtures: Vec<Fixture>,
    skipped: Vec<SkippedFixture>,
}

impl FixtureCatalogue {
    /// Start building a catalogue
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::new()
    }

    /// Catalogue with the core and extended fixture sets
    ///
    /// # Errors
    ///
    /// Fails only when the catalogue cannot be assembled at all.
    pub fn standard() -> DomainResult<Self> {
        let mut builder = Self::builder();
        builder.provider(&CoreFixtures).provider(&ExtendedFixtures);
        builder.build()
    }

    /// Number of constructed fixtures
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the catalogue holds no fixtures
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Fixtures in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter()
    }

    /// Look up a fixture by name
    pub fn get(&self, name: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.name() == name)
    }

    /// Fixture names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.fixtures.iter().map(Fixture::name).collect()
    }

    /// Fixtures and providers that were left out
    pub fn skipped(&self) -> &[SkippedFixture] {
        &self.skipped
    }
}

impl<'a> IntoIterator for &'a FixtureCatalogue {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.fixtures.iter()
    }
}
