//! Named fixtures and the catalogue that holds them

mod catalogue;
mod fixture;
mod providers;

pub use catalogue::{CatalogueBuilder, FixtureCatalogue, SkippedFixture};
pub use fixture::{Fixture, FixtureFlags};
pub use providers::{CoreFixtures, ExtendedFixtures, FixtureProvider};
