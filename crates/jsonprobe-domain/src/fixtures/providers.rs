//! Built-in fixture sets
//!
//! `CoreFixtures` covers values every JSON library has an opinion on.
//! `ExtendedFixtures` covers types that usually come from an application
//! framework (zone-aware times, durations, validation errors). Further
//! framework-bound sets plug in through [`FixtureProvider`].

use super::{CatalogueBuilder, FixtureFlags};
use crate::value_objects::{
    Colors, DecimalValue, Opaque, Record, Sample, ValidationErrors, ValidationKind,
};
use crate::{DomainError, DomainResult};
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::collections::BTreeMap;
use std::time::Duration;

/// Source of fixtures for a catalogue
pub trait FixtureProvider {
    /// Provider name, used when the provider is skipped
    fn name(&self) -> &str;

    /// Register this provider's fixtures
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProviderUnavailable` when the provider cannot
    /// work in the current environment.
    fn register(&self, catalogue: &mut CatalogueBuilder) -> DomainResult<()>;
}

/// JSON-level values: scalars, strings, collections, dates, records
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreFixtures;

impl FixtureProvider for CoreFixtures {
    fn name(&self) -> &str {
        "core"
    }

    fn register(&self, catalogue: &mut CatalogueBuilder) -> DomainResult<()> {
        catalogue
            .fixture("Null", || Ok(Sample::Null))
            .fixture("BooleanTrue", || Ok(Sample::Bool(true)))
            .fixture("BooleanFalse", || Ok(Sample::Bool(false)))
            .fixture("String", || Ok(Sample::string("abc")))
            .fixture("StringNonAscii", || Ok(Sample::string("二胡")))
            .fixture("Symbol", || Ok(Sample::symbol("sym")))
            .fixture("Integer", || Ok(Sample::Integer(1)))
            .fixture("Float", || Ok(Sample::Float(1.0 / 3.0)))
            .fixture("FloatInfinity", || Ok(Sample::Float(f64::INFINITY)))
            .fixture("Decimal", || Ok(DecimalValue::ratio(1, 3).into()))
            .fixture("DecimalInfinity", || Ok(DecimalValue::ratio(1, 0).into()))
            .fixture("EmptySeq", || Ok(Sample::Seq(Vec::new())))
            .fixture("EmptyMap", || Ok(Sample::Map(BTreeMap::new())))
            .fixture("Map", || Ok(Sample::map([("a", 1i64)])))
            .fixture("Range", || Ok(Sample::Range(1..=10)))
            .fixture("Enumerable", || Ok(Sample::enumerable(Colors)))
            .fixture("Date", || {
                NaiveDate::from_ymd_opt(2001, 2, 3)
                    .map(Sample::Date)
                    .ok_or_else(|| DomainError::construction("Date", "invalid calendar date"))
            })
            .fixture("DateTime", || {
                Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6)
                    .single()
                    .map(Sample::DateTime)
                    .ok_or_else(|| DomainError::construction("DateTime", "invalid UTC instant"))
            })
            .fixture("LocalDateTime", || {
                NaiveDate::from_ymd_opt(2001, 2, 3)
                    .and_then(|date| date.and_hms_milli_opt(4, 5, 6, 789))
                    .map(Sample::LocalDateTime)
                    .ok_or_else(|| DomainError::construction("LocalDateTime", "invalid wall time"))
            })
            .fixture("Record", || {
                Ok(Record::new("Customer")
                    .field("name", "Dave")
                    .field("address", "123 Main")
                    .into())
            })
            .fixture("Pattern", || {
                Regex::new("test")
                    .map(Sample::Pattern)
                    .map_err(|e| DomainError::construction("Pattern", e.to_string()))
            })
            .flagged_fixture("Opaque", FixtureFlags::PLACEHOLDER, || {
                Ok(Sample::Opaque(Opaque::default()))
            });
        Ok(())
    }
}

/// Framework-flavoured values
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedFixtures;

/// Offset of Pacific/Honolulu, which observes no daylight saving
const HAWAII_OFFSET_SECS: i32 = 10 * 3600;

/// One calendar month as an elapsed time
const MONTH_SECS: u64 = 30 * 24 * 3600;

impl FixtureProvider for ExtendedFixtures {
    fn name(&self) -> &str {
        "extended"
    }

    fn register(&self, catalogue: &mut CatalogueBuilder) -> DomainResult<()> {
        catalogue
            .fixture("ZonedDateTime", || {
                FixedOffset::west_opt(HAWAII_OFFSET_SECS)
                    .and_then(|hawaii| {
                        Utc.with_ymd_and_hms(2005, 2, 1, 15, 15, 10)
                            .single()
                            .map(|instant| instant.with_timezone(&hawaii))
                    })
                    .map(Sample::ZonedDateTime)
                    .ok_or_else(|| {
                        DomainError::construction("ZonedDateTime", "invalid zoned instant")
                    })
            })
            .fixture("Duration", || {
                Ok(Sample::Duration(Duration::from_secs(MONTH_SECS)))
            })
            .fixture("StringMultibyte", || Ok(Sample::string("über")))
            .flagged_fixture(
                "ValidationErrors",
                FixtureFlags::PLACEHOLDER | FixtureFlags::FRAMEWORK,
                || {
                    let mut errors = ValidationErrors::new("Person");
                    errors.add_with_message("name", ValidationKind::Blank, "cannot be nil");
                    Ok(errors.into())
                },
            );
        Ok(())
    }
}
