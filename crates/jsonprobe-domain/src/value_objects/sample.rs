//! The typed payload handed to serializers

use super::{DecimalValue, Enumerable, Opaque, Record, ValidationErrors};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

/// A single probe value.
///
/// The first group of variants has a direct JSON equivalent. Every other
/// variant is a Rust type a serializer has to decide how to represent:
/// through its serialization hook, through the type's own `serde` form,
/// or not at all.
#[derive(Debug, Clone)]
pub enum Sample {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Integer(i64),
    /// Double precision float, possibly non-finite
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Interned name, rendered as its text
    Symbol(String),
    /// Ordered sequence
    Seq(Vec<Sample>),
    /// Keyed collection with sorted keys
    Map(BTreeMap<String, Sample>),

    /// Arbitrary-precision decimal
    Decimal(DecimalValue),
    /// Closed integer interval
    Range(RangeInclusive<i64>),
    /// Iteration-only collection
    Enumerable(Arc<dyn Enumerable>),
    /// Calendar date
    Date(NaiveDate),
    /// UTC instant
    DateTime(DateTime<Utc>),
    /// Wall-clock time without a zone
    LocalDateTime(NaiveDateTime),
    /// Instant with a fixed UTC offset
    ZonedDateTime(DateTime<FixedOffset>),
    /// Elapsed time
    Duration(Duration),
    /// Named-field record
    Record(Record),
    /// Compiled regular expression
    Pattern(Regex),
    /// Object without any serialization hook
    Opaque(Opaque),
    /// Validation error collection
    ValidationErrors(ValidationErrors),
}

impl Sample {
    /// Build a string sample
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Build a symbol sample
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Build a sequence from anything convertible into samples
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Sample>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a keyed collection
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Sample>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Wrap an enumerable collection
    pub fn enumerable(value: impl Enumerable + 'static) -> Self {
        Self::Enumerable(Arc::new(value))
    }

    /// Stable type label, used by tagging serializers
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::Seq(_) => "Seq",
            Self::Map(_) => "Map",
            Self::Decimal(_) => "Decimal",
            Self::Range(_) => "Range",
            Self::Enumerable(value) => value.type_name(),
            Self::Date(_) => "Date",
            Self::DateTime(_) => "DateTime",
            Self::LocalDateTime(_) => "LocalDateTime",
            Self::ZonedDateTime(_) => "ZonedDateTime",
            Self::Duration(_) => "Duration",
            Self::Record(record) => record.type_name(),
            Self::Pattern(_) => "Pattern",
            Self::Opaque(object) => object.type_name(),
            Self::ValidationErrors(_) => "ValidationErrors",
        }
    }

    /// Whether the value maps onto a JSON type without any decision
    pub fn is_json_native(&self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::Bool(_)
                | Self::Integer(_)
                | Self::Float(_)
                | Self::String(_)
                | Self::Symbol(_)
                | Self::Seq(_)
                | Self::Map(_)
        )
    }

    /// Whether the value's type provides its own JSON-ready form
    pub fn has_serialize_hook(&self) -> bool {
        !self.is_json_native() && !matches!(self, Self::Opaque(_))
    }

    /// Whether the value's type has a `serde` representation of its own
    pub fn has_structural_form(&self) -> bool {
        !self.is_json_native() && !matches!(self, Self::Opaque(_) | Self::Pattern(_))
    }
}

impl From<bool> for Sample {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Sample {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Sample {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Sample {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DecimalValue> for Sample {
    fn from(value: DecimalValue) -> Self {
        Self::Decimal(value)
    }
}

impl From<Record> for Sample {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<ValidationErrors> for Sample {
    fn from(value: ValidationErrors) -> Self {
        Self::ValidationErrors(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Colors;

    #[test]
    fn test_native_classification() {
        assert!(Sample::Null.is_json_native());
        assert!(Sample::from(1i64).is_json_native());
        assert!(Sample::seq([1i64, 2]).is_json_native());
        assert!(!Sample::Range(1..=10).is_json_native());
        assert!(!Sample::enumerable(Colors).is_json_native());
    }

    #[test]
    fn test_hook_and_structural_capabilities() {
        let opaque = Sample::Opaque(Opaque::default());
        assert!(!opaque.has_serialize_hook());
        assert!(!opaque.has_structural_form());

        let pattern = Sample::Pattern(Regex::new("test").unwrap());
        assert!(pattern.has_serialize_hook());
        assert!(!pattern.has_structural_form());

        let range = Sample::Range(1..=10);
        assert!(range.has_serialize_hook());
        assert!(range.has_structural_form());

        assert!(!Sample::Null.has_serialize_hook());
    }

    #[test]
    fn test_type_names_follow_wrapped_types() {
        let record = Sample::from(Record::new("Customer"));
        assert_eq!(record.type_name(), "Customer");
        assert_eq!(Sample::enumerable(Colors).type_name(), "Colors");
        assert_eq!(Sample::Opaque(Opaque::new("Widget")).type_name(), "Widget");
        assert_eq!(Sample::symbol("sym").type_name(), "Symbol");
    }

    #[test]
    fn test_map_keys_sorted() {
        let sample = Sample::map([("b", 2i64), ("a", 1i64)]);
        let Sample::Map(entries) = sample else {
            panic!("expected map");
        };
        let keys: Vec<&String> = entries.keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
