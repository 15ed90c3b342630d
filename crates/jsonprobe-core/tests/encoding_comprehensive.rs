//! Comprehensive tests for value forms under each mode
//!
//! Uses `serde_json` as the backend so the expected text is exact.

use jsonprobe::{Backend, Mode, NonFinitePolicy, SerdeJsonBackend, SerializeError, SerializerOptions};
use jsonprobe_domain::{DecimalValue, FixtureCatalogue, Sample};

fn json(fixture: &str, options: &SerializerOptions) -> Result<String, SerializeError> {
    let catalogue = FixtureCatalogue::standard().unwrap();
    let sample = catalogue.get(fixture).unwrap().value();
    SerdeJsonBackend::compact()
        .serialize(sample, options)
        .map(|bytes| String::from_utf8(bytes).unwrap())
}

fn hook() -> SerializerOptions {
    SerializerOptions::reference()
}

fn structural() -> SerializerOptions {
    SerializerOptions::default()
}

// =============================================================================
// Native values
// =============================================================================

#[test]
fn test_native_values_identical_in_every_mode() {
    for mode in [Mode::Object, Mode::Compat, Mode::Lenient, Mode::Strict] {
        let options = SerializerOptions::default().with_mode(mode);
        assert_eq!(json("Null", &options).unwrap(), "null");
        assert_eq!(json("BooleanTrue", &options).unwrap(), "true");
        assert_eq!(json("StringNonAscii", &options).unwrap(), "\"二胡\"");
        assert_eq!(json("StringMultibyte", &options).unwrap(), "\"über\"");
        assert_eq!(json("EmptySeq", &options).unwrap(), "[]");
        assert_eq!(json("EmptyMap", &options).unwrap(), "{}");
        assert_eq!(json("Map", &options).unwrap(), r#"{"a":1}"#);
    }
}

// =============================================================================
// Hook forms
// =============================================================================

#[test]
fn test_hook_forms() {
    let options = hook();
    assert_eq!(json("Range", &options).unwrap(), "\"1..=10\"");
    assert_eq!(json("Enumerable", &options).unwrap(), r#"["red","green","blue"]"#);
    assert_eq!(json("Date", &options).unwrap(), "\"2001-02-03\"");
    assert_eq!(json("DateTime", &options).unwrap(), "\"2001-02-03T04:05:06.000+00:00\"");
    assert_eq!(json("LocalDateTime", &options).unwrap(), "\"2001-02-03T04:05:06.789\"");
    assert_eq!(json("ZonedDateTime", &options).unwrap(), "\"2005-02-01T05:15:10.000-10:00\"");
    assert_eq!(json("Duration", &options).unwrap(), "2592000");
    assert_eq!(
        json("Record", &options).unwrap(),
        r#"{"name":"Dave","address":"123 Main"}"#
    );
    assert_eq!(json("Pattern", &options).unwrap(), "\"test\"");
    assert_eq!(
        json("ValidationErrors", &options).unwrap(),
        r#"{"name":["cannot be nil"]}"#
    );
    assert_eq!(json("DecimalInfinity", &options).unwrap(), "\"Infinity\"");
}

// =============================================================================
// Structural forms
// =============================================================================

#[test]
fn test_structural_forms() {
    let options = structural();
    assert_eq!(json("Range", &options).unwrap(), r#"{"start":1,"end":10}"#);
    assert_eq!(json("Duration", &options).unwrap(), r#"{"secs":2592000,"nanos":0}"#);
    assert_eq!(json("Date", &options).unwrap(), "\"2001-02-03\"");
    assert!(json("DateTime", &options).unwrap().starts_with("\"2001-02-03T04:05:06"));
    assert_eq!(
        json("Record", &options).unwrap(),
        r#"{"name":"Dave","address":"123 Main"}"#
    );
    assert_eq!(
        json("ValidationErrors", &options).unwrap(),
        r#"{"base":"Person","messages":{"name":[{"kind":"blank","message":"cannot be nil"}]}}"#
    );
}

#[test]
fn test_compat_rejects_values_without_form() {
    let err = json("Pattern", &structural()).unwrap_err();
    assert_eq!(err, SerializeError::unsupported("Pattern", Mode::Compat));
    assert!(json("Opaque", &structural()).unwrap_err().is_fatal());
}

#[test]
fn test_lenient_writes_empty_object() {
    let options = SerializerOptions::default().with_mode(Mode::Lenient);
    assert_eq!(json("Pattern", &options).unwrap(), "{}");
    assert_eq!(json("Opaque", &options).unwrap(), "{}");
}

// =============================================================================
// Object mode
// =============================================================================

#[test]
fn test_object_mode_tags_values() {
    let options = SerializerOptions::object();
    assert_eq!(
        json("Range", &options).unwrap(),
        r#"{"^o":"Range","v":{"start":1,"end":10}}"#
    );
    assert_eq!(
        json("Pattern", &options).unwrap(),
        r#"{"^o":"Pattern","v":"test"}"#
    );
    assert_eq!(json("Opaque", &options).unwrap(), r#"{"^o":"Object"}"#);
    assert_eq!(
        json("Record", &options).unwrap(),
        r#"{"^o":"Customer","v":{"name":"Dave","address":"123 Main"}}"#
    );
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn test_float_precision() {
    let sample = Sample::Float(1.0 / 3.0);
    let backend = SerdeJsonBackend::compact();

    let three = SerializerOptions::default().with_float_precision(Some(3));
    assert_eq!(backend.serialize(&sample, &three).unwrap(), b"0.333");

    let shortest = SerializerOptions::default();
    assert_eq!(backend.serialize(&sample, &shortest).unwrap(), b"0.3333333333333333");
}

#[test]
fn test_non_finite_policy() {
    let reject = SerializerOptions::default();
    assert!(matches!(json("FloatInfinity", &reject), Err(SerializeError::NonFinite(_))));

    let null = SerializerOptions::default().with_non_finite(NonFinitePolicy::Null);
    assert_eq!(json("FloatInfinity", &null).unwrap(), "null");
}

#[test]
fn test_decimal_as_number() {
    let backend = SerdeJsonBackend::compact();
    let options = SerializerOptions::default().with_decimal_as_number(true);

    let half = Sample::Decimal(DecimalValue::ratio(1, 2));
    assert_eq!(backend.serialize(&half, &options).unwrap(), b"0.5");

    let infinite = Sample::Decimal(DecimalValue::ratio(1, 0));
    assert!(backend.serialize(&infinite, &options).unwrap_err().is_fatal());
    let lenient = options.with_non_finite(NonFinitePolicy::Null);
    assert_eq!(backend.serialize(&infinite, &lenient).unwrap(), b"null");
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_repeated_calls_identical() {
    let catalogue = FixtureCatalogue::standard().unwrap();
    let backend = SerdeJsonBackend::compact();
    let options = hook();

    for fixture in &catalogue {
        let first = backend.serialize(fixture.value(), &options);
        let second = backend.serialize(fixture.value(), &options);
        assert_eq!(first, second, "{}", fixture.name());
    }
}
