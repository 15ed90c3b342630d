//! Property-based tests for catalogue and value invariants

use jsonprobe_domain::{DecimalValue, DomainError, FixtureCatalogue, Sample};
use proptest::prelude::*;

proptest! {
    /// Registration order survives construction, whatever the names
    #[test]
    fn catalogue_preserves_registration_order(
        names in proptest::collection::hash_set("[A-Za-z][A-Za-z0-9]{0,12}", 1..20)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut builder = FixtureCatalogue::builder();
        for name in &names {
            builder.fixture(name, || Ok(Sample::Null));
        }
        let catalogue = builder.build().unwrap();
        prop_assert_eq!(catalogue.names(), names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Failed constructors never remove their neighbours
    #[test]
    fn failures_only_drop_themselves(flags in proptest::collection::vec(any::<bool>(), 1..30)) {
        let mut builder = FixtureCatalogue::builder();
        for (i, ok) in flags.iter().enumerate() {
            let name = format!("F{i}");
            let ok = *ok;
            builder.fixture(&name, move || {
                if ok {
                    Ok(Sample::Integer(i as i64))
                } else {
                    Err(DomainError::construction(format!("F{i}"), "unavailable"))
                }
            });
        }
        let built = flags.iter().filter(|ok| **ok).count();
        match builder.build() {
            Ok(catalogue) => {
                prop_assert_eq!(catalogue.len(), built);
                prop_assert_eq!(catalogue.skipped().len(), flags.len() - built);
            }
            Err(err) => {
                prop_assert_eq!(built, 0);
                prop_assert_eq!(err, DomainError::EmptyCatalogue);
            }
        }
    }

    /// Division by zero never panics and keeps the numerator's sign
    #[test]
    fn decimal_zero_denominator_is_infinite(numer in any::<i64>()) {
        let value = DecimalValue::ratio(numer, 0);
        prop_assert!(!value.is_finite());
        prop_assert_eq!(value, DecimalValue::Infinite { negative: numer < 0 });
    }

    /// Non-zero denominators always give a finite decimal
    #[test]
    fn decimal_finite_for_nonzero_denominator(numer in -10_000i64..10_000, denom in 1i64..10_000) {
        prop_assert!(DecimalValue::ratio(numer, denom).is_finite());
    }
}
