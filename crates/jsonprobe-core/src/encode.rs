//! Bridge from `Sample` to any `serde` serializer
//!
//! [`Encoded`] is a `Serialize` view of a sample under one set of options.
//! Every backend drives the same view, so differences between backends come
//! from the backends themselves and not from how values were presented.
//!
//! Backends report failures as their own error type, which carries only a
//! message. The view records the typed [`SerializeError`] in a slot shared by
//! the whole call so [`encode`] can hand back the original failure kind.

use crate::error::SerializeError;
use crate::options::{Mode, NonFinitePolicy, SerializerOptions};
use chrono::SecondsFormat;
use jsonprobe_domain::{DecimalValue, Sample};
use serde::ser::{self, Serialize, SerializeMap, SerializeStruct, Serializer};
use std::cell::RefCell;
use std::fmt;

type FailureSlot = RefCell<Option<SerializeError>>;

/// Key carrying the type label in object mode
pub const TYPE_TAG: &str = "^o";

/// Key carrying the wrapped form in object mode
pub const VALUE_TAG: &str = "v";

/// Serialize `sample` through `write`, mapping backend errors back to their
/// typed cause.
///
/// # Errors
///
/// Returns `SerializeError::InvalidOptions` before calling `write` if the
/// options are invalid, the recorded typed failure if the view rejected a
/// value, or `SerializeError::Backend` for any other backend error.
pub fn encode<F, E>(
    sample: &Sample,
    options: &SerializerOptions,
    backend: &str,
    write: F,
) -> Result<Vec<u8>, SerializeError>
where
    F: FnOnce(&Encoded<'_>) -> Result<Vec<u8>, E>,
    E: fmt::Display,
{
    options.validate()?;
    let failure = FailureSlot::new(None);
    let view = Encoded {
        sample,
        options,
        failure: &failure,
    };
    write(&view).map_err(|err| {
        failure
            .borrow_mut()
            .take()
            .unwrap_or_else(|| SerializeError::backend(backend, err.to_string()))
    })
}

/// Which representation a value is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Native,
    Hook,
    Structural,
    Tagged,
    Empty,
    Unsupported,
}

/// `Serialize` view of a sample under fixed options
pub struct Encoded<'a> {
    sample: &'a Sample,
    options: &'a SerializerOptions,
    failure: &'a FailureSlot,
}

impl<'a> Encoded<'a> {
    fn nested(&self, sample: &'a Sample) -> Encoded<'a> {
        Encoded {
            sample,
            options: self.options,
            failure: self.failure,
        }
    }

    fn form(&self) -> Form {
        if self.sample.is_json_native() {
            return Form::Native;
        }
        match self.options.mode {
            Mode::Strict => Form::Unsupported,
            Mode::Object => Form::Tagged,
            mode @ (Mode::Compat | Mode::Lenient) => {
                if self.options.use_serialize_hook && self.sample.has_serialize_hook() {
                    Form::Hook
                } else if self.sample.has_structural_form() {
                    Form::Structural
                } else if mode == Mode::Lenient {
                    Form::Empty
                } else {
                    Form::Unsupported
                }
            }
        }
    }

    /// Record the typed failure and turn it into the backend's error type
    fn fail<E: ser::Error>(&self, err: SerializeError) -> E {
        let message = err.to_string();
        let mut slot = self.failure.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
        E::custom(message)
    }

    fn unsupported<E: ser::Error>(&self) -> E {
        self.fail(SerializeError::unsupported(
            self.sample.type_name(),
            self.options.mode,
        ))
    }

    fn serialize_as<S: Serializer>(&self, form: Form, serializer: S) -> Result<S::Ok, S::Error> {
        match form {
            Form::Native => self.native(serializer),
            Form::Hook => self.hook(serializer),
            Form::Structural => self.structural(serializer),
            Form::Tagged => self.tagged(serializer),
            Form::Empty => serializer.serialize_map(Some(0))?.end(),
            Form::Unsupported => Err(self.unsupported()),
        }
    }

    fn native<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.sample {
            Sample::Null => serializer.serialize_unit(),
            Sample::Bool(value) => serializer.serialize_bool(*value),
            Sample::Integer(value) => serializer.serialize_i64(*value),
            Sample::Float(value) => self.float(*value, serializer),
            Sample::String(value) | Sample::Symbol(value) => serializer.serialize_str(value),
            Sample::Seq(items) => serializer.collect_seq(items.iter().map(|item| self.nested(item))),
            Sample::Map(entries) => serializer.collect_map(
                entries
                    .iter()
                    .map(|(key, value)| (key.as_str(), self.nested(value))),
            ),
            _ => Err(self.unsupported()),
        }
    }

    fn hook<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.sample {
            Sample::Decimal(value) => self.decimal(value, serializer),
            Sample::Range(range) => {
                serializer.serialize_str(&format!("{}..={}", range.start(), range.end()))
            }
            Sample::Enumerable(_) => self.enumerate(serializer),
            Sample::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Sample::DateTime(instant) => {
                serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, false))
            }
            Sample::LocalDateTime(instant) => {
                serializer.collect_str(&instant.format("%Y-%m-%dT%H:%M:%S%.3f"))
            }
            Sample::ZonedDateTime(instant) => {
                serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, false))
            }
            Sample::Duration(elapsed) => serializer.serialize_u64(elapsed.as_secs()),
            Sample::Record(record) => serializer.collect_map(
                record
                    .fields()
                    .iter()
                    .map(|(name, value)| (*name, self.nested(value))),
            ),
            Sample::Pattern(pattern) => serializer.serialize_str(pattern.as_str()),
            Sample::ValidationErrors(errors) => {
                serializer.collect_map(errors.attributes().map(|(attribute, messages)| {
                    let texts: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
                    (attribute, texts)
                }))
            }
            _ => Err(self.unsupported()),
        }
    }

    fn structural<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.sample {
            Sample::Decimal(value) => self.decimal(value, serializer),
            Sample::Range(range) => range.serialize(serializer),
            Sample::Enumerable(_) => self.enumerate(serializer),
            Sample::Date(date) => date.serialize(serializer),
            Sample::DateTime(instant) => instant.serialize(serializer),
            Sample::LocalDateTime(instant) => instant.serialize(serializer),
            Sample::ZonedDateTime(instant) => instant.serialize(serializer),
            Sample::Duration(elapsed) => elapsed.serialize(serializer),
            Sample::Record(record) => {
                let mut state = serializer.serialize_struct(record.type_name(), record.fields().len())?;
                for (name, value) in record.fields() {
                    state.serialize_field(name, &self.nested(value))?;
                }
                state.end()
            }
            Sample::ValidationErrors(errors) => errors.serialize(serializer),
            _ => Err(self.unsupported()),
        }
    }

    fn tagged<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let inner = if self.sample.has_structural_form() {
            Some(Form::Structural)
        } else if self.sample.has_serialize_hook() {
            Some(Form::Hook)
        } else {
            None
        };

        let mut map = serializer.serialize_map(Some(1 + usize::from(inner.is_some())))?;
        map.serialize_entry(TYPE_TAG, self.sample.type_name())?;
        if let Some(form) = inner {
            map.serialize_entry(VALUE_TAG, &Forced { view: self, form })?;
        }
        map.end()
    }

    fn enumerate<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Sample::Enumerable(collection) = self.sample else {
            return Err(self.unsupported());
        };
        let items: Vec<Sample> = collection.each().collect();
        serializer.collect_seq(items.iter().map(|item| Encoded {
            sample: item,
            options: self.options,
            failure: self.failure,
        }))
    }

    fn float<S: Serializer>(&self, value: f64, serializer: S) -> Result<S::Ok, S::Error> {
        if !value.is_finite() {
            return match self.options.non_finite {
                NonFinitePolicy::Reject => Err(self.fail(SerializeError::NonFinite(value.to_string()))),
                NonFinitePolicy::Null => serializer.serialize_unit(),
            };
        }
        serializer.serialize_f64(round_significant(value, self.options.float_precision))
    }

    fn decimal<S: Serializer>(&self, value: &DecimalValue, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.options.decimal_as_number {
            return serializer.collect_str(value);
        }
        match value.to_f64() {
            Some(number) => self.float(number, serializer),
            None => Err(self.unsupported()),
        }
    }
}

impl Serialize for Encoded<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_as(self.form(), serializer)
    }
}

/// A view pinned to one form, for the payload of a tagged value
struct Forced<'v, 'a> {
    view: &'v Encoded<'a>,
    form: Form,
}

impl Serialize for Forced<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.view.serialize_as(self.form, serializer)
    }
}

/// Round to `digits` significant digits; `None` and zero pass through
pub fn round_significant(value: f64, digits: Option<u8>) -> f64 {
    match digits {
        Some(digits) if digits > 0 && value != 0.0 && value.is_finite() => {
            let precision = usize::from(digits - 1);
            format!("{value:.precision$e}").parse().unwrap_or(value)
        }
        _ => value,
    }
}
