//! Serializer options and labelled profiles
//!
//! Options are passed explicitly with every serializer call. Two profiles of
//! the same backend are two independent candidates.

use crate::error::SerializeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How values without a JSON equivalent are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every non-JSON value becomes `{"^o": <type>, "v": <form>}`
    Object,
    /// Hook form when enabled, else the type's `serde` form, else rejected
    #[default]
    Compat,
    /// Like `Compat`, but values with no form become `{}`
    Lenient,
    /// Only JSON-native values are accepted
    Strict,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Object => "object",
            Self::Compat => "compat",
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        })
    }
}

/// Treatment of infinite and NaN numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Fail the call
    #[default]
    Reject,
    /// Write `null`
    Null,
}

impl fmt::Display for NonFinitePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reject => "reject",
            Self::Null => "null",
        })
    }
}

/// Per-call serializer configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerOptions {
    /// Representation mode for non-JSON values
    pub mode: Mode,
    /// Prefer the type's own JSON-ready form
    pub use_serialize_hook: bool,
    /// Significant digits kept for floats; `None` keeps the shortest exact form
    pub float_precision: Option<u8>,
    /// Write decimals as JSON numbers instead of strings
    pub decimal_as_number: bool,
    /// Treatment of non-finite numbers
    pub non_finite: NonFinitePolicy,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Compat,
            use_serialize_hook: false,
            float_precision: None,
            decimal_as_number: false,
            non_finite: NonFinitePolicy::Reject,
        }
    }
}

impl SerializerOptions {
    /// Largest meaningful precision for an `f64`
    pub const MAX_FLOAT_PRECISION: u8 = 17;

    /// Baseline behaviour: hooks everywhere, `{}` for hook-less objects,
    /// decimals as strings, non-finite floats rejected
    pub fn reference() -> Self {
        Self {
            mode: Mode::Lenient,
            use_serialize_hook: true,
            ..Self::default()
        }
    }

    /// Tagged object dump with 16 significant float digits
    pub fn object() -> Self {
        Self {
            mode: Mode::Object,
            float_precision: Some(16),
            ..Self::default()
        }
    }

    /// `serde` forms only, 16 significant float digits
    pub fn compat() -> Self {
        Self {
            mode: Mode::Compat,
            float_precision: Some(16),
            ..Self::default()
        }
    }

    /// Hook forms first, 16 significant float digits
    pub fn compat_with_hook() -> Self {
        Self {
            use_serialize_hook: true,
            ..Self::compat()
        }
    }

    /// JSON-native values only
    pub fn strict() -> Self {
        Self {
            mode: Mode::Strict,
            ..Self::default()
        }
    }

    /// Replace the mode
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable serialization hooks
    #[must_use]
    pub fn with_serialize_hook(mut self, enabled: bool) -> Self {
        self.use_serialize_hook = enabled;
        self
    }

    /// Replace the float precision
    #[must_use]
    pub fn with_float_precision(mut self, digits: Option<u8>) -> Self {
        self.float_precision = digits;
        self
    }

    /// Write decimals as numbers
    #[must_use]
    pub fn with_decimal_as_number(mut self, enabled: bool) -> Self {
        self.decimal_as_number = enabled;
        self
    }

    /// Replace the non-finite policy
    #[must_use]
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Check the options are usable
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::InvalidOptions` when the float precision is
    /// outside `1..=17`.
    pub fn validate(&self) -> Result<(), SerializeError> {
        match self.float_precision {
            Some(digits) if digits == 0 || digits > Self::MAX_FLOAT_PRECISION => {
                Err(SerializeError::invalid_options(format!(
                    "float_precision must be within 1..={}, got {digits}",
                    Self::MAX_FLOAT_PRECISION
                )))
            }
            _ => Ok(()),
        }
    }

    /// Options as `name=value` pairs
    pub fn describe(&self) -> String {
        let precision = self
            .float_precision
            .map_or_else(|| "shortest".to_string(), |digits| digits.to_string());
        format!(
            "mode={} use_serialize_hook={} float_precision={} decimal_as_number={} non_finite={}",
            self.mode, self.use_serialize_hook, precision, self.decimal_as_number, self.non_finite
        )
    }
}

/// Label plus options: one configuration of one serializer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializerProfile {
    /// Display label, unique within a harness
    pub label: String,
    /// Options applied on every call
    pub options: SerializerOptions,
}

impl SerializerProfile {
    /// Create a profile
    pub fn new(label: impl Into<String>, options: SerializerOptions) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}
