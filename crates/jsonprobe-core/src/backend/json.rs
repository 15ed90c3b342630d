//! serde_json backend

use super::Backend;
use crate::encode::encode;
use crate::error::SerializeError;
use crate::options::SerializerOptions;
use jsonprobe_domain::Sample;

/// `serde_json`, compact or pretty-printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonBackend {
    pretty: bool,
}

impl SerdeJsonBackend {
    /// Compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Backend for SerdeJsonBackend {
    fn name(&self) -> &str {
        if self.pretty {
            "serde_json (pretty)"
        } else {
            "serde_json"
        }
    }

    fn serialize(&self, value: &Sample, options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        encode(value, options, self.name(), |view| {
            if self.pretty {
                serde_json::to_vec_pretty(view)
            } else {
                serde_json::to_vec(view)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_output_is_indented() {
        let sample = Sample::map([("a", 1i64)]);
        let options = SerializerOptions::default();

        let compact = SerdeJsonBackend::compact().serialize(&sample, &options).unwrap();
        let pretty = SerdeJsonBackend::pretty().serialize(&sample, &options).unwrap();

        assert_eq!(compact, br#"{"a":1}"#);
        assert_eq!(pretty, b"{\n  \"a\": 1\n}");
    }
}
