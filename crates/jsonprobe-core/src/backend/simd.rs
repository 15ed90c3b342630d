//! simd-json backend

use super::Backend;
use crate::encode::encode;
use crate::error::SerializeError;
use crate::options::SerializerOptions;
use jsonprobe_domain::Sample;

/// `simd-json` through its serde integration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimdJsonBackend;

impl Backend for SimdJsonBackend {
    fn name(&self) -> &str {
        "simd-json"
    }

    fn serialize(&self, value: &Sample, options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        encode(value, options, self.name(), |view| {
            simd_json::serde::to_string(view).map(String::into_bytes)
        })
    }
}
