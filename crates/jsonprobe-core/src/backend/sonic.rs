//! sonic-rs backend

use super::Backend;
use crate::encode::encode;
use crate::error::SerializeError;
use crate::options::SerializerOptions;
use jsonprobe_domain::Sample;

/// SIMD-accelerated `sonic-rs`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SonicRsBackend;

impl Backend for SonicRsBackend {
    fn name(&self) -> &str {
        "sonic-rs"
    }

    fn serialize(&self, value: &Sample, options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        encode(value, options, self.name(), |view| sonic_rs::to_vec(view))
    }
}
