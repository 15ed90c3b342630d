//! MessagePack backend
//!
//! Binary output, so it only takes part in throughput runs.

use super::Backend;
use crate::encode::encode;
use crate::error::SerializeError;
use crate::options::SerializerOptions;
use jsonprobe_domain::Sample;

/// `rmp-serde` with named struct fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessagePackBackend;

impl Backend for MessagePackBackend {
    fn name(&self) -> &str {
        "msgpack"
    }

    fn is_json(&self) -> bool {
        false
    }

    fn serialize(&self, value: &Sample, options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        encode(value, options, self.name(), |view| rmp_serde::to_vec_named(view))
    }
}
