//! Serializer backends
//!
//! Each backend is an external serializer driven through the shared
//! [`Encoded`](crate::encode::Encoded) view. Backends hold no mutable state;
//! everything that varies between candidates arrives as options.

mod json;
mod msgpack;
mod simd;
mod sonic;

pub use json::SerdeJsonBackend;
pub use msgpack::MessagePackBackend;
pub use simd::SimdJsonBackend;
pub use sonic::SonicRsBackend;

use crate::error::SerializeError;
use crate::options::SerializerOptions;
use jsonprobe_domain::Sample;

/// An opaque serializer
pub trait Backend: Send + Sync {
    /// Library name
    fn name(&self) -> &str;

    /// Whether the output is JSON text
    fn is_json(&self) -> bool {
        true
    }

    /// Serialize one value with the given options
    ///
    /// # Errors
    ///
    /// Returns a fatal `SerializeError` when the value cannot be represented
    /// and an ordinary one for invalid options or backend failures.
    fn serialize(&self, value: &Sample, options: &SerializerOptions) -> Result<Vec<u8>, SerializeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backends() -> Vec<Box<dyn Backend>> {
        vec![
            Box::new(SerdeJsonBackend::compact()),
            Box::new(SonicRsBackend),
            Box::new(SimdJsonBackend),
        ]
    }

    #[test]
    fn test_json_backends_agree_on_scalars() {
        let options = SerializerOptions::default();
        for backend in backends() {
            assert!(backend.is_json());
            assert_eq!(backend.serialize(&Sample::Bool(false), &options).unwrap(), b"false");
            assert_eq!(backend.serialize(&Sample::string("abc"), &options).unwrap(), b"\"abc\"");
            assert_eq!(backend.serialize(&Sample::Integer(1), &options).unwrap(), b"1");
        }
    }

    #[test]
    fn test_json_backends_keep_failure_kind() {
        let options = SerializerOptions::strict();
        for backend in backends() {
            let err = backend.serialize(&Sample::Range(1..=2), &options).unwrap_err();
            assert!(err.is_fatal(), "{} lost the failure kind", backend.name());
        }
    }

    #[test]
    fn test_msgpack_is_binary() {
        let backend = MessagePackBackend;
        assert!(!backend.is_json());
        let bytes = backend
            .serialize(&Sample::Bool(true), &SerializerOptions::default())
            .unwrap();
        assert_eq!(bytes, [0xc3]);
    }
}
