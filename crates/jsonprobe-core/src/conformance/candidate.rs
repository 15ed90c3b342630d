//! Serializer plus profile

use crate::backend::Backend;
use crate::error::SerializeError;
use crate::options::{SerializerOptions, SerializerProfile};
use jsonprobe_domain::Sample;
use std::fmt;
use std::sync::Arc;

/// One serializer under one configuration
#[derive(Clone)]
pub struct Candidate {
    profile: SerializerProfile,
    backend: Arc<dyn Backend>,
}

impl Candidate {
    /// Create a candidate from a backend and options
    pub fn new(
        label: impl Into<String>,
        backend: impl Backend + 'static,
        options: SerializerOptions,
    ) -> Self {
        Self::from_profile(SerializerProfile::new(label, options), Arc::new(backend))
    }

    /// Create a candidate sharing an existing backend
    pub fn from_profile(profile: SerializerProfile, backend: Arc<dyn Backend>) -> Self {
        Self { profile, backend }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.profile.label
    }

    /// Options applied on every call
    pub fn options(&self) -> &SerializerOptions {
        &self.profile.options
    }

    /// Label and options
    pub fn profile(&self) -> &SerializerProfile {
        &self.profile
    }

    /// Underlying library name
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Whether the backend produces JSON text
    pub fn is_json(&self) -> bool {
        self.backend.is_json()
    }

    /// Serialize with this candidate's options
    ///
    /// # Errors
    ///
    /// Propagates the backend's `SerializeError`.
    pub fn serialize(&self, value: &Sample) -> Result<Vec<u8>, SerializeError> {
        self.backend.serialize(value, &self.profile.options)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("label", &self.profile.label)
            .field("backend", &self.backend.name())
            .field("options", &self.profile.options)
            .finish()
    }
}
