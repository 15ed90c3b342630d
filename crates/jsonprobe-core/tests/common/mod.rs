//! Common test utilities and fake serializers
//!
//! Fakes implement `Backend` so harness behaviour can be pinned down without
//! depending on what a real library emits.

#![allow(dead_code)]

use jsonprobe::{AllocationProbe, AllocationStats, Backend, SerializeError, SerializerOptions};
use jsonprobe_domain::Sample;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Returns the same bytes for every value
pub struct FixedBackend {
    output: Vec<u8>,
}

impl FixedBackend {
    pub fn new(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Backend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    fn serialize(&self, _value: &Sample, _options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        Ok(self.output.clone())
    }
}

/// Fails every call with a clone of the configured error
pub struct FailingBackend {
    error: SerializeError,
}

impl FailingBackend {
    pub fn new(error: SerializeError) -> Self {
        Self { error }
    }

    pub fn ordinary() -> Self {
        Self::new(SerializeError::backend("failing", "connection reset"))
    }

    pub fn fatal() -> Self {
        Self::new(SerializeError::NonFinite("inf".into()))
    }
}

impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn serialize(&self, _value: &Sample, _options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        Err(self.error.clone())
    }
}

/// Panics on every call
pub struct PanickingBackend;

impl Backend for PanickingBackend {
    fn name(&self) -> &str {
        "panicking"
    }

    fn serialize(&self, value: &Sample, _options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        panic!("cannot handle {}", value.type_name())
    }
}

/// Fails once a call budget is spent
pub struct ExhaustingBackend {
    remaining: AtomicUsize,
}

impl ExhaustingBackend {
    pub fn new(calls: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(calls),
        }
    }
}

impl Backend for ExhaustingBackend {
    fn name(&self) -> &str {
        "exhausting"
    }

    fn serialize(&self, _value: &Sample, _options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        let left = self.remaining.load(Ordering::SeqCst);
        if left == 0 {
            return Err(SerializeError::backend("exhausting", "budget spent"));
        }
        self.remaining.store(left - 1, Ordering::SeqCst);
        Ok(b"null".to_vec())
    }
}

/// Sleeps before answering
pub struct SleepingBackend {
    delay: Duration,
}

impl SleepingBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Backend for SleepingBackend {
    fn name(&self) -> &str {
        "sleeping"
    }

    fn serialize(&self, _value: &Sample, _options: &SerializerOptions) -> Result<Vec<u8>, SerializeError> {
        std::thread::sleep(self.delay);
        Ok(b"{}".to_vec())
    }
}

/// Probe that reports one block of 64 bytes per snapshot
#[derive(Default)]
pub struct CountingProbe {
    snapshots: AtomicU64,
}

impl AllocationProbe for CountingProbe {
    fn name(&self) -> &str {
        "counting"
    }

    fn snapshot(&self) -> Option<AllocationStats> {
        let taken = self.snapshots.fetch_add(1, Ordering::SeqCst) + 1;
        Some(AllocationStats {
            bytes: taken * 64,
            blocks: taken,
        })
    }
}
