//! Fixture entity

use crate::value_objects::Sample;

bitflags::bitflags! {
    /// Fixture classification flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FixtureFlags: u8 {
        /// Value is expected to defeat most serializers; never part of a
        /// throughput workload
        const PLACEHOLDER = 0b0000_0001;
        /// Value stands in for an application-framework type
        const FRAMEWORK   = 0b0000_0010;
    }
}

/// A named probe value
#[derive(Debug, Clone)]
pub struct Fixture {
    name: String,
    value: Sample,
    flags: FixtureFlags,
}

impl Fixture {
    /// Create an unflagged fixture
    pub fn new(name: impl Into<String>, value: Sample) -> Self {
        Self {
            name: name.into(),
            value,
            flags: FixtureFlags::empty(),
        }
    }

    /// Replace the fixture's flags
    #[must_use]
    pub fn with_flags(mut self, flags: FixtureFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Unique fixture name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Probe value
    pub fn value(&self) -> &Sample {
        &self.value
    }

    /// Classification flags
    pub fn flags(&self) -> FixtureFlags {
        self.flags
    }

    /// Whether the fixture must stay out of throughput workloads
    pub fn is_placeholder(&self) -> bool {
        self.flags.contains(FixtureFlags::PLACEHOLDER)
    }
}
