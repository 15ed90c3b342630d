//! Optional allocation measurement

/// Cumulative allocation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct AllocationStats {
    /// Bytes allocated
    pub bytes: u64,
    /// Allocation count
    pub blocks: u64,
}

impl AllocationStats {
    /// Counters accumulated since an earlier snapshot
    pub fn since(&self, earlier: &Self) -> Self {
        Self {
            bytes: self.bytes.saturating_sub(earlier.bytes),
            blocks: self.blocks.saturating_sub(earlier.blocks),
        }
    }
}

/// Source of allocation snapshots
///
/// A probe that cannot measure returns `None`; the measurement then carries
/// no allocation figures and the run continues.
pub trait AllocationProbe: Send + Sync {
    /// Probe name for logs
    fn name(&self) -> &str;

    /// Current cumulative counters
    fn snapshot(&self) -> Option<AllocationStats>;
}

/// Probe used when no allocator instrumentation is installed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAllocationProbe;

impl AllocationProbe for NoAllocationProbe {
    fn name(&self) -> &str {
        "none"
    }

    fn snapshot(&self) -> Option<AllocationStats> {
        None
    }
}

/// Reads dhat's heap statistics
///
/// The binary must install `dhat::Alloc` as the global allocator and keep a
/// heap profiler alive while measuring.
#[cfg(feature = "dhat-heap")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DhatProbe;

#[cfg(feature = "dhat-heap")]
impl AllocationProbe for DhatProbe {
    fn name(&self) -> &str {
        "dhat"
    }

    fn snapshot(&self) -> Option<AllocationStats> {
        let stats = dhat::HeapStats::get();
        Some(AllocationStats {
            bytes: stats.total_bytes,
            blocks: stats.total_blocks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since_saturates() {
        let before = AllocationStats { bytes: 100, blocks: 4 };
        let after = AllocationStats { bytes: 160, blocks: 5 };
        assert_eq!(after.since(&before), AllocationStats { bytes: 60, blocks: 1 });
        assert_eq!(before.since(&after), AllocationStats::default());
    }

    #[test]
    fn test_no_probe_measures_nothing() {
        assert!(NoAllocationProbe.snapshot().is_none());
    }
}
