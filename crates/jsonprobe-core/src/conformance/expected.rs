//! Pre-declared (fixture, candidate) failures
//!
//! A listed pair is not run. It is reported as a crash carrying the declared
//! reason, so the override stays visible in every report.

/// One declared failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedFailure {
    /// Fixture name
    pub fixture: String,
    /// Candidate label
    pub candidate: String,
    /// Reason shown in the report
    pub reason: String,
}

/// Override table keyed by (fixture, candidate)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedFailures {
    entries: Vec<ExpectedFailure>,
}

impl ExpectedFailures {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style
    #[must_use]
    pub fn with(
        mut self,
        fixture: impl Into<String>,
        candidate: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.insert(fixture, candidate, reason);
        self
    }

    /// Add or replace an entry
    pub fn insert(
        &mut self,
        fixture: impl Into<String>,
        candidate: impl Into<String>,
        reason: impl Into<String>,
    ) {
        let entry = ExpectedFailure {
            fixture: fixture.into(),
            candidate: candidate.into(),
            reason: reason.into(),
        };
        self.entries
            .retain(|e| e.fixture != entry.fixture || e.candidate != entry.candidate);
        self.entries.push(entry);
    }

    /// Entry for a pair, if declared
    pub fn lookup(&self, fixture: &str, candidate: &str) -> Option<&ExpectedFailure> {
        self.entries
            .iter()
            .find(|e| e.fixture == fixture && e.candidate == candidate)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries
    pub fn iter(&self) -> impl Iterator<Item = &ExpectedFailure> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_exact_pair() {
        let table = ExpectedFailures::new().with("DateTime", "object", "unknown error");
        assert_eq!(table.lookup("DateTime", "object").unwrap().reason, "unknown error");
        assert!(table.lookup("DateTime", "compat").is_none());
        assert!(table.lookup("Date", "object").is_none());
    }

    #[test]
    fn test_insert_replaces_existing_pair() {
        let mut table = ExpectedFailures::new().with("A", "b", "first");
        table.insert("A", "b", "second");
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("A", "b").unwrap().reason, "second");
    }
}
