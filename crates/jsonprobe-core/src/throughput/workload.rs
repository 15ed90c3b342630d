//! Merged benchmark payload

use crate::error::{Error, Result};
use jsonprobe_domain::{FixtureCatalogue, Sample};
use std::collections::BTreeMap;
use tracing::debug;

/// One aggregate value serialized identically by every candidate
#[derive(Debug, Clone)]
pub struct Workload {
    sample: Sample,
    fixtures: Vec<String>,
}

impl Workload {
    /// Merge every non-placeholder fixture into one map
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if nothing is left to merge.
    pub fn from_catalogue(catalogue: &FixtureCatalogue) -> Result<Self> {
        Self::from_catalogue_excluding(catalogue, &[] as &[&str])
    }

    /// Like [`Workload::from_catalogue`], also dropping the named fixtures
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if nothing is left to merge.
    pub fn from_catalogue_excluding<S: AsRef<str>>(
        catalogue: &FixtureCatalogue,
        excluded: &[S],
    ) -> Result<Self> {
        let mut entries = BTreeMap::new();
        let mut fixtures = Vec::new();
        for fixture in catalogue {
            if fixture.is_placeholder() || excluded.iter().any(|name| name.as_ref() == fixture.name()) {
                debug!(fixture = fixture.name(), "Excluded from workload");
                continue;
            }
            entries.insert(fixture.name().to_string(), fixture.value().clone());
            fixtures.push(fixture.name().to_string());
        }
        if fixtures.is_empty() {
            return Err(Error::invalid_config("workload has no fixtures"));
        }
        Ok(Self {
            sample: Sample::Map(entries),
            fixtures,
        })
    }

    /// Wrap an arbitrary value
    pub fn from_sample(name: impl Into<String>, sample: Sample) -> Self {
        Self {
            sample,
            fixtures: vec![name.into()],
        }
    }

    /// The merged value
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Names of the merged fixtures, in catalogue order
    pub fn fixtures(&self) -> &[String] {
        &self.fixtures
    }

    /// Number of merged fixtures
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the workload is empty
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_workload_skips_placeholders() {
        let catalogue = FixtureCatalogue::standard().unwrap();
        let workload = Workload::from_catalogue(&catalogue).unwrap();
        assert!(!workload.fixtures().iter().any(|n| n == "Opaque"));
        assert!(!workload.fixtures().iter().any(|n| n == "ValidationErrors"));
        assert!(workload.fixtures().iter().any(|n| n == "String"));
        assert_eq!(workload.len(), catalogue.len() - 2);
        assert!(matches!(workload.sample(), Sample::Map(map) if map.len() == workload.len()));
    }

    #[test]
    fn test_excluding_everything_fails() {
        let catalogue = FixtureCatalogue::standard().unwrap();
        let err = Workload::from_catalogue_excluding(&catalogue, catalogue.names().as_slice()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
