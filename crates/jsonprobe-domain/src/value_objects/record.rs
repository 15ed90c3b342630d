//! Named-field records and hook-less objects

use super::Sample;

/// Plain record with named fields, declared in order
#[derive(Debug, Clone)]
pub struct Record {
    type_name: &'static str,
    fields: Vec<(&'static str, Sample)>,
}

impl Record {
    /// Create an empty record of the given type
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Append a field
    #[must_use]
    pub fn field(mut self, name: &'static str, value: impl Into<Sample>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Record type label
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[(&'static str, Sample)] {
        &self.fields
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&Sample> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// Object that offers serializers nothing to work with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque {
    type_name: &'static str,
}

impl Opaque {
    /// Create an opaque object of the given type
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self { type_name }
    }

    /// Object type label
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Default for Opaque {
    fn default() -> Self {
        Self::new("Object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_order() {
        let record = Record::new("Customer")
            .field("name", "Dave")
            .field("address", "123 Main");

        let names: Vec<&str> = record.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["name", "address"]);
        assert_eq!(record.type_name(), "Customer");
    }

    #[test]
    fn test_record_get() {
        let record = Record::new("Customer").field("name", "Dave");
        assert!(matches!(record.get("name"), Some(Sample::String(s)) if s == "Dave"));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_opaque_default() {
        assert_eq!(Opaque::default().type_name(), "Object");
    }
}
