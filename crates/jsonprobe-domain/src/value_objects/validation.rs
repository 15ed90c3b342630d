//! Validation error collections
//!
//! Mirrors the shape form libraries hand back after a failed validation:
//! the owning model's name plus a list of messages per attribute.

use serde::Serialize;
use std::collections::BTreeMap;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Required value missing
    Blank,
    /// Value present but malformed
    Invalid,
    /// Value exceeds the maximum length
    TooLong,
    /// Value below the minimum length
    TooShort,
    /// Value must be unique and is not
    Taken,
}

impl ValidationKind {
    /// Message used when none is supplied
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Blank => "can't be blank",
            Self::Invalid => "is invalid",
            Self::TooLong => "is too long",
            Self::TooShort => "is too short",
            Self::Taken => "has already been taken",
        }
    }
}

/// One message attached to an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    /// Failure category
    pub kind: ValidationKind,
    /// Human readable text
    pub message: String,
}

/// Messages collected while validating one object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    base: String,
    messages: BTreeMap<String, Vec<ValidationMessage>>,
}

impl ValidationErrors {
    /// Empty collection for an object of type `base`
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            messages: BTreeMap::new(),
        }
    }

    /// Record a failure with the kind's default message
    pub fn add(&mut self, attribute: &str, kind: ValidationKind) {
        self.add_with_message(attribute, kind, kind.default_message());
    }

    /// Record a failure with a custom message
    pub fn add_with_message(
        &mut self,
        attribute: &str,
        kind: ValidationKind,
        message: impl Into<String>,
    ) {
        self.messages
            .entry(attribute.to_string())
            .or_default()
            .push(ValidationMessage {
                kind,
                message: message.into(),
            });
    }

    /// Type name of the validated object
    pub fn base(&self) -> &str {
        &self.base
    }

    /// True when nothing failed
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across attributes
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Messages for one attribute
    pub fn get(&self, attribute: &str) -> &[ValidationMessage] {
        self.messages
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Attributes with their messages, sorted by attribute
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &[ValidationMessage])> {
        self.messages
            .iter()
            .map(|(attribute, messages)| (attribute.as_str(), messages.as_slice()))
    }

    /// `"<attribute> <message>"` for every message
    pub fn full_messages(&self) -> Vec<String> {
        self.attributes()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |m| format!("{attribute} {}", m.message))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut errors = ValidationErrors::new("Person");
        assert!(errors.is_empty());

        errors.add_with_message("name", ValidationKind::Blank, "cannot be nil");
        errors.add("email", ValidationKind::Invalid);
        errors.add("email", ValidationKind::Taken);

        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.get("age").is_empty());
        assert_eq!(errors.base(), "Person");
    }

    #[test]
    fn test_full_messages_sorted_by_attribute() {
        let mut errors = ValidationErrors::new("Person");
        errors.add_with_message("name", ValidationKind::Blank, "cannot be nil");
        errors.add("email", ValidationKind::Invalid);

        assert_eq!(
            errors.full_messages(),
            ["email is invalid", "name cannot be nil"]
        );
    }

    #[test]
    fn test_structural_serde_form() {
        let mut errors = ValidationErrors::new("Person");
        errors.add_with_message("name", ValidationKind::Blank, "cannot be nil");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"base":"Person","messages":{"name":[{"kind":"blank","message":"cannot be nil"}]}}"#
        );
    }
}
