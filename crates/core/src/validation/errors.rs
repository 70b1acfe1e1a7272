//! Violation messages collected by a validation run.

use core::fmt;

use serde::Serialize;

use super::humanize;

/// A single failed rule.
///
/// The `Display` impl renders the message tail that follows the field label,
/// e.g. `can't be blank`. These strings are part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Required value is missing or only whitespace.
    Blank,
    /// Another record already uses this value.
    Taken,
    /// Value has fewer characters than allowed.
    TooShort {
        /// Minimum number of characters.
        minimum: usize,
    },
    /// Value does not equal the attribute it confirms.
    Confirmation {
        /// Human-readable label of the confirmed attribute.
        attribute: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("can't be blank"),
            Self::Taken => f.write_str("has already been taken"),
            Self::TooShort { minimum: 1 } => {
                f.write_str("is too short (minimum is 1 character)")
            }
            Self::TooShort { minimum } => {
                write!(f, "is too short (minimum is {minimum} characters)")
            }
            Self::Confirmation { attribute } => write!(f, "doesn't match {attribute}"),
        }
    }
}

/// A violation scoped to the field it was raised on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as declared in the rule set (e.g. `first_name`).
    pub field: &'static str,
    /// What went wrong.
    pub violation: Violation,
}

impl FieldError {
    /// Human-readable field label, e.g. `First name`.
    #[must_use]
    pub fn label(&self) -> String {
        humanize(self.field)
    }

    /// The full message, e.g. `First name can't be blank`.
    #[must_use]
    pub fn full_message(&self) -> String {
        format!("{} {}", self.label(), self.violation)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_message())
    }
}

/// Ordered collection of field errors.
///
/// Order follows rule declaration, so the first message is always the first
/// rule that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors(Vec<FieldError>);

impl Errors {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation on `field`.
    pub fn add(&mut self, field: &'static str, violation: Violation) {
        self.0.push(FieldError { field, violation });
    }

    /// Whether no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the errors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Violations raised on a single field.
    pub fn on<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| &e.violation)
    }

    /// Whether `field` has the given violation.
    #[must_use]
    pub fn contains(&self, field: &str, violation: &Violation) -> bool {
        self.on(field).any(|v| v == violation)
    }

    /// All messages rendered as `"<Field> <violation>"`.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::full_message).collect()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Errors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
