//! Record validation.
//!
//! A [`Rules`] set is declared once per record type and evaluated against
//! candidates before they are persisted. Every failing rule contributes one
//! [`FieldError`]; a record is valid iff the resulting [`Errors`] is empty.
//!
//! Messages follow the `"<Field> <violation>"` format, e.g.
//! `"Email has already been taken"`, with the field name passed through
//! [`humanize`].

mod errors;
mod rules;

pub use errors::{Errors, FieldError, Violation};
pub use rules::{Blank, Rules};

/// Outcome of validating a candidate record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Errors,
}

impl Validation {
    /// Whether every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failed rules, in declaration order.
    #[must_use]
    pub const fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Rendered messages, e.g. `["Email can't be blank"]`.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.full_messages()
    }

    /// Consume the outcome and return its errors.
    #[must_use]
    pub fn into_errors(self) -> Errors {
        self.errors
    }
}

impl From<Errors> for Validation {
    fn from(errors: Errors) -> Self {
        Self { errors }
    }
}

/// Turn a field name into a label: `first_name` → `First name`.
///
/// camelCase is split on uppercase letters, a trailing `_id` is dropped
/// (`category_id` → `Category`), underscores become spaces and only the first
/// letter is capitalized.
#[must_use]
pub fn humanize(field: &str) -> String {
    let mut snake = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }

    let trimmed = snake.strip_suffix("_id").unwrap_or(&snake);
    let spaced = trimmed.trim_matches('_').replace('_', " ");

    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_snake_case() {
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("last_name"), "Last name");
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize("password_confirmation"), "Password confirmation");
    }

    #[test]
    fn test_humanize_camel_case() {
        assert_eq!(humanize("firstName"), "First name");
        assert_eq!(humanize("passwordHash"), "Password hash");
    }

    #[test]
    fn test_humanize_drops_id_suffix() {
        assert_eq!(humanize("category_id"), "Category");
        assert_eq!(humanize("categoryId"), "Category");
    }

    #[test]
    fn test_validation_from_errors() {
        assert!(Validation::from(Errors::new()).is_valid());

        let mut errors = Errors::new();
        errors.add("email", Violation::Blank);
        let validation = Validation::from(errors);
        assert!(!validation.is_valid());
        assert_eq!(validation.messages(), vec!["Email can't be blank"]);
    }

    #[test]
    fn test_humanize_empty() {
        assert_eq!(humanize(""), "");
    }
}
