//! Ordered rule sets over a typed record.

use rust_decimal::Decimal;

use super::{Errors, Violation};
use crate::types::{CategoryId, Price, UserId};

type Check<T> = Box<dyn Fn(&T) -> Option<Violation> + Send + Sync>;

/// Values that can be absent or empty.
///
/// Strings are blank when they are empty after trimming; `None` is always
/// blank; numbers, prices and IDs are never blank once present.
pub trait Blank {
    /// Whether the value counts as missing.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Blank for $ty {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(i32, i64, u32, Decimal, Price, UserId, CategoryId);

struct Rule<T> {
    field: &'static str,
    check: Check<T>,
}

/// An ordered list of field rules.
///
/// Each rule yields at most one [`Violation`]. [`Rules::validate`] runs every
/// rule in declaration order and collects what fails; it never short-circuits
/// and never errors.
///
/// ```
/// use jungle_core::validation::{Rules, Violation};
///
/// struct Category {
///     name: String,
/// }
///
/// let rules = Rules::new().presence("name", |c: &Category| &c.name);
/// let errors = rules.validate(&Category { name: "  ".to_owned() });
/// assert_eq!(errors.full_messages(), vec!["Name can't be blank"]);
/// ```
pub struct Rules<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Rules<T> {
    /// Create an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append an arbitrary rule on `field`.
    #[must_use]
    pub fn rule<F>(mut self, field: &'static str, check: F) -> Self
    where
        F: Fn(&T) -> Option<Violation> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            field,
            check: Box::new(check),
        });
        self
    }

    /// The value returned by `get` must not be blank.
    #[must_use]
    pub fn presence<V, F>(self, field: &'static str, get: F) -> Self
    where
        V: Blank + ?Sized,
        F: for<'a> Fn(&'a T) -> &'a V + Send + Sync + 'static,
    {
        self.rule(field, move |record| {
            get(record).is_blank().then_some(Violation::Blank)
        })
    }

    /// The value must have at least `minimum` characters.
    ///
    /// `get` returns `None` when the field is not being set, in which case the
    /// rule is skipped.
    #[must_use]
    pub fn min_length<F>(self, field: &'static str, minimum: usize, get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        self.rule(field, move |record| {
            get(record)
                .filter(|value| value.chars().count() < minimum)
                .map(|_| Violation::TooShort { minimum })
        })
    }

    /// The value is already used by another record.
    ///
    /// The lookup happens outside the engine; `taken` only reads its answer
    /// off the record.
    #[must_use]
    pub fn uniqueness<F>(self, field: &'static str, taken: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rule(field, move |record| taken(record).then_some(Violation::Taken))
    }

    /// A confirmation value, when supplied, must equal the confirmed one.
    ///
    /// `get` returns `(value, confirmation)`. A missing confirmation skips the rule.
    #[must_use]
    pub fn confirmation<F>(self, field: &'static str, confirms: &'static str, get: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> (Option<&'a str>, Option<&'a str>) + Send + Sync + 'static,
    {
        self.rule(field, move |record| match get(record) {
            (value, Some(confirmation)) if value != Some(confirmation) => {
                Some(Violation::Confirmation {
                    attribute: super::humanize(confirms),
                })
            }
            _ => None,
        })
    }

    /// Number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against `record`.
    #[must_use]
    pub fn validate(&self, record: &T) -> Errors {
        let mut errors = Errors::new();
        for rule in &self.rules {
            if let Some(violation) = (rule.check)(record) {
                errors.add(rule.field, violation);
            }
        }
        errors
    }
}
