//! Catalog validation.
//!
//! Products and categories carry no credentials, so they only need the
//! presence rules.

use std::sync::LazyLock;

use jungle_core::validation::{Rules, Validation};

use crate::models::catalog::{NewCategory, NewProduct};

static PRODUCT_RULES: LazyLock<Rules<NewProduct>> = LazyLock::new(|| {
    Rules::new()
        .presence("name", |p: &NewProduct| &p.name)
        .presence("price", |p: &NewProduct| &p.price)
        .presence("quantity", |p: &NewProduct| &p.quantity)
        .presence("category_id", |p: &NewProduct| &p.category_id)
});

static CATEGORY_RULES: LazyLock<Rules<NewCategory>> =
    LazyLock::new(|| Rules::new().presence("name", |c: &NewCategory| &c.name));

/// Validates product candidates.
pub struct ProductValidator;

impl ProductValidator {
    /// Check that name, price, quantity and category are all present.
    #[must_use]
    pub fn validate(product: &NewProduct) -> Validation {
        PRODUCT_RULES.validate(product).into()
    }
}

/// Validates category candidates.
pub struct CategoryValidator;

impl CategoryValidator {
    /// Check that the category has a name.
    #[must_use]
    pub fn validate(category: &NewCategory) -> Validation {
        CATEGORY_RULES.validate(category).into()
    }
}

#[cfg(test)]
mod tests {
    use jungle_core::{CategoryId, CurrencyCode, Price};

    use super::*;

    fn cactus() -> NewProduct {
        NewProduct {
            name: Some("Giant Tea".to_owned()),
            description: Some("The Giant Tea is an uncommon, hard-to-find tea.".to_owned()),
            image: Some("plante_1.jpg".to_owned()),
            price: Some(Price::from_cents(6499, CurrencyCode::USD)),
            quantity: Some(0),
            category_id: Some(CategoryId::new(1)),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(ProductValidator::validate(&cactus()).is_valid());
    }

    #[test]
    fn test_empty_product_reports_every_field() {
        let validation = ProductValidator::validate(&NewProduct::default());
        assert_eq!(
            validation.messages(),
            vec![
                "Name can't be blank",
                "Price can't be blank",
                "Quantity can't be blank",
                "Category can't be blank",
            ]
        );
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let product = NewProduct {
            name: Some("   ".to_owned()),
            ..cactus()
        };
        let validation = ProductValidator::validate(&product);
        assert_eq!(validation.messages(), vec!["Name can't be blank"]);
    }

    #[test]
    fn test_each_missing_field() {
        let cases: [(fn(&mut NewProduct), &str); 3] = [
            (|p| p.price = None, "Price can't be blank"),
            (|p| p.quantity = None, "Quantity can't be blank"),
            (|p| p.category_id = None, "Category can't be blank"),
        ];
        for (clear, expected) in cases {
            let mut product = cactus();
            clear(&mut product);
            assert_eq!(ProductValidator::validate(&product).messages(), vec![expected]);
        }
    }

    #[test]
    fn test_category() {
        let valid = NewCategory {
            name: "Evergreens".to_owned(),
        };
        assert!(CategoryValidator::validate(&valid).is_valid());
        assert_eq!(
            CategoryValidator::validate(&NewCategory::default()).messages(),
            vec!["Name can't be blank"]
        );
    }
}
