//! Product and category candidates.

use serde::Deserialize;

use jungle_core::{CategoryId, Price};

/// Input for a new category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCategory {
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// Input for a new product. Every field may be missing until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub name: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Image path or URL.
    pub image: Option<String>,
    /// Unit price.
    pub price: Option<Price>,
    /// Units in stock.
    pub quantity: Option<i32>,
    /// Owning category.
    pub category_id: Option<CategoryId>,
}
