use serde::Serialize;
use utoipa::ToSchema;

use super::merge;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// How `list` narrows the product catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Every product, by id.
    All,
    /// Exact name match, cheapest first.
    NameEquals(String),
    /// Case-insensitive substring match, cheapest first.
    NameContains(String),
}

impl Product {
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.price, patch.price);
    }
}

/// Build an `ILIKE` pattern matching `needle` anywhere, with the wildcard
/// characters of the needle itself escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
