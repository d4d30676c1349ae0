use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::query_builder::SqlValue;

/// A catalog entry as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub brand: String,
    pub price: i64,
    pub color: String,
    pub img: String,
}

/// Create payload. Every field is required; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub brand: String,
    pub price: i64,
    pub color: String,
    pub img: String,
}

/// Sparse update payload.
///
/// A field that is absent or `null` is left untouched. Keys other than the
/// four product fields are rejected at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// One column assignment a patch may carry, typed by column.
///
/// These four variants are the only columns an update can touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductField {
    Brand(String),
    Price(i64),
    Color(String),
    Img(String),
}

impl ProductField {
    pub fn column(&self) -> &'static str {
        match self {
            ProductField::Brand(_) => "brand",
            ProductField::Price(_) => "price",
            ProductField::Color(_) => "color",
            ProductField::Img(_) => "img",
        }
    }

    /// Bound parameter for this assignment.
    pub fn to_value(&self) -> SqlValue {
        match self {
            ProductField::Brand(v) | ProductField::Color(v) | ProductField::Img(v) => {
                SqlValue::Text(v.clone())
            }
            ProductField::Price(v) => SqlValue::Integer(*v),
        }
    }

    /// Returns `existing` with this field replaced.
    pub fn apply(&self, existing: Product) -> Product {
        match self {
            ProductField::Brand(brand) => Product {
                brand: brand.clone(),
                ..existing
            },
            ProductField::Price(price) => Product {
                price: *price,
                ..existing
            },
            ProductField::Color(color) => Product {
                color: color.clone(),
                ..existing
            },
            ProductField::Img(img) => Product {
                img: img.clone(),
                ..existing
            },
        }
    }
}

impl ProductPatch {
    /// Assignments carried by this patch, in column order.
    pub fn assignments(&self) -> Vec<ProductField> {
        [
            self.brand.clone().map(ProductField::Brand),
            self.price.map(ProductField::Price),
            self.color.clone().map(ProductField::Color),
            self.img.clone().map(ProductField::Img),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.price.is_none() && self.color.is_none() && self.img.is_none()
    }

    /// Result of applying this patch to `product` without touching the store.
    pub fn apply(&self, product: Product) -> Product {
        self.assignments()
            .iter()
            .fold(product, |acc, field| field.apply(acc))
    }
}
