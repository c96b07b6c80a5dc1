use serde::{Deserialize, Serialize};

/// A cleaned product row from the catalog
///
/// The product's identifier is its position in the [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// First segment of the taxonomy path; empty string is its own group
    pub category: String,
}

impl Product {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: None,
            brand: None,
            discounted_price: None,
            retail_price: None,
            product_rating: None,
            rating: None,
            category: category.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_prices(mut self, discounted: Option<f64>, retail: Option<f64>) -> Self {
        self.discounted_price = discounted;
        self.retail_price = retail;
        self
    }

    /// Whole-number discount of the discounted price against the retail price.
    ///
    /// `None` unless both prices are known and `retail > discounted > 0`.
    pub fn discount_percent(&self) -> Option<u32> {
        match (self.discounted_price, self.retail_price) {
            (Some(price), Some(retail)) if price > 0.0 && retail > price => {
                Some(((1.0 - price / retail) * 100.0).round() as u32)
            }
            _ => None,
        }
    }
}
