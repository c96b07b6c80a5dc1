use prodsim_core::Product;
use serde::{Deserialize, Serialize};

/// One neighbour returned by a similarity query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Catalog position of the neighbour
    pub index: usize,
    pub name: String,
    pub image: Option<String>,
    pub brand: Option<String>,
    /// Discounted (selling) price
    pub price: Option<f64>,
    pub retail_price: Option<f64>,
    pub rating: Option<f64>,
    /// Cosine similarity to the query product, rounded
    pub score: f32,
    pub category: String,
    pub description: String,
}

impl ResultRecord {
    pub fn from_product(index: usize, product: &Product, score: f32) -> Self {
        Self {
            index,
            name: product.name.clone(),
            image: product.image.clone(),
            brand: product.brand.clone(),
            price: product.discounted_price,
            retail_price: product.retail_price,
            rating: product.rating,
            score,
            category: product.category.clone(),
            description: product.description.trim().to_string(),
        }
    }
}
