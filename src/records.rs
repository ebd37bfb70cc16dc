use serde::{Deserialize, Serialize};

/// Column names in CSV output order
pub const PRODUCT_FIELDS: [&str; 5] = [
    "title",
    "description",
    "price",
    "rating",
    "num_of_reviews",
];

/// Represents one product tile scraped from a listing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Full product title (the tile shows a truncated version)
    pub title: String,

    /// Short product description
    pub description: String,

    /// Price with the currency symbol stripped
    pub price: f64,

    /// Star rating, 0 to 5
    pub rating: u32,

    /// Number of reviews backing the rating
    pub num_of_reviews: u32,
}

impl Product {
    /// Create a new product record
    pub fn new(
        title: String,
        description: String,
        price: f64,
        rating: u32,
        num_of_reviews: u32,
    ) -> Self {
        Self {
            title,
            description,
            price,
            rating,
            num_of_reviews,
        }
    }
}
