//! Consumer Catalog Product Model

use serde::{Deserialize, Serialize};

/// Catalog category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Millets,
    Pulses,
    Processed,
    Snacks,
    Flour,
    Oils,
    Combos,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 7] = [
        Category::Millets,
        Category::Pulses,
        Category::Processed,
        Category::Snacks,
        Category::Flour,
        Category::Oils,
        Category::Combos,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Millets => "millets",
            Category::Pulses => "pulses",
            Category::Processed => "processed",
            Category::Snacks => "snacks",
            Category::Flour => "flour",
            Category::Oils => "oils",
            Category::Combos => "combos",
        };
        f.write_str(s)
    }
}

/// Category descriptor for storefront navigation
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Seller reference embedded in a catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub location: String,
    pub verified: bool,
}

/// Consumer catalog product (static reference data)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    pub image: String,
    pub category: Category,
    pub stock: u32,
    pub rating: f64,
    pub reviews: u32,
    pub seller: Seller,
    pub certifications: Vec<String>,
    pub tags: Vec<String>,
    pub weight: String,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub is_new: bool,
}
