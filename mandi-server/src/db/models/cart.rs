//! Cart Model

use serde::{Deserialize, Serialize};

/// Cart line item: product snapshot plus quantity
///
/// Quantity is ≥ 1 by construction; mutations floor at 1 and removal is a
/// separate operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub weight: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
