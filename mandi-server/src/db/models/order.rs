//! Order Models
//!
//! Two independent shapes, matching the two purchase flows:
//! - [`FarmerOrder`]: business buyer to farmer direct order against a
//!   farmer listing
//! - [`ConsumerOrder`]: consumer checkout of the storefront cart
//!
//! Orders are append-only: status is record-keeping and is never advanced
//! automatically or cancelled by the system.

use super::cart::CartItem;
use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Status / payment
// =============================================================================

/// Order status progression
///
/// pending → confirmed → processing → shipped → delivered; cancelled is a
/// terminal side exit used only by the direct-order shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Payment method selected at checkout (simulated, always succeeds)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Upi,
    Card,
}

// =============================================================================
// Direct order (buyer ↔ farmer)
// =============================================================================

/// Direct order draft submitted by a business buyer
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DirectOrderDraft {
    pub product_id: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1 kg"))]
    pub quantity_kg: u32,
    pub buyer_id: String,
    #[validate(length(min = 1, message = "Buyer name is required"))]
    pub buyer_name: String,
    pub buyer_phone: String,
    pub buyer_company: String,
    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub delivery_address: String,
    pub notes: Option<String>,
}

/// Placed direct order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerOrder {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity_kg: u32,
    pub price_per_kg: f64,
    pub total_amount: f64,
    pub buyer_id: String,
    pub buyer_name: String,
    pub buyer_phone: String,
    pub buyer_company: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub farmer_phone: String,
    pub order_date: String,
    pub status: OrderStatus,
    pub delivery_address: String,
    /// Short human-readable date, e.g. "12 Sep 2026"
    pub expected_delivery: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Consumer order (storefront checkout)
// =============================================================================

/// Shipping form snapshot taken at checkout
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShippingInfo {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 6, message = "Pincode must be 6 digits"))]
    pub pincode: String,
}

/// Placed consumer order
///
/// Invariant: `total = subtotal + shipping_fee`, with the flat fee waived
/// above the free-shipping threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerOrder {
    pub id: String,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub total: f64,
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: String,
    pub expected_delivery: String,
    pub delivery_days: i64,
}
