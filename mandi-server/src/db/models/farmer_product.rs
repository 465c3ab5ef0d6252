//! Farmer Listing Model
//!
//! Raw-crop listings posted by farmers for business buyers. Each listing
//! carries a provenance trail: an ordered list of supply-chain stages
//! simulating the transparency ledger shown on the traceability page.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One stage of a listing's provenance trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyChainStage {
    pub stage: String,
    pub timestamp: String,
    pub verified_by: String,
    pub status: String,
}

/// Farmer-listed raw crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Available quantity in kilograms
    pub quantity_kg: u32,
    /// Asking price in rupees per kilogram
    pub price_per_kg: f64,
    pub description: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub farmer_phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub listed_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Simulated ledger verification flag
    #[serde(default)]
    pub ledger_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<String>,
    #[serde(default)]
    pub supply_chain: Vec<SupplyChainStage>,
}

/// New listing payload (farmer dashboard form)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FarmerProductCreate {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1 kg"))]
    pub quantity_kg: u32,
    #[validate(range(min = 0.01, message = "Price must be positive"))]
    pub price_per_kg: f64,
    pub description: String,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub certifications: Vec<String>,
}
