//! Persisted record models
//!
//! Every struct here serializes to JSON for the record store. DTO naming:
//! `XxxCreate` for inbound payloads, `XxxUpdate` for partial mutations.

pub mod cart;
pub mod farmer_product;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

// Re-exports
pub use cart::CartItem;
pub use farmer_product::{FarmerProduct, FarmerProductCreate, SupplyChainStage};
pub use order::{
    ConsumerOrder, DirectOrderDraft, FarmerOrder, OrderStatus, PaymentMethod, ShippingInfo,
};
pub use product::{Category, CategoryInfo, Product, Seller};
pub use session::Session;
pub use user::{Documents, User, UserCreate, UserUpdate};
