//! Mandi: agricultural marketplace mock backend
//!
//! Connects farmers, FPOs, processors, startups, retailers and consumers
//! over a single embedded record store. There is no network surface: the
//! services here are the "backend" a demo client calls directly.
//!
//! # Layers
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Store | [`store`] | keyed record store over redb |
//! | Data | [`db`] | models + per-entity repositories |
//! | Services | [`services`] | identity, catalog, commerce |
//! | Seed | [`seed`] | demo accounts and demo listings |

pub mod core;
pub mod db;
pub mod seed;
pub mod services;
pub mod store;
pub mod utils;

// Re-exports for the common call paths
pub use crate::core::{AppError, AppResult, Config};
pub use crate::services::{CatalogService, CommerceService, IdentityService};
pub use crate::store::RecordStore;
