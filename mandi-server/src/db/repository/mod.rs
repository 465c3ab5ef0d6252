//! Repository Module
//!
//! Per-entity CRUD over the keyed record store. Collection names are the
//! persisted layout contract.

// Identity
pub mod session;
pub mod user;

// Catalog
pub mod farmer_product;

// Commerce
pub mod cart;
pub mod consumer_order;
pub mod farmer_order;
pub mod wishlist;

// Re-exports
pub use cart::CartRepository;
pub use consumer_order::ConsumerOrderRepository;
pub use farmer_order::FarmerOrderRepository;
pub use farmer_product::FarmerProductRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;

use crate::core::AppError;
use crate::store::{RecordStore, StoreError};
use thiserror::Error;

// ========== Collection names ==========

pub const USERS: &str = "users";
pub const SESSION: &str = "session";
pub const FARMER_PRODUCTS: &str = "farmer_products";
pub const FARMER_ORDERS: &str = "farmer_orders";
pub const CARTS: &str = "carts";
pub const CONSUMER_ORDERS: &str = "consumer_orders";
pub const WISHLISTS: &str = "wishlists";

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Storage(e) => AppError::Storage(e),
        }
    }
}

/// Base repository with record store reference
#[derive(Clone)]
pub struct BaseRepository {
    store: RecordStore,
}

impl BaseRepository {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
