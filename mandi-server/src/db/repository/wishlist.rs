//! Wishlist Repository
//!
//! Per-user list of catalog product ids.

use super::{BaseRepository, RepoResult, WISHLISTS};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct WishlistRepository {
    base: BaseRepository,
}

impl WishlistRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// The user's wishlist; empty if they have none
    pub fn get(&self, user_id: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .base
            .store()
            .get(WISHLISTS, user_id)?
            .unwrap_or_default())
    }

    /// Toggle a product on the wishlist; returns whether it is now present
    pub fn toggle(&self, user_id: &str, product_id: &str) -> RepoResult<bool> {
        let mut ids = self.get(user_id)?;
        let present = if let Some(pos) = ids.iter().position(|id| id == product_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(product_id.to_string());
            true
        };
        self.base.store().put(WISHLISTS, user_id, &ids)?;
        Ok(present)
    }
}
