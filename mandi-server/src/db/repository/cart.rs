//! Cart Repository
//!
//! One cart per user, stored whole under the user id. Carts are small
//! (a handful of line items), so read-modify-write of the full list is
//! the simple and sufficient contract.

use super::{BaseRepository, CARTS, RepoResult};
use crate::db::models::CartItem;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct CartRepository {
    base: BaseRepository,
}

impl CartRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// The user's cart; empty if they have none
    pub fn get(&self, user_id: &str) -> RepoResult<Vec<CartItem>> {
        Ok(self.base.store().get(CARTS, user_id)?.unwrap_or_default())
    }

    /// Replace the user's cart
    pub fn set(&self, user_id: &str, items: &[CartItem]) -> RepoResult<()> {
        self.base.store().put(CARTS, user_id, &items)?;
        Ok(())
    }

    /// Drop the user's cart
    pub fn clear(&self, user_id: &str) -> RepoResult<()> {
        self.base.store().remove(CARTS, user_id)?;
        Ok(())
    }
}
