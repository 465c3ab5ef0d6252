//! Consumer Order Repository
//!
//! Per-buyer order history, stored newest-first under the user id.

use super::{BaseRepository, CONSUMER_ORDERS, RepoResult};
use crate::db::models::ConsumerOrder;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct ConsumerOrderRepository {
    base: BaseRepository,
}

impl ConsumerOrderRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// The user's order history, newest first
    pub fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<ConsumerOrder>> {
        Ok(self
            .base
            .store()
            .get(CONSUMER_ORDERS, user_id)?
            .unwrap_or_default())
    }

    /// Prepend a new order to the user's history
    pub fn push(&self, user_id: &str, order: ConsumerOrder) -> RepoResult<ConsumerOrder> {
        let mut orders = self.find_by_user(user_id)?;
        orders.insert(0, order.clone());
        self.base.store().put(CONSUMER_ORDERS, user_id, &orders)?;
        Ok(order)
    }
}
