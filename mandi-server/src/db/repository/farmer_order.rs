//! Farmer Order Repository
//!
//! Direct buyer↔farmer orders. Append-only: orders are never mutated or
//! cancelled by the system after placement.

use super::{BaseRepository, FARMER_ORDERS, RepoResult};
use crate::db::models::FarmerOrder;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct FarmerOrderRepository {
    base: BaseRepository,
}

impl FarmerOrderRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Append a placed order
    pub fn create(&self, order: FarmerOrder) -> RepoResult<FarmerOrder> {
        self.base.store().put(FARMER_ORDERS, &order.id, &order)?;
        Ok(order)
    }

    /// All orders, newest first
    ///
    /// Order dates are RFC 3339 with sub-second precision, so the string
    /// sort is a chronological sort.
    pub fn find_all(&self) -> RepoResult<Vec<FarmerOrder>> {
        let mut orders: Vec<FarmerOrder> = self.base.store().list(FARMER_ORDERS)?;
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    /// Orders placed by one buyer, newest first
    pub fn find_by_buyer(&self, buyer_id: &str) -> RepoResult<Vec<FarmerOrder>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|o| o.buyer_id == buyer_id)
            .collect())
    }

    /// Orders received by one farmer, newest first
    pub fn find_by_farmer(&self, farmer_id: &str) -> RepoResult<Vec<FarmerOrder>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|o| o.farmer_id == farmer_id)
            .collect())
    }

    /// Number of orders on record
    pub fn count(&self) -> RepoResult<usize> {
        Ok(self.base.store().len(FARMER_ORDERS)?)
    }
}
