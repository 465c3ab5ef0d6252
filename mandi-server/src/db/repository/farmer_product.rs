//! Farmer Product Repository

use super::{BaseRepository, FARMER_PRODUCTS, RepoError, RepoResult};
use crate::db::models::FarmerProduct;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct FarmerProductRepository {
    base: BaseRepository,
}

impl FarmerProductRepository {
    pub fn new(store: RecordStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// All farmer listings
    pub fn find_all(&self) -> RepoResult<Vec<FarmerProduct>> {
        Ok(self.base.store().list(FARMER_PRODUCTS)?)
    }

    /// Find listing by id
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<FarmerProduct>> {
        Ok(self.base.store().get(FARMER_PRODUCTS, id)?)
    }

    /// Listings posted by one farmer
    pub fn find_by_farmer(&self, farmer_id: &str) -> RepoResult<Vec<FarmerProduct>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|p| p.farmer_id == farmer_id)
            .collect())
    }

    /// Append a new listing
    pub fn create(&self, product: FarmerProduct) -> RepoResult<FarmerProduct> {
        self.base
            .store()
            .put(FARMER_PRODUCTS, &product.id, &product)?;
        Ok(product)
    }

    /// Set the remaining quantity of a listing
    ///
    /// The only in-session mutation a listing undergoes (stock decrement
    /// after a successful order).
    pub fn set_quantity(&self, id: &str, quantity_kg: u32) -> RepoResult<FarmerProduct> {
        let mut product = self
            .find_by_id(id)?
            .ok_or_else(|| RepoError::NotFound("Product not found".into()))?;
        product.quantity_kg = quantity_kg;
        self.base.store().put(FARMER_PRODUCTS, id, &product)?;
        Ok(product)
    }

    /// Number of listings present (seed guard)
    pub fn count(&self) -> RepoResult<usize> {
        Ok(self.base.store().len(FARMER_PRODUCTS)?)
    }
}
