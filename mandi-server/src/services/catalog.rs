//! Catalog Service
//!
//! Two catalogs back the storefronts:
//! - the consumer catalog: static seed data held in memory, exposed through
//!   pure derivation functions (O(n) scans; the list is small and fixed)
//! - farmer listings: persisted records appended by farmer actions

use crate::core::{AppError, AppResult};
use crate::db::models::{
    Category, CategoryInfo, FarmerProduct, FarmerProductCreate, Product, SupplyChainStage, User,
};
use crate::db::repository::FarmerProductRepository;
use crate::store::RecordStore;
use std::sync::Arc;
use validator::Validate;

#[derive(Clone)]
pub struct CatalogService {
    /// Static consumer catalog (immutable reference data)
    products: Arc<Vec<Product>>,
    farmer_products: FarmerProductRepository,
}

impl CatalogService {
    pub fn new(store: RecordStore) -> Self {
        Self {
            products: Arc::new(crate::seed::consumer_catalog()),
            farmer_products: FarmerProductRepository::new(store),
        }
    }

    // =========================================================================
    // Consumer catalog
    // =========================================================================

    /// The full catalog
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id
    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in one category; `None` means all
    pub fn by_category(&self, category: Option<Category>) -> Vec<&Product> {
        match category {
            None => self.products.iter().collect(),
            Some(c) => self.products.iter().filter(|p| p.category == c).collect(),
        }
    }

    /// Pre-flagged bestsellers
    pub fn bestsellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_bestseller).collect()
    }

    /// Pre-flagged new arrivals
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Organic-only subset (marketplace filter)
    pub fn organic(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_organic).collect()
    }

    /// Case-insensitive substring search over name, description and tags
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let q = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.description.to_lowercase().contains(&q)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Category descriptors for storefront navigation
    pub fn categories(&self) -> Vec<CategoryInfo> {
        vec![
            CategoryInfo {
                id: Category::Millets,
                name: "Millets",
                icon: "🌾",
            },
            CategoryInfo {
                id: Category::Pulses,
                name: "Pulses",
                icon: "🫘",
            },
            CategoryInfo {
                id: Category::Processed,
                name: "Processed Foods",
                icon: "🥫",
            },
            CategoryInfo {
                id: Category::Snacks,
                name: "Healthy Snacks",
                icon: "🍪",
            },
            CategoryInfo {
                id: Category::Flour,
                name: "Flours & Atta",
                icon: "🫓",
            },
            CategoryInfo {
                id: Category::Oils,
                name: "Cooking Oils",
                icon: "🫗",
            },
            CategoryInfo {
                id: Category::Combos,
                name: "Combo Packs",
                icon: "🎁",
            },
        ]
    }

    // =========================================================================
    // Farmer listings
    // =========================================================================

    /// All farmer listings
    pub fn farmer_listings(&self) -> AppResult<Vec<FarmerProduct>> {
        Ok(self.farmer_products.find_all()?)
    }

    /// Find a farmer listing by id
    pub fn farmer_listing_by_id(&self, id: &str) -> AppResult<Option<FarmerProduct>> {
        Ok(self.farmer_products.find_by_id(id)?)
    }

    /// Listings posted by one farmer
    pub fn listings_by_farmer(&self, farmer_id: &str) -> AppResult<Vec<FarmerProduct>> {
        Ok(self.farmer_products.find_by_farmer(farmer_id)?)
    }

    /// Append a new listing for a farmer
    ///
    /// Only producer roles may list. The new record gets a synthesized id
    /// and a provenance-trail stub recording the listing event.
    pub fn add_listing(
        &self,
        payload: FarmerProductCreate,
        farmer: &User,
    ) -> AppResult<FarmerProduct> {
        payload.validate()?;

        if !farmer.role.is_producer() {
            return Err(AppError::business_rule("Only farmers and FPOs can list produce"));
        }

        let now = shared::util::now_iso();
        let location = match (&farmer.city, &farmer.state) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(city), None) => city.clone(),
            _ => "Karnataka".to_string(),
        };

        let product = FarmerProduct {
            id: shared::util::generate_id("prod"),
            name: payload.name,
            category: payload.category,
            quantity_kg: payload.quantity_kg,
            price_per_kg: payload.price_per_kg,
            description: payload.description,
            farmer_id: farmer.id.clone(),
            farmer_name: farmer.name.clone(),
            farmer_phone: farmer.phone.clone(),
            location,
            village: None,
            district: None,
            state: farmer.state.clone(),
            listed_date: now.clone(),
            image_url: None,
            organic: payload.organic,
            certifications: payload.certifications,
            ledger_verified: false,
            ledger_hash: None,
            block_number: None,
            supply_chain: vec![SupplyChainStage {
                stage: "Listed on Platform".into(),
                timestamp: now,
                verified_by: "Mandi Platform".into(),
                status: "Active".into(),
            }],
        };

        let product = self.farmer_products.create(product)?;

        tracing::info!(
            product_id = %product.id,
            farmer_id = %product.farmer_id,
            name = %product.name,
            "Farmer listing added"
        );

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Documents;
    use shared::{UserRole, VerificationStatus};
    use std::collections::HashSet;

    fn service() -> CatalogService {
        CatalogService::new(RecordStore::open_in_memory().unwrap())
    }

    fn test_user(role: UserRole) -> User {
        User {
            id: "user_1".into(),
            email: "a@demo.com".into(),
            password_hash: "hash".into(),
            name: "Ravi Kumar".into(),
            phone: "9876543210".into(),
            role,
            business_name: None,
            gst_number: None,
            address: None,
            city: Some("Dharwad".into()),
            state: Some("Karnataka".into()),
            pincode: None,
            documents: Documents::default(),
            is_verified: true,
            verification_status: VerificationStatus::Approved,
            created_at: shared::util::now_iso(),
            profile_image: None,
        }
    }

    fn listing_payload() -> FarmerProductCreate {
        FarmerProductCreate {
            name: "Ragi".into(),
            category: "millets".into(),
            quantity_kg: 500,
            price_per_kg: 55.0,
            description: "Freshly threshed finger millet".into(),
            organic: true,
            certifications: vec!["Organic Certified".into()],
        }
    }

    #[test]
    fn test_category_filters_partition_catalog() {
        let catalog = service();
        let total = catalog.all().len();

        // Union of all per-category filters reconstructs the catalog
        // exactly: every product once, none missing.
        let mut seen: HashSet<String> = HashSet::new();
        let mut count = 0;
        for category in Category::ALL {
            for product in catalog.by_category(Some(category)) {
                assert_eq!(product.category, category);
                assert!(seen.insert(product.id.clone()), "duplicate {}", product.id);
                count += 1;
            }
        }
        assert_eq!(count, total);
    }

    #[test]
    fn test_by_category_none_is_full_catalog() {
        let catalog = service();
        assert_eq!(catalog.by_category(None).len(), catalog.all().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = service();
        let lower = catalog.search("ragi");
        let upper = catalog.search("RAGI");
        assert!(!lower.is_empty());
        assert_eq!(lower.len(), upper.len());
    }

    #[test]
    fn test_search_matches_tags() {
        let catalog = service();
        let hits = catalog.search("gluten-free");
        assert!(!hits.is_empty());
        for product in hits {
            let q = "gluten-free";
            let in_tags = product.tags.iter().any(|t| t.to_lowercase().contains(q));
            let in_text = product.name.to_lowercase().contains(q)
                || product.description.to_lowercase().contains(q);
            assert!(in_tags || in_text);
        }
    }

    #[test]
    fn test_flagged_subsets() {
        let catalog = service();
        assert!(catalog.bestsellers().iter().all(|p| p.is_bestseller));
        assert!(catalog.new_arrivals().iter().all(|p| p.is_new));
        assert!(catalog.organic().iter().all(|p| p.is_organic));
        assert!(!catalog.bestsellers().is_empty());
        assert!(!catalog.new_arrivals().is_empty());
    }

    #[test]
    fn test_by_id() {
        let catalog = service();
        assert!(catalog.by_id("prod_1").is_some());
        assert!(catalog.by_id("prod_999").is_none());
    }

    #[test]
    fn test_add_listing_for_farmer() {
        let catalog = service();
        let farmer = test_user(UserRole::Farmer);

        let listing = catalog.add_listing(listing_payload(), &farmer).unwrap();
        assert!(listing.id.starts_with("prod_"));
        assert_eq!(listing.farmer_id, farmer.id);
        assert_eq!(listing.farmer_name, "Ravi Kumar");
        assert_eq!(listing.location, "Dharwad, Karnataka");
        assert!(!listing.ledger_verified);

        // New listings open their provenance trail with the listing event
        assert_eq!(listing.supply_chain.len(), 1);
        assert_eq!(listing.supply_chain[0].stage, "Listed on Platform");
        assert_eq!(listing.supply_chain[0].status, "Active");

        let stored = catalog.farmer_listing_by_id(&listing.id).unwrap().unwrap();
        assert_eq!(stored.name, "Ragi");
        assert_eq!(catalog.listings_by_farmer(&farmer.id).unwrap().len(), 1);
    }

    #[test]
    fn test_add_listing_allows_fpo() {
        let catalog = service();
        let fpo = test_user(UserRole::Fpo);
        catalog.add_listing(listing_payload(), &fpo).unwrap();
    }

    #[test]
    fn test_add_listing_rejects_non_producers() {
        let catalog = service();

        for role in [UserRole::Processor, UserRole::Retailer, UserRole::Consumer] {
            let buyer = test_user(role);
            let err = catalog.add_listing(listing_payload(), &buyer).unwrap_err();
            assert!(matches!(err, AppError::BusinessRule(_)));
        }
        assert!(catalog.farmer_listings().unwrap().is_empty());
    }

    #[test]
    fn test_add_listing_validates_payload() {
        let catalog = service();
        let farmer = test_user(UserRole::Farmer);

        let mut payload = listing_payload();
        payload.quantity_kg = 0;
        let err = catalog.add_listing(payload, &farmer).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
