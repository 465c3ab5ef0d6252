//! Commerce Service
//!
//! Carts, wishlists and both order flows. Pricing rules live here:
//! flat shipping with a free-shipping threshold, direct-order totals and
//! delivery estimates drawn from the configured day ranges.

use crate::core::{AppError, AppResult, Config};
use crate::db::models::{
    CartItem, ConsumerOrder, DirectOrderDraft, FarmerOrder, OrderStatus, PaymentMethod, Product,
    ShippingInfo,
};
use crate::db::repository::{
    CartRepository, ConsumerOrderRepository, FarmerOrderRepository, FarmerProductRepository,
    WishlistRepository,
};
use crate::store::RecordStore;
use chrono::{Duration, Utc};
use rand::Rng;
use serde::Serialize;
use validator::Validate;

/// Cart pricing summary
///
/// `total = subtotal + shipping_fee`; the fee is zero when the subtotal
/// strictly exceeds the free-shipping threshold.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub total: f64,
}

#[derive(Clone)]
pub struct CommerceService {
    carts: CartRepository,
    wishlists: WishlistRepository,
    farmer_orders: FarmerOrderRepository,
    consumer_orders: ConsumerOrderRepository,
    farmer_products: FarmerProductRepository,
    config: Config,
}

impl CommerceService {
    pub fn new(store: RecordStore, config: Config) -> Self {
        Self {
            carts: CartRepository::new(store.clone()),
            wishlists: WishlistRepository::new(store.clone()),
            farmer_orders: FarmerOrderRepository::new(store.clone()),
            consumer_orders: ConsumerOrderRepository::new(store.clone()),
            farmer_products: FarmerProductRepository::new(store),
            config,
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// The user's cart; empty if they have none
    pub fn cart_for(&self, user_id: &str) -> AppResult<Vec<CartItem>> {
        Ok(self.carts.get(user_id)?)
    }

    /// Add a catalog product to the cart
    ///
    /// Adding a product already in the cart merges quantities instead of
    /// creating a second line.
    pub fn add_to_cart(
        &self,
        user_id: &str,
        product: &Product,
        quantity: u32,
    ) -> AppResult<Vec<CartItem>> {
        let quantity = quantity.max(1);
        let mut items = self.carts.get(user_id)?;

        match items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity += quantity,
            None => items.push(CartItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                weight: product.weight.clone(),
                quantity,
            }),
        }

        self.carts.set(user_id, &items)?;
        Ok(items)
    }

    /// Adjust a line's quantity by a signed delta, flooring at 1
    pub fn change_quantity(
        &self,
        user_id: &str,
        product_id: &str,
        delta: i32,
    ) -> AppResult<Vec<CartItem>> {
        let mut items = self.carts.get(user_id)?;
        let item = items
            .iter_mut()
            .find(|i| i.product_id == product_id)
            .ok_or_else(|| AppError::not_found("Item not in cart"))?;

        item.quantity = (item.quantity as i64 + delta as i64).max(1) as u32;

        self.carts.set(user_id, &items)?;
        Ok(items)
    }

    /// Remove a line from the cart
    pub fn remove_from_cart(&self, user_id: &str, product_id: &str) -> AppResult<Vec<CartItem>> {
        let mut items = self.carts.get(user_id)?;
        items.retain(|i| i.product_id != product_id);
        self.carts.set(user_id, &items)?;
        Ok(items)
    }

    /// Empty the cart
    pub fn clear_cart(&self, user_id: &str) -> AppResult<()> {
        Ok(self.carts.clear(user_id)?)
    }

    /// Price the cart under the shipping rules
    pub fn cart_totals(&self, items: &[CartItem]) -> CartTotals {
        let subtotal: f64 = items.iter().map(CartItem::line_total).sum();
        let shipping_fee = if subtotal > self.config.free_shipping_threshold {
            0.0
        } else {
            self.config.flat_shipping_fee
        };
        CartTotals {
            subtotal,
            shipping_fee,
            total: subtotal + shipping_fee,
        }
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// The user's wishlist product ids
    pub fn wishlist_for(&self, user_id: &str) -> AppResult<Vec<String>> {
        Ok(self.wishlists.get(user_id)?)
    }

    /// Toggle wishlist membership; returns whether the product is now listed
    pub fn toggle_wishlist(&self, user_id: &str, product_id: &str) -> AppResult<bool> {
        Ok(self.wishlists.toggle(user_id, product_id)?)
    }

    // =========================================================================
    // Direct orders (business buyer ↔ farmer)
    // =========================================================================

    /// Place a direct order against a farmer listing
    ///
    /// Checks availability before writing anything: an over-quantity draft
    /// fails without creating a record. On success the listing's remaining
    /// quantity is decremented by the ordered amount.
    pub fn place_direct_order(&self, draft: DirectOrderDraft) -> AppResult<FarmerOrder> {
        draft.validate()?;

        let product = self
            .farmer_products
            .find_by_id(&draft.product_id)?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        if draft.quantity_kg > product.quantity_kg {
            return Err(AppError::business_rule(format!(
                "Only {} kg available",
                product.quantity_kg
            )));
        }

        let delivery_days = rand::thread_rng().gen_range(self.config.direct_delivery_days.clone());
        let order = FarmerOrder {
            id: shared::util::generate_id("order"),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity_kg: draft.quantity_kg,
            price_per_kg: product.price_per_kg,
            total_amount: draft.quantity_kg as f64 * product.price_per_kg,
            buyer_id: draft.buyer_id,
            buyer_name: draft.buyer_name,
            buyer_phone: draft.buyer_phone,
            buyer_company: draft.buyer_company,
            farmer_id: product.farmer_id.clone(),
            farmer_name: product.farmer_name.clone(),
            farmer_phone: product.farmer_phone.clone(),
            order_date: shared::util::now_iso(),
            status: OrderStatus::Pending,
            delivery_address: draft.delivery_address,
            expected_delivery: shared::util::format_short_date(
                Utc::now() + Duration::days(delivery_days),
            ),
            notes: draft.notes,
        };

        let order = self.farmer_orders.create(order)?;
        self.farmer_products
            .set_quantity(&product.id, product.quantity_kg - order.quantity_kg)?;

        tracing::info!(
            order_id = %order.id,
            buyer_id = %order.buyer_id,
            farmer_id = %order.farmer_id,
            quantity_kg = order.quantity_kg,
            total = order.total_amount,
            "Direct order placed"
        );

        Ok(order)
    }

    /// Direct orders placed by a buyer, newest first
    pub fn orders_for_buyer(&self, buyer_id: &str) -> AppResult<Vec<FarmerOrder>> {
        Ok(self.farmer_orders.find_by_buyer(buyer_id)?)
    }

    /// Direct orders received by a farmer, newest first
    pub fn orders_for_farmer(&self, farmer_id: &str) -> AppResult<Vec<FarmerOrder>> {
        Ok(self.farmer_orders.find_by_farmer(farmer_id)?)
    }

    // =========================================================================
    // Consumer checkout
    // =========================================================================

    /// Turn the user's cart into an order and empty the cart
    ///
    /// Payment is simulated and always succeeds; the order lands confirmed.
    pub fn checkout(
        &self,
        user_id: &str,
        shipping: ShippingInfo,
        payment_method: PaymentMethod,
    ) -> AppResult<ConsumerOrder> {
        shipping.validate()?;

        let items = self.carts.get(user_id)?;
        if items.is_empty() {
            return Err(AppError::validation("Cart is empty"));
        }

        let totals = self.cart_totals(&items);
        let delivery_days = rand::thread_rng().gen_range(self.config.consumer_delivery_days.clone());

        let order = ConsumerOrder {
            id: shared::util::generate_id("order"),
            items,
            subtotal: totals.subtotal,
            shipping_fee: totals.shipping_fee,
            total: totals.total,
            shipping,
            payment_method,
            status: OrderStatus::Confirmed,
            created_at: shared::util::now_iso(),
            expected_delivery: shared::util::format_short_date(
                Utc::now() + Duration::days(delivery_days),
            ),
            delivery_days,
        };

        let order = self.consumer_orders.push(user_id, order)?;
        self.carts.clear(user_id)?;

        tracing::info!(
            order_id = %order.id,
            user_id = %user_id,
            total = order.total,
            "Checkout completed"
        );

        Ok(order)
    }

    /// The user's checkout history, newest first
    pub fn order_history(&self, user_id: &str) -> AppResult<Vec<ConsumerOrder>> {
        Ok(self.consumer_orders.find_by_user(user_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Category, Seller};
    use std::time::Duration as StdDuration;

    fn service() -> CommerceService {
        let store = RecordStore::open_in_memory().unwrap();
        let config = Config::with_overrides("/tmp/mandi-test", StdDuration::from_millis(20));
        CommerceService::new(store, config)
    }

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {}", id),
            description: "test".into(),
            price,
            original_price: None,
            discount: None,
            image: "/test.jpg".into(),
            category: Category::Millets,
            stock: 50,
            rating: 4.5,
            reviews: 10,
            seller: Seller {
                id: "seller_1".into(),
                name: "Test Farm".into(),
                location: "Karnataka".into(),
                verified: true,
            },
            certifications: vec![],
            tags: vec![],
            weight: "500g".into(),
            is_bestseller: false,
            is_organic: false,
            is_new: false,
        }
    }

    #[test]
    fn test_add_to_cart_merges_same_product() {
        let svc = service();
        let p = product("prod_1", 120.0);

        svc.add_to_cart("u1", &p, 2).unwrap();
        let items = svc.add_to_cart("u1", &p, 3).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_change_quantity_floors_at_one() {
        let svc = service();
        svc.add_to_cart("u1", &product("prod_1", 120.0), 2).unwrap();

        let items = svc.change_quantity("u1", "prod_1", -10).unwrap();
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_missing_item() {
        let svc = service();
        let err = svc.change_quantity("u1", "prod_404", 1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_cart_totals_flat_fee_below_threshold() {
        let svc = service();
        svc.add_to_cart("u1", &product("prod_1", 120.0), 2).unwrap();
        let items = svc.add_to_cart("u1", &product("prod_2", 85.0), 1).unwrap();

        let totals = svc.cart_totals(&items);
        assert_eq!(totals.subtotal, 325.0);
        assert_eq!(totals.shipping_fee, 50.0);
        assert_eq!(totals.total, 375.0);
    }

    #[test]
    fn test_cart_totals_free_shipping_above_threshold() {
        let svc = service();
        let items = svc.add_to_cart("u1", &product("prod_1", 130.0), 4).unwrap();

        let totals = svc.cart_totals(&items);
        assert_eq!(totals.subtotal, 520.0);
        assert_eq!(totals.shipping_fee, 0.0);
        assert_eq!(totals.total, 520.0);
    }

    #[test]
    fn test_cart_totals_exact_threshold_still_charged() {
        let svc = service();
        let items = svc.add_to_cart("u1", &product("prod_1", 500.0), 1).unwrap();

        let totals = svc.cart_totals(&items);
        assert_eq!(totals.shipping_fee, 50.0);
        assert_eq!(totals.total, 550.0);
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let svc = service();
        let shipping = ShippingInfo {
            name: "Asha".into(),
            phone: "9876543210".into(),
            address: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560001".into(),
        };
        let err = svc.checkout("u1", shipping, PaymentMethod::Cod).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_checkout_clears_cart_and_records_order() {
        let svc = service();
        svc.add_to_cart("u1", &product("prod_1", 120.0), 2).unwrap();
        let shipping = ShippingInfo {
            name: "Asha".into(),
            phone: "9876543210".into(),
            address: "12 MG Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560001".into(),
        };

        let order = svc.checkout("u1", shipping, PaymentMethod::Upi).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.subtotal, 240.0);
        assert_eq!(order.total, 290.0);
        assert!((3..=5).contains(&order.delivery_days));

        assert!(svc.cart_for("u1").unwrap().is_empty());
        let history = svc.order_history("u1").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, order.id);
    }

    #[test]
    fn test_wishlist_toggle() {
        let svc = service();
        assert!(svc.toggle_wishlist("u1", "prod_1").unwrap());
        assert_eq!(svc.wishlist_for("u1").unwrap(), vec!["prod_1"]);
        assert!(!svc.toggle_wishlist("u1", "prod_1").unwrap());
        assert!(svc.wishlist_for("u1").unwrap().is_empty());
    }
}
