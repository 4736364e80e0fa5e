//! In-memory implementations of the commerce ports.
//!
//! Back the binary in development and the test suite. All stores are
//! thread-safe (`Arc<RwLock<...>>`) and cheap to clone.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use driftwood_core::{MarketId, OrderNumber};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CommerceError;
use super::cart::Cart;
use super::orders::{OrderTotals, PurchaseOrder};
use super::payment::PaymentMethod;
use super::ports::{
    CartRef, CartSearch, OrderRepository, PaymentMethods, ShippingMethods, TotalsCalculator,
};
use super::shipping::ShippingMethod;

/// In-memory cart and purchase-order store.
///
/// Also serves as the order index: [`CartSearch`] scans the stored carts'
/// property bags.
#[derive(Default, Clone)]
pub struct InMemoryOrderRepository {
    carts: Arc<RwLock<HashMap<(Uuid, String), Cart>>>,
    orders: Arc<RwLock<Vec<PurchaseOrder>>>,
}

impl InMemoryOrderRepository {
    /// Create a new, empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a purchase order (test/seed helper).
    pub async fn insert_purchase_order(&self, order: PurchaseOrder) {
        self.orders.write().await.push(order);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_cart(&self, cart: &Cart) -> Result<(), CommerceError> {
        let mut carts = self.carts.write().await;
        carts.insert((cart.customer_id, cart.name.clone()), cart.clone());
        Ok(())
    }

    async fn load_cart(
        &self,
        customer_id: Uuid,
        name: &str,
    ) -> Result<Option<Cart>, CommerceError> {
        let carts = self.carts.read().await;
        Ok(carts.get(&(customer_id, name.to_string())).cloned())
    }

    async fn purchase_order_by_number(
        &self,
        number: OrderNumber,
    ) -> Result<Option<PurchaseOrder>, CommerceError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.order_number == number).cloned())
    }

    async fn purchase_order_by_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Option<PurchaseOrder>, CommerceError> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .find(|o| o.tracking_number == tracking_number)
            .cloned())
    }
}

#[async_trait]
impl CartSearch for InMemoryOrderRepository {
    async fn find_cart_by_property(
        &self,
        key: &str,
        value: &str,
    ) -> Result<Option<CartRef>, CommerceError> {
        let carts = self.carts.read().await;
        Ok(carts
            .values()
            .find(|cart| cart.property(key) == Some(value))
            .map(|cart| CartRef {
                customer_id: cart.customer_id,
                name: cart.name.clone(),
            }))
    }
}

/// Totals calculator over the cart's own line items.
///
/// Prices are tax inclusive; the tax total is the tax portion of each
/// line's extended price at that line's rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardTotalsCalculator;

impl TotalsCalculator for StandardTotalsCalculator {
    fn totals_for(&self, cart: &Cart) -> OrderTotals {
        let hundred = Decimal::ONE_HUNDRED;
        let mut total = Decimal::ZERO;
        let mut tax_total = Decimal::ZERO;

        for line in &cart.line_items {
            let extended = line.extended_price();
            total += extended;
            tax_total += extended * line.tax_rate / (hundred + line.tax_rate);
        }

        OrderTotals {
            total,
            tax_total: tax_total.round_dp(2),
        }
    }
}

/// In-memory shipping catalog keyed by market.
#[derive(Default, Clone)]
pub struct InMemoryShippingMethods {
    methods: Arc<RwLock<HashMap<MarketId, Vec<ShippingMethod>>>>,
}

impl InMemoryShippingMethods {
    /// Create a new, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the shipping methods for a market.
    pub async fn set_market_methods(&self, market: MarketId, methods: Vec<ShippingMethod>) {
        self.methods.write().await.insert(market, methods);
    }
}

#[async_trait]
impl ShippingMethods for InMemoryShippingMethods {
    async fn methods_for_market(
        &self,
        market: &MarketId,
    ) -> Result<Vec<ShippingMethod>, CommerceError> {
        let methods = self.methods.read().await;
        Ok(methods.get(market).cloned().unwrap_or_default())
    }
}

/// In-memory payment-method configuration.
#[derive(Default, Clone)]
pub struct InMemoryPaymentMethods {
    methods: Arc<RwLock<Vec<PaymentMethod>>>,
}

impl InMemoryPaymentMethods {
    /// Create a new, empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payment-method record.
    pub async fn insert(&self, method: PaymentMethod) {
        self.methods.write().await.push(method);
    }
}

#[async_trait]
impl PaymentMethods for InMemoryPaymentMethods {
    async fn by_system_keyword(
        &self,
        keyword: &str,
        language: &str,
    ) -> Result<Option<PaymentMethod>, CommerceError> {
        let methods = self.methods.read().await;
        Ok(methods
            .iter()
            .find(|m| m.is_active && m.system_keyword == keyword && m.language == language)
            .cloned())
    }
}
