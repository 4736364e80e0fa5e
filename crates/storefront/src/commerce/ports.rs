//! Trait ports onto the commerce platform.
//!
//! Services receive these as `Arc<dyn ...>` at construction; nothing in
//! the storefront reaches for a global locator.

use async_trait::async_trait;
use driftwood_core::{MarketId, OrderNumber};
use uuid::Uuid;

use super::CommerceError;
use super::cart::Cart;
use super::orders::{OrderTotals, PurchaseOrder};
use super::payment::PaymentMethod;
use super::shipping::ShippingMethod;

/// Cart and purchase-order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist the cart, replacing the stored aggregate.
    async fn save_cart(&self, cart: &Cart) -> Result<(), CommerceError>;

    /// Load a customer's cart by name.
    async fn load_cart(
        &self,
        customer_id: Uuid,
        name: &str,
    ) -> Result<Option<Cart>, CommerceError>;

    /// Load a purchase order by its order number.
    async fn purchase_order_by_number(
        &self,
        number: OrderNumber,
    ) -> Result<Option<PurchaseOrder>, CommerceError>;

    /// Load a purchase order by its tracking number.
    async fn purchase_order_by_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<Option<PurchaseOrder>, CommerceError>;
}

/// Reference to a cart found through the order index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRef {
    pub customer_id: Uuid,
    pub name: String,
}

/// Search over the platform's order index.
#[async_trait]
pub trait CartSearch: Send + Sync {
    /// Find the first cart whose property bag holds `value` under `key`.
    ///
    /// The index query is a single-record page; when several carts match,
    /// only the first is returned.
    async fn find_cart_by_property(
        &self,
        key: &str,
        value: &str,
    ) -> Result<Option<CartRef>, CommerceError>;
}

/// The platform's order totals calculator.
pub trait TotalsCalculator: Send + Sync {
    /// Compute the cart's grand total and tax total.
    fn totals_for(&self, cart: &Cart) -> OrderTotals;
}

/// The platform's shipping catalog.
#[async_trait]
pub trait ShippingMethods: Send + Sync {
    /// Shipping methods enabled for a market, in configured order.
    async fn methods_for_market(
        &self,
        market: &MarketId,
    ) -> Result<Vec<ShippingMethod>, CommerceError>;
}

/// The platform's payment-method configuration.
#[async_trait]
pub trait PaymentMethods: Send + Sync {
    /// Look up the active payment method for a system keyword under a
    /// content language.
    async fn by_system_keyword(
        &self,
        keyword: &str,
        language: &str,
    ) -> Result<Option<PaymentMethod>, CommerceError>;
}
