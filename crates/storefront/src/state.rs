//! Application state shared across handlers.

use std::sync::Arc;

use crate::checkout::{CheckoutService, ConnectionFactory, GatewayAccessor};
use crate::commerce::{
    CartSearch, OrderRepository, PaymentMethods, ShippingMethods, TotalsCalculator,
};
use crate::config::StorefrontConfig;

/// Commerce platform collaborators injected into the state.
#[derive(Clone)]
pub struct CommercePorts {
    pub totals: Arc<dyn TotalsCalculator>,
    pub orders: Arc<dyn OrderRepository>,
    pub cart_search: Arc<dyn CartSearch>,
    pub shipping: Arc<dyn ShippingMethods>,
    pub payment_methods: Arc<dyn PaymentMethods>,
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the commerce ports and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    commerce: CommercePorts,
    connection_factory: Arc<dyn ConnectionFactory>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        commerce: CommercePorts,
        connection_factory: Arc<dyn ConnectionFactory>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                commerce,
                connection_factory,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the order repository.
    #[must_use]
    pub fn order_repository(&self) -> &Arc<dyn OrderRepository> {
        &self.inner.commerce.orders
    }

    /// Get a reference to the payment-method configuration.
    #[must_use]
    pub fn payment_methods(&self) -> &Arc<dyn PaymentMethods> {
        &self.inner.commerce.payment_methods
    }

    /// Build a checkout service scoped to the current request.
    ///
    /// Each service carries its own gateway accessor, so the resolved
    /// connection lives exactly as long as the request being served.
    #[must_use]
    pub fn checkout_service(&self) -> CheckoutService {
        let config = &self.inner.config;
        let commerce = &self.inner.commerce;

        let accessor = GatewayAccessor::new(
            commerce.payment_methods.clone(),
            self.inner.connection_factory.clone(),
            config.locale.clone(),
            config.market.clone(),
        );

        CheckoutService::new(
            commerce.totals.clone(),
            commerce.orders.clone(),
            commerce.cart_search.clone(),
            commerce.shipping.clone(),
            accessor,
            config.checkout_urls.merchant_urls(),
            config.locale.clone(),
        )
    }
}
