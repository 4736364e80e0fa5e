//! Explicit resolve-or-reuse access to the gateway connection.

use std::sync::Arc;

use driftwood_core::MarketId;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::commerce::PaymentMethods;
use crate::klarna::{CHECKOUT_SYSTEM_KEYWORD, ConnectionConfiguration, KlarnaError};

use super::gateway::{CheckoutGateway, ConnectionFactory};

/// Resolves the gateway connection for one service instance.
///
/// The first successful resolution is reused for the accessor's
/// lifetime; failed resolutions are not cached, so every cold access
/// re-resolves the payment method and its connection configuration.
/// Accessors live and die with their owning request-scoped service -
/// a configuration change takes effect on the next request.
pub struct GatewayAccessor {
    payment_methods: Arc<dyn PaymentMethods>,
    factory: Arc<dyn ConnectionFactory>,
    /// Content language the payment method is looked up under.
    language: String,
    /// Market whose connection blob is used.
    market: MarketId,
    connection: OnceCell<Arc<dyn CheckoutGateway>>,
}

impl GatewayAccessor {
    /// Create an accessor for one language/market pair.
    #[must_use]
    pub fn new(
        payment_methods: Arc<dyn PaymentMethods>,
        factory: Arc<dyn ConnectionFactory>,
        language: impl Into<String>,
        market: MarketId,
    ) -> Self {
        Self {
            payment_methods,
            factory,
            language: language.into(),
            market,
            connection: OnceCell::new(),
        }
    }

    /// The connection, or `None` when no usable client can be built.
    ///
    /// Callers must handle the absent case; an unconfigured gateway is a
    /// degraded state, not a fault.
    pub async fn get(&self) -> Option<Arc<dyn CheckoutGateway>> {
        self.connection
            .get_or_try_init(|| self.resolve())
            .await
            .ok()
            .cloned()
    }

    async fn resolve(&self) -> Result<Arc<dyn CheckoutGateway>, KlarnaError> {
        let method = self
            .payment_methods
            .by_system_keyword(CHECKOUT_SYSTEM_KEYWORD, &self.language)
            .await
            .map_err(|error| {
                debug!(%error, "payment-method lookup failed");
                KlarnaError::NotConfigured
            })?
            .ok_or(KlarnaError::NotConfigured)?;

        let configuration = ConnectionConfiguration::for_market(&method, &self.market);
        if !configuration.is_configured() {
            debug!(
                market = %self.market,
                language = %self.language,
                "payment method found but no connection configuration for market"
            );
            return Err(KlarnaError::NotConfigured);
        }

        self.factory.connect(&configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commerce::PaymentMethod;
    use crate::commerce::memory::InMemoryPaymentMethods;
    use crate::klarna::MARKET_CONFIGURATION_SUFFIX;
    use crate::klarna::types::{CheckoutOrder, CheckoutOrderUpdate};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    struct NullGateway;

    #[async_trait]
    impl CheckoutGateway for NullGateway {
        async fn create_order(&self, _: &CheckoutOrder) -> Result<CheckoutOrder, KlarnaError> {
            Err(KlarnaError::NotConfigured)
        }

        async fn fetch_order(&self, _: &str) -> Result<CheckoutOrder, KlarnaError> {
            Err(KlarnaError::NotConfigured)
        }

        async fn update_order(
            &self,
            _: &str,
            _: &CheckoutOrderUpdate,
        ) -> Result<CheckoutOrder, KlarnaError> {
            Err(KlarnaError::NotConfigured)
        }
    }

    /// Factory counting how many connections it was asked to build.
    #[derive(Default)]
    struct CountingFactory {
        connects: AtomicUsize,
    }

    impl ConnectionFactory for CountingFactory {
        fn connect(
            &self,
            _: &ConnectionConfiguration,
        ) -> Result<Arc<dyn CheckoutGateway>, KlarnaError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(NullGateway))
        }
    }

    async fn configured_methods() -> InMemoryPaymentMethods {
        let methods = InMemoryPaymentMethods::new();
        let mut method = PaymentMethod::new(Uuid::new_v4(), CHECKOUT_SYSTEM_KEYWORD, "en-US");
        method.set_parameter(
            format!("US_{MARKET_CONFIGURATION_SUFFIX}"),
            r#"{"username":"K1","password":"p","api_url":"https://api.playground.klarna.com"}"#,
        );
        methods.insert(method).await;
        methods
    }

    #[tokio::test]
    async fn test_first_success_is_reused() {
        let factory = Arc::new(CountingFactory::default());
        let accessor = GatewayAccessor::new(
            Arc::new(configured_methods().await),
            factory.clone(),
            "en-US",
            MarketId::new("US"),
        );

        assert!(accessor.get().await.is_some());
        assert!(accessor.get().await.is_some());
        assert_eq!(factory.connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absent_payment_method_yields_no_client() {
        let factory = Arc::new(CountingFactory::default());
        let accessor = GatewayAccessor::new(
            Arc::new(InMemoryPaymentMethods::new()),
            factory.clone(),
            "en-US",
            MarketId::new("US"),
        );

        assert!(accessor.get().await.is_none());
        assert_eq!(factory.connects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_resolution_is_retried_on_next_access() {
        let factory = Arc::new(CountingFactory::default());
        let methods = InMemoryPaymentMethods::new();
        let accessor = GatewayAccessor::new(
            Arc::new(methods.clone()),
            factory.clone(),
            "en-US",
            MarketId::new("US"),
        );

        // Nothing configured yet: resolution fails and is not cached.
        assert!(accessor.get().await.is_none());

        let mut method = PaymentMethod::new(Uuid::new_v4(), CHECKOUT_SYSTEM_KEYWORD, "en-US");
        method.set_parameter(
            format!("US_{MARKET_CONFIGURATION_SUFFIX}"),
            r#"{"username":"K1","password":"p","api_url":"https://api.playground.klarna.com"}"#,
        );
        methods.insert(method).await;

        assert!(accessor.get().await.is_some());
        assert_eq!(factory.connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_market_yields_no_client() {
        let methods = InMemoryPaymentMethods::new();
        methods
            .insert(PaymentMethod::new(
                Uuid::new_v4(),
                CHECKOUT_SYSTEM_KEYWORD,
                "en-US",
            ))
            .await;

        let factory = Arc::new(CountingFactory::default());
        let accessor = GatewayAccessor::new(
            Arc::new(methods),
            factory.clone(),
            "en-US",
            MarketId::new("US"),
        );

        assert!(accessor.get().await.is_none());
        assert_eq!(factory.connects.load(Ordering::SeqCst), 0);
    }
}
