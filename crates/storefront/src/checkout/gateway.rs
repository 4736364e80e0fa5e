//! Ports onto the payment gateway.

use std::sync::Arc;

use async_trait::async_trait;

use crate::klarna::types::{CheckoutOrder, CheckoutOrderUpdate};
use crate::klarna::{CheckoutClient, ConnectionConfiguration, KlarnaError};

/// The gateway's checkout order resource.
///
/// Implemented by [`CheckoutClient`] over REST; tests substitute scripted
/// fakes.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a new checkout order and return the gateway's view of it.
    async fn create_order(&self, order: &CheckoutOrder) -> Result<CheckoutOrder, KlarnaError>;

    /// Fetch the current snapshot of an order by id.
    async fn fetch_order(&self, order_id: &str) -> Result<CheckoutOrder, KlarnaError>;

    /// Apply a partial update and return the updated snapshot.
    async fn update_order(
        &self,
        order_id: &str,
        update: &CheckoutOrderUpdate,
    ) -> Result<CheckoutOrder, KlarnaError>;
}

/// Builds gateway connections from resolved connection configurations.
pub trait ConnectionFactory: Send + Sync {
    /// Construct an authenticated connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot produce a client
    /// (e.g. an invalid API URL).
    fn connect(
        &self,
        configuration: &ConnectionConfiguration,
    ) -> Result<Arc<dyn CheckoutGateway>, KlarnaError>;
}

/// Default factory producing REST clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct RestConnectionFactory;

impl ConnectionFactory for RestConnectionFactory {
    fn connect(
        &self,
        configuration: &ConnectionConfiguration,
    ) -> Result<Arc<dyn CheckoutGateway>, KlarnaError> {
        let client = CheckoutClient::new(configuration)?;
        Ok(Arc::new(client))
    }
}
