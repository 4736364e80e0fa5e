//! REST client for the Klarna Checkout order resource.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;
use url::Url;

use crate::checkout::gateway::CheckoutGateway;

use super::connection::ConnectionConfiguration;
use super::types::{ApiError, CheckoutOrder, CheckoutOrderUpdate};
use super::KlarnaError;

/// Path of the checkout order collection under the base API URL.
const ORDERS_PATH: &str = "checkout/v3/orders";

/// Client for the Klarna Checkout API.
///
/// Bound to one market's credentials and base URL; requests use HTTP
/// basic auth as the API requires.
#[derive(Clone)]
pub struct CheckoutClient {
    client: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl CheckoutClient {
    /// Create a new client from a resolved connection configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL is not a valid URL.
    pub fn new(configuration: &ConnectionConfiguration) -> Result<Self, KlarnaError> {
        let base_url = Url::parse(&configuration.api_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            username: configuration.username.clone(),
            password: configuration.password.clone(),
        })
    }

    fn endpoint(&self, order_id: Option<&str>) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        match order_id {
            Some(id) => format!("{base}/{ORDERS_PATH}/{id}"),
            None => format!("{base}/{ORDERS_PATH}"),
        }
    }

    /// Read a checkout order from a response, mapping error statuses to
    /// the API's structured error payload.
    async fn read_order(response: reqwest::Response) -> Result<CheckoutOrder, KlarnaError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| ApiError {
                error_code: "HTTP_ERROR".to_string(),
                error_messages: vec![body.chars().take(200).collect()],
                correlation_id: None,
            });
            return Err(KlarnaError::Api {
                status: status.as_u16(),
                error,
            });
        }

        response
            .json::<CheckoutOrder>()
            .await
            .map_err(|e| KlarnaError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CheckoutGateway for CheckoutClient {
    /// Create a new checkout order.
    #[instrument(skip(self, order))]
    async fn create_order(&self, order: &CheckoutOrder) -> Result<CheckoutOrder, KlarnaError> {
        let response = self
            .client
            .post(self.endpoint(None))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(order)
            .send()
            .await?;

        Self::read_order(response).await
    }

    /// Fetch the current snapshot of an order.
    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn fetch_order(&self, order_id: &str) -> Result<CheckoutOrder, KlarnaError> {
        let response = self
            .client
            .get(self.endpoint(Some(order_id)))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .send()
            .await?;

        Self::read_order(response).await
    }

    /// Apply a partial update to an existing order and return the
    /// updated snapshot.
    #[instrument(skip(self, update), fields(order_id = %order_id))]
    async fn update_order(
        &self,
        order_id: &str,
        update: &CheckoutOrderUpdate,
    ) -> Result<CheckoutOrder, KlarnaError> {
        let response = self
            .client
            .post(self.endpoint(Some(order_id)))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(update)
            .send()
            .await?;

        Self::read_order(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(api_url: &str) -> CheckoutClient {
        CheckoutClient::new(&ConnectionConfiguration {
            username: "K123456_abc".to_string(),
            password: "secret".to_string().into(),
            api_url: api_url.to_string(),
        })
        .expect("valid configuration")
    }

    #[test]
    fn test_endpoint_without_order_id() {
        let client = client_for("https://api.playground.klarna.com");
        assert_eq!(
            client.endpoint(None),
            "https://api.playground.klarna.com/checkout/v3/orders"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = client_for("https://api.playground.klarna.com/");
        assert_eq!(
            client.endpoint(Some("abc123")),
            "https://api.playground.klarna.com/checkout/v3/orders/abc123"
        );
    }

    #[test]
    fn test_invalid_api_url_is_rejected() {
        let result = CheckoutClient::new(&ConnectionConfiguration {
            username: "K123456_abc".to_string(),
            password: "secret".to_string().into(),
            api_url: "not a url".to_string(),
        });
        assert!(matches!(result, Err(KlarnaError::Url(_))));
    }
}
