//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_LOCALE` - Content language (default: en-US)
//! - `STOREFRONT_MARKET` - Sales market served by this deployment
//!   (default: US)
//! - `CHECKOUT_TERMS_URL` - Merchant terms page shown in the checkout
//! - `CHECKOUT_CHECKOUT_URL` - Page hosting the checkout snippet
//! - `CHECKOUT_CONFIRMATION_URL` - Confirmation page the gateway
//!   redirects to after purchase
//! - `CHECKOUT_PUSH_URL` - Order-creation push notification endpoint
//! - `SENTRY_DSN` - Sentry error tracking DSN
//!
//! The `CHECKOUT_*_URL` values default to paths under the base URL. Each
//! may carry the `{checkout.order.id}` placeholder, which the gateway
//! substitutes with the assigned order id.

use std::net::{IpAddr, SocketAddr};

use driftwood_core::MarketId;
use thiserror::Error;

use crate::klarna::ORDER_ID_PLACEHOLDER;
use crate::klarna::types::MerchantUrls;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// BCP 47 content language; payment methods are looked up under it
    /// and gateway payloads carry it as the locale
    pub locale: String,
    /// Sales market served by this deployment
    pub market: MarketId,
    /// Merchant callback URLs handed to the gateway
    pub checkout_urls: CheckoutUrls,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Merchant callback URL templates for the gateway.
#[derive(Debug, Clone)]
pub struct CheckoutUrls {
    pub terms: String,
    pub checkout: String,
    pub confirmation: String,
    pub push: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_env("STOREFRONT_BASE_URL")?;
        let locale = get_env_or_default("STOREFRONT_LOCALE", "en-US");
        let market = MarketId::new(get_env_or_default("STOREFRONT_MARKET", "US"));
        let checkout_urls = CheckoutUrls::from_env(&base_url);
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            locale,
            market,
            checkout_urls,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CheckoutUrls {
    fn from_env(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            terms: get_env_or_default("CHECKOUT_TERMS_URL", &format!("{base}/terms")),
            checkout: get_env_or_default(
                "CHECKOUT_CHECKOUT_URL",
                &format!("{base}/checkout?klarna_order_id={ORDER_ID_PLACEHOLDER}"),
            ),
            confirmation: get_env_or_default(
                "CHECKOUT_CONFIRMATION_URL",
                &format!("{base}/order-confirmation?klarna_order_id={ORDER_ID_PLACEHOLDER}"),
            ),
            push: get_env_or_default(
                "CHECKOUT_PUSH_URL",
                &format!("{base}/api/checkout/push?klarna_order_id={ORDER_ID_PLACEHOLDER}"),
            ),
        }
    }

    /// The URLs in the gateway's payload shape.
    #[must_use]
    pub fn merchant_urls(&self) -> MerchantUrls {
        MerchantUrls {
            terms: self.terms.clone(),
            checkout: self.checkout.clone(),
            confirmation: self.confirmation.clone(),
            push: self.push.clone(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
