//! Klarna Checkout API client and schema mappings.
//!
//! # Architecture
//!
//! - [`types`] - the checkout order resource's wire schema (snake_case
//!   JSON, amounts as minor-unit integers)
//! - [`client`] - REST client for the order resource, authenticated with
//!   the per-market credentials from [`connection`]
//! - [`connection`] - per-market connection configuration read from the
//!   payment-method parameter blob
//! - [`conversions`] - field mappings between the commerce platform's
//!   address/line-item schemas and the gateway's
//!
//! The client is consumed through the `CheckoutGateway` port in the
//! `checkout` module; nothing outside that module drives HTTP directly.

pub mod client;
pub mod connection;
pub mod conversions;
pub mod types;

pub use client::CheckoutClient;
pub use connection::ConnectionConfiguration;

use thiserror::Error;

/// System keyword the Klarna Checkout payment method is registered under.
pub const CHECKOUT_SYSTEM_KEYWORD: &str = "KlarnaCheckout";

/// Cart/order property holding the id Klarna assigned to the checkout order.
pub const ORDER_ID_PROPERTY: &str = "KlarnaCheckoutOrderId";

/// Suffix of the payment-method parameter carrying the serialized
/// connection configuration; the full key is `"{market}_{suffix}"`.
pub const MARKET_CONFIGURATION_SUFFIX: &str = "KlarnaCheckoutConfiguration";

/// Placeholder Klarna substitutes with the checkout order id in merchant
/// callback URLs.
pub const ORDER_ID_PLACEHOLDER: &str = "{checkout.order.id}";

/// Errors that can occur when interacting with the Klarna Checkout API.
#[derive(Debug, Error)]
pub enum KlarnaError {
    /// HTTP request failed before a response was produced.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error response.
    #[error("API error: {status} - {error}")]
    Api { status: u16, error: types::ApiError },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured API URL is not a valid URL.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// No usable Klarna Checkout client for the current language.
    #[error("no Klarna Checkout payment method is configured")]
    NotConfigured,
}
