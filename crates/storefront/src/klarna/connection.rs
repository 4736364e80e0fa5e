//! Per-market connection configuration for the Klarna Checkout API.

use driftwood_core::MarketId;
use secrecy::SecretString;
use serde::Deserialize;

use crate::commerce::PaymentMethod;

use super::MARKET_CONFIGURATION_SUFFIX;

/// Connection settings for one market's Klarna Checkout account.
///
/// Stored as a JSON blob on the payment-method record under
/// `"{market}_KlarnaCheckoutConfiguration"`. A missing or malformed blob
/// resolves to the default (unconfigured) value, never an error.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ConnectionConfiguration {
    /// API username (merchant id).
    pub username: String,
    /// API password.
    pub password: SecretString,
    /// Base API URL, e.g. `https://api.playground.klarna.com`.
    pub api_url: String,
}

impl Default for ConnectionConfiguration {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new().into(),
            api_url: String::new(),
        }
    }
}

impl std::fmt::Debug for ConnectionConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfiguration")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ConnectionConfiguration {
    /// Read the configuration for a market from the payment method's
    /// parameter blob.
    #[must_use]
    pub fn for_market(method: &PaymentMethod, market: &MarketId) -> Self {
        let key = format!("{market}_{MARKET_CONFIGURATION_SUFFIX}");
        let Some(raw) = method.parameter(&key) else {
            return Self::default();
        };

        match serde_json::from_str(raw) {
            Ok(configuration) => configuration,
            Err(error) => {
                tracing::debug!(
                    %error,
                    market = %market,
                    "unreadable Klarna connection blob, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Whether the configuration can produce an authenticated client.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.api_url.is_empty()
    }
}
