//! Payment-method records from the platform's payment configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A configured payment method for one content language.
///
/// Payment methods carry a free-form parameter table; gateway integrations
/// store their per-market connection blobs there under prefixed keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub payment_method_id: Uuid,
    /// Stable keyword identifying the integration, e.g. "KlarnaCheckout".
    pub system_keyword: String,
    /// BCP 47 language tag this record is configured for.
    pub language: String,
    pub is_active: bool,
    parameters: HashMap<String, String>,
}

impl PaymentMethod {
    /// Create a payment-method record with no parameters.
    #[must_use]
    pub fn new(
        payment_method_id: Uuid,
        system_keyword: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            payment_method_id,
            system_keyword: system_keyword.into(),
            language: language.into(),
            is_active: true,
            parameters: HashMap::new(),
        }
    }

    /// Read a configuration parameter.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Write a configuration parameter.
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }
}
