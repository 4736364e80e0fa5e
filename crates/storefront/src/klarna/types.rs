//! Klarna Checkout v3 wire schema.
//!
//! Field names follow the API's snake_case JSON; monetary amounts are
//! integers in the purchase currency's minor unit, and tax rates are
//! percentages multiplied by 100 (`2500` = 25%).

use driftwood_core::{CountryCode, CurrencyCode};
use serde::{Deserialize, Serialize};

/// The checkout order resource.
///
/// The same shape serves as creation payload (no `order_id`) and as the
/// snapshot the gateway returns; `order_id` is assigned on creation and
/// identifies the order from then on, while the content is replaced on
/// every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_country: Option<CountryCode>,
    pub purchase_currency: CurrencyCode,
    pub locale: String,
    /// Total order amount, tax inclusive, in minor units.
    pub order_amount: i64,
    /// Tax portion of the order amount, in minor units.
    pub order_tax_amount: i64,
    pub order_lines: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_options: Vec<ShippingOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_urls: Option<MerchantUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Provider-rendered checkout/confirmation UI fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_snippet: Option<String>,
}

/// Partial-update payload for an existing checkout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOrderUpdate {
    pub order_amount: i64,
    pub order_tax_amount: i64,
    pub order_lines: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_options: Vec<ShippingOption>,
}

/// One purchasable item entry within an order payload.
///
/// Shipping and tax-only lines are never sent; the gateway computes and
/// injects its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Merchant item reference (SKU).
    pub reference: String,
    pub name: String,
    pub quantity: i64,
    /// Unit price in minor units, tax inclusive.
    pub unit_price: i64,
    /// Tax rate as percentage x 100.
    pub tax_rate: i64,
    /// `unit_price` x `quantity`, in minor units.
    pub total_amount: i64,
    /// Tax portion of `total_amount`, in minor units.
    pub total_tax_amount: i64,
}

/// A selectable shipping option offered in the checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub name: String,
    /// Price in minor units.
    pub price: i64,
    /// Tax amount in minor units.
    pub tax_amount: i64,
    /// Tax rate as percentage x 100.
    pub tax_rate: i64,
    pub description: String,
    pub preselected: bool,
}

/// Merchant endpoints the gateway redirects to or calls back.
///
/// Each URL may carry [`super::ORDER_ID_PLACEHOLDER`], which the gateway
/// substitutes with the assigned order id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantUrls {
    /// Merchant terms and conditions page.
    pub terms: String,
    /// Page hosting the checkout snippet, for returning customers.
    pub checkout: String,
    /// Confirmation page shown after the purchase completes.
    pub confirmation: String,
    /// Server-to-server notification that the order was created.
    pub push: String,
}

/// An address in the gateway's schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub given_name: String,
    pub family_name: String,
    pub street_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    pub postal_code: String,
    pub city: String,
    /// State or province code, where the country has regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Structured error payload returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error_code: String,
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error_code)?;
        if !self.error_messages.is_empty() {
            write!(f, ": {}", self.error_messages.join("; "))?;
        }
        if let Some(correlation_id) = &self.correlation_id {
            write!(f, " (correlation id {correlation_id})")?;
        }
        Ok(())
    }
}
