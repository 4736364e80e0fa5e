//! Shipping methods from the platform's shipping catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable shipping method configured for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: Uuid,
    pub display_name: String,
    /// Base price in major units.
    pub base_price: Decimal,
    pub description: String,
    /// Whether this method is the market's preselected default.
    pub is_default: bool,
}
