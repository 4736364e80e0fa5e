//! Shopping cart aggregate and line items.

use std::collections::HashMap;

use driftwood_core::{CountryCode, CurrencyCode, MarketId, OrderGroupId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales market: the countries it serves and its content language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub id: MarketId,
    /// Countries served by this market; the first one is the market's
    /// purchase country for gateway payloads.
    pub countries: Vec<CountryCode>,
    /// BCP 47 language tag, e.g. "en-US".
    pub default_language: String,
}

impl Market {
    /// The market's primary country, if any country is configured.
    #[must_use]
    pub fn primary_country(&self) -> Option<CountryCode> {
        self.countries.first().copied()
    }
}

/// A single purchasable item in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog reference (SKU).
    pub code: String,
    pub display_name: String,
    pub quantity: i64,
    /// Unit price in major units, tax inclusive.
    pub placed_price: Decimal,
    /// Tax rate as a percentage, e.g. `25` for 25%.
    pub tax_rate: Decimal,
}

impl LineItem {
    /// Extended (unit price x quantity) price in major units.
    #[must_use]
    pub fn extended_price(&self) -> Decimal {
        self.placed_price * Decimal::from(self.quantity)
    }
}

/// In-progress order aggregate owned by the commerce platform.
///
/// Carts carry an extensible string property bag; integrations store their
/// own state there (the Klarna integration keeps the external order id in
/// a single property, so a cart links to at most one gateway order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: OrderGroupId,
    pub customer_id: Uuid,
    /// Cart name within the customer's order group, usually "Default".
    pub name: String,
    pub market: Market,
    pub currency: CurrencyCode,
    pub line_items: Vec<LineItem>,
    pub shipping_address: Option<super::OrderAddress>,
    properties: HashMap<String, String>,
}

impl Cart {
    /// Create an empty cart for a customer in a market.
    #[must_use]
    pub fn new(
        id: OrderGroupId,
        customer_id: Uuid,
        name: impl Into<String>,
        market: Market,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            id,
            customer_id,
            name: name.into(),
            market,
            currency,
            line_items: Vec::new(),
            shipping_address: None,
            properties: HashMap::new(),
        }
    }

    /// Read a property from the cart's property bag.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Write a property to the cart's property bag, replacing any
    /// existing value under the same key.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_market() -> Market {
        Market {
            id: MarketId::new("US"),
            countries: vec![CountryCode::US],
            default_language: "en-US".to_string(),
        }
    }

    #[test]
    fn test_property_bag_holds_one_value_per_key() {
        let mut cart = Cart::new(
            OrderGroupId::new(1),
            Uuid::new_v4(),
            "Default",
            test_market(),
            CurrencyCode::USD,
        );

        assert_eq!(cart.property("ExternalOrderId"), None);
        cart.set_property("ExternalOrderId", "abc");
        cart.set_property("ExternalOrderId", "def");
        assert_eq!(cart.property("ExternalOrderId"), Some("def"));
    }

    #[test]
    fn test_extended_price() {
        let line = LineItem {
            code: "SKU-1".to_string(),
            display_name: "Canvas Tote".to_string(),
            quantity: 3,
            placed_price: dec!(12.50),
            tax_rate: dec!(25),
        };
        assert_eq!(line.extended_price(), dec!(37.50));
    }

    #[test]
    fn test_primary_country_is_first_configured() {
        let market = Market {
            id: MarketId::new("NORDICS"),
            countries: vec![CountryCode::SE, CountryCode::NO, CountryCode::DK],
            default_language: "sv-SE".to_string(),
        };
        assert_eq!(market.primary_country(), Some(CountryCode::SE));
    }
}
