//! Completed purchase orders and order totals.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use driftwood_core::{CurrencyCode, MarketId, OrderGroupId, OrderNumber};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::{LineItem, Market};

/// A payment recorded against a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_method_id: Uuid,
    /// Paid amount in major units.
    pub amount: Decimal,
}

/// Totals computed by the platform's totals calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Grand total in major units, tax inclusive.
    pub total: Decimal,
    /// Tax portion of the total in major units.
    pub tax_total: Decimal,
}

/// A completed order created from a cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub order_group_id: OrderGroupId,
    pub order_number: OrderNumber,
    pub tracking_number: String,
    pub customer_id: Uuid,
    pub market: Market,
    pub currency: CurrencyCode,
    pub created: DateTime<Utc>,
    pub line_items: Vec<LineItem>,
    pub payments: Vec<Payment>,
    properties: HashMap<String, String>,
}

impl PurchaseOrder {
    /// The order's first recorded payment, if any.
    #[must_use]
    pub fn first_payment(&self) -> Option<&Payment> {
        self.payments.first()
    }

    /// Read a property from the order's property bag.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Write a property to the order's property bag.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Fabricate a synthetic order for editor preview.
    ///
    /// Preview rendering never queries the order index; editors see a
    /// stable sample order instead.
    #[must_use]
    pub fn preview() -> Self {
        use driftwood_core::CountryCode;

        Self {
            order_group_id: OrderGroupId::new(0),
            order_number: OrderNumber::new(0),
            tracking_number: "PREVIEW".to_string(),
            customer_id: Uuid::nil(),
            market: Market {
                id: MarketId::new("US"),
                countries: vec![CountryCode::US],
                default_language: "en-US".to_string(),
            },
            currency: CurrencyCode::USD,
            created: DateTime::<Utc>::UNIX_EPOCH,
            line_items: vec![LineItem {
                code: "SAMPLE-1".to_string(),
                display_name: "Sample item".to_string(),
                quantity: 1,
                placed_price: Decimal::new(1999, 2),
                tax_rate: Decimal::ZERO,
            }],
            payments: Vec::new(),
            properties: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_order_is_synthetic() {
        let order = PurchaseOrder::preview();
        assert_eq!(order.order_number, OrderNumber::new(0));
        assert_eq!(order.tracking_number, "PREVIEW");
        assert!(order.payments.is_empty());
        assert!(!order.line_items.is_empty());
    }

    #[test]
    fn test_first_payment() {
        let mut order = PurchaseOrder::preview();
        assert!(order.first_payment().is_none());

        let first = Uuid::new_v4();
        order.payments.push(Payment {
            payment_method_id: first,
            amount: Decimal::ONE,
        });
        order.payments.push(Payment {
            payment_method_id: Uuid::new_v4(),
            amount: Decimal::TWO,
        });
        assert_eq!(
            order.first_payment().map(|p| p.payment_method_id),
            Some(first)
        );
    }
}
