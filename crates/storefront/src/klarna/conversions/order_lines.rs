//! Cart line items to gateway order lines.

use driftwood_core::{CurrencyCode, Money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::commerce::{Cart, LineItem};
use crate::klarna::types::OrderLine;

/// Build the order lines for a cart, preserving cart iteration order.
///
/// Only item lines are emitted; the gateway computes and injects its own
/// shipping and tax lines.
#[must_use]
pub fn order_lines(cart: &Cart) -> Vec<OrderLine> {
    cart.line_items
        .iter()
        .map(|line| order_line(line, cart.currency))
        .collect()
}

fn order_line(item: &LineItem, currency: CurrencyCode) -> OrderLine {
    let total_amount = Money::new(item.extended_price(), currency).minor_units();
    let tax_rate = rate_minor_units(item.tax_rate);

    OrderLine {
        reference: item.code.clone(),
        name: item.display_name.clone(),
        quantity: item.quantity,
        unit_price: Money::new(item.placed_price, currency).minor_units(),
        tax_rate,
        total_amount,
        total_tax_amount: tax_portion(total_amount, tax_rate),
    }
}

/// Tax rate in the gateway's integer form: percentage x 100.
fn rate_minor_units(rate: Decimal) -> i64 {
    (rate * Decimal::ONE_HUNDRED)
        .round()
        .to_i64()
        .unwrap_or_default()
}

/// Tax portion of a tax-inclusive total:
/// `total_amount - total_amount * 10000 / (10000 + tax_rate)`.
fn tax_portion(total_amount: i64, tax_rate: i64) -> i64 {
    if tax_rate == 0 {
        return 0;
    }
    let divisor = i128::from(10_000 + tax_rate);
    let exclusive = (i128::from(total_amount) * 10_000 + divisor / 2) / divisor;
    total_amount - i64::try_from(exclusive).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commerce::Market;
    use driftwood_core::{CountryCode, MarketId, OrderGroupId};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn cart_with_lines(lines: Vec<LineItem>) -> Cart {
        let mut cart = Cart::new(
            OrderGroupId::new(1),
            Uuid::new_v4(),
            "Default",
            Market {
                id: MarketId::new("US"),
                countries: vec![CountryCode::US],
                default_language: "en-US".to_string(),
            },
            CurrencyCode::USD,
        );
        cart.line_items = lines;
        cart
    }

    fn line(code: &str, quantity: i64, price: Decimal, tax_rate: Decimal) -> LineItem {
        LineItem {
            code: code.to_string(),
            display_name: format!("Item {code}"),
            quantity,
            placed_price: price,
            tax_rate,
        }
    }

    #[test]
    fn test_one_line_per_item_in_cart_order() {
        let cart = cart_with_lines(vec![
            line("SKU-1", 1, dec!(10.00), dec!(0)),
            line("SKU-2", 2, dec!(5.00), dec!(0)),
            line("SKU-3", 1, dec!(1.00), dec!(0)),
        ]);

        let lines = order_lines(&cart);
        assert_eq!(lines.len(), cart.line_items.len());
        let references: Vec<_> = lines.iter().map(|l| l.reference.as_str()).collect();
        assert_eq!(references, ["SKU-1", "SKU-2", "SKU-3"]);
    }

    #[test]
    fn test_amounts_are_minor_units() {
        let cart = cart_with_lines(vec![line("SKU-1", 3, dec!(19.99), dec!(0))]);

        let lines = order_lines(&cart);
        assert_eq!(lines[0].unit_price, 1999);
        assert_eq!(lines[0].total_amount, 5997);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn test_tax_inclusive_amounts() {
        // 125.00 at 25% inclusive: 12500 total, 2500 tax
        let cart = cart_with_lines(vec![line("SKU-1", 1, dec!(125.00), dec!(25))]);

        let lines = order_lines(&cart);
        assert_eq!(lines[0].tax_rate, 2500);
        assert_eq!(lines[0].total_amount, 12500);
        assert_eq!(lines[0].total_tax_amount, 2500);
    }

    #[test]
    fn test_zero_rate_has_zero_tax() {
        let cart = cart_with_lines(vec![line("SKU-1", 2, dec!(7.50), dec!(0))]);

        let lines = order_lines(&cart);
        assert_eq!(lines[0].tax_rate, 0);
        assert_eq!(lines[0].total_tax_amount, 0);
    }

    #[test]
    fn test_empty_cart_maps_to_no_lines() {
        let cart = cart_with_lines(Vec::new());
        assert!(order_lines(&cart).is_empty());
    }
}
