//! Integration tests for confirmation-page order lookup.
//!
//! The confirmation page resolves exactly one order per request; these
//! tests pin the lookup priority (editor preview, then order number,
//! then tracking number) against the in-memory order repository.

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use driftwood_core::{CountryCode, CurrencyCode, MarketId, OrderGroupId, OrderNumber};
use driftwood_storefront::commerce::memory::InMemoryOrderRepository;
use driftwood_storefront::commerce::{LineItem, Market, PurchaseOrder};
use driftwood_storefront::routes::confirmation::{ConfirmationParams, resolve_order};

fn purchase_order(number: i32, tracking: &str) -> PurchaseOrder {
    let mut order = PurchaseOrder::preview();
    order.order_group_id = OrderGroupId::new(number);
    order.order_number = OrderNumber::new(number);
    order.tracking_number = tracking.to_string();
    order.customer_id = Uuid::new_v4();
    order.market = Market {
        id: MarketId::new("US"),
        countries: vec![CountryCode::US],
        default_language: "en-US".to_string(),
    };
    order.currency = CurrencyCode::USD;
    order.line_items = vec![LineItem {
        code: "TOTE-CANVAS".to_string(),
        display_name: "Canvas Tote".to_string(),
        quantity: 1,
        placed_price: dec!(25.00),
        tax_rate: dec!(0),
    }];
    order
}

async fn repository_with_orders() -> Arc<InMemoryOrderRepository> {
    let repository = Arc::new(InMemoryOrderRepository::new());
    repository
        .insert_purchase_order(purchase_order(1042, "TRACK-1042"))
        .await;
    repository
        .insert_purchase_order(purchase_order(2001, "TRACK-2001"))
        .await;
    repository
}

fn params(
    order_number: Option<i32>,
    tracking_number: Option<&str>,
    preview: bool,
) -> ConfirmationParams {
    ConfirmationParams {
        order_number,
        tracking_number: tracking_number.map(str::to_string),
        preview,
        notification_message: None,
    }
}

#[tokio::test]
async fn test_preview_wins_over_both_lookup_keys() {
    let repository = repository_with_orders().await;

    let order = resolve_order(
        repository.as_ref(),
        &params(Some(1042), Some("TRACK-2001"), true),
    )
    .await
    .expect("resolve")
    .expect("preview order");

    // The synthetic preview order, not either stored order.
    assert_eq!(order.tracking_number, "PREVIEW");
    assert_eq!(order.order_number, OrderNumber::new(0));
}

#[tokio::test]
async fn test_order_number_wins_over_tracking_number() {
    let repository = repository_with_orders().await;

    let order = resolve_order(
        repository.as_ref(),
        &params(Some(1042), Some("TRACK-2001"), false),
    )
    .await
    .expect("resolve")
    .expect("order");

    assert_eq!(order.order_number, OrderNumber::new(1042));
    assert_eq!(order.tracking_number, "TRACK-1042");
}

#[tokio::test]
async fn test_tracking_number_is_used_when_no_order_number() {
    let repository = repository_with_orders().await;

    let order = resolve_order(
        repository.as_ref(),
        &params(None, Some("TRACK-2001"), false),
    )
    .await
    .expect("resolve")
    .expect("order");

    assert_eq!(order.order_number, OrderNumber::new(2001));
}

#[tokio::test]
async fn test_no_lookup_key_resolves_nothing() {
    let repository = repository_with_orders().await;

    let order = resolve_order(repository.as_ref(), &params(None, None, false))
        .await
        .expect("resolve");
    assert!(order.is_none());

    let order = resolve_order(repository.as_ref(), &params(None, Some(""), false))
        .await
        .expect("resolve");
    assert!(order.is_none());
}

#[tokio::test]
async fn test_unknown_keys_resolve_nothing() {
    let repository = repository_with_orders().await;

    let order = resolve_order(repository.as_ref(), &params(Some(9999), None, false))
        .await
        .expect("resolve");
    assert!(order.is_none());

    let order = resolve_order(
        repository.as_ref(),
        &params(None, Some("TRACK-MISSING"), false),
    )
    .await
    .expect("resolve");
    assert!(order.is_none());
}
