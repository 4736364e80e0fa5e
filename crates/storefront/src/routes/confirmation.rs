//! Order confirmation page.
//!
//! Resolves exactly one order per request: editor preview renders a
//! synthetic order, otherwise the order number and then the tracking
//! number are tried against the order repository. When the resolved
//! order was paid through Klarna Checkout, the gateway's confirmation
//! snippet is embedded in the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use driftwood_core::{CurrencyCode, Money, OrderNumber};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::commerce::{CommerceError, OrderRepository, PurchaseOrder};
use crate::error::AppError;
use crate::klarna::{CHECKOUT_SYSTEM_KEYWORD, ORDER_ID_PROPERTY};
use crate::state::AppState;

/// Query parameters for the confirmation page.
///
/// `preview` is set by the editing UI when the page renders inside the
/// editor; it wins over both lookup keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationParams {
    pub order_number: Option<i32>,
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub preview: bool,
    pub notification_message: Option<String>,
}

/// Order line display data for the template.
pub struct OrderItemView {
    pub display_name: String,
    pub quantity: i64,
    pub price: String,
}

/// Order display data for the template.
pub struct OrderView {
    pub order_number: String,
    pub tracking_number: String,
    pub created: String,
    pub total: String,
    pub items: Vec<OrderItemView>,
}

fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    Money::new(amount, currency).to_string()
}

impl From<&PurchaseOrder> for OrderView {
    fn from(order: &PurchaseOrder) -> Self {
        let total = order
            .line_items
            .iter()
            .map(crate::commerce::LineItem::extended_price)
            .sum::<Decimal>();

        Self {
            order_number: order.order_number.to_string(),
            tracking_number: order.tracking_number.clone(),
            created: order.created.format("%Y-%m-%d").to_string(),
            total: format_amount(total, order.currency),
            items: order
                .line_items
                .iter()
                .map(|line| OrderItemView {
                    display_name: line.display_name.clone(),
                    quantity: line.quantity,
                    price: format_amount(line.extended_price(), order.currency),
                })
                .collect(),
        }
    }
}

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation/show.html")]
pub struct ConfirmationTemplate {
    pub order: OrderView,
    pub notification_message: Option<String>,
    pub klarna_html_snippet: Option<String>,
    pub is_klarna_checkout: bool,
}

/// Resolve the order for a confirmation request.
///
/// Priority: editor preview, then order number, then tracking number.
///
/// # Errors
///
/// Returns an error when the order repository fails.
pub async fn resolve_order(
    orders: &dyn OrderRepository,
    params: &ConfirmationParams,
) -> Result<Option<PurchaseOrder>, CommerceError> {
    if params.preview {
        return Ok(Some(PurchaseOrder::preview()));
    }

    if let Some(number) = params.order_number {
        return orders.purchase_order_by_number(OrderNumber::new(number)).await;
    }

    if let Some(tracking) = params.tracking_number.as_deref()
        && !tracking.is_empty()
    {
        return orders.purchase_order_by_tracking(tracking).await;
    }

    Ok(None)
}

/// Display the order confirmation page.
///
/// Orders that cannot be resolved redirect to the start page rather
/// than erroring.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<ConfirmationParams>,
) -> Result<Response, AppError> {
    let Some(order) = resolve_order(state.order_repository().as_ref(), &params).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let mut template = ConfirmationTemplate {
        order: OrderView::from(&order),
        notification_message: params.notification_message.clone(),
        klarna_html_snippet: None,
        is_klarna_checkout: false,
    };

    if let Some(order_id) = klarna_order_id(&state, &order).await? {
        match state.checkout_service().get_order(&order_id).await {
            Ok(snapshot) => {
                template.klarna_html_snippet = snapshot.html_snippet;
                template.is_klarna_checkout = true;
            }
            // Degrade to a plain confirmation when the snapshot cannot
            // be fetched.
            Err(error) => warn!(%error, order_id, "failed to fetch gateway order for confirmation"),
        }
    }

    Ok(template.into_response())
}

/// The gateway order id, when the order's first payment went through
/// Klarna Checkout and an id is stored on the order.
async fn klarna_order_id(
    state: &AppState,
    order: &PurchaseOrder,
) -> Result<Option<String>, AppError> {
    let Some(method) = state
        .payment_methods()
        .by_system_keyword(CHECKOUT_SYSTEM_KEYWORD, &state.config().locale)
        .await?
    else {
        return Ok(None);
    };

    let paid_with_klarna = order
        .first_payment()
        .is_some_and(|payment| payment.payment_method_id == method.payment_method_id);

    let order_id = order.property(ORDER_ID_PROPERTY).unwrap_or_default();
    if paid_with_klarna && !order_id.is_empty() {
        Ok(Some(order_id.to_string()))
    } else {
        Ok(None)
    }
}
