//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Home page
//! GET  /health              - Health check (registered in main)
//!
//! # Checkout
//! GET  /order-confirmation  - Order confirmation page; looks up the
//!                             order by ?orderNumber= or ?trackingNumber=,
//!                             or renders a synthetic order in editor
//!                             preview mode
//! ```

pub mod confirmation;
pub mod home;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/order-confirmation", get(confirmation::show))
}
