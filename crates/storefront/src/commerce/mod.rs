//! Commerce platform model and collaborator ports.
//!
//! # Architecture
//!
//! The storefront does not own cart/order persistence, totals computation,
//! the shipping catalog, the order index, or payment-method records - the
//! commerce platform does. Those concerns are consumed through the narrow
//! trait ports in [`ports`], injected into services at construction.
//!
//! [`memory`] provides in-memory implementations backing the binary and
//! the test suite; a production deployment supplies storage-backed ones.

pub mod address;
pub mod cart;
pub mod memory;
pub mod orders;
pub mod payment;
pub mod ports;
pub mod shipping;

pub use address::OrderAddress;
pub use cart::{Cart, LineItem, Market};
pub use orders::{OrderTotals, Payment, PurchaseOrder};
pub use payment::PaymentMethod;
pub use ports::{
    CartRef, CartSearch, OrderRepository, PaymentMethods, ShippingMethods, TotalsCalculator,
};
pub use shipping::ShippingMethod;

use thiserror::Error;

/// Errors surfaced by commerce platform collaborators.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}
