//! Integration tests for Driftwood.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p driftwood-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_sync` - Cart-to-gateway synchronization against a
//!   scripted gateway fake
//! - `confirmation` - Order lookup for the confirmation page
//!
//! All tests run against the in-memory commerce ports; no network or
//! database is required.
