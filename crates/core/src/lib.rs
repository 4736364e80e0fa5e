//! Driftwood Core - Shared types library.
//!
//! This crate provides common types used across all Driftwood components:
//! - `storefront` - Public-facing e-commerce site with Klarna Checkout
//! - `integration-tests` - Cross-component test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no
//! HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money with minor-unit conversion, and
//!   ISO 3166 country/region tables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
