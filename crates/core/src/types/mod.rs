//! Core types for Driftwood.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod country;
pub mod id;
pub mod money;

pub use country::{CountryCode, region_code, region_name};
pub use id::*;
pub use money::{CurrencyCode, Money};
