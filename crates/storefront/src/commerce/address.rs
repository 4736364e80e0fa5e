//! Order addresses as the commerce platform stores them.

use serde::{Deserialize, Serialize};

/// A shipping or billing address attached to a cart or purchase order.
///
/// Country codes are stored in ISO 3166-1 alpha-3 form; region name and
/// code are free-form strings validated against the platform's country
/// configuration elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub region_name: Option<String>,
    pub region_code: Option<String>,
    /// ISO 3166-1 alpha-3 country code.
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub daytime_phone: Option<String>,
    pub evening_phone: Option<String>,
}
