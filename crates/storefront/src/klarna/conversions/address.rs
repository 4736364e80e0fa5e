//! Address conversion between order addresses and the gateway schema.

use driftwood_core::{CountryCode, region_code, region_name};

use crate::commerce::OrderAddress;
use crate::klarna::types::Address;

/// Map an order address to the gateway's address schema.
///
/// The region is only populated when both the country and a region name
/// are present and the name resolves in that country's region table;
/// unknown region names map to no region. The phone prefers the daytime
/// number and falls back to the evening number.
#[must_use]
pub fn checkout_address(address: &OrderAddress) -> Address {
    let country = address
        .country_code
        .as_deref()
        .and_then(CountryCode::from_alpha3);

    let region = match (country, address.region_name.as_deref()) {
        (Some(country), Some(name)) => region_code(country, name).map(str::to_string),
        _ => None,
    };

    Address {
        given_name: address.first_name.clone(),
        family_name: address.last_name.clone(),
        street_address: address.line1.clone(),
        street_address2: address.line2.clone(),
        postal_code: address.postal_code.clone(),
        city: address.city.clone(),
        region,
        country: country.map(|c| c.alpha2().to_string()),
        email: address.email.clone(),
        phone: address
            .daytime_phone
            .clone()
            .or_else(|| address.evening_phone.clone()),
    }
}

/// Reconstruct an order address from a gateway address.
///
/// The synthesized id concatenates street line 1, street line 2 and city
/// in that order, without normalization. It is not unique across carts
/// and is a display/debug key only, never a lookup key.
#[must_use]
pub fn order_address(address: &Address) -> OrderAddress {
    let country = address.country.as_deref().and_then(CountryCode::from_alpha2);

    let region = match (country, address.region.as_deref()) {
        (Some(country), Some(code)) if !code.is_empty() => {
            region_name(country, code).map(str::to_string)
        }
        _ => None,
    };

    OrderAddress {
        id: format!(
            "{}{}{}",
            address.street_address,
            address.street_address2.as_deref().unwrap_or_default(),
            address.city
        ),
        first_name: address.given_name.clone(),
        last_name: address.family_name.clone(),
        line1: address.street_address.clone(),
        line2: address.street_address2.clone(),
        city: address.city.clone(),
        postal_code: address.postal_code.clone(),
        // Both fields receive the display name resolved from the region
        // code, matching how the platform's address book stores regions.
        region_name: region.clone(),
        region_code: region,
        country_code: country.map(|c| c.alpha3().to_string()),
        email: address.email.clone(),
        daytime_phone: address.phone.clone(),
        evening_phone: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host_address() -> OrderAddress {
        OrderAddress {
            id: "billing".to_string(),
            first_name: "Avery".to_string(),
            last_name: "Lindqvist".to_string(),
            line1: "310 Harbor Ave".to_string(),
            line2: Some("Apt 4".to_string()),
            city: "Seattle".to_string(),
            postal_code: "98116".to_string(),
            region_name: Some("Washington".to_string()),
            region_code: Some("WA".to_string()),
            country_code: Some("USA".to_string()),
            email: Some("avery@example.com".to_string()),
            daytime_phone: Some("+12065550147".to_string()),
            evening_phone: Some("+12065550199".to_string()),
        }
    }

    #[test]
    fn test_checkout_address_maps_fields() {
        let mapped = checkout_address(&host_address());

        assert_eq!(mapped.given_name, "Avery");
        assert_eq!(mapped.family_name, "Lindqvist");
        assert_eq!(mapped.street_address, "310 Harbor Ave");
        assert_eq!(mapped.street_address2.as_deref(), Some("Apt 4"));
        assert_eq!(mapped.city, "Seattle");
        assert_eq!(mapped.postal_code, "98116");
        assert_eq!(mapped.region.as_deref(), Some("WA"));
        assert_eq!(mapped.country.as_deref(), Some("US"));
        assert_eq!(mapped.email.as_deref(), Some("avery@example.com"));
    }

    #[test]
    fn test_phone_prefers_daytime_then_evening() {
        let mut address = host_address();
        assert_eq!(
            checkout_address(&address).phone.as_deref(),
            Some("+12065550147")
        );

        address.daytime_phone = None;
        assert_eq!(
            checkout_address(&address).phone.as_deref(),
            Some("+12065550199")
        );

        address.evening_phone = None;
        assert_eq!(checkout_address(&address).phone, None);
    }

    #[test]
    fn test_unknown_region_maps_to_empty_region() {
        let mut address = host_address();
        address.region_name = Some("Atlantis".to_string());
        assert_eq!(checkout_address(&address).region, None);
    }

    #[test]
    fn test_region_requires_country() {
        let mut address = host_address();
        address.country_code = None;
        let mapped = checkout_address(&address);
        assert_eq!(mapped.region, None);
        assert_eq!(mapped.country, None);
    }

    #[test]
    fn test_round_trip_preserves_identity_fields() {
        let original = host_address();
        let restored = order_address(&checkout_address(&original));

        assert_eq!(restored.first_name, original.first_name);
        assert_eq!(restored.last_name, original.last_name);
        assert_eq!(restored.line1, original.line1);
        assert_eq!(restored.line2, original.line2);
        assert_eq!(restored.city, original.city);
        assert_eq!(restored.postal_code, original.postal_code);
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.country_code, original.country_code);
        assert_eq!(restored.region_name.as_deref(), Some("Washington"));
    }

    #[test]
    fn test_country_round_trips_for_every_supported_code() {
        for country in CountryCode::ALL.iter().copied() {
            let mut address = host_address();
            address.country_code = Some(country.alpha3().to_string());
            address.region_name = None;

            let mapped = checkout_address(&address);
            assert_eq!(mapped.country.as_deref(), Some(country.alpha2()));

            let restored = order_address(&mapped);
            assert_eq!(restored.country_code.as_deref(), Some(country.alpha3()));
        }
    }

    #[test]
    fn test_synthesized_id_is_order_sensitive_concatenation() {
        let mapped = checkout_address(&host_address());
        let restored = order_address(&mapped);
        assert_eq!(restored.id, "310 Harbor AveApt 4Seattle");

        let mut no_second_line = mapped;
        no_second_line.street_address2 = None;
        assert_eq!(order_address(&no_second_line).id, "310 Harbor AveSeattle");
    }
}
