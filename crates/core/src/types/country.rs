//! ISO 3166 country codes and country-scoped region tables.
//!
//! The commerce platform stores alpha-3 country codes on order addresses
//! while the payment gateway speaks alpha-2. Both spellings are derived
//! from the same variant, so the 2 <-> 3 letter conversion is symmetric
//! by construction.

use serde::{Deserialize, Serialize};

/// Countries available to the configured sales markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    US,
    CA,
    GB,
    IE,
    FR,
    DE,
    AT,
    CH,
    NL,
    BE,
    SE,
    NO,
    DK,
    FI,
    ES,
    IT,
    PT,
    PL,
    AU,
    NZ,
}

impl CountryCode {
    /// Every supported country.
    pub const ALL: &[Self] = &[
        Self::US,
        Self::CA,
        Self::GB,
        Self::IE,
        Self::FR,
        Self::DE,
        Self::AT,
        Self::CH,
        Self::NL,
        Self::BE,
        Self::SE,
        Self::NO,
        Self::DK,
        Self::FI,
        Self::ES,
        Self::IT,
        Self::PT,
        Self::PL,
        Self::AU,
        Self::NZ,
    ];

    /// The ISO 3166-1 alpha-2 code.
    #[must_use]
    pub const fn alpha2(self) -> &'static str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
            Self::GB => "GB",
            Self::IE => "IE",
            Self::FR => "FR",
            Self::DE => "DE",
            Self::AT => "AT",
            Self::CH => "CH",
            Self::NL => "NL",
            Self::BE => "BE",
            Self::SE => "SE",
            Self::NO => "NO",
            Self::DK => "DK",
            Self::FI => "FI",
            Self::ES => "ES",
            Self::IT => "IT",
            Self::PT => "PT",
            Self::PL => "PL",
            Self::AU => "AU",
            Self::NZ => "NZ",
        }
    }

    /// The ISO 3166-1 alpha-3 code.
    #[must_use]
    pub const fn alpha3(self) -> &'static str {
        match self {
            Self::US => "USA",
            Self::CA => "CAN",
            Self::GB => "GBR",
            Self::IE => "IRL",
            Self::FR => "FRA",
            Self::DE => "DEU",
            Self::AT => "AUT",
            Self::CH => "CHE",
            Self::NL => "NLD",
            Self::BE => "BEL",
            Self::SE => "SWE",
            Self::NO => "NOR",
            Self::DK => "DNK",
            Self::FI => "FIN",
            Self::ES => "ESP",
            Self::IT => "ITA",
            Self::PT => "PRT",
            Self::PL => "POL",
            Self::AU => "AUS",
            Self::NZ => "NZL",
        }
    }

    /// Parse an alpha-2 code, case-insensitively.
    #[must_use]
    pub fn from_alpha2(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.alpha2().eq_ignore_ascii_case(code))
    }

    /// Parse an alpha-3 code, case-insensitively.
    #[must_use]
    pub fn from_alpha3(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.alpha3().eq_ignore_ascii_case(code))
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alpha2())
    }
}

// (display name, region code) pairs per country. Only countries whose
// gateway address schema carries a region are mapped; lookups for the
// rest return `None`.

const US_REGIONS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

const CA_REGIONS: &[(&str, &str)] = &[
    ("Alberta", "AB"),
    ("British Columbia", "BC"),
    ("Manitoba", "MB"),
    ("New Brunswick", "NB"),
    ("Newfoundland and Labrador", "NL"),
    ("Northwest Territories", "NT"),
    ("Nova Scotia", "NS"),
    ("Nunavut", "NU"),
    ("Ontario", "ON"),
    ("Prince Edward Island", "PE"),
    ("Quebec", "QC"),
    ("Saskatchewan", "SK"),
    ("Yukon", "YT"),
];

const fn region_table(country: CountryCode) -> Option<&'static [(&'static str, &'static str)]> {
    match country {
        CountryCode::US => Some(US_REGIONS),
        CountryCode::CA => Some(CA_REGIONS),
        _ => None,
    }
}

/// Look up the region code for a region display name.
///
/// Accepts the region code itself as input, since address forms carry
/// either form depending on their origin. Unknown names yield `None`.
#[must_use]
pub fn region_code(country: CountryCode, name: &str) -> Option<&'static str> {
    region_table(country)?
        .iter()
        .find(|(n, c)| n.eq_ignore_ascii_case(name) || c.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

/// Look up the display name for a region code.
#[must_use]
pub fn region_name(country: CountryCode, code: &str) -> Option<&'static str> {
    region_table(country)?
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_codes_round_trip_for_every_country() {
        for country in CountryCode::ALL.iter().copied() {
            assert_eq!(CountryCode::from_alpha2(country.alpha2()), Some(country));
            assert_eq!(CountryCode::from_alpha3(country.alpha3()), Some(country));
        }
    }

    #[test]
    fn test_from_alpha3_is_case_insensitive() {
        assert_eq!(CountryCode::from_alpha3("usa"), Some(CountryCode::US));
        assert_eq!(CountryCode::from_alpha3("Swe"), Some(CountryCode::SE));
    }

    #[test]
    fn test_unknown_codes_yield_none() {
        assert_eq!(CountryCode::from_alpha2("ZZ"), None);
        assert_eq!(CountryCode::from_alpha3("ZZZ"), None);
    }

    #[test]
    fn test_region_code_by_name() {
        assert_eq!(region_code(CountryCode::US, "California"), Some("CA"));
        assert_eq!(region_code(CountryCode::US, "new york"), Some("NY"));
        assert_eq!(region_code(CountryCode::CA, "Quebec"), Some("QC"));
    }

    #[test]
    fn test_region_code_accepts_code_input() {
        assert_eq!(region_code(CountryCode::US, "TX"), Some("TX"));
    }

    #[test]
    fn test_region_lookups_are_symmetric() {
        for (name, code) in US_REGIONS {
            assert_eq!(region_code(CountryCode::US, name), Some(*code));
            assert_eq!(region_name(CountryCode::US, code), Some(*name));
        }
    }

    #[test]
    fn test_unknown_region_yields_none() {
        assert_eq!(region_code(CountryCode::US, "Atlantis"), None);
        assert_eq!(region_code(CountryCode::SE, "Stockholm"), None);
    }
}
