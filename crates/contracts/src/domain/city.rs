use serde::{Deserialize, Serialize};

/// Separator between city name and state abbreviation in a city key.
pub const CITY_KEY_SEPARATOR: char = '-';

// ============================================================================
// Supported city
// ============================================================================

/// A city the backend has event coverage for (`/media/getSupportedCities`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SupportedCity {
    pub city: String,
    pub state: String,
    pub state_abbrev: String,
    pub country_abbrev: String,
    pub tz_name: String,
}

impl SupportedCity {
    /// Selection key of this city, `"{City}-{StateAbbrev}"`.
    pub fn key(&self) -> String {
        make_city_key(self)
    }

    /// Human readable label, e.g. "Portland, OR".
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state_abbrev)
    }
}

// ============================================================================
// City keys
// ============================================================================

/// City and state parts recovered from a city key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCityKey {
    pub city: String,
    pub state: String,
}

/// Builds the composite key used to persist the city selection.
///
/// (City, StateAbbrev) pairs are unique across the supported list, so the key
/// identifies one city.
pub fn make_city_key(city: &SupportedCity) -> String {
    format!("{}{}{}", city.city, CITY_KEY_SEPARATOR, city.state_abbrev)
}

/// Splits a city key back into its parts.
///
/// Returns `None` unless the key has exactly one separator with non-empty text
/// on both sides. A malformed key is simply unresolvable.
pub fn parse_city_key(key: &str) -> Option<ParsedCityKey> {
    let mut parts = key.split(CITY_KEY_SEPARATOR);
    let city = parts.next()?;
    let state = parts.next()?;
    if parts.next().is_some() || city.is_empty() || state.is_empty() {
        return None;
    }
    Some(ParsedCityKey {
        city: city.to_string(),
        state: state.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, state: &str, abbrev: &str) -> SupportedCity {
        SupportedCity {
            city: name.to_string(),
            state: state.to_string(),
            state_abbrev: abbrev.to_string(),
            country_abbrev: "US".to_string(),
            tz_name: "America/Los_Angeles".to_string(),
        }
    }

    #[test]
    fn test_keys_differ_for_distinct_city_state_pairs() {
        let portland_or = city("Portland", "Oregon", "OR");
        let portland_me = city("Portland", "Maine", "ME");
        let seattle = city("Seattle", "Washington", "WA");

        assert_ne!(make_city_key(&portland_or), make_city_key(&portland_me));
        assert_ne!(make_city_key(&portland_or), make_city_key(&seattle));
        assert_eq!(portland_or.key(), "Portland-OR");
    }

    #[test]
    fn test_parse_recovers_city_and_state() {
        let seattle = city("Seattle", "Washington", "WA");
        let parsed = parse_city_key(&make_city_key(&seattle)).unwrap();
        assert_eq!(parsed.city, "Seattle");
        assert_eq!(parsed.state, "WA");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert_eq!(parse_city_key("invalidkey"), None);
        assert_eq!(parse_city_key("a-b-c"), None);
        assert_eq!(parse_city_key("-OR"), None);
        assert_eq!(parse_city_key("Portland-"), None);
        assert_eq!(parse_city_key(""), None);
    }

    #[test]
    fn test_wire_format_uses_pascal_case() {
        let json = r#"{"City":"Portland","State":"Oregon","StateAbbrev":"OR","CountryAbbrev":"US","TzName":"America/Los_Angeles"}"#;
        let parsed: SupportedCity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, city("Portland", "Oregon", "OR"));
        assert_eq!(parsed.display_name(), "Portland, OR");

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["StateAbbrev"], "OR");
        assert_eq!(value["TzName"], "America/Los_Angeles");
    }
}
