use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::city::SupportedCity;

/// Date format used by every event endpoint.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default `FilterMode` sent by the calendar.
pub const DEFAULT_FILTER_MODE: &str = "all";

// ============================================================================
// Age range
// ============================================================================

/// Age restriction of a show, serialized as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AgeRange {
    AllAges,
    EighteenPlus,
    TwentyOnePlus,
    #[default]
    Unknown,
}

impl AgeRange {
    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::AllAges => "All Ages",
            AgeRange::EighteenPlus => "18+",
            AgeRange::TwentyOnePlus => "21+",
            AgeRange::Unknown => "Unknown",
        }
    }
}

impl From<AgeRange> for u8 {
    fn from(value: AgeRange) -> Self {
        match value {
            AgeRange::AllAges => 0,
            AgeRange::EighteenPlus => 1,
            AgeRange::TwentyOnePlus => 2,
            AgeRange::Unknown => 3,
        }
    }
}

impl TryFrom<u8> for AgeRange {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AgeRange::AllAges),
            1 => Ok(AgeRange::EighteenPlus),
            2 => Ok(AgeRange::TwentyOnePlus),
            3 => Ok(AgeRange::Unknown),
            other => Err(format!("invalid age range code: {}", other)),
        }
    }
}

// ============================================================================
// Venues and festivals
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Venue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<SupportedCity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Festival {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

// ============================================================================
// Bandcamp
// ============================================================================

// The backend has emitted both snake_case and PascalCase names for these,
// so both are accepted on input.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandcampTrack {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandcampAlbum {
    #[serde(default, alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, alias = "Slug", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, alias = "Tracks", skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<BandcampTrack>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandcampData {
    #[serde(default, alias = "ArtistName", skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(default, alias = "Albums")]
    pub albums: Option<Vec<BandcampAlbum>>,
}

// ============================================================================
// Artists
// ============================================================================

/// Full artist record attached to calendar events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventArtistInfo {
    pub artist_id: i64,
    pub artist_name: String,
    pub spotify_artist_id: String,
    #[serde(default)]
    pub top_track_ids: Vec<String>,
    #[serde(default)]
    pub preview_urls: Vec<String>,
    pub popularity: i64,
    #[serde(default)]
    pub genres: Vec<String>,
    pub num_matches: i64,
    #[serde(default)]
    pub possible_matches: Vec<Map<String, Value>>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub instagram_handle: String,
    #[serde(default)]
    pub bandcamp_artist_slug: String,
    #[serde(default)]
    pub bandcamp_data: BandcampData,
}

/// Artist as sent when submitting a show.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShowArtistInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<i64>,
    pub artist_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_artist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_track_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_matches: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandcamp_artist_slug: Option<String>,
    #[serde(rename = "BandcampURL", default, skip_serializing_if = "Option::is_none")]
    pub bandcamp_url: Option<String>,
}

/// Artist reference inside a user submitted event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventArtistRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<i64>,
    pub artist_name: String,
}

// ============================================================================
// Shows
// ============================================================================

/// Show payload used by the event submission form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FullShow {
    pub date: String,
    pub price_low: f64,
    pub price_high: f64,
    pub age_range: AgeRange,
    pub venue: Venue,
    pub urls: Vec<String>,
    pub img_url: String,
    pub artists: Vec<ShowArtistInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival: Option<Festival>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Show as returned to the calendar, with full artist info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalendarFullShow {
    pub date: String,
    pub price_low: f64,
    pub price_high: f64,
    pub age_range: AgeRange,
    pub venue: Venue,
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub artists: Vec<EventArtistInfo>,
    #[serde(default)]
    pub festival: Festival,
    #[serde(default)]
    pub status: String,
}

/// Event submitted by a user (backend `UserAddedEvent`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAddedEvent {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_high: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<i64>,
    pub venue_name: String,
    pub city: SupportedCity,
    pub artists: Vec<EventArtistRef>,
}

// ============================================================================
// Calendar filters and requests
// ============================================================================

/// Filter sent to the events endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventsFilter {
    pub city: SupportedCity,
    pub start_date: String,
    pub end_date: String,
    pub spotify_genres: Vec<String>,
    pub broad_genres: Vec<String>,
    pub venues: Vec<String>,
    pub festivals: Vec<Festival>,
    pub these_festivals: bool,
    pub min_shows: u32,
    pub total_venues: u32,
    pub filter_mode: String,
}

impl EventsFilter {
    /// Unrestricted filter covering `days` days from `start` (inclusive of
    /// the start day) in the given city.
    pub fn for_city(city: SupportedCity, start: NaiveDate, days: u32) -> Self {
        let end = start + Duration::days(i64::from(days));
        Self {
            city,
            start_date: start.format(EVENT_DATE_FORMAT).to_string(),
            end_date: end.format(EVENT_DATE_FORMAT).to_string(),
            spotify_genres: Vec::new(),
            broad_genres: Vec::new(),
            venues: Vec::new(),
            festivals: Vec::new(),
            these_festivals: false,
            min_shows: 0,
            total_venues: 0,
            filter_mode: DEFAULT_FILTER_MODE.to_string(),
        }
    }
}

/// Payload of the filter options lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFiltersRequest {
    pub start_date: String,
    pub end_date: String,
    pub city: SupportedCity,
    pub min_shows: u32,
}

impl GetFiltersRequest {
    pub fn from_filter(filter: &EventsFilter) -> Self {
        Self {
            start_date: filter.start_date.clone(),
            end_date: filter.end_date.clone(),
            city: filter.city.clone(),
            min_shows: filter.min_shows,
        }
    }
}

/// Paged events lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetEventsRequest {
    pub filter: EventsFilter,
    pub result_cnt: u32,
    pub page: u32,
}

impl GetEventsRequest {
    pub fn first_page(filter: EventsFilter, result_cnt: u32) -> Self {
        Self {
            filter,
            result_cnt,
            page: 0,
        }
    }

    pub fn next_page(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            result_cnt: self.result_cnt,
            page: self.page + 1,
        }
    }
}
