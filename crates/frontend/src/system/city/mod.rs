pub mod api;
pub mod state;

pub use contracts::domain::city::{make_city_key, parse_city_key, ParsedCityKey};
pub use state::{CityState, SELECTED_CITY_KEY};
