use std::sync::Arc;

use contracts::domain::city::{make_city_key, SupportedCity};
use leptos::prelude::*;

use super::api;
use crate::shared::http::ApiClient;
use crate::shared::storage::KeyValueStore;

/// Local storage key holding the last selected city key.
pub const SELECTED_CITY_KEY: &str = "nearhear-selected-city";

const FETCH_FALLBACK_ERROR: &str = "Failed to load cities";

/// Pick the city selected on first load: the preferred one if the backend
/// lists it, else the first entry.
pub fn default_city<'a>(cities: &'a [SupportedCity], preferred: &str) -> Option<&'a SupportedCity> {
    cities
        .iter()
        .find(|city| city.city.eq_ignore_ascii_case(preferred))
        .or_else(|| cities.first())
}

/// Supported cities and the persisted selection.
///
/// The list is loaded once per session and never invalidated. The selection
/// is stored as a city key and survives reloads.
#[derive(Clone)]
pub struct CityState {
    supported_cities: RwSignal<Vec<SupportedCity>>,
    selected_city_key: RwSignal<Option<String>>,
    is_loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    preferred_city: String,
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
}

impl CityState {
    pub fn new(api: ApiClient, store: Arc<dyn KeyValueStore>, preferred_city: impl Into<String>) -> Self {
        let stored_key = store.get(SELECTED_CITY_KEY);
        Self {
            supported_cities: RwSignal::new(Vec::new()),
            selected_city_key: RwSignal::new(stored_key),
            is_loading: RwSignal::new(false),
            error: RwSignal::new(None),
            preferred_city: preferred_city.into(),
            api,
            store,
        }
    }

    pub fn supported_cities(&self) -> Vec<SupportedCity> {
        self.supported_cities.get()
    }

    pub fn selected_city_key(&self) -> Option<String> {
        self.selected_city_key.get()
    }

    pub fn selected_city_key_untracked(&self) -> Option<String> {
        self.selected_city_key.get_untracked()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// City matching the stored key. `None` while the list is not loaded or
    /// when the key matches nothing.
    pub fn selected_city(&self) -> Option<SupportedCity> {
        let key = self.selected_city_key.get()?;
        self.supported_cities
            .with(|cities| cities.iter().find(|city| make_city_key(city) == key).cloned())
    }

    pub fn selected_city_signal(&self) -> Signal<Option<SupportedCity>> {
        let this = self.clone();
        Signal::derive(move || this.selected_city())
    }

    /// Load the supported list unless it is already loaded or loading.
    /// Failures land in [`CityState::error`] and are not returned.
    pub async fn fetch_supported_cities(&self) {
        if !self.supported_cities.with_untracked(Vec::is_empty) {
            log::debug!("[city] cities already loaded");
            return;
        }
        if self.is_loading.get_untracked() {
            log::debug!("[city] fetch already in flight");
            return;
        }

        self.is_loading.set(true);
        self.error.set(None);

        match api::fetch_supported_cities(&self.api).await {
            Ok(cities) => {
                log::debug!("[city] fetched {} cities", cities.len());
                let default = if self.selected_city_key.get_untracked().is_none() {
                    default_city(&cities, &self.preferred_city).cloned()
                } else {
                    None
                };
                self.supported_cities.set(cities);
                if let Some(city) = default {
                    log::debug!("[city] no city selected, defaulting to {}", city.city);
                    self.select_city(&city);
                }
            }
            Err(err) => {
                log::error!("[city] failed to fetch supported cities: {}", err);
                let message = err.to_string();
                self.error.set(Some(if message.is_empty() {
                    FETCH_FALLBACK_ERROR.to_string()
                } else {
                    message
                }));
            }
        }

        self.is_loading.set(false);
    }

    pub fn select_city(&self, city: &SupportedCity) {
        let key = make_city_key(city);
        self.store.set(SELECTED_CITY_KEY, &key);
        self.selected_city_key.set(Some(key));
    }

    /// Select by key, as produced by a `<select>` bound to city keys.
    pub fn select_city_key(&self, key: &str) {
        let city = self
            .supported_cities
            .with_untracked(|cities| cities.iter().find(|city| make_city_key(city) == key).cloned());
        match city {
            Some(city) => self.select_city(&city),
            None => log::warn!("[city] ignoring unknown city key '{}'", key),
        }
    }

    pub fn clear_city(&self) {
        self.selected_city_key.set(None);
        self.store.remove(SELECTED_CITY_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{MemoryStore, ScriptedTransport};
    use futures::executor::block_on;

    const SEATTLE: &str = r#"{"City":"Seattle","State":"Washington","StateAbbrev":"WA","CountryAbbrev":"US","TzName":"America/Los_Angeles"}"#;
    const PORTLAND: &str = r#"{"City":"Portland","State":"Oregon","StateAbbrev":"OR","CountryAbbrev":"US","TzName":"America/Los_Angeles"}"#;

    struct Fixture {
        state: CityState,
        transport: Arc<ScriptedTransport>,
        store: Arc<MemoryStore>,
    }

    fn fixture(transport: ScriptedTransport, store: MemoryStore) -> Fixture {
        let transport = Arc::new(transport);
        let store = Arc::new(store);
        let api = ApiClient::new("https://nearhear.app", transport.clone());
        let state = CityState::new(api, store.clone(), "Portland");
        Fixture {
            state,
            transport,
            store,
        }
    }

    fn list(items: &[&str]) -> String {
        format!("[{}]", items.join(","))
    }

    #[test]
    fn test_second_fetch_is_a_no_op() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE])),
            MemoryStore::default(),
        );
        block_on(f.state.fetch_supported_cities());
        block_on(f.state.fetch_supported_cities());

        assert_eq!(f.transport.call_count(), 1);
        assert_eq!(f.state.supported_cities().len(), 1);
        assert!(!f.state.is_loading());
    }

    #[test]
    fn test_defaults_to_preferred_city() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE, PORTLAND])),
            MemoryStore::default(),
        );
        block_on(f.state.fetch_supported_cities());

        assert_eq!(f.state.selected_city().unwrap().city, "Portland");
        assert_eq!(f.store.get(SELECTED_CITY_KEY).as_deref(), Some("Portland-OR"));
    }

    #[test]
    fn test_defaults_to_first_city_without_preferred() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE])),
            MemoryStore::default(),
        );
        block_on(f.state.fetch_supported_cities());

        assert_eq!(f.state.selected_city().unwrap().city, "Seattle");
        assert_eq!(f.state.selected_city_key().as_deref(), Some("Seattle-WA"));
    }

    #[test]
    fn test_stored_key_is_kept_and_resolves_after_load() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE, PORTLAND])),
            MemoryStore::with_entry(SELECTED_CITY_KEY, "Seattle-WA"),
        );
        assert_eq!(f.state.selected_city_key().as_deref(), Some("Seattle-WA"));
        assert_eq!(f.state.selected_city(), None);

        block_on(f.state.fetch_supported_cities());
        assert_eq!(f.state.selected_city().unwrap().city, "Seattle");
    }

    #[test]
    fn test_unmatched_key_stays_unresolved() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE])),
            MemoryStore::with_entry(SELECTED_CITY_KEY, "Boise-ID"),
        );
        block_on(f.state.fetch_supported_cities());

        assert_eq!(f.state.selected_city(), None);
        assert_eq!(f.state.selected_city_key().as_deref(), Some("Boise-ID"));
        assert_eq!(f.state.error(), None);
    }

    #[test]
    fn test_failure_is_captured_not_raised() {
        let f = fixture(
            ScriptedTransport::new().respond(500, "boom"),
            MemoryStore::default(),
        );
        block_on(f.state.fetch_supported_cities());

        let error = f.state.error().unwrap();
        assert!(error.contains("500"));
        assert!(f.state.supported_cities().is_empty());
        assert_eq!(f.state.selected_city_key(), None);
        assert!(!f.state.is_loading());
    }

    #[test]
    fn test_empty_body_yields_empty_list() {
        let f = fixture(ScriptedTransport::new().respond(200, ""), MemoryStore::default());
        block_on(f.state.fetch_supported_cities());

        assert!(f.state.supported_cities().is_empty());
        assert_eq!(f.state.selected_city_key(), None);
        assert_eq!(f.state.error(), None);
    }

    #[test]
    fn test_select_and_clear_persist() {
        let f = fixture(
            ScriptedTransport::new().respond(200, &list(&[SEATTLE, PORTLAND])),
            MemoryStore::default(),
        );
        block_on(f.state.fetch_supported_cities());

        f.state.select_city_key("Seattle-WA");
        assert_eq!(f.store.get(SELECTED_CITY_KEY).as_deref(), Some("Seattle-WA"));
        assert_eq!(f.state.selected_city_signal().get().unwrap().city, "Seattle");

        f.state.select_city_key("Nowhere-XX");
        assert_eq!(f.state.selected_city_key().as_deref(), Some("Seattle-WA"));

        f.state.clear_city();
        assert_eq!(f.state.selected_city(), None);
        assert_eq!(f.store.get(SELECTED_CITY_KEY), None);
    }

    #[test]
    fn test_default_city_matches_case_insensitively() {
        let shouted = PORTLAND.replace("Portland", "PORTLAND");
        let cities: Vec<SupportedCity> =
            serde_json::from_str(&list(&[SEATTLE, shouted.as_str()])).unwrap();
        assert_eq!(default_city(&cities, "portland").unwrap().state_abbrev, "OR");
        assert_eq!(default_city(&[], "portland"), None);
    }
}
