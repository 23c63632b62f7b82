use std::sync::Arc;

use leptos::prelude::*;

use crate::shared::analytics::{self, Analytics};
use crate::shared::config::{runtime_env_marker, ApiEnvironment, AppConfig};
use crate::shared::http::{ApiClient, GlooTransport, HttpTransport};
use crate::shared::storage::{BrowserCookies, BrowserLocalStorage, CookieJar, KeyValueStore};
use crate::system::auth::{AdminAuth, UserAuth};
use crate::system::city::CityState;

/// Browser-side collaborators the shared state is built on.
#[derive(Clone)]
pub struct Services {
    pub transport: Arc<dyn HttpTransport>,
    pub store: Arc<dyn KeyValueStore>,
    pub cookies: Arc<dyn CookieJar>,
    pub analytics: Arc<dyn Analytics>,
}

/// All shared client state, built once at startup and provided as context.
#[derive(Clone)]
pub struct AppGlobalContext {
    pub config: Arc<AppConfig>,
    pub environment: ApiEnvironment,
    pub api: ApiClient,
    pub store: Arc<dyn KeyValueStore>,
    pub analytics: Arc<dyn Analytics>,
    pub city: CityState,
    pub user_auth: UserAuth,
    pub admin_auth: AdminAuth,
}

impl AppGlobalContext {
    /// Wire the context to the real browser.
    pub fn new(config: AppConfig) -> Self {
        let environment = config.api_environment(runtime_env_marker().as_deref());
        log::info!(
            "[app] api environment {} ({})",
            environment.as_str(),
            environment.base_url()
        );
        let services = Services {
            transport: Arc::new(GlooTransport),
            store: Arc::new(BrowserLocalStorage),
            cookies: Arc::new(BrowserCookies),
            analytics: analytics::from_config(&config.analytics),
        };
        Self::with_services(config, environment, services)
    }

    pub fn with_services(config: AppConfig, environment: ApiEnvironment, services: Services) -> Self {
        let api = ApiClient::new(environment.base_url(), services.transport);
        let city = CityState::new(api.clone(), services.store.clone(), config.city.preferred.clone());
        let user_auth = UserAuth::new(
            api.clone(),
            services.cookies.clone(),
            services.store.clone(),
            services.analytics.clone(),
        );
        let admin_auth = AdminAuth::new(api.clone(), services.cookies);
        Self {
            config: Arc::new(config),
            environment,
            api,
            store: services.store,
            analytics: services.analytics,
            city,
            user_auth,
            admin_auth,
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
