use leptos::prelude::*;
use thiserror::Error;

use crate::layout::navigation::{NavItem, MAIN_NAV_ITEMS};
use crate::routes::navigator::Navigator;
use crate::views;

/// Pages the router can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Calendar,
    Map,
    Playlists,
    YourShows,
    AddEvents,
    AddArtist,
    Profile,
    Faq,
    About,
    MailingList,
    Settings,
    Admin,
}

/// Route name to view lookup.
pub const VIEW_MAP: &[(&str, ViewKind)] = &[
    ("calendar", ViewKind::Calendar),
    ("playlists", ViewKind::Playlists),
    ("your-shows", ViewKind::YourShows),
    ("add-events", ViewKind::AddEvents),
    ("add-artist", ViewKind::AddArtist),
    ("map", ViewKind::Map),
    ("profile", ViewKind::Profile),
    ("faq", ViewKind::Faq),
    ("about", ViewKind::About),
    ("mailing-list", ViewKind::MailingList),
    ("settings", ViewKind::Settings),
    ("admin", ViewKind::Admin),
];

/// Routes reachable from menus other than the main navigation.
pub const EXTRA_ROUTES: &[NavItem] = &[
    NavItem {
        name: "profile",
        label: "Profile / Account",
        path: "/profile",
        icon: None,
    },
    NavItem {
        name: "faq",
        label: "FAQ",
        path: "/faq",
        icon: None,
    },
    NavItem {
        name: "about",
        label: "About",
        path: "/about",
        icon: None,
    },
    NavItem {
        name: "mailing-list",
        label: "Mailing List",
        path: "/mailing-list",
        icon: None,
    },
    NavItem {
        name: "settings",
        label: "Settings",
        path: "/settings",
        icon: None,
    },
    NavItem {
        name: "add-artist",
        label: "Add Artist",
        path: "/add-artist",
        icon: None,
    },
    NavItem {
        name: "admin",
        label: "Admin",
        path: "/admin",
        icon: None,
    },
];

/// Route that `/` and unknown paths redirect to.
pub const FALLBACK_ROUTE: &str = "calendar";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteConfigError {
    #[error("Missing view mapping for route \"{name}\"")]
    MissingView { name: String },
    #[error("Duplicate route path \"{path}\"")]
    DuplicatePath { path: String },
    #[error("Fallback route \"{name}\" is not defined")]
    MissingFallback { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub show_in_nav: bool,
    pub view: ViewKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Matched(&'a RouteDef),
    /// The path has no route of its own and is sent to this one.
    Redirect(&'a RouteDef),
}

impl<'a> RouteMatch<'a> {
    pub fn route(&self) -> &'a RouteDef {
        match self {
            RouteMatch::Matched(route) | RouteMatch::Redirect(route) => route,
        }
    }
}

/// Validated route table, built once at startup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    fallback: usize,
}

impl RouteTable {
    /// The application's routes.
    pub fn app() -> Result<Self, RouteConfigError> {
        Self::build(MAIN_NAV_ITEMS, EXTRA_ROUTES, VIEW_MAP)
    }

    /// Map every navigation entry 1:1 to a route. Any entry without a view is
    /// a configuration error.
    pub fn build(
        main_nav: &[NavItem],
        extra: &[NavItem],
        view_map: &[(&str, ViewKind)],
    ) -> Result<Self, RouteConfigError> {
        let lookup = |name: &str| {
            view_map
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, view)| *view)
                .ok_or_else(|| RouteConfigError::MissingView {
                    name: name.to_string(),
                })
        };

        let mut routes: Vec<RouteDef> = Vec::with_capacity(main_nav.len() + extra.len());
        let entries = main_nav
            .iter()
            .map(|item| (item, true))
            .chain(extra.iter().map(|item| (item, false)));
        for (item, show_in_nav) in entries {
            let view = lookup(item.name)?;
            if routes.iter().any(|route| route.path == item.path) {
                return Err(RouteConfigError::DuplicatePath {
                    path: item.path.to_string(),
                });
            }
            routes.push(RouteDef {
                path: item.path,
                name: item.name,
                label: item.label,
                show_in_nav,
                view,
            });
        }

        let fallback = routes
            .iter()
            .position(|route| route.name == FALLBACK_ROUTE)
            .ok_or_else(|| RouteConfigError::MissingFallback {
                name: FALLBACK_ROUTE.to_string(),
            })?;

        Ok(Self { routes, fallback })
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn nav_routes(&self) -> impl Iterator<Item = &RouteDef> {
        self.routes.iter().filter(|route| route.show_in_nav)
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDef> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn fallback(&self) -> &RouteDef {
        &self.routes[self.fallback]
    }

    /// Match a location path. Query and fragment are ignored, as is a
    /// trailing slash.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match self.routes.iter().find(|route| route.path == trimmed) {
            Some(route) => RouteMatch::Matched(route),
            None => RouteMatch::Redirect(self.fallback()),
        }
    }
}

/// Renders the page for the given view.
pub fn render_view(view: ViewKind) -> AnyView {
    match view {
        ViewKind::Calendar => view! { <views::calendar::CalendarView /> }.into_any(),
        ViewKind::Map => view! { <views::map::MapView /> }.into_any(),
        ViewKind::Playlists => view! { <views::playlists::PlaylistsView /> }.into_any(),
        ViewKind::YourShows => view! { <views::your_shows::YourShowsView /> }.into_any(),
        ViewKind::AddEvents => view! { <views::add_events::AddEventsView /> }.into_any(),
        ViewKind::AddArtist => view! { <views::add_artist::AddArtistView /> }.into_any(),
        ViewKind::Profile => view! { <views::profile::ProfileView /> }.into_any(),
        ViewKind::Faq => views::info::info_page("FAQ"),
        ViewKind::About => views::info::info_page("About"),
        ViewKind::MailingList => views::info::info_page("Mailing List"),
        ViewKind::Settings => view! { <views::settings::SettingsView /> }.into_any(),
        ViewKind::Admin => view! { <views::admin::AdminView /> }.into_any(),
    }
}

/// Shows the page for the current location.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = expect_context::<Navigator>();

    move || render_view(navigator.current_route().view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_table_builds() {
        let table = RouteTable::app().unwrap();
        let nav: Vec<_> = table.nav_routes().map(|r| r.name).collect();
        assert_eq!(nav, vec!["calendar", "map", "playlists", "add-events"]);
        assert_eq!(table.by_name("profile").unwrap().label, "Profile / Account");
        assert!(!table.by_name("admin").unwrap().show_in_nav);
    }

    #[test]
    fn test_missing_view_mapping_fails() {
        let view_map: Vec<_> = VIEW_MAP
            .iter()
            .copied()
            .filter(|(name, _)| *name != "map")
            .collect();
        let err = RouteTable::build(MAIN_NAV_ITEMS, EXTRA_ROUTES, &view_map).unwrap_err();
        assert_eq!(
            err,
            RouteConfigError::MissingView {
                name: "map".to_string()
            }
        );
        assert_eq!(err.to_string(), "Missing view mapping for route \"map\"");
    }

    #[test]
    fn test_duplicate_path_fails() {
        let extra = [MAIN_NAV_ITEMS[0]];
        let err = RouteTable::build(MAIN_NAV_ITEMS, &extra, VIEW_MAP).unwrap_err();
        assert!(matches!(err, RouteConfigError::DuplicatePath { .. }));
    }

    #[test]
    fn test_missing_fallback_fails() {
        let err = RouteTable::build(&MAIN_NAV_ITEMS[1..], &[], VIEW_MAP).unwrap_err();
        assert!(matches!(err, RouteConfigError::MissingFallback { .. }));
    }

    #[test]
    fn test_resolve_matches_and_redirects() {
        let table = RouteTable::app().unwrap();

        assert_eq!(table.resolve("/map"), RouteMatch::Matched(table.by_name("map").unwrap()));
        assert_eq!(table.resolve("/map/").route().name, "map");
        assert_eq!(table.resolve("/faq?x=1#top").route().name, "faq");

        let root = table.resolve("/");
        assert!(matches!(root, RouteMatch::Redirect(_)));
        assert_eq!(root.route().name, "calendar");

        let unknown = table.resolve("/does/not/exist");
        assert!(matches!(unknown, RouteMatch::Redirect(_)));
        assert_eq!(unknown.route().path, "/calendar");
    }
}
