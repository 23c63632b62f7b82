//! Navigation entries shown in the header, the mobile bottom bar and the
//! menus. The route table is built from the same entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// Key understood by [`crate::shared::icons::icon`].
    pub icon: Option<&'static str>,
}

const CALENDAR: NavItem = NavItem {
    name: "calendar",
    label: "Calendar",
    path: "/calendar",
    icon: Some("calendar"),
};

const MAP: NavItem = NavItem {
    name: "map",
    label: "Map",
    path: "/map",
    icon: Some("map"),
};

const PLAYLISTS: NavItem = NavItem {
    name: "playlists",
    label: "Playlists",
    path: "/playlists",
    icon: Some("playlist"),
};

/// Desktop top navigation (header).
pub const DESKTOP_NAV_ITEMS: &[NavItem] = &[CALENDAR, MAP, PLAYLISTS];

/// Mobile bottom bar.
pub const MOBILE_BOTTOM_NAV_ITEMS: &[NavItem] = &[CALENDAR, MAP, PLAYLISTS];

/// "Add" dropdown.
pub const ADD_MENU_ITEMS: &[NavItem] = &[
    NavItem {
        name: "add-events",
        label: "Add Event",
        path: "/add-events",
        icon: None,
    },
    NavItem {
        name: "add-artist",
        label: "Add Artist",
        path: "/add-artist",
        icon: None,
    },
];

/// Mobile "More" drawer.
pub const MORE_MENU_ITEMS: &[NavItem] = &[
    NavItem {
        name: "profile",
        label: "Profile",
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
];

/// Primary routes: every entry gets a route with `show_in_nav` set.
pub const MAIN_NAV_ITEMS: &[NavItem] = &[
    CALENDAR,
    MAP,
    PLAYLISTS,
    NavItem {
        name: "add-events",
        label: "Add Events",
        path: "/add-events",
        icon: Some("add"),
    },
];
