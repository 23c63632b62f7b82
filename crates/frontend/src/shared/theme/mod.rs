//! Theme management.
//!
//! A theme is either backed by a palette, which is expanded into token
//! groups and then CSS custom properties, or is a built-in stylesheet theme
//! (`synthwave`). The choice is persisted in local storage.

pub mod theme_select;

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::storage::KeyValueStore;

pub use theme_select::ThemeSelect;

/// Local storage key for the selected theme.
pub const THEME_STORAGE_KEY: &str = "nearhear-theme";

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    NearHear,
    Elzie,
    Synthwave,
}

impl Theme {
    /// Name used for `data-theme` and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::NearHear => "nearhear",
            Theme::Elzie => "elzie",
            Theme::Synthwave => "synthwave",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::NearHear => "NearHear",
            Theme::Elzie => "Elzie",
            Theme::Synthwave => "Synthwave",
        }
    }

    /// Unknown names fall back to the default theme.
    pub fn parse(s: &str) -> Self {
        match s {
            "elzie" => Theme::Elzie,
            "synthwave" => Theme::Synthwave,
            _ => Theme::NearHear,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::NearHear, Theme::Elzie, Theme::Synthwave]
    }

    /// `synthwave` is a dark built-in theme.
    pub fn is_dark(&self) -> bool {
        self.palette()
            .map_or(true, |palette| palette.color_scheme == "dark")
    }

    /// Custom palette, `None` for built-in themes.
    pub fn palette(&self) -> Option<&'static Palette> {
        match self {
            Theme::NearHear => Some(&NEARHEAR_PALETTE),
            Theme::Elzie => Some(&ELZIE_PALETTE),
            Theme::Synthwave => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// `light` or `dark`, set as the CSS `color-scheme`.
    pub color_scheme: &'static str,
    pub base_100: &'static str,
    pub base_200: &'static str,
    pub base_300: &'static str,
    pub base_content: &'static str,
    pub primary: &'static str,
    pub primary_content: &'static str,
    pub secondary: &'static str,
    pub secondary_content: &'static str,
    pub accent: &'static str,
    pub accent_content: &'static str,
    pub neutral: &'static str,
    pub neutral_content: &'static str,
    pub info: &'static str,
    pub info_content: &'static str,
    pub success: &'static str,
    pub success_content: &'static str,
    pub warning: &'static str,
    pub warning_content: &'static str,
    pub error: &'static str,
    pub error_content: &'static str,
}

pub const NEARHEAR_PALETTE: Palette = Palette {
    color_scheme: "light",
    base_100: "oklch(100% 0 0)",
    base_200: "oklch(98% 0 0)",
    base_300: "oklch(95% 0 0)",
    base_content: "oklch(21% 0.006 285.885)",
    primary: "rgb(66 42 213)",
    primary_content: "oklch(93% 0.034 272.788)",
    secondary: "oklch(65% 0.241 354.308)",
    secondary_content: "oklch(94% 0.028 342.258)",
    accent: "oklch(77% 0.152 181.912)",
    accent_content: "oklch(38% 0.063 188.416)",
    neutral: "oklch(14% 0.005 285.823)",
    neutral_content: "oklch(92% 0.004 286.32)",
    info: "oklch(74% 0.16 232.661)",
    info_content: "oklch(29% 0.066 243.157)",
    success: "oklch(76% 0.177 163.223)",
    success_content: "oklch(37% 0.077 168.94)",
    warning: "oklch(82% 0.189 84.429)",
    warning_content: "oklch(41% 0.112 45.904)",
    error: "oklch(71% 0.194 13.428)",
    error_content: "oklch(27% 0.105 12.094)",
};

pub const ELZIE_PALETTE: Palette = Palette {
    color_scheme: "dark",
    base_100: "#002529",
    base_200: "#004B52",
    base_300: "#00838F",
    base_content: "#00A8B8",
    primary: "#00e3f6",
    primary_content: "oklch(93% 0.034 272.788)",
    secondary: "#ff7200",
    secondary_content: "oklch(94% 0.028 342.258)",
    accent: "oklch(62% 0.265 303.9)",
    accent_content: "oklch(38% 0.063 188.416)",
    neutral: "oklch(14% 0.005 285.823)",
    neutral_content: "oklch(92% 0.004 286.32)",
    info: "oklch(74% 0.16 232.661)",
    info_content: "oklch(29% 0.066 243.157)",
    success: "oklch(76% 0.177 163.223)",
    success_content: "oklch(37% 0.077 168.94)",
    warning: "oklch(82% 0.189 84.429)",
    warning_content: "oklch(41% 0.112 45.904)",
    error: "oklch(58% 0.253 17.585)",
    error_content: "oklch(27% 0.105 12.094)",
};

/// Named color tokens grouped by purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    pub base: Vec<(&'static str, &'static str)>,
    pub brand: Vec<(&'static str, &'static str)>,
    pub status: Vec<(&'static str, &'static str)>,
}

impl ThemeTokens {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            base: vec![
                ("base-100", palette.base_100),
                ("base-200", palette.base_200),
                ("base-300", palette.base_300),
                ("base-content", palette.base_content),
                ("neutral", palette.neutral),
                ("neutral-content", palette.neutral_content),
            ],
            brand: vec![
                ("primary", palette.primary),
                ("primary-content", palette.primary_content),
                ("secondary", palette.secondary),
                ("secondary-content", palette.secondary_content),
                ("accent", palette.accent),
                ("accent-content", palette.accent_content),
            ],
            status: vec![
                ("info", palette.info),
                ("info-content", palette.info_content),
                ("success", palette.success),
                ("success-content", palette.success_content),
                ("warning", palette.warning),
                ("warning-content", palette.warning_content),
                ("error", palette.error),
                ("error-content", palette.error_content),
            ],
        }
    }

    /// `--color-<token>` custom properties, base first.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        self.base
            .iter()
            .chain(&self.brand)
            .chain(&self.status)
            .map(|(name, value)| (format!("--color-{}", name), value.to_string()))
            .collect()
    }
}

/// CSS custom properties for a theme; empty for built-in themes.
pub fn css_variables(theme: Theme) -> Vec<(String, String)> {
    theme
        .palette()
        .map(|palette| ThemeTokens::from_palette(palette).css_variables())
        .unwrap_or_default()
}

/// Set `data-theme` and the palette variables on `<html>`.
fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());

    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = root.style();
    // Clear variables left behind by a palette theme
    for (name, _) in css_variables(Theme::NearHear) {
        let _ = style.remove_property(&name);
    }
    for (name, value) in css_variables(theme) {
        let _ = style.set_property(&name, &value);
    }
    match theme.palette() {
        Some(palette) => {
            let _ = style.set_property("color-scheme", palette.color_scheme);
        }
        None => {
            let _ = style.remove_property("color-scheme");
        }
    }
}

#[derive(Clone)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    store: Arc<dyn KeyValueStore>,
}

impl ThemeContext {
    /// Restore the persisted theme.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let theme = store
            .get(THEME_STORAGE_KEY)
            .map(|s| Theme::parse(&s))
            .unwrap_or_default();
        Self {
            theme: RwSignal::new(theme),
            store,
        }
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Record and persist the choice without touching the document.
    pub fn select(&self, theme: Theme) {
        self.theme.set(theme);
        self.store.set(THEME_STORAGE_KEY, theme.as_str());
    }

    pub fn set_theme(&self, theme: Theme) {
        log::debug!("[theme] switching to {}", theme.as_str());
        self.select(theme);
        apply_theme(theme);
    }

    /// Apply the current theme to the document.
    pub fn apply(&self) {
        apply_theme(self.theme.get_untracked());
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Provides the theme context to children and applies the stored theme.
#[component]
pub fn ThemeProvider(store: Arc<dyn KeyValueStore>, children: Children) -> impl IntoView {
    let context = ThemeContext::new(store);
    context.apply();
    provide_context(context);

    children()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::MemoryStore;

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(Theme::parse("elzie"), Theme::Elzie);
        assert_eq!(Theme::parse("synthwave"), Theme::Synthwave);
        assert_eq!(Theme::parse("dark"), Theme::NearHear);
        for theme in Theme::all() {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }

    #[test]
    fn test_palette_expands_to_css_variables() {
        let vars = css_variables(Theme::NearHear);
        assert_eq!(vars.len(), 20);
        assert_eq!(vars[0], ("--color-base-100".to_string(), "oklch(100% 0 0)".to_string()));
        assert!(vars.contains(&("--color-primary".to_string(), NEARHEAR_PALETTE.primary.to_string())));
        assert!(vars.iter().all(|(name, _)| name.starts_with("--color-")));
    }

    #[test]
    fn test_token_groups() {
        let tokens = ThemeTokens::from_palette(&ELZIE_PALETTE);
        assert_eq!(tokens.base.len(), 6);
        assert_eq!(tokens.brand[0], ("primary", "#00e3f6"));
        assert_eq!(
            tokens.status.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            [
                "info",
                "info-content",
                "success",
                "success-content",
                "warning",
                "warning-content",
                "error",
                "error-content",
            ]
        );
        assert_eq!(tokens.status[7], ("error-content", "oklch(27% 0.105 12.094)"));
    }

    #[test]
    fn test_brand_palettes() {
        assert_eq!(NEARHEAR_PALETTE.primary, "rgb(66 42 213)");
        assert_eq!(NEARHEAR_PALETTE.error, "oklch(71% 0.194 13.428)");
        assert_eq!(ELZIE_PALETTE.base_100, "#002529");
        assert_eq!(ELZIE_PALETTE.secondary, "#ff7200");
        assert_eq!(ELZIE_PALETTE.error, "oklch(58% 0.253 17.585)");
        assert!(!Theme::NearHear.is_dark());
        assert!(Theme::Elzie.is_dark());
        assert!(Theme::Synthwave.is_dark());
    }

    #[test]
    fn test_builtin_theme_has_no_variables() {
        assert!(css_variables(Theme::Synthwave).is_empty());
    }

    #[test]
    fn test_context_restores_and_persists_choice() {
        let store = Arc::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "elzie"));
        let ctx = ThemeContext::new(store.clone());
        assert_eq!(ctx.get_theme(), Theme::Elzie);

        ctx.select(Theme::Synthwave);
        assert_eq!(ctx.get_theme(), Theme::Synthwave);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("synthwave"));

        let empty = ThemeContext::new(Arc::new(MemoryStore::default()));
        assert_eq!(empty.get_theme(), Theme::NearHear);
    }
}
