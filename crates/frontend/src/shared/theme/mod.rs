//! Theme management for the data table.
//!
//! Provides a context-based theme system with dark, light and forest themes.
//! The theme selects the palette handed to the select cell styles; the
//! preference is persisted in localStorage.

use contracts::shared::select_cell::{Palette, SelectCellSettings, StyleSet};
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Forest,
}

impl Theme {
    /// Returns the theme name as a string (used for settings keys and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Forest => "forest",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Тёмная",
            Theme::Light => "Светлая",
            Theme::Forest => "Лесная",
        }
    }

    /// Parse theme from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "forest" => Theme::Forest,
            _ => Theme::Dark,
        }
    }

    pub fn all() -> [Theme; 3] {
        [Theme::Dark, Theme::Light, Theme::Forest]
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Set data-theme attribute on body for styling hooks outside the table.
fn apply_theme_attribute(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Load select cell settings, falling back to defaults on a broken config.
fn load_settings() -> (SelectCellSettings, StyleSet) {
    let settings = match SelectCellSettings::embedded() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Select cell settings are invalid, using defaults: {}", err);
            SelectCellSettings::default()
        }
    };
    let styles = match settings.style_set() {
        Ok(styles) => styles,
        Err(err) => {
            log::warn!("Select cell class overrides ignored: {}", err);
            StyleSet::default()
        }
    };
    (settings, styles)
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    settings: StoredValue<SelectCellSettings>,
    styles: StoredValue<StyleSet>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_attribute(theme);
    }

    /// Palette of the current theme (reactive).
    pub fn palette(&self) -> Signal<Palette> {
        let theme = self.theme;
        let settings = self.settings;
        Signal::derive(move || settings.with_value(|s| s.palette(theme.get().as_str())))
    }

    /// Class names of the select cell styles.
    pub fn styles(&self) -> StyleSet {
        self.styles.get_value()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme_attribute(initial_theme);

    let (settings, styles) = load_settings();
    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        settings: StoredValue::new(settings),
        styles: StoredValue::new(styles),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Theme switcher: one button per theme.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <div class="theme-selector" title="Выбор темы">
            {crate::shared::icons::icon("palette")}
            {Theme::all().into_iter().map(|theme| {
                let is_active = move || ctx.theme.get() == theme;
                view! {
                    <button
                        class=move || if is_active() { "theme-dropdown-item active" } else { "theme-dropdown-item" }
                        on:click=move |_| ctx.set_theme(theme)
                    >
                        {theme.display_name()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
