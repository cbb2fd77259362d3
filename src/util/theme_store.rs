//! Theme preference persistence and body-class application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the localStorage and `<body>` glue so components treat the
//! theme as pure state. Persistence is best-effort browser-only behavior:
//! storage failures are swallowed and SSR paths no-op, keeping server
//! rendering deterministic.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use crate::state::theme::Theme;

/// localStorage key holding the theme preference.
pub const STORAGE_KEY: &str = "theme";

/// Marker class carried by `<body>` while the light theme is active.
pub const LIGHT_CLASS: &str = "light-theme";

/// Storage seam for the theme preference, so the toggle logic can be
/// exercised against an in-memory fake in tests.
pub trait ThemeStore {
    /// Stored preference, parsed permissively.
    fn load(&self) -> Theme;
    /// Write-through of the latest toggle.
    fn store(&self, theme: Theme);
}

/// localStorage-backed store used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl ThemeStore for BrowserStore {
    fn load(&self) -> Theme {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
            Theme::from_stored(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Theme::Dark
        }
    }

    fn store(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, theme.as_stored());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Read the stored preference once and surface it on `<body>`.
pub fn initialize<S: ThemeStore>(store: &S) -> Theme {
    let theme = store.load();
    apply(theme);
    theme
}

/// Switch-change transition: surface the new theme, then write it through
/// so marker class and stored preference agree.
pub fn toggle<S: ThemeStore>(store: &S, checked: bool) -> Theme {
    let next = Theme::from_checked(checked);
    apply(next);
    store.store(next);
    next
}

/// Apply or remove the light-theme marker class on `<body>`.
///
/// `<body>` sits outside the hydrated tree, so this is the one place the
/// chrome touches a class list directly.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = if theme.is_light() {
                classes.add_1(LIGHT_CLASS)
            } else {
                classes.remove_1(LIGHT_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
