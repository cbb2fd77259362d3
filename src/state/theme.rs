//! Light/dark theme state and stored-value semantics.
//!
//! DESIGN
//! ======
//! The theme is a two-state machine surfaced as the `light-theme` marker
//! class on `<body>` and persisted under a single localStorage key.
//! Parsing is deliberately permissive: only the exact light sentinel
//! selects the light theme, so corrupted or future stored values fall
//! back to dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme preference. Dark is the default when nothing usable is
/// stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse a stored preference value.
    ///
    /// Only the exact `"light"` sentinel selects [`Theme::Light`];
    /// absence and every other value mean dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Sentinel written back to storage for this theme.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme selected by the switch position (checked means light).
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Light } else { Self::Dark }
    }

    /// Whether the switch should render checked.
    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
