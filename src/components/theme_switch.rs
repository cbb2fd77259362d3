//! Theme switch checkbox in the nav bar.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme_store::{self, BrowserStore};

/// Checkbox controlling the light/dark theme.
///
/// Checked means light. Every change updates the body marker class first
/// and then writes the sentinel through to storage, so the two always
/// agree.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_change = move |ev| {
        let next = theme_store::toggle(&BrowserStore, event_target_checked(&ev));
        theme.set(next);
    };

    view! {
        <label class="theme-switch-label">
            <input
                id="theme-switch"
                class="theme-switch"
                type="checkbox"
                prop:checked=move || theme.get().is_light()
                on:change=on_change
            />
            <span class="theme-switch-slider"></span>
        </label>
    }
}
