//! Top navigation bar: brand, tab links, hamburger, logout, theme switch.
//!
//! DESIGN
//! ======
//! The mobile menu is pure [`MenuState`]; this component only feeds it
//! events. The hamburger click stops propagation so the document-level
//! outside-click listener installed here does not immediately re-close
//! the menu it just opened.

use leptos::prelude::*;

use crate::components::theme_switch::ThemeSwitch;
use crate::state::menu::MenuState;
use crate::util::navigation::{self, LOGOUT_PATH};

/// Element id of the hamburger control.
pub const HAMBURGER_ID: &str = "hamburger-toggle";

/// Element id of the nav tab container.
pub const NAV_TABS_ID: &str = "nav-tabs";

#[derive(Clone, Copy)]
struct TabDef {
    label: &'static str,
    href: &'static str,
}

// Full-page links into the server-rendered pages; no client routing.
const TABS: &[TabDef] = &[
    TabDef { label: "Dashboard", href: "/dashboard" },
    TabDef { label: "Spendings", href: "/spendings" },
    TabDef { label: "Budgets", href: "/budgets" },
    TabDef { label: "Transactions", href: "/view_transactions" },
    TabDef { label: "Recurring", href: "/recurring" },
];

/// Navigation bar with mobile menu behavior and the logout interceptor.
#[component]
pub fn NavBar() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    install_outside_click(menu);

    let on_hamburger = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        menu.update(MenuState::toggle);
    };

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigation::redirect(LOGOUT_PATH);
    };

    let tabs = TABS
        .iter()
        .map(|td| {
            let td = *td;
            view! {
                <span class="tab">
                    <a href=td.href on:click=move |_| menu.update(MenuState::close)>
                        {td.label}
                    </a>
                </span>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href="/dashboard">"Budget Tracker"</a>
            <button id=HAMBURGER_ID class="hamburger" on:click=on_hamburger>
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
                <span class="hamburger-bar"></span>
            </button>
            <div id=NAV_TABS_ID class=move || menu.get().nav_class()>
                {tabs}
                <span class="tab">
                    <a id="logoutLink" href=LOGOUT_PATH on:click=on_logout>
                        "Logout"
                    </a>
                </span>
            </div>
            <ThemeSwitch/>
        </nav>
    }
}

/// Install the document-level listener that closes an open menu when a
/// click lands outside both the nav container and the hamburger control.
///
/// If either element cannot be found after render, the whole behavior is
/// skipped with one diagnostic naming what was missing; the rest of the
/// chrome is unaffected.
fn install_outside_click(menu: RwSignal<MenuState>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        // Deferred to an effect so the lookup runs against the mounted DOM.
        Effect::new(move || {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            match (doc.get_element_by_id(NAV_TABS_ID), doc.get_element_by_id(HAMBURGER_ID)) {
                (Some(nav), Some(toggle)) => {
                    window_event_listener(leptos::ev::click, move |ev| {
                        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                        let inside_nav = target.as_ref().is_some_and(|node| nav.contains(Some(node)));
                        let inside_toggle =
                            target.as_ref().is_some_and(|node| toggle.contains(Some(node)));
                        menu.update(|m| m.outside_click(inside_nav, inside_toggle));
                    });
                }
                (nav, toggle) => {
                    log::error!(
                        "hamburger menu elements not found: hamburger_toggle={}, nav_tabs={}",
                        toggle.is_some(),
                        nav.is_some()
                    );
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = menu;
    }
}
