//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::flash_stack::FlashStack;
use crate::components::nav_bar::NavBar;
use crate::state::flash::FlashState;
use crate::state::menu::MenuState;
use crate::util::theme_store::{self, BrowserStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component wiring the four page-chrome behaviors.
///
/// The behaviors share no state and initialize independently: a missing
/// piece of markup degrades only its own behavior. Page content itself is
/// server-rendered below the chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Stored preference is read once here; every later toggle writes
    // through from the switch itself.
    let theme = RwSignal::new(theme_store::initialize(&BrowserStore));
    let menu = RwSignal::new(MenuState::default());
    let flash = RwSignal::new(FlashState::default());

    provide_context(theme);
    provide_context(menu);
    provide_context(flash);

    view! {
        <Stylesheet id="leptos" href="/pkg/budget-client.css"/>
        <Title text="Budget Tracker"/>

        <NavBar/>
        <FlashStack/>
        <main class="page-content"></main>
    }
}
