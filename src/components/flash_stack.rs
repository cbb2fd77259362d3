//! Flash banner stack with timed auto-dismissal.
//!
//! DESIGN
//! ======
//! The banner snapshot is taken once at hydration. A single driver task
//! sleeps until the schedule's next deadline and advances the state; the
//! banners themselves render purely from [`FlashState`], so the fade
//! marker and the removal both fall out of the same machine the tests
//! exercise on a virtual clock.

use leptos::prelude::*;

use crate::state::flash::FlashState;

/// Container rendering every live flash banner.
#[component]
pub fn FlashStack() -> impl IntoView {
    let flash = expect_context::<RwSignal<FlashState>>();

    #[cfg(feature = "hydrate")]
    {
        // Deferred to an effect so the snapshot and the first state write
        // happen after hydration, not while the tree is being matched up.
        Effect::new(move || {
            let initial = crate::util::flash_data::initial_messages();
            if !initial.is_empty() {
                flash.update(|f| f.seed(js_sys::Date::now(), initial));
                leptos::task::spawn_local(run_schedule(flash));
            }
        });
    }

    view! {
        <div class="flash-messages-container">
            {move || {
                flash
                    .get()
                    .messages()
                    .iter()
                    .map(|msg| view! { <div class=msg.class()>{msg.text.clone()}</div> })
                    .collect_view()
            }}
        </div>
    }
}

/// Drive the dismissal schedule until no deadlines remain. Each pass
/// sleeps to the earliest pending deadline, then applies whatever became
/// due; banners dismissed in the meantime are simply no longer there.
#[cfg(feature = "hydrate")]
async fn run_schedule(flash: RwSignal<FlashState>) {
    while let Some(deadline) = flash.with_untracked(FlashState::next_deadline) {
        let wait_ms = crate::state::flash::wait_millis(deadline, js_sys::Date::now());
        gloo_timers::future::sleep(std::time::Duration::from_millis(wait_ms)).await;
        flash.update(|f| f.advance(js_sys::Date::now()));
    }
}
