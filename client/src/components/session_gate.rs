//! Layout route that guards everything under `/dashboard`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs one session lookup per mount. Effects only run in the browser, so the
//! server-rendered HTML is always the loading indicator and no protected
//! content can show before a redirect.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::GateState;

#[component]
pub fn SessionGate() -> impl IntoView {
    let gate = RwSignal::new(GateState::Checking);
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::StateCell;
            let next = crate::state::session::check_session(&crate::net::api::HttpApi).await;
            gate.mutate(|g| *g = next);
        });
    });

    Effect::new(move || {
        if gate.get() == GateState::Redirect {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match gate.get() {
        GateState::Checking => view! {
            <div class="gate gate--checking">
                <div class="spinner" aria-label="Loading"></div>
            </div>
        }
        .into_any(),
        GateState::Redirect => ().into_any(),
        GateState::Authenticated(_) => view! {
            <div class="admin-layout">
                <Sidebar/>
                <main class="admin-layout__main">
                    <Outlet/>
                </main>
            </div>
        }
        .into_any(),
    }
}
