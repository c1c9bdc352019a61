//! Dashboard landing page shown at `/dashboard`.

use leptos::prelude::*;

#[component]
pub fn DashboardHome() -> impl IntoView {
    view! {
        <div class="card">
            <h1>"Welcome to the Dashboard"</h1>
            <p class="card__subtitle">"Pick a section from the menu to start managing your content."</p>
        </div>
    }
}
