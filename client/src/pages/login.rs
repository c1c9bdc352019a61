//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::login::LoginForm;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::login::submit_login(&crate::net::api::HttpApi, &form, move || {
                navigate("/dashboard", NavigateOptions::default());
            })
            .await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = navigate;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Content Console"</h1>
                <p class="login-card__subtitle">"Sign in to manage site content"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || submit_label(form.with(|f| f.busy))}
                    </button>
                </form>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <Show when=move || form.with(|f| f.notice.is_some())>
                    <p class="login-message">{move || form.with(|f| f.notice.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </div>
    }
}
