//! Navigation shell: section links plus logout.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use console_model::ContentKind;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// One sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

/// Dashboard first, then one link per content kind.
pub fn nav_links() -> Vec<NavLink> {
    let mut links = vec![NavLink { href: "/dashboard".to_owned(), label: "Dashboard" }];
    links.extend(
        ContentKind::ALL
            .iter()
            .map(|kind| NavLink { href: format!("/dashboard/{}", kind.segment()), label: kind.label() }),
    );
    links
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::session::sign_out(&crate::net::api::HttpApi, move || {
                navigate("/", NavigateOptions::default());
            })
            .await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = navigate;
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Content Console"</div>
            <ul class="sidebar__links">
                {nav_links()
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="sidebar__link" href=link.href>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="sidebar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
