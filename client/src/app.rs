//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::session_gate::SessionGate;
use crate::pages::{content_admin::ContentAdminPage, dashboard::DashboardHome, login::LoginPage};

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

/// Root application component.
///
/// `/` is the login form; everything under `/dashboard` renders inside the
/// session gate, which owns the navigation shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/content-console.css"/>
        <Script src="/editor-bridge.js"/>
        <Title text="Content Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=SessionGate>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=ParamSegment("kind") view=ContentAdminPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
