//! Content admin page: list, create, edit and delete items of one kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/dashboard/{kind}` inside the session gate. The route segment
//! picks the content kind; every kind shares this screen. State lives in one
//! `RwSignal<ContentScreen>` and async work goes through the drivers in
//! `state::content`.

#[cfg(test)]
#[path = "content_admin_test.rs"]
mod content_admin_test;

use console_model::{ContentDraft, ContentItem, ContentKind};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::rich_text::RichTextField;
use crate::state::StateCell;
use crate::state::content::{ContentScreen, FormMode, FormState};

fn form_heading(kind: ContentKind, mode: &FormMode) -> String {
    match mode {
        FormMode::Create => format!("New {}", kind.item_noun()),
        FormMode::Edit(_) => format!("Editing {}", kind.item_noun()),
    }
}

fn submit_label(kind: ContentKind, mode: &FormMode, submitting: bool) -> String {
    match (submitting, mode) {
        (true, _) => "Saving...".to_owned(),
        (false, FormMode::Create) => format!("Create {}", kind.item_noun()),
        (false, FormMode::Edit(_)) => "Save Changes".to_owned(),
    }
}

/// Route entry: resolves the kind from the URL.
#[component]
pub fn ContentAdminPage() -> impl IntoView {
    let params = use_params_map();
    let kind = Memo::new(move |_| {
        params
            .read()
            .get("kind")
            .and_then(|segment| segment.parse::<ContentKind>().ok())
    });

    move || match kind.get() {
        Some(kind) => view! { <ContentAdmin kind/> }.into_any(),
        None => view! { <p class="content-admin__missing">"Page not found."</p> }.into_any(),
    }
}

/// Spawn a driver against the live API. A no-op during server rendering.
#[cfg(feature = "hydrate")]
fn spawn_driver<F, Fut>(screen: RwSignal<ContentScreen>, driver: F)
where
    F: FnOnce(crate::net::api::HttpApi, RwSignal<ContentScreen>) -> Fut,
    Fut: std::future::Future<Output = ()> + 'static,
{
    leptos::task::spawn_local(driver(crate::net::api::HttpApi, screen));
}

#[component]
fn ContentAdmin(kind: ContentKind) -> impl IntoView {
    let screen = RwSignal::new(ContentScreen::new(kind));

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        spawn_driver(screen, |api, screen| async move {
            crate::state::content::refresh(&api, &screen).await;
        });
    });

    // Remount the form whenever it opens on a different target.
    let open_mode = Memo::new(move |_| {
        screen.with(|s| match &s.form {
            FormState::Open { mode, .. } => Some(mode.clone()),
            FormState::Closed => None,
        })
    });

    let on_delete_confirm = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        spawn_driver(screen, |api, screen| async move {
            crate::state::content::delete_confirmed(&api, &screen).await;
        });
    });
    let on_delete_cancel = Callback::new(move |()| screen.update(ContentScreen::cancel_delete));

    view! {
        <div class="content-admin">
            <header class="content-admin__header">
                <h1>{format!("Manage {}", kind.label())}</h1>
                <Show when=move || !open_mode.with(Option::is_some)>
                    <button class="btn btn--primary" on:click=move |_| screen.update(ContentScreen::open_create)>
                        {format!("New {}", kind.item_noun())}
                    </button>
                </Show>
            </header>

            <Show when=move || screen.with(|s| s.error.is_some())>
                <div class="banner banner--error" role="alert">
                    <p class="banner__title">"Error"</p>
                    <p>{move || screen.with(|s| s.error.clone().unwrap_or_default())}</p>
                </div>
            </Show>

            {move || open_mode.get().map(|mode| view! { <ContentForm screen kind mode/> })}

            <section class="card">
                <h2>"Published"</h2>
                {move || {
                    if screen.with(|s| s.loading && s.items.is_empty()) {
                        view! {
                            <div class="content-admin__loading">
                                <div class="spinner" aria-label="Loading"></div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <ItemList screen/> }.into_any()
                    }
                }}
            </section>

            <Show when=move || screen.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title=format!("Delete {}", kind.item_noun())
                    message="Are you sure you want to delete this item? This cannot be undone."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn ItemList(screen: RwSignal<ContentScreen>) -> impl IntoView {
    view! {
        <ul class="item-list">
            <For
                each=move || screen.with(|s| s.items.clone())
                key=|item: &ContentItem| (item.id.clone(), item.updated_at.clone())
                children=move |item: ContentItem| {
                    let edit_id = item.id.clone();
                    let delete_id = item.id.clone();
                    view! {
                        <li class="item-list__row">
                            <div>
                                <p class="item-list__title">{item.title}</p>
                                <p class="item-list__slug">{format!("/{}", item.slug)}</p>
                            </div>
                            <div class="item-list__actions">
                                <button
                                    class="btn btn--ghost"
                                    title="Edit"
                                    on:click=move |_| {
                                        screen.update(|s| s.open_edit(&edit_id));
                                        #[cfg(feature = "hydrate")]
                                        if let Some(window) = web_sys::window() {
                                            window.scroll_to_with_x_and_y(0.0, 0.0);
                                        }
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--ghost btn--danger"
                                    title="Delete"
                                    on:click=move |_| screen.update(|s| s.request_delete(&delete_id))
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}

/// Text input bound to one draft field.
#[component]
fn DraftInput(
    screen: RwSignal<ContentScreen>,
    #[prop(into)] label: String,
    field: fn(&mut ContentDraft) -> &mut String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type="text"
                required=required
                prop:value=move || {
                    screen.with(|s| s.draft().cloned().map(|mut d| field(&mut d).clone()).unwrap_or_default())
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    screen.update(|s| s.edit_draft(|d| *field(d) = value));
                }
            />
        </label>
    }
}

#[component]
fn ContentForm(screen: RwSignal<ContentScreen>, kind: ContentKind, mode: FormMode) -> impl IntoView {
    let initial_html = screen.with_untracked(|s| s.draft().map(|d| d.content.clone()).unwrap_or_default());
    let on_content = Callback::new(move |html: String| {
        screen.mutate(|s| s.edit_draft(|d| d.content = html));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        spawn_driver(screen, |api, screen| async move {
            crate::state::content::submit(&api, &screen).await;
        });
    };

    let heading = form_heading(kind, &mode);
    let label_mode = mode.clone();

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>{heading}</h2>
            <div class="form__grid">
                <DraftInput screen label="Title" field=|d| &mut d.title required=true/>
                <DraftInput screen label="Slug (URL)" field=|d| &mut d.slug required=true/>
            </div>
            <div class="form__grid">
                <DraftInput screen label="Icon" field=|d| &mut d.icon/>
                <DraftInput screen label="External Reference" field=|d| &mut d.external_reference/>
            </div>
            <div class="form__field">
                <span class="form__label">"Content"</span>
                <RichTextField initial_html on_change=on_content/>
            </div>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit" disabled=move || screen.with(|s| s.submitting)>
                    {move || submit_label(kind, &label_mode, screen.with(|s| s.submitting))}
                </button>
                <button class="btn" type="button" on:click=move |_| screen.update(ContentScreen::cancel_form)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
