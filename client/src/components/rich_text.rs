//! Rich-text field backed by the browser editor bridge.
//!
//! ARCHITECTURE
//! ============
//! The editor widget is plain JavaScript exposed on `window.ConsoleEditor`
//! by `public/editor-bridge.js`:
//!
//! - `mount(element, html, onChange) -> handle` builds an editor inside
//!   `element`, seeded with `html`, and calls `onChange(html)` on every edit.
//! - `destroy(handle)` tears it down.
//!
//! The field renders a placeholder first. The mount happens inside an
//! effect, which only runs once the component is live in the browser, so the
//! widget is never constructed during server rendering. Dropping the stored
//! handle on cleanup destroys the widget.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
mod bridge {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    /// A mounted editor. Destroys the widget when dropped.
    pub struct EditorHandle {
        handle: JsValue,
        _on_change: Closure<dyn FnMut(String)>,
    }

    fn editor_api() -> Result<JsValue, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let api = js_sys::Reflect::get(&window, &JsValue::from_str("ConsoleEditor"))?;
        if api.is_undefined() {
            return Err(JsValue::from_str("window.ConsoleEditor is not loaded"));
        }
        Ok(api)
    }

    fn method(api: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
        js_sys::Reflect::get(api, &JsValue::from_str(name))?.dyn_into::<js_sys::Function>()
    }

    pub fn mount(
        element: &web_sys::HtmlElement,
        html: &str,
        on_change: impl FnMut(String) + 'static,
    ) -> Result<EditorHandle, JsValue> {
        let api = editor_api()?;
        let cb = Closure::wrap(Box::new(on_change) as Box<dyn FnMut(String)>);
        let handle = method(&api, "mount")?.call3(&api, element, &JsValue::from_str(html), cb.as_ref())?;
        Ok(EditorHandle { handle, _on_change: cb })
    }

    impl Drop for EditorHandle {
        fn drop(&mut self) {
            let Ok(api) = editor_api() else {
                return;
            };
            if let Ok(destroy) = method(&api, "destroy") {
                let _ = destroy.call1(&api, &self.handle);
            }
        }
    }
}

/// Editor for an HTML body.
///
/// `initial_html` seeds the widget once; later edits flow out through
/// `on_change` as the widget's serialized HTML.
#[component]
pub fn RichTextField(#[prop(into)] initial_html: String, on_change: Callback<String>) -> impl IntoView {
    let host = NodeRef::<leptos::html::Div>::new();
    let mounted = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let editor = StoredValue::new_local(None::<bridge::EditorHandle>);
        Effect::new(move || {
            let Some(element) = host.get() else {
                return;
            };
            if editor.with_value(Option::is_some) {
                return;
            }
            match bridge::mount(&element, &initial_html, move |html| on_change.run(html)) {
                Ok(handle) => {
                    editor.set_value(Some(handle));
                    mounted.set(true);
                }
                Err(e) => log::warn!("rich text editor failed to mount: {e:?}"),
            }
        });
        on_cleanup(move || {
            let _ = editor.try_update_value(|slot| *slot = None);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (initial_html, on_change);

    view! {
        <div class="rich-text">
            <Show when=move || !mounted.get()>
                <div class="rich-text__placeholder">
                    <div class="spinner" aria-label="Loading editor"></div>
                </div>
            </Show>
            <div class="rich-text__host" node_ref=host></div>
        </div>
    }
}
