//! Delivery log console with auto-scroll.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run `f` on the next animation frame, once the DOM has caught up.
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("⚠️  requestAnimationFrame unavailable, skipping log scroll");
        return;
    }
    closure.forget();
}

/// Monospace list of timestamped delivery lines.
///
/// Scrolls to the newest line whenever `lines` grows and shows a pulsing
/// cursor while `active`.
#[component]
pub fn DeliveryLog(
    #[prop(into)] lines: Signal<Vec<String>>,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    let container = create_node_ref::<leptos::html::Div>();

    create_effect(move |_| {
        let _ = lines.with(Vec::len);
        if let Some(container) = container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div
            class="bg-slate-950 border border-slate-800 rounded-2xl p-6 font-mono text-xs space-y-2 max-h-48 overflow-y-auto"
            node_ref=container
        >
            <For
                each=move || lines.get().into_iter().enumerate()
                key=|(i, _)| *i
                children=move |(_, line)| {
                    view! {
                        <div class="text-slate-400 border-l-2 border-rose-500/20 pl-3 py-1">{line}</div>
                    }
                }
            />
            <Show when=move || active.get() fallback=|| view! { }>
                <div class="text-rose-500 animate-pulse">"_ Syncing next platform bundle..."</div>
            </Show>
        </div>
    }
}
