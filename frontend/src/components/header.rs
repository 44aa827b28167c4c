use leptos::*;
use orbitx::Tab;

use crate::config::{ARTIST_NAME, PROFILE_IMAGE, SEARCH_PLACEHOLDER};

/// Dashboard top bar: search, release shortcuts and the artist badge.
#[component]
pub fn Header(#[prop(into)] on_navigate: Callback<Tab>) -> impl IntoView {
    let (search, set_search) = create_signal(String::new());

    view! {
        <header class="h-16 border-b border-slate-800 flex items-center justify-between px-6 bg-slate-950/50">
            <div class="relative w-96 hidden lg:block">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-500">"⌕"</span>
                <input
                    type="text"
                    class="w-full bg-slate-900 border border-slate-800 rounded-full py-2 pl-10 pr-4 focus:outline-none focus:border-indigo-500 text-sm"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            <div class="flex items-center gap-4">
                <button
                    class="bg-indigo-600 hover:bg-indigo-700 text-white px-4 py-1.5 rounded-full text-sm font-semibold items-center gap-2 hidden sm:flex"
                    on:click=move |_| on_navigate.call(Tab::Upload)
                >
                    "+ New Audio"
                </button>
                <button
                    class="bg-rose-600 hover:bg-rose-700 text-white px-4 py-1.5 rounded-full text-sm font-semibold items-center gap-2 hidden sm:flex"
                    on:click=move |_| on_navigate.call(Tab::VideoDistribution)
                >
                    "▶ New Video"
                </button>
                <button class="relative p-2 text-slate-400 hover:text-slate-100">
                    "🔔"
                    <span class="absolute top-2 right-2 w-2 h-2 bg-indigo-500 rounded-full"></span>
                </button>
                <div class="flex items-center gap-3 pl-4 border-l border-slate-800">
                    <div class="text-right hidden sm:block">
                        <p class="text-sm font-semibold">{ARTIST_NAME}</p>
                        <p class="text-xs text-slate-500">"Free Plan"</p>
                    </div>
                    <img src=PROFILE_IMAGE alt="Profile" class="w-10 h-10 rounded-full border border-slate-700"/>
                </div>
            </div>
        </header>
    }
}
