//! AI Studio: mastering, smart-link, Vevo SEO and ad-campaign assistants.

use leptos::*;
use orbitx::studio::{self, StudioMode, StudioPanel};

use crate::services::copy_text;
use crate::types::AppServices;

fn mode_icon(mode: StudioMode) -> &'static str {
    match mode {
        StudioMode::Mastering => "≋",
        StudioMode::Marketing => "✧",
        StudioMode::Video => "◎",
        StudioMode::Social => "⇆",
    }
}

#[component]
pub fn AiStudio() -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let panel = create_rw_signal(StudioPanel::default());
    let active = create_memo(move |_| panel.with(|p| p.mode));

    let on_generate = move |_| {
        let Some(request) = panel.try_update(|p| p.begin()).flatten() else {
            return;
        };
        let services = services.get_value();
        spawn_local(async move {
            let reply = studio::generate(&*services.gateway, &request).await;
            panel.update(|p| p.finish(reply));
        });
    };

    view! {
        <div class="space-y-8">
            <div class="relative overflow-hidden bg-gradient-to-br from-indigo-900/40 to-purple-900/40 border border-indigo-500/20 p-8 rounded-3xl">
                <div class="relative z-10">
                    <div class="flex items-center gap-3 mb-4">
                        <div class="p-3 bg-indigo-600 rounded-xl text-xl">"✦"</div>
                        <h2 class="text-3xl font-bold">"Artist Tools Suite"</h2>
                    </div>
                    <p class="text-slate-300 max-w-xl">
                        "Professional sound and marketing, powered by OrbitX AI. Use our proprietary AI-powered tools to give your music a professional sound before release."
                    </p>
                </div>
            </div>

            <div class="flex flex-wrap gap-4 p-1.5 bg-slate-900 border border-slate-800 rounded-2xl w-fit">
                {StudioMode::ALL
                    .into_iter()
                    .map(|mode| {
                        let class = move || {
                            if active.get() == mode {
                                "px-6 py-2.5 rounded-xl font-bold flex items-center gap-2 bg-indigo-600 text-white shadow-lg"
                            } else {
                                "px-6 py-2.5 rounded-xl font-bold flex items-center gap-2 text-slate-500 hover:text-slate-300"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| panel.update(|p| p.switch_mode(mode))>
                                <span>{mode_icon(mode)}</span>
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl h-fit">
                    <h3 class="text-xl font-bold mb-4 flex items-center gap-2">
                        <span class="text-indigo-400">"🎙"</span>
                        "Details & Context"
                    </h3>
                    <textarea
                        class="w-full h-48 bg-slate-950 border border-slate-800 rounded-xl p-4 focus:outline-none focus:border-indigo-500 resize-none mb-4"
                        placeholder=move || active.get().placeholder()
                        prop:value=move || panel.with(|p| p.description.clone())
                        on:input=move |ev| panel.update(|p| p.description = event_target_value(&ev))
                    ></textarea>
                    <button
                        class=move || {
                            if panel.with(StudioPanel::can_generate) {
                                "w-full py-4 rounded-xl font-bold flex items-center justify-center gap-2 shadow-lg bg-indigo-600 hover:bg-indigo-700 text-white shadow-indigo-500/20"
                            } else {
                                "w-full py-4 rounded-xl font-bold flex items-center justify-center gap-2 shadow-lg bg-slate-800 text-slate-500"
                            }
                        }
                        disabled=move || !panel.with(StudioPanel::can_generate)
                        on:click=on_generate
                    >
                        {move || if panel.with(|p| p.loading) { "⏳" } else { "➤" }}
                        " Process with AI"
                    </button>
                </div>

                <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl min-h-[400px] flex flex-col">
                    <h3 class="text-xl font-bold mb-4 flex items-center gap-2">
                        <span class="text-purple-400">"✦"</span>
                        "Professional Analysis"
                    </h3>
                    <Show
                        when=move || panel.with(|p| !p.response.is_empty())
                        fallback=|| view! {
                            <div class="flex-1 flex flex-col items-center justify-center text-slate-500 py-10 opacity-40">
                                <span class="text-5xl mb-4">"✦"</span>
                                <p class="text-center italic text-sm">"Submit your project details to see AI insights."</p>
                            </div>
                        }
                    >
                        <div class="flex-1 overflow-y-auto">
                            <div class="bg-slate-950/50 p-6 rounded-xl border border-slate-800 text-slate-300 whitespace-pre-wrap leading-relaxed text-sm md:text-base">
                                {move || panel.with(|p| p.response.clone())}
                            </div>
                            <div class="mt-4 flex gap-2">
                                <button
                                    class="text-xs bg-slate-800 hover:bg-slate-700 px-3 py-1.5 rounded-lg border border-slate-700"
                                    on:click=move |_| copy_text(panel.with_untracked(|p| p.response.clone()))
                                >
                                    "Copy All"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
