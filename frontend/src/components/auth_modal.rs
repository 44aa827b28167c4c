//! Login / signup dialog.
//!
//! Mounted fresh on every open, so the copy always starts from the mode the
//! opening action asked for. Any submission signs in after the simulated delay.

use leptos::*;
use orbitx::auth::{self, Credentials};
use orbitx::Shell;

use crate::types::AppServices;

const INPUT_CLASS: &str = "w-full bg-slate-950 border border-slate-800 rounded-2xl py-3.5 pl-12 pr-4 focus:outline-none focus:border-indigo-500";

#[component]
pub fn AuthModal(shell: RwSignal<Shell>) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let mode = create_rw_signal(shell.with_untracked(|s| s.auth_mode));
    let credentials = create_rw_signal(Credentials::default());
    let loading = create_rw_signal(false);

    let copy = move || mode.get().copy();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        loading.set(true);

        let clock = services.with_value(|s| s.clock);
        let mode = mode.get_untracked();
        let credentials = credentials.get_untracked();
        spawn_local(async move {
            auth::authenticate(&clock, mode, &credentials).await;
            loading.set(false);
            shell.update(Shell::on_auth_success);
        });
    };

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-slate-950/80 backdrop-blur-sm">
            <div class="w-full max-w-md bg-slate-900 border border-slate-800 rounded-[2.5rem] overflow-hidden shadow-2xl relative">
                <button
                    class="absolute top-6 right-6 p-2 text-slate-400 hover:text-white hover:bg-slate-800 rounded-full"
                    on:click=move |_| shell.update(Shell::close_modal)
                >
                    "✕"
                </button>

                <div class="p-8 pt-12">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-black mb-2">{move || copy().title}</h2>
                        <p class="text-slate-400">{move || copy().subtitle}</p>
                    </div>

                    <form class="space-y-4" on:submit=on_submit>
                        <Show when=move || mode.get().asks_for_name() fallback=|| view! { }>
                            <div class="space-y-1">
                                <label class="text-xs font-bold text-slate-500 uppercase tracking-widest ml-1">"Full Name"</label>
                                <div class="relative">
                                    <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-500">"👤"</span>
                                    <input
                                        type="text"
                                        required
                                        class=INPUT_CLASS
                                        placeholder="John Doe"
                                        prop:value=move || credentials.with(|c| c.name.clone())
                                        on:input=move |ev| credentials.update(|c| c.name = event_target_value(&ev))
                                    />
                                </div>
                            </div>
                        </Show>

                        <div class="space-y-1">
                            <label class="text-xs font-bold text-slate-500 uppercase tracking-widest ml-1">"Email Address"</label>
                            <div class="relative">
                                <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-500">"✉"</span>
                                <input
                                    type="email"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="artist@orbitx.com"
                                    prop:value=move || credentials.with(|c| c.email.clone())
                                    on:input=move |ev| credentials.update(|c| c.email = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="space-y-1">
                            <label class="text-xs font-bold text-slate-500 uppercase tracking-widest ml-1">"Password"</label>
                            <div class="relative">
                                <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-500">"🔒"</span>
                                <input
                                    type="password"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="••••••••"
                                    prop:value=move || credentials.with(|c| c.password.clone())
                                    on:input=move |ev| credentials.update(|c| c.password = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <Show when=move || !mode.get().asks_for_name() fallback=|| view! { }>
                            <div class="text-right">
                                <button type="button" class="text-xs font-bold text-indigo-400 hover:text-indigo-300">"Forgot Password?"</button>
                            </div>
                        </Show>

                        <button
                            type="submit"
                            class="w-full py-4 bg-indigo-600 hover:bg-indigo-700 text-white rounded-2xl font-black text-lg shadow-xl shadow-indigo-600/20 flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || loading.get()
                        >
                            <Show
                                when=move || loading.get()
                                fallback=move || view! { {move || format!("{} →", copy().submit)} }
                            >
                                <div class="w-6 h-6 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                            </Show>
                        </button>
                    </form>

                    <div class="mt-8 relative">
                        <div class="absolute inset-0 flex items-center">
                            <div class="w-full border-t border-slate-800"></div>
                        </div>
                        <div class="relative flex justify-center text-xs uppercase tracking-widest">
                            <span class="bg-slate-900 px-4 text-slate-500 font-bold">"Or continue with"</span>
                        </div>
                    </div>

                    <div class="mt-6 grid grid-cols-2 gap-4">
                        <button class="flex items-center justify-center gap-2 py-3 bg-slate-950 border border-slate-800 rounded-xl hover:bg-slate-800 text-sm font-bold">
                            "◉ Google"
                        </button>
                        <button class="flex items-center justify-center gap-2 py-3 bg-slate-950 border border-slate-800 rounded-xl hover:bg-slate-800 text-sm font-bold">
                            "⌥ GitHub"
                        </button>
                    </div>

                    <p class="mt-8 text-center text-sm text-slate-500">
                        {move || copy().switch_prompt}
                        " "
                        <button class="text-indigo-400 font-bold hover:underline" on:click=move |_| mode.update(|m| *m = m.toggled())>
                            {move || copy().switch_action}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
