//! Third-party distributor connections.
//!
//! One page-wide sync slot: while any card is syncing every connect button
//! is disabled, and the last handshake result is shown below the cards.

use leptos::*;
use orbitx::integrations::{self, can_connect, ProviderCard};
use orbitx::Provider;

use crate::types::AppServices;

#[component]
pub fn Integrations() -> impl IntoView {
    let syncing = create_rw_signal(None::<Provider>);
    let status = create_rw_signal(None::<String>);

    view! {
        <div class="space-y-8 pb-20">
            <div class="bg-gradient-to-br from-indigo-900/40 to-slate-900/40 border border-indigo-500/20 p-8 rounded-3xl">
                <div class="flex items-center gap-3 mb-4">
                    <div class="p-3 bg-indigo-600 rounded-2xl shadow-lg shadow-indigo-600/20 text-xl">"⛓"</div>
                    <h2 class="text-3xl font-bold">"API Integrations"</h2>
                </div>
                <p class="text-slate-300 max-w-xl">
                    "Connect OrbitX Music to your existing distribution accounts. We'll automatically pull your catalog history and sync your royalty statements into one unified dashboard."
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                {ProviderCard::all()
                    .into_iter()
                    .map(|card| view! { <ProviderPanel card=card syncing=syncing status=status/> })
                    .collect_view()}
            </div>

            <Show when=move || status.with(Option::is_some) fallback=|| view! { }>
                <div class="bg-slate-900 border border-indigo-500/20 p-8 rounded-3xl">
                    <div class="flex items-center gap-3 mb-4">
                        <span class="text-emerald-500 text-2xl">"✓"</span>
                        <h3 class="text-xl font-bold">"Catalog Successfully Synced"</h3>
                    </div>
                    <div class="bg-slate-950/50 p-6 rounded-2xl border border-slate-800 font-mono text-sm text-slate-300 whitespace-pre-wrap leading-relaxed mb-6">
                        {move || status.get().unwrap_or_default()}
                    </div>
                    <div class="flex items-center gap-2 text-indigo-400 text-sm font-bold animate-pulse">
                        "→ Your catalog is now visible in the 'My Catalog' tab."
                    </div>
                </div>
            </Show>

            <div class="bg-slate-900/50 border border-slate-800 p-6 rounded-3xl flex flex-col md:flex-row gap-6 items-center">
                <div class="w-12 h-12 bg-slate-800 rounded-2xl flex items-center justify-center shrink-0 text-slate-400 text-xl">"⛨"</div>
                <div class="space-y-1">
                    <h4 class="font-bold">"Enterprise-Grade Security"</h4>
                    <p class="text-sm text-slate-500 leading-relaxed">
                        "OrbitX Music uses encrypted AES-256 storage for all third-party API keys. We pull only non-sensitive catalog metadata and royalty statements."
                    </p>
                </div>
                <button class="whitespace-nowrap bg-slate-800 hover:bg-slate-700 px-6 py-2 rounded-xl text-sm font-bold">
                    "View Security Policy"
                </button>
            </div>
        </div>
    }
}

fn brand_glyph(provider: Provider) -> &'static str {
    match provider {
        Provider::Distrokid => "◆",
        Provider::Amuse => "⚡",
        Provider::Vevo => "▶",
    }
}

#[component]
fn ProviderPanel(
    card: ProviderCard,
    syncing: RwSignal<Option<Provider>>,
    status: RwSignal<Option<String>>,
) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let connected = services.with_value(|s| s.connected);
    let credential = create_rw_signal(String::new());
    let provider = card.provider;
    let accent = card.accent;

    let is_connected = move || connected.with(|c| c.contains(provider));
    let is_syncing = move || syncing.get() == Some(provider);

    let on_sync = move |_| {
        if syncing.get_untracked().is_some() {
            return;
        }
        syncing.set(Some(provider));
        status.set(None);

        let services = services.get_value();
        spawn_local(async move {
            let reply = integrations::sync_provider(&*services.gateway, &*services.store, provider).await;
            status.set(Some(reply.into_text()));
            syncing.set(None);
        });
    };

    let on_disconnect = move |_| {
        integrations::disconnect_provider(&*services.get_value().store, provider);
        status.set(None);
    };

    view! {
        <div class=move || format!(
            "bg-slate-900 border p-8 rounded-3xl shadow-xl flex flex-col justify-between {}",
            if is_connected() { format!("border-{}-500/50", accent) } else { "border-slate-800".to_string() },
        )>
            <div>
                <div class="flex justify-between items-start mb-6">
                    <div class=format!("w-14 h-14 bg-white/5 rounded-2xl flex items-center justify-center text-2xl text-{}-400", accent)>
                        {brand_glyph(provider)}
                    </div>
                    <Show
                        when=is_connected
                        fallback=move || view! {
                            <span class="bg-slate-800 text-slate-500 text-[10px] font-bold px-2 py-1 rounded-full">
                                {format!("⛨ {}", card.badge)}
                            </span>
                        }
                    >
                        <span class="bg-emerald-500/10 text-emerald-500 text-[10px] font-bold px-2 py-1 rounded-full">"✓ CONNECTED"</span>
                    </Show>
                </div>
                <h3 class="text-2xl font-bold mb-2">{card.brand}</h3>
                <p class="text-slate-400 text-sm mb-6 leading-relaxed">{card.blurb}</p>

                <div class="space-y-2 mb-8">
                    <label class="text-xs font-bold text-slate-500 uppercase tracking-widest">{card.credential_label}</label>
                    <div class="relative">
                        <span class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-600">"🔒"</span>
                        <input
                            type="password"
                            class=format!("w-full bg-slate-950 border border-slate-800 rounded-xl pl-12 pr-4 py-3 focus:border-{}-500 outline-none text-sm", accent)
                            placeholder=card.placeholder
                            disabled=is_connected
                            prop:value=move || credential.get()
                            on:input=move |ev| credential.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <Show
                when=is_connected
                fallback=move || view! {
                    <button
                        class=format!("w-full py-4 bg-{a}-600 hover:bg-{a}-700 disabled:opacity-50 text-white rounded-xl font-bold shadow-lg flex items-center justify-center gap-2", a = accent)
                        disabled=move || !credential.with(|c| can_connect(c, syncing.get()))
                        on:click=on_sync
                    >
                        {move || if is_syncing() { "⏳" } else { "🗄" }}
                        {format!(" {}", card.connect_label)}
                    </button>
                }
            >
                <div class="flex flex-col gap-2">
                    <button
                        class=format!("w-full py-3 bg-{a}-600/10 text-{a}-400 hover:bg-{a}-600/20 rounded-xl font-bold border border-{a}-500/20 flex items-center justify-center gap-2", a = accent)
                        disabled=move || syncing.get().is_some()
                        on:click=on_sync
                    >
                        {move || if is_syncing() { "⏳" } else { "↻" }}
                        {format!(" {}", card.resync_label)}
                    </button>
                    <button class="text-xs text-rose-500 hover:underline mt-2" on:click=on_disconnect>
                        {card.disconnect_label}
                    </button>
                </div>
            </Show>
        </div>
    }
}
