use leptos::*;
use orbitx::catalog::{self, CatalogFilter, CatalogItem, ReleaseStatus, SEATS_LABEL};
use orbitx::ReleaseType;

use crate::types::AppServices;

/// Catalog & distribution board. External releases are read once at mount.
#[component]
pub fn CatalogView(#[prop(into)] on_view_plans: Callback<()>) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let items = services.connected.with_untracked(catalog::catalog_for);
    let filter = create_rw_signal(CatalogFilter::default());

    let visible = move || filter.with(|f| catalog::filter_items(&items, *f));

    view! {
        <div class="space-y-8 pb-20">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div>
                    <h2 class="text-3xl font-bold">"Catalog & Distribution"</h2>
                    <p class="text-slate-400">"Manage release dates, artist seats, and delivery status across Audio & Video."</p>
                </div>

                <div class="flex gap-4">
                    <div class="bg-slate-900 border border-slate-800 p-2 rounded-xl flex items-center gap-2">
                        <span class="text-indigo-400">"👥"</span>
                        <span class="text-xs font-bold text-slate-300">{SEATS_LABEL}</span>
                    </div>
                    <div class="flex bg-slate-900 border border-slate-800 p-1 rounded-xl">
                        {CatalogFilter::ALL
                            .into_iter()
                            .map(|f| {
                                let class = move || {
                                    if filter.get() == f {
                                        "px-4 py-1.5 rounded-lg text-xs font-bold bg-indigo-600 text-white"
                                    } else {
                                        "px-4 py-1.5 rounded-lg text-xs font-bold text-slate-500 hover:text-slate-300"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| filter.set(f)>{f.label()}</button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 gap-6">
                <For each=visible key=|item| item.id let:item>
                    <CatalogRow item=item/>
                </For>
            </div>

            <div class="bg-slate-900/50 border border-dashed border-slate-800 p-8 rounded-3xl flex flex-col items-center justify-center text-center">
                <span class="text-5xl text-slate-800 mb-4">"👥"</span>
                <h4 class="font-bold">"Need more seats?"</h4>
                <p class="text-sm text-slate-500 max-w-sm mb-6">
                    "Upgrade to our Label Plan to manage multiple artist profiles under one dashboard."
                </p>
                <button
                    class="bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-2 rounded-xl text-sm font-bold"
                    on:click=move |_| on_view_plans.call(())
                >
                    "View Label Plans"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CatalogRow(item: CatalogItem) -> impl IntoView {
    let (kind_glyph, kind_color) = match item.kind {
        ReleaseType::Video => ("▶", "text-rose-500"),
        ReleaseType::Audio => ("♫", "text-indigo-500"),
    };
    let bar = match item.status {
        ReleaseStatus::Live | ReleaseStatus::Synced => "bg-emerald-500",
        _ => "bg-indigo-500",
    };
    let percent = item.progress.percent();

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-3xl overflow-hidden hover:border-slate-700 transition-all">
            <div class="p-6 md:p-8 flex flex-col md:flex-row gap-6">
                <div class="flex gap-6 md:w-1/3 shrink-0">
                    <div class="w-24 h-24 bg-slate-800 rounded-2xl overflow-hidden relative shrink-0 shadow-lg">
                        <img src=item.cover_url() class="w-full h-full object-cover" alt=item.title/>
                        <span class=format!("absolute top-1 right-1 text-[10px] {}", kind_color)>{kind_glyph}</span>
                    </div>
                    <div class="flex flex-col justify-center min-w-0">
                        <h3 class="text-xl font-bold truncate mb-1">{item.title}</h3>
                        <p class="text-slate-500 text-sm">{item.artist}</p>
                        <div class="mt-3 flex items-center gap-2">
                            <span class="text-slate-500 text-xs">"📅"</span>
                            <span class="text-xs font-bold text-slate-400">{format!("Release: {}", item.release_date)}</span>
                        </div>
                    </div>
                </div>

                <div class="flex-1 space-y-4">
                    <div class="flex justify-between items-end mb-2">
                        <span class="text-xs font-bold text-slate-500 uppercase tracking-widest">"Delivery Progress"</span>
                        <span class="text-xs font-bold text-indigo-400">{format!("{}%", percent)}</span>
                    </div>
                    <div class="h-1.5 bg-slate-800 rounded-full overflow-hidden">
                        <div class=format!("h-full transition-all duration-1000 {}", bar) style=format!("width: {}%", percent)></div>
                    </div>

                    <div class="grid grid-cols-2 sm:grid-cols-4 gap-3 pt-4">
                        {item
                            .platforms
                            .iter()
                            .map(|platform| {
                                let (glyph, color) = platform.status.icon();
                                view! {
                                    <div class="p-3 rounded-xl bg-slate-950/50 border border-slate-800 flex flex-col justify-between">
                                        <div class="flex justify-between items-start mb-2">
                                            <span class="text-[10px] font-bold text-slate-400 uppercase truncate pr-2">{platform.name}</span>
                                            <span class=format!("text-sm {}", color)>{glyph}</span>
                                        </div>
                                        <span class="text-[9px] font-bold uppercase text-slate-500">{platform.status.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="md:w-12 flex md:flex-col justify-end md:justify-start items-center gap-2">
                    <button class="p-2 hover:bg-slate-800 rounded-lg text-slate-500">"⋮"</button>
                </div>
            </div>
        </div>
    }
}
