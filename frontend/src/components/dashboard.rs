//! Authenticated workspace: sidebar, header, active tab and mobile bar.

use leptos::*;
use orbitx::Tab;

use crate::components::{
    AiStudio, AnalyticsView, CatalogView, Header, Integrations, Overview, Plans, UploadSection, VideoDistribution,
    WalletView, YouTubeOac,
};
use crate::config::APP_NAME;

#[component]
pub fn Dashboard(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let active = create_rw_signal(Tab::default());
    let navigate = Callback::new(move |tab: Tab| {
        log::debug!("🧭 Tab -> {}", tab.id());
        active.set(tab);
    });
    let to_catalog = Callback::new(move |_: ()| navigate.call(Tab::Catalog));
    let to_plans = Callback::new(move |_: ()| navigate.call(Tab::Plans));

    let content = move || match active.get() {
        Tab::Overview => view! { <Overview on_navigate=navigate/> }.into_view(),
        Tab::Catalog => view! { <CatalogView on_view_plans=to_plans/> }.into_view(),
        Tab::Upload => view! { <UploadSection on_complete=to_catalog/> }.into_view(),
        Tab::VideoDistribution => view! { <VideoDistribution on_complete=to_catalog/> }.into_view(),
        Tab::Integrations => view! { <Integrations/> }.into_view(),
        Tab::Oac => view! { <YouTubeOac/> }.into_view(),
        Tab::Analytics => view! { <AnalyticsView/> }.into_view(),
        Tab::Wallet => view! { <WalletView/> }.into_view(),
        Tab::AiStudio => view! { <AiStudio/> }.into_view(),
        Tab::Plans => view! { <Plans/> }.into_view(),
        Tab::Settings => view! {
            <div class="text-center py-20 text-slate-500 italic">"Settings feature coming soon..."</div>
        }
        .into_view(),
    };

    view! {
        <div class="flex h-screen bg-slate-950 text-slate-100 overflow-hidden">
            <aside class="w-64 border-r border-slate-800 bg-slate-900/50 hidden md:flex flex-col">
                <div class="p-6 flex items-center gap-3">
                    <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center text-white">"◎"</div>
                    <span class="text-xl font-bold tracking-tight">{APP_NAME}</span>
                </div>

                <nav class="flex-1 px-4 py-4 space-y-1 overflow-y-auto">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| {
                            let class = move || {
                                if active.get() == tab {
                                    "w-full flex items-center gap-3 px-4 py-3 rounded-xl bg-indigo-600/10 text-indigo-400 border border-indigo-500/20"
                                } else {
                                    "w-full flex items-center gap-3 px-4 py-3 rounded-xl text-slate-400 hover:bg-slate-800 hover:text-slate-100"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| navigate.call(tab)>
                                    <span class="w-5 text-center">{tab.icon()}</span>
                                    <span class="font-medium">{tab.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="p-4 border-t border-slate-800">
                    <button
                        class="w-full flex items-center gap-3 px-4 py-3 text-slate-400 hover:text-red-400"
                        on:click=move |_| on_logout.call(())
                    >
                        <span>"⎋"</span>
                        <span>"Log Out"</span>
                    </button>
                </div>
            </aside>

            <main class="flex-1 flex flex-col overflow-hidden">
                <Header on_navigate=navigate/>
                <div class="flex-1 overflow-y-auto p-6">
                    <div class="max-w-6xl mx-auto">{content}</div>
                </div>
            </main>

            <div class="md:hidden fixed bottom-0 left-0 w-full bg-slate-900 border-t border-slate-800 flex justify-around p-3 z-50">
                {Tab::mobile()
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let class = move || {
                            if active.get() == tab { "p-2 rounded-lg text-xl text-indigo-400" } else { "p-2 rounded-lg text-xl text-slate-500" }
                        };
                        view! {
                            <button class=class title=tab.label() on:click=move |_| navigate.call(tab)>{tab.icon()}</button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
