use leptos::*;
use orbitx::analytics::{self, AUDIENCE_STATS, PLATFORM_SHARES, TOP_COUNTRIES};

const DONUT_BOX: f64 = 220.0;

/// Advanced analytics: top countries, platform split and audience tiles.
#[component]
pub fn AnalyticsView() -> impl IntoView {
    let top = TOP_COUNTRIES.iter().map(|c| c.count).max().unwrap_or(0);
    let shares: Vec<u32> = PLATFORM_SHARES.iter().map(|p| p.percent).collect();
    let center = DONUT_BOX / 2.0;
    let segments = analytics::donut_segments(&shares, (center, center), 60.0, 100.0, 5.0);

    view! {
        <div class="space-y-8">
            <h2 class="text-3xl font-bold">"Advanced Analytics"</h2>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl">
                    <h3 class="text-xl font-bold mb-6 flex items-center gap-2">
                        <span class="text-blue-400">"🌐"</span>
                        "Top Countries"
                    </h3>
                    <div class="h-80 w-full flex flex-col justify-around">
                        {TOP_COUNTRIES
                            .iter()
                            .enumerate()
                            .map(|(i, country)| {
                                let fill = if i == 0 { "bg-indigo-500" } else { "bg-slate-700" };
                                view! {
                                    <div class="flex items-center gap-4" title=country.count.to_string()>
                                        <span class="w-24 shrink-0 text-right text-xs text-slate-400">{country.name}</span>
                                        <div class="flex-1 h-8 border-b border-dashed border-slate-800">
                                            <div
                                                class=format!("h-full rounded-r {}", fill)
                                                style=format!("width: {:.1}%", analytics::bar_percent(country.count, top))
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl">
                    <h3 class="text-xl font-bold mb-6 flex items-center gap-2">
                        <span class="text-emerald-400">"📱"</span>
                        "Platform Distribution"
                    </h3>
                    <div class="h-80 w-full flex flex-col md:flex-row items-center">
                        <div class="flex-1 h-full flex items-center justify-center">
                            <svg viewBox=format!("0 0 {0} {0}", DONUT_BOX) class="h-full max-h-72">
                                {segments
                                    .into_iter()
                                    .zip(PLATFORM_SHARES.iter())
                                    .map(|(d, share)| view! {
                                        <path d=d fill=share.color>
                                            <title>{format!("{}: {}%", share.name, share.percent)}</title>
                                        </path>
                                    })
                                    .collect_view()}
                            </svg>
                        </div>
                        <div class="space-y-3 shrink-0 md:pr-10">
                            {PLATFORM_SHARES
                                .iter()
                                .map(|share| view! {
                                    <div class="flex items-center gap-2">
                                        <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", share.color)></div>
                                        <span class="text-sm text-slate-400">{format!("{} ({}%)", share.name, share.percent)}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {AUDIENCE_STATS
                    .iter()
                    .map(|tile| view! {
                        <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl">
                            <p class="text-slate-500 text-xs font-bold uppercase tracking-wider mb-2">{tile.label}</p>
                            <p class="text-2xl font-bold">{tile.value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
