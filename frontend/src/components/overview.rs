//! Dashboard landing tab: headline stats, growth chart, shortcuts and
//! recent releases.

use leptos::*;
use orbitx::analytics::{self, GROWTH};
use orbitx::content::{self, OVERVIEW_STATS, QUICK_ACTIONS};
use orbitx::Tab;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 220.0;

#[component]
pub fn Overview(#[prop(into)] on_navigate: Callback<Tab>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4">
                <div>
                    <h2 class="text-3xl font-bold">"Welcome back, Artist!"</h2>
                    <p class="text-slate-400">"Here's a quick look at your music & video dashboard."</p>
                </div>
                <div class="bg-emerald-500/10 border border-emerald-500/20 px-4 py-2 rounded-xl text-emerald-400 text-sm font-bold flex items-center gap-2">
                    <div class="w-2 h-2 bg-emerald-500 rounded-full animate-pulse"></div>
                    "Account Verified"
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {OVERVIEW_STATS
                    .iter()
                    .map(|stat| view! {
                        <div class=format!("bg-slate-900 border border-slate-800 p-6 rounded-2xl hover:border-{}-500/30 transition-all group", stat.accent)>
                            <div class="flex items-center justify-between mb-4">
                                <div class=format!("p-3 bg-{a}-500/10 text-{a}-400 rounded-xl text-xl group-hover:scale-110 transition-transform", a = stat.accent)>
                                    {stat.icon}
                                </div>
                                <span class="text-xs font-bold text-emerald-400 bg-emerald-400/10 px-2 py-1 rounded-md">
                                    {format!("{} ↗", stat.change)}
                                </span>
                            </div>
                            <p class="text-slate-400 text-sm">{stat.label}</p>
                            <p class="text-3xl font-bold mt-1 tracking-tight">{stat.value}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <GrowthChart/>

                <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl flex flex-col">
                    <h3 class="text-xl font-bold mb-6">"Quick Actions"</h3>
                    <div class="space-y-4 flex-1">
                        {QUICK_ACTIONS
                            .iter()
                            .zip([("▶", "rose"), ("♫", "indigo"), ("🌐", "purple")])
                            .map(|(action, (glyph, accent))| {
                                let target = action.target;
                                view! {
                                    <button
                                        class="w-full p-4 bg-slate-950/50 hover:bg-slate-800 border border-slate-800 rounded-xl flex items-center gap-4 text-left group"
                                        on:click=move |_| {
                                            if let Some(tab) = target {
                                                on_navigate.call(tab);
                                            }
                                        }
                                    >
                                        <div class=format!("w-10 h-10 bg-{a}-500/10 text-{a}-400 rounded-lg flex items-center justify-center shrink-0", a = accent)>
                                            {glyph}
                                        </div>
                                        <div>
                                            <p class="text-sm font-bold">{action.title}</p>
                                            <p class="text-xs text-slate-500">{action.subtitle}</p>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                <div class="flex justify-between items-center">
                    <h3 class="text-xl font-bold">"Recent Releases"</h3>
                    <button class="text-sm text-indigo-400 font-semibold hover:underline">"View All"</button>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {content::recent_releases()
                        .into_iter()
                        .map(|release| {
                            let badge = if release.is_video {
                                view! {
                                    <div class="px-2 py-1 bg-rose-600 text-[10px] font-bold rounded-md text-white uppercase tracking-wider">"▶ Video"</div>
                                }
                            } else {
                                view! {
                                    <div class="px-2 py-1 bg-indigo-600 text-[10px] font-bold rounded-md text-white uppercase tracking-wider">"Audio"</div>
                                }
                            };
                            view! {
                                <div class="bg-slate-900 border border-slate-800 p-3 rounded-2xl group cursor-pointer hover:border-slate-700">
                                    <div class="relative aspect-square rounded-xl overflow-hidden mb-3">
                                        <img
                                            src=release.artwork_url()
                                            alt="Album Art"
                                            class="object-cover w-full h-full group-hover:scale-110 transition-transform duration-500"
                                        />
                                        <div class="absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 flex items-center justify-center text-white text-4xl">
                                            "▶"
                                        </div>
                                        <div class="absolute top-2 right-2 flex gap-1">{badge}</div>
                                    </div>
                                    <p class="font-bold truncate">{release.title.clone()}</p>
                                    <div class="flex justify-between items-center mt-1">
                                        <p class="text-xs text-slate-500">{release.kind_label()}</p>
                                        <div class="text-xs text-emerald-400">{format!("▶ {}", release.plays)}</div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Streams and views as two stacked area series on a shared axis.
#[component]
fn GrowthChart() -> impl IntoView {
    let streams: Vec<u32> = GROWTH.iter().map(|p| p.streams).collect();
    let views: Vec<u32> = GROWTH.iter().map(|p| p.views).collect();
    let max = analytics::nice_ceiling(streams.iter().chain(&views).copied().max().unwrap_or(0));

    let streams_path = analytics::area_path(&streams, max, CHART_WIDTH, CHART_HEIGHT);
    let views_path = analytics::area_path(&views, max, CHART_WIDTH, CHART_HEIGHT);
    let gridlines: Vec<f64> = (0..=4).map(|i| CHART_HEIGHT * f64::from(i) / 4.0).collect();

    view! {
        <div class="lg:col-span-2 bg-slate-900 border border-slate-800 p-6 rounded-2xl">
            <div class="flex justify-between items-center mb-6">
                <h3 class="text-xl font-bold">"Growth Trends"</h3>
                <select class="bg-slate-950 border border-slate-800 rounded-lg px-3 py-1 text-xs outline-none">
                    <option>"Last 7 days"</option>
                    <option>"Last 30 days"</option>
                </select>
            </div>
            <div class="h-64 w-full">
                <svg
                    viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                    preserveAspectRatio="none"
                    class="w-full h-full overflow-visible"
                >
                    <defs>
                        <linearGradient id="colorStreams" x1="0" y1="0" x2="0" y2="1">
                            <stop offset="5%" stop-color="#6366f1" stop-opacity="0.3"/>
                            <stop offset="95%" stop-color="#6366f1" stop-opacity="0"/>
                        </linearGradient>
                        <linearGradient id="colorViews" x1="0" y1="0" x2="0" y2="1">
                            <stop offset="5%" stop-color="#f43f5e" stop-opacity="0.3"/>
                            <stop offset="95%" stop-color="#f43f5e" stop-opacity="0"/>
                        </linearGradient>
                    </defs>
                    {gridlines
                        .into_iter()
                        .map(|y| view! {
                            <line x1="0" x2=CHART_WIDTH y1=y y2=y stroke="#1e293b" stroke-dasharray="3 3"/>
                        })
                        .collect_view()}
                    <path d=streams_path.area fill="url(#colorStreams)"/>
                    <path d=streams_path.line fill="none" stroke="#6366f1" stroke-width="3"/>
                    <path d=views_path.area fill="url(#colorViews)"/>
                    <path d=views_path.line fill="none" stroke="#f43f5e" stroke-width="3"/>
                </svg>
            </div>
            <div class="flex justify-between text-xs text-slate-400 mt-2">
                {GROWTH.iter().map(|p| view! { <span>{p.month}</span> }).collect_view()}
            </div>
            <div class="flex justify-center gap-6 mt-4">
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 bg-indigo-500 rounded-full"></div>
                    <span class="text-xs text-slate-400">"Audio Streams"</span>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 bg-rose-500 rounded-full"></div>
                    <span class="text-xs text-slate-400">"Video Views"</span>
                </div>
            </div>
        </div>
    }
}
