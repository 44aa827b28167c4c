//! Public marketing page.
//!
//! Both callbacks go through the session gate in `Shell`: "Log In" style
//! actions open the login copy, "Sign Up" style actions the signup copy.

use leptos::*;
use orbitx::content::{FEATURES, PAYOUT_PERKS, VIDEO_HIGHLIGHTS};

use crate::components::{Footer, Hero};
use crate::config::APP_NAME;

const FEATURE_ACCENTS: [&str; 6] = [
    "text-indigo-400",
    "text-rose-400",
    "text-amber-400",
    "text-emerald-400",
    "text-purple-400",
    "text-sky-400",
];

const PERK_ICONS: [(&str, &str); 3] = [("$", "text-emerald-400"), ("⚡", "text-amber-400"), ("✓", "text-indigo-400")];

#[component]
pub fn Landing(
    #[prop(into)] on_enter_dashboard: Callback<()>,
    #[prop(into)] on_start_distributing: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-950 text-slate-100 overflow-x-hidden">
            <nav class="fixed top-0 w-full z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <div class="flex items-center gap-2">
                            <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center text-white">"♫"</div>
                            <span class="text-xl font-bold bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                                {APP_NAME}
                            </span>
                        </div>
                        <div class="hidden md:flex items-center gap-8 text-sm font-medium text-slate-400">
                            <a href="#video" class="hover:text-rose-400 transition-colors">"Video Distribution"</a>
                            <a href="#features" class="hover:text-white transition-colors">"Features"</a>
                            <a href="#payouts" class="hover:text-white transition-colors">"Royalties & Payouts"</a>
                        </div>
                        <div class="flex items-center gap-4">
                            <button
                                class="text-slate-400 hover:text-white font-semibold hidden sm:block"
                                on:click=move |_| on_enter_dashboard.call(())
                            >
                                "Log In"
                            </button>
                            <button
                                class="bg-indigo-600 hover:bg-indigo-700 text-white px-6 py-2 rounded-full font-semibold shadow-lg shadow-indigo-500/20"
                                on:click=move |_| on_start_distributing.call(())
                            >
                                "Sign Up"
                            </button>
                        </div>
                    </div>
                </div>
            </nav>

            <Hero on_start=on_start_distributing/>

            <section id="video" class="py-24 px-4 bg-slate-900/20 border-y border-slate-900 relative">
                <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <div class="relative group">
                        <div class="relative rounded-[2.5rem] overflow-hidden border border-slate-800 aspect-video shadow-2xl">
                            <img
                                src="https://images.unsplash.com/photo-1493225255756-d9584f8606e9?auto=format&fit=crop&q=80&w=1200"
                                class="w-full h-full object-cover grayscale group-hover:grayscale-0 transition-all duration-700"
                                alt="Premium Music Video"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-slate-950 via-transparent to-transparent"></div>
                            <div class="absolute bottom-8 left-8 right-8 flex justify-between items-end">
                                <div class="bg-black/40 backdrop-blur-md border border-white/10 p-4 rounded-2xl">
                                    <p class="text-xs font-bold text-rose-400 uppercase tracking-widest mb-1">"Live Tracking"</p>
                                    <p class="text-lg font-bold">"Vevo Channel Active"</p>
                                </div>
                                <div class="w-12 h-12 bg-rose-600 rounded-full flex items-center justify-center shadow-lg animate-bounce">"▶"</div>
                            </div>
                        </div>
                    </div>

                    <div class="space-y-8">
                        <div class="p-3 bg-rose-500/10 text-rose-500 rounded-2xl w-fit text-3xl">"📺"</div>
                        <h2 class="text-4xl md:text-6xl font-black tracking-tight leading-tight">
                            "Your Music Video on "
                            <br/>
                            <span class="text-rose-500">"Every Big Screen."</span>
                        </h2>
                        <p class="text-lg text-slate-400 leading-relaxed">
                            "Metadata optimization and high-quality video uploads for direct distribution to the Vevo platform. We handle the technical certification for Apple Music Video and Tidal."
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {VIDEO_HIGHLIGHTS
                                .iter()
                                .map(|item| view! {
                                    <div class="flex items-center gap-3 text-sm font-bold text-slate-300">
                                        <span class="text-emerald-500">"✓"</span>
                                        {*item}
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="inline-flex items-center gap-2 text-rose-500 font-bold hover:gap-4 transition-all"
                            on:click=move |_| on_enter_dashboard.call(())
                        >
                            "Learn about Video Distribution ↗"
                        </button>
                    </div>
                </div>
            </section>

            <section id="features" class="py-32 px-4 bg-slate-950">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-20">
                        <h2 class="text-4xl md:text-5xl font-bold mb-6">"Complete Artist Ecosystem"</h2>
                        <p class="text-slate-500 max-w-2xl mx-auto italic">
                            "Comprehensive tools for professional and independent artists under one roof."
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {FEATURES
                            .iter()
                            .zip(FEATURE_ACCENTS)
                            .map(|(feature, accent)| view! {
                                <div class="p-10 rounded-[2.5rem] bg-slate-900/50 border border-slate-900 hover:border-indigo-500/20 transition-all hover:-translate-y-2 group">
                                    <div class=format!("w-16 h-16 bg-slate-950 rounded-2xl flex items-center justify-center mb-8 border border-slate-800 text-3xl group-hover:scale-110 transition-transform {}", accent)>
                                        {feature.icon}
                                    </div>
                                    <h3 class="text-2xl font-bold mb-4">{feature.title}</h3>
                                    <p class="text-slate-500 leading-relaxed text-sm">{feature.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="payouts" class="py-24 px-4 bg-indigo-600/5 border-t border-slate-900 overflow-hidden relative">
                <div class="max-w-7xl mx-auto flex flex-col lg:flex-row gap-16 items-center">
                    <div class="lg:w-1/2 space-y-8">
                        <div class="inline-block px-4 py-1.5 bg-emerald-500/10 border border-emerald-500/20 rounded-full text-emerald-400 text-xs font-bold uppercase tracking-widest">
                            "Financial Empowerment"
                        </div>
                        <h2 class="text-4xl md:text-6xl font-black tracking-tight leading-tight">
                            "Keep Every Cent. "
                            <br/>
                            <span class="text-indigo-500">"Get Paid Faster."</span>
                        </h2>
                        <div class="space-y-6">
                            {PAYOUT_PERKS
                                .iter()
                                .zip(PERK_ICONS)
                                .map(|(perk, (glyph, color))| view! {
                                    <div class="flex gap-4">
                                        <div class=format!("w-12 h-12 bg-slate-900 border border-slate-800 rounded-2xl flex items-center justify-center shrink-0 text-xl {}", color)>
                                            {glyph}
                                        </div>
                                        <div>
                                            <h4 class="text-xl font-bold">{perk.title}</h4>
                                            <p class="text-slate-500 text-sm mt-1">{perk.description}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:w-1/2 w-full">
                        <div class="bg-slate-900 border border-slate-800 p-8 rounded-[3rem] shadow-2xl relative overflow-hidden">
                            <p class="text-sm font-bold text-slate-500 uppercase tracking-[0.2em] mb-4">"Live Earnings Hub"</p>
                            <p class="text-6xl font-black mb-2">"$12,402.15"</p>
                            <p class="text-emerald-400 font-bold mb-8">"📈 +$842.00 this month"</p>
                            <div class="space-y-4">
                                <div class="flex justify-between items-center p-4 bg-slate-950 rounded-2xl border border-slate-800">
                                    <div class="flex items-center gap-3">
                                        <div class="w-8 h-8 bg-indigo-600/10 rounded-lg flex items-center justify-center text-indigo-400 font-bold text-xs italic">"vv"</div>
                                        <span class="text-sm font-bold">"Vevo Royalty Sync"</span>
                                    </div>
                                    <span class="text-sm font-black">"$421.20"</span>
                                </div>
                                <div class="flex justify-between items-center p-4 bg-slate-950 rounded-2xl border border-slate-800">
                                    <div class="flex items-center gap-3">
                                        <div class="w-8 h-8 bg-emerald-600/10 rounded-lg flex items-center justify-center text-emerald-400 font-bold text-xs italic">"sp"</div>
                                        <span class="text-sm font-bold">"Spotify Direct Feed"</span>
                                    </div>
                                    <span class="text-sm font-black">"$2,104.50"</span>
                                </div>
                            </div>
                            <button
                                class="w-full mt-8 py-4 bg-white text-slate-950 rounded-2xl font-black text-lg hover:bg-slate-200 flex items-center justify-center gap-2 shadow-xl"
                                on:click=move |_| on_enter_dashboard.call(())
                            >
                                "Withdraw Funds Now ›"
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-32 px-4 text-center">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-5xl md:text-7xl font-black mb-8 leading-tight">
                        "Ready to join the "
                        <br/>
                        <span class="text-rose-500 italic">"OrbitX Elite?"</span>
                    </h2>
                    <p class="text-xl text-slate-400 mb-12 max-w-2xl mx-auto">
                        "Start distributing your audio and videos globally with the fastest ingestion pipeline in the industry."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="px-12 py-6 bg-indigo-600 hover:bg-indigo-700 text-white rounded-3xl font-black text-2xl shadow-2xl shadow-indigo-600/30"
                            on:click=move |_| on_start_distributing.call(())
                        >
                            "Get Started Free"
                        </button>
                        <button class="px-12 py-6 bg-slate-900 hover:bg-slate-800 text-white border border-slate-800 rounded-3xl font-black text-2xl">
                            "Label Services"
                        </button>
                    </div>
                    <p class="mt-8 text-slate-500 font-bold">
                        <span class="text-amber-500">"★"</span>
                        " Rated 4.9/5 by 10k+ independent creators"
                    </p>
                </div>
            </section>

            <Footer/>
        </div>
    }
}
