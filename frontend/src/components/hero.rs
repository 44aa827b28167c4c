//! Landing hero

use leptos::*;

#[component]
pub fn Hero(#[prop(into)] on_start: Callback<()>) -> impl IntoView {
    view! {
        <section class="pt-40 pb-24 px-4 relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[1000px] h-[600px] bg-indigo-500/10 blur-[120px] rounded-full -z-10"></div>
            <div class="absolute top-1/2 right-0 w-[400px] h-[400px] bg-rose-500/10 blur-[100px] rounded-full -z-10"></div>

            <div class="max-w-7xl mx-auto text-center">
                <div class="inline-flex items-center gap-2 bg-rose-500/10 border border-rose-500/20 px-4 py-1.5 rounded-full text-rose-400 text-xs font-bold uppercase tracking-widest mb-8 animate-pulse">
                    "▶ Direct Vevo & Apple Music Video Partner"
                </div>
                <h1 class="text-6xl md:text-8xl font-black mb-6 tracking-tight leading-tight">
                    "Distribute Your Music & Video "
                    <br/>
                    <span class="bg-gradient-to-r from-rose-500 via-indigo-500 to-purple-500 bg-clip-text text-transparent">
                        "Globally & Professionally"
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-slate-400 max-w-4xl mx-auto mb-12 leading-relaxed">
                    "OrbitX helps independent artists deliver "
                    <span class="text-white font-bold">"Unlimited Audio"</span>
                    " to Spotify and "
                    <span class="text-rose-500 font-bold">"Premium Music Videos"</span>
                    " directly to Vevo, Apple Music Video, and Tidal."
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                    <button
                        class="group relative px-10 py-5 bg-rose-600 hover:bg-rose-700 rounded-2xl font-black text-xl shadow-2xl shadow-rose-500/30 flex items-center gap-3"
                        on:click=move |_| on_start.call(())
                    >
                        "Start Distributing"
                        <span class="group-hover:translate-x-1 transition-transform">"›"</span>
                    </button>
                    <p class="text-slate-500 font-medium">
                        "Keep "
                        <span class="text-emerald-400">"100% of your royalties"</span>
                        ". No hidden fees."
                    </p>
                </div>

                <div class="mt-20 flex flex-wrap justify-center items-center gap-12 grayscale opacity-50 hover:grayscale-0 hover:opacity-100 transition-all duration-700">
                    <img src="https://upload.wikimedia.org/wikipedia/commons/2/26/Spotify_logo_with_text.svg" class="h-8" alt="Spotify"/>
                    <img src="https://upload.wikimedia.org/wikipedia/commons/2/2a/Apple_Music_logo.svg" class="h-8" alt="Apple Music"/>
                    <span class="text-3xl font-black italic text-rose-600">"vevo"</span>
                    <span class="text-2xl font-bold tracking-tighter">"TIDAL"</span>
                    <img src="https://upload.wikimedia.org/wikipedia/commons/d/df/Amazon_Music_logo.svg" class="h-8" alt="Amazon"/>
                </div>
            </div>
        </section>
    }
}
