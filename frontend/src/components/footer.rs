//! Landing footer

use leptos::*;

use crate::config::APP_NAME;

const PRODUCT_LINKS: [(&str, &str); 4] = [
    ("Audio Distribution", "hover:text-white"),
    ("Video Distribution", "hover:text-rose-500"),
    ("AI Studio", "hover:text-white"),
    ("YouTube OAC", "hover:text-white"),
];

const COMPANY_LINKS: [&str; 4] = ["About Us", "Support", "Terms of Service", "Privacy"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-20 border-t border-slate-900">
            <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 md:grid-cols-4 gap-12 text-slate-500">
                <div class="col-span-2 space-y-6">
                    <div class="flex items-center gap-2">
                        <div class="w-8 h-8 bg-indigo-600 rounded-lg flex items-center justify-center text-white">"♫"</div>
                        <span class="text-2xl font-bold text-white tracking-tighter">{APP_NAME}</span>
                    </div>
                    <p class="max-w-xs leading-relaxed">
                        "The global standard for independent music and video distribution. Direct API access to Vevo, Apple Music, and Spotify."
                    </p>
                </div>
                <div class="space-y-4">
                    <h4 class="text-white font-bold">"Product"</h4>
                    <ul class="space-y-2 text-sm">
                        {PRODUCT_LINKS
                            .iter()
                            .map(|(label, hover)| view! {
                                <li><a href="#" class=format!("transition-colors {}", hover)>{*label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="space-y-4">
                    <h4 class="text-white font-bold">"Company"</h4>
                    <ul class="space-y-2 text-sm">
                        {COMPANY_LINKS
                            .iter()
                            .map(|label| view! {
                                <li><a href="#" class="hover:text-white transition-colors">{*label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 mt-20 pt-8 border-t border-slate-900 text-center text-xs text-slate-600">
                "© 2024 OrbitX Music Distribution. All rights reserved."
            </div>
        </footer>
    }
}
