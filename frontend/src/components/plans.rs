use leptos::*;
use orbitx::content::{Plan, BILLING_PERIOD, PLANS};

#[component]
pub fn Plans() -> impl IntoView {
    view! {
        <div class="space-y-12">
            <div class="text-center">
                <h2 class="text-3xl font-bold mb-4">"Choose the right plan for you"</h2>
                <p class="text-slate-400">"Take your music & video career to the next level with OrbitX Music"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {PLANS.iter().map(|plan| view! { <PlanCard plan=*plan/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan) -> impl IntoView {
    let frame = if plan.popular {
        "bg-slate-900 border-indigo-500/50 shadow-2xl shadow-indigo-500/10 scale-105 z-10"
    } else {
        "bg-slate-900 border-slate-800"
    };
    let button = if plan.current {
        "bg-slate-800 text-slate-400 cursor-default"
    } else {
        "bg-indigo-600 hover:bg-indigo-700 text-white shadow-lg shadow-indigo-500/20"
    };

    view! {
        <div class=format!("relative p-8 rounded-3xl border flex flex-col {}", frame)>
            <Show when=move || plan.popular fallback=|| view! { }>
                <span class="absolute -top-4 left-1/2 -translate-x-1/2 bg-indigo-600 text-white text-xs font-bold px-4 py-1.5 rounded-full uppercase tracking-widest">
                    "Most Popular"
                </span>
            </Show>

            <div class="mb-6">
                <div class="w-12 h-12 bg-slate-800 rounded-2xl flex items-center justify-center mb-4 text-xl text-indigo-400">
                    {plan.icon}
                </div>
                <h3 class="text-2xl font-bold mb-1">{plan.name}</h3>
                <p class="text-slate-500 text-sm">{plan.description}</p>
            </div>

            <div class="mb-8">
                <span class="text-4xl font-black">{plan.price}</span>
                <span class="text-slate-500 text-sm ml-2">{BILLING_PERIOD}</span>
            </div>

            <div class="space-y-4 mb-10 flex-1">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <div class="flex items-center gap-3">
                            <div class="w-5 h-5 bg-indigo-500/10 rounded-full flex items-center justify-center shrink-0 text-indigo-400 text-xs">"✓"</div>
                            <span class="text-sm text-slate-300">{*feature}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button class=format!("w-full py-4 rounded-2xl font-bold {}", button)>{plan.cta}</button>
        </div>
    }
}
