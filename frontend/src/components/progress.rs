//! Wizard step indicator.

use leptos::*;

/// Numbered circles 1..=`steps`, filled up to `current`.
///
/// Steps already passed show a check mark.
#[component]
pub fn StepIndicator(
    /// Current step index (0 hides nothing, the caller decides visibility).
    #[prop(into)]
    current: Signal<u8>,
    /// Number of circles.
    steps: u8,
    /// Tailwind color family of reached steps.
    #[prop(default = "indigo")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-12 relative max-w-md mx-auto">
            <div class="absolute top-1/2 left-0 w-full h-0.5 bg-slate-800 -z-10 -translate-y-1/2"></div>
            {(1..=steps)
                .map(|s| {
                    let class = move || {
                        if current.get() >= s {
                            format!(
                                "w-10 h-10 rounded-full flex items-center justify-center font-bold border-2 transition-all bg-{a}-600 border-{a}-600 text-white",
                                a = accent,
                            )
                        } else {
                            "w-10 h-10 rounded-full flex items-center justify-center font-bold border-2 transition-all bg-slate-900 border-slate-800 text-slate-500".to_string()
                        }
                    };
                    view! {
                        <div class=class>
                            {move || if current.get() > s { "✓".to_string() } else { s.to_string() }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
