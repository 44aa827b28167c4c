//! YouTube Official Artist Channel: request form, status and bio generator.

use leptos::*;
use orbitx::oac::{self, BioGenerator, OacRequest, OacView, StepStatus, EXPECTED_COMPLETION, VERIFICATION_STEPS};

use crate::config::ARTIST_NAME;
use crate::services::copy_text;
use crate::types::AppServices;

const INPUT_CLASS: &str =
    "w-full bg-slate-950 border border-slate-800 rounded-xl px-4 py-3 focus:border-red-500 outline-none";

#[component]
pub fn YouTubeOac() -> impl IntoView {
    let request = create_rw_signal(OacRequest::default());
    let view_mode = create_memo(move |_| request.with(|r| r.view));
    let confirming = create_memo(move |_| request.with(OacRequest::shows_confirmation));

    let toggle_class = move |target: OacView| {
        move || {
            if view_mode.get() == target {
                "px-4 py-2 rounded-lg text-sm font-bold flex items-center gap-2 bg-red-600 text-white shadow-lg"
            } else {
                "px-4 py-2 rounded-lg text-sm font-bold flex items-center gap-2 text-slate-400 hover:text-slate-200"
            }
        }
    };

    view! {
        <Show when=move || !confirming.get() fallback=move || view! { <Confirmation request=request/> }>
            <div class="space-y-8 pb-20">
                <div class="bg-gradient-to-br from-red-900/40 to-slate-900/40 border border-red-500/20 p-8 rounded-3xl relative overflow-hidden">
                    <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-4 mb-6">
                        <div class="flex items-center gap-3">
                            <div class="p-3 bg-red-600 rounded-2xl shadow-lg shadow-red-600/20 text-xl">"▶"</div>
                            <h2 class="text-3xl font-bold">"Official Artist Channel"</h2>
                        </div>
                        <div class="flex bg-slate-950/50 p-1 rounded-xl border border-slate-800">
                            <button class=toggle_class(OacView::Request) on:click=move |_| request.update(|r| r.show(OacView::Request))>
                                "Request OAC"
                            </button>
                            <button class=toggle_class(OacView::Manage) on:click=move |_| request.update(|r| r.show(OacView::Manage))>
                                "⚙ Manage"
                            </button>
                        </div>
                    </div>
                    <p class="text-slate-300 max-w-xl">
                        {move || match view_mode.get() {
                            OacView::Request => "Verify your brand on YouTube. Merge your personal and topic channels into a single, professional artist presence.",
                            OacView::Manage => "Monitor your verification progress and manage your YouTube Artist Press Kit directly from OrbitX Music.",
                        }}
                    </p>
                </div>

                {move || match view_mode.get() {
                    OacView::Request => view! { <RequestForm request=request/> }.into_view(),
                    OacView::Manage => view! { <Management/> }.into_view(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn Confirmation(request: RwSignal<OacRequest>) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto text-center py-16">
            <div class="w-20 h-20 bg-emerald-500/10 text-emerald-500 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">"✓"</div>
            <h2 class="text-3xl font-bold mb-4">"Request Submitted!"</h2>
            <p class="text-slate-400 mb-8 leading-relaxed">
                "Your request for an Official Artist Channel has been received. Our team will verify your links and submit them to Google. Verification usually takes 2-4 weeks."
            </p>
            <div class="bg-slate-900 border border-slate-800 p-6 rounded-2xl text-left mb-8">
                <h4 class="font-bold mb-2 flex items-center gap-2">
                    <span class="text-indigo-400">"ⓘ"</span>
                    "What happens next?"
                </h4>
                <ul class="text-sm text-slate-400 space-y-2">
                    <li>"• Google will review your release history (minimum 3 official tracks)."</li>
                    <li>"• Your subscribers from personal and topic channels will be merged."</li>
                    <li>"• The music note badge will appear automatically."</li>
                </ul>
            </div>
            <button
                class="bg-indigo-600 hover:bg-indigo-700 text-white px-8 py-3 rounded-xl font-bold"
                on:click=move |_| request.update(|r| r.go_to_management())
            >
                "Go to OAC Management"
            </button>
        </div>
    }
}

#[component]
fn RequestForm(request: RwSignal<OacRequest>) -> impl IntoView {
    let agreed = move || request.with(|r| r.agreed_to_requirements);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        request.update(|r| {
            r.submit();
        });
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 bg-slate-900 border border-slate-800 p-8 rounded-3xl shadow-xl">
                <h3 class="text-xl font-bold mb-6">"Submit New Request"</h3>
                <form class="space-y-6" on:submit=on_submit>
                    <div class="space-y-2">
                        <label class="text-sm font-medium text-slate-400 flex items-center justify-between">
                            <span>"Your Personal YouTube Channel URL"</span>
                            <a href="https://youtube.com" target="_blank" rel="noreferrer" class="text-xs text-indigo-400 hover:underline">
                                "Find URL ↗"
                            </a>
                        </label>
                        <input
                            type="url"
                            required
                            class=INPUT_CLASS
                            placeholder="https://www.youtube.com/channel/..."
                            prop:value=move || request.with(|r| r.personal_channel.clone())
                            on:input=move |ev| request.update(|r| r.personal_channel = event_target_value(&ev))
                        />
                    </div>

                    <div class="space-y-2">
                        <label class="text-sm font-medium text-slate-400 flex items-center justify-between">
                            <span>"YouTube Topic Channel URL"</span>
                            <span class="text-slate-500 cursor-help" title="This is the \"Topic\" channel where your distributed music currently lives.">"ⓘ"</span>
                        </label>
                        <input
                            type="url"
                            required
                            class=INPUT_CLASS
                            placeholder="https://www.youtube.com/channel/..._Topic"
                            prop:value=move || request.with(|r| r.topic_channel.clone())
                            on:input=move |ev| request.update(|r| r.topic_channel = event_target_value(&ev))
                        />
                    </div>

                    <div class="bg-red-500/5 border border-red-500/10 p-4 rounded-xl space-y-3">
                        <h4 class="text-sm font-bold text-red-400">"Requirements Check"</h4>
                        <label class="flex items-start gap-3 text-sm text-slate-400 cursor-pointer select-none">
                            <span class=move || if agreed() { "mt-0.5 shrink-0 text-emerald-500" } else { "mt-0.5 shrink-0 text-slate-600" }>"✓"</span>
                            <input
                                type="checkbox"
                                class="hidden"
                                prop:checked=agreed
                                on:change=move |ev| request.update(|r| r.agreed_to_requirements = event_target_checked(&ev))
                            />
                            <span>
                                "I have at least "
                                <span class="text-white font-bold">"3 official releases"</span>
                                " distributed via OrbitX Music."
                            </span>
                        </label>
                    </div>

                    <button
                        type="submit"
                        class="w-full py-4 bg-red-600 hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed text-white rounded-xl font-bold shadow-lg shadow-red-600/20"
                        disabled=move || !request.with(OacRequest::can_submit)
                    >
                        "Submit OAC Verification"
                    </button>
                </form>
            </div>

            <div class="bg-slate-900 border border-slate-800 p-6 rounded-3xl h-fit">
                <h3 class="text-lg font-bold mb-4">"Verification Steps"</h3>
                <div class="space-y-6">
                    {VERIFICATION_STEPS
                        .iter()
                        .map(|step| {
                            let (badge, title) = match step.status {
                                StepStatus::Ready => ("bg-red-600 text-white", "text-white"),
                                StepStatus::Pending => ("bg-slate-800 text-slate-500", "text-slate-500"),
                            };
                            view! {
                                <div class="flex gap-4">
                                    <div class=format!("w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold shrink-0 {}", badge)>
                                        {step.number}
                                    </div>
                                    <p class=format!("pt-1 text-sm font-bold {}", title)>
                                        {step.title}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Management() -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let bio = create_rw_signal(BioGenerator::default());

    let on_generate = move |_| {
        let Some(request) = bio.try_update(|b| b.begin()).flatten() else {
            return;
        };
        let services = services.get_value();
        spawn_local(async move {
            let reply = oac::generate_bio(&*services.gateway, &request).await;
            bio.update(|b| b.finish(reply));
        });
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            <div class="lg:col-span-2 space-y-8">
                <div class="bg-slate-900 border border-slate-800 rounded-3xl overflow-hidden">
                    <div class="p-6 border-b border-slate-800">
                        <h3 class="text-xl font-bold flex items-center gap-2">
                            <span class="text-red-500">"↺"</span>
                            "Request Status"
                        </h3>
                    </div>
                    <div class="p-6">
                        <div class="flex flex-col md:flex-row gap-6 items-center bg-slate-950/50 p-6 rounded-2xl border border-slate-800">
                            <div class="w-16 h-16 bg-red-600/10 text-red-600 rounded-full flex items-center justify-center shrink-0 text-2xl">"▶"</div>
                            <div class="flex-1 text-center md:text-left">
                                <h4 class="font-bold">{format!("OAC Verification for \"{}\"", ARTIST_NAME)}</h4>
                                <p class="text-sm text-slate-500 mt-1">"Submitted on: April 24, 2024 • Request ID: #YT-9921"</p>
                                <div class="mt-4 flex flex-wrap justify-center md:justify-start gap-4">
                                    <span class="px-3 py-1 bg-amber-500/10 text-amber-500 rounded-full text-xs font-bold">"◷ Under Review"</span>
                                    <span class="px-3 py-1 bg-slate-800 text-slate-400 rounded-full text-xs font-bold">{EXPECTED_COMPLETION}</span>
                                </div>
                            </div>
                            <button class="shrink-0 text-sm text-indigo-400 font-bold hover:underline">"View Details ›"</button>
                        </div>
                    </div>
                </div>

                <div class="bg-slate-900 border border-slate-800 p-8 rounded-3xl shadow-xl">
                    <div class="flex items-center gap-3 mb-6">
                        <div class="p-2 bg-indigo-600/10 text-indigo-400 rounded-lg">"✦"</div>
                        <div>
                            <h3 class="text-xl font-bold">"AI Artist Bio Generator"</h3>
                            <p class="text-sm text-slate-500">"Generate a professional bio for your OAC \"About\" section."</p>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <label class="text-sm text-slate-400">"Describe your style, influences, and career highlights"</label>
                        <textarea
                            class="w-full bg-slate-950 border border-slate-800 rounded-xl px-4 py-3 focus:border-indigo-500 outline-none min-h-[100px] text-sm"
                            placeholder="e.g., Indie pop artist from Austin, TX. Influenced by Lana Del Rey. Recently toured with..."
                            prop:value=move || bio.with(|b| b.traits.clone())
                            on:input=move |ev| bio.update(|b| b.traits = event_target_value(&ev))
                        ></textarea>
                        <button
                            class="bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white px-6 py-2.5 rounded-xl font-bold text-sm flex items-center gap-2"
                            disabled=move || !bio.with(BioGenerator::can_generate)
                            on:click=on_generate
                        >
                            {move || if bio.with(|b| b.generating) { "⏳" } else { "✦" }}
                            " Generate Professional Bio"
                        </button>
                    </div>

                    <Show when=move || bio.with(|b| !b.bio.is_empty()) fallback=|| view! { }>
                        <div class="mt-8 p-6 bg-slate-950 rounded-2xl border border-indigo-500/30">
                            <h4 class="text-xs font-bold text-indigo-400 uppercase tracking-widest mb-3">"AI Suggestion"</h4>
                            <p class="text-sm text-slate-300 leading-relaxed italic">
                                {move || format!("\"{}\"", bio.with(|b| b.bio.clone()))}
                            </p>
                            <div class="mt-4 flex gap-3">
                                <button
                                    class="text-xs bg-slate-800 hover:bg-slate-700 px-3 py-1.5 rounded-lg border border-slate-700"
                                    on:click=move |_| copy_text(bio.with_untracked(|b| b.bio.clone()))
                                >
                                    "Copy to Clipboard"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="space-y-6">
                <div class="bg-slate-900 border border-slate-800 p-6 rounded-3xl">
                    <h3 class="text-lg font-bold mb-4">"OAC Features"</h3>
                    <div class="space-y-4">
                        <OacFeature icon="👥" title="Subscriber Consolidation" text="All fans are united on one channel."/>
                        <OacFeature icon="▶" title="Music Content Shelves" text="Albums and Top Tracks shelves enabled."/>
                        <OacFeature icon="▦" title="Analytics for Artists" text="Access YouTube Studio app for music."/>
                    </div>
                </div>
                <div class="bg-slate-900 border border-slate-800 p-6 rounded-3xl">
                    <h3 class="text-lg font-bold mb-3 flex items-center gap-2">
                        <span class="text-indigo-400">"ⓘ"</span>
                        "OAC Tip"
                    </h3>
                    <p class="text-xs text-slate-400 leading-relaxed">
                        "Ensure your channel header image is updated. OAC channels with consistent branding across their distributed music and channel art get verified faster."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OacFeature(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-3">
            <div class="mt-1 text-red-500">{icon}</div>
            <div>
                <p class="text-sm font-bold">{title}</p>
                <p class="text-xs text-slate-500">{text}</p>
            </div>
        </div>
    }
}
