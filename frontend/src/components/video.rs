//! Music video distribution wizard.

use leptos::*;
use orbitx::release::GENRES;
use orbitx::video::{self, VideoMetadata, VideoWizard, DISTRIBUTION_TARGETS};

use crate::components::{DeliveryLog, StepIndicator};
use crate::types::AppServices;

const INPUT_CLASS: &str =
    "w-full bg-slate-950 border border-slate-800 rounded-xl px-4 py-3 focus:border-rose-500 outline-none";

#[component]
pub fn VideoDistribution(
    /// "Go to Catalog" once delivery finished.
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let wizard = create_rw_signal(VideoWizard::new());
    let step = create_memo(move |_| wizard.with(|w| w.step.index()));

    view! {
        <div class="max-w-4xl mx-auto pb-20">
            <div class="mb-10 text-center">
                <h2 class="text-3xl font-bold mb-2 flex items-center justify-center gap-3">
                    <span class="text-rose-500">"▶"</span>
                    "High-Tier Video Distribution"
                </h2>
                <p class="text-slate-400">"Direct syndication to Vevo and Apple Music Video backbone."</p>
            </div>

            <Show when=move || { step.get() < 3 } fallback=|| view! { }>
                <StepIndicator current=Signal::derive(move || step.get() + 1) steps=3 accent="rose"/>
            </Show>

            <div class="bg-slate-900 border border-slate-800 rounded-3xl p-8 shadow-xl">
                {move || match step.get() {
                    0 => view! { <MasterAssets wizard=wizard/> }.into_view(),
                    1 => view! { <MetadataForm wizard=wizard/> }.into_view(),
                    2 => view! { <ComplianceReview wizard=wizard/> }.into_view(),
                    _ => view! { <Delivery wizard=wizard on_complete=on_complete/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn MasterAssets(wizard: RwSignal<VideoWizard>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <h3 class="text-xl font-bold flex items-center gap-2">
                <span class="text-rose-400">"▣"</span>
                "Step 1: Upload Master Assets"
            </h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="space-y-4">
                    <label class="block text-sm font-medium text-slate-400">"Master Video (ProRes / 4K MP4)"</label>
                    <div class="border-2 border-dashed border-slate-800 rounded-2xl p-8 flex flex-col items-center justify-center gap-4 bg-slate-950/50 cursor-pointer hover:border-rose-500/50">
                        <div class="p-4 bg-rose-500/10 text-rose-400 rounded-full text-3xl">"⇪"</div>
                        <div class="text-center">
                            <p class="font-bold">"Select Master"</p>
                            <p class="text-xs text-slate-500 mt-1">"Apple HQ standards required"</p>
                        </div>
                    </div>
                </div>
                <div class="space-y-4">
                    <label class="block text-sm font-medium text-slate-400">"Poster Artwork (No Watermarks)"</label>
                    <div class="border-2 border-dashed border-slate-800 rounded-2xl p-8 flex flex-col items-center justify-center gap-4 bg-slate-950/50 cursor-pointer hover:border-indigo-500/50">
                        <div class="p-4 bg-indigo-500/10 text-indigo-400 rounded-full text-3xl">"▨"</div>
                        <div class="text-center">
                            <p class="font-bold">"Thumbnail Art"</p>
                            <p class="text-xs text-slate-500 mt-1">"1920x1080 or 4K JPG/PNG"</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="flex justify-end">
                <button
                    class="bg-rose-600 hover:bg-rose-700 text-white px-8 py-3 rounded-xl font-bold flex items-center gap-2 shadow-lg shadow-rose-600/20"
                    on:click=move |_| wizard.update(|w| w.configure_metadata())
                >
                    "Configure Metadata ›"
                </button>
            </div>
        </div>
    }
}

/// One labelled text input bound to a metadata field.
#[component]
fn MetadataField(
    wizard: RwSignal<VideoWizard>,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    get: fn(&VideoMetadata) -> &String,
    set: fn(&mut VideoMetadata) -> &mut String,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="text-sm text-slate-400">{label}</label>
            <input
                type=kind
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || wizard.with(|w| get(&w.metadata).clone())
                on:input=move |ev| wizard.update(|w| *set(&mut w.metadata) = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn MetadataForm(wizard: RwSignal<VideoWizard>) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let submitting = move || wizard.with(|w| w.submitting);

    let on_audit = move |_| {
        let Some(request) = wizard.try_update(|w| w.begin_audit()).flatten() else {
            return;
        };
        let services = services.get_value();
        spawn_local(async move {
            let reply = video::run_audit(&*services.gateway, &request).await;
            wizard.update(|w| w.finish_audit(reply));
        });
    };

    view! {
        <div class="space-y-6">
            <h3 class="text-xl font-bold flex items-center gap-2">
                <span class="text-rose-400">"#"</span>
                "Step 2: Universal Video Metadata"
            </h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <MetadataField wizard=wizard label="Official Video Title" placeholder="e.g. Moonlight"
                    get=|m| &m.title set=|m| &mut m.title/>
                <MetadataField wizard=wizard label="Primary Artist" placeholder="Artist Name"
                    get=|m| &m.artist set=|m| &mut m.artist/>
                <MetadataField wizard=wizard label="Director" placeholder="Full Director Credit"
                    get=|m| &m.director set=|m| &mut m.director/>
                <MetadataField wizard=wizard label="Producer" placeholder="Video Producer"
                    get=|m| &m.producer set=|m| &mut m.producer/>
                <MetadataField wizard=wizard label="Production Company" placeholder="Studio or Collective"
                    get=|m| &m.production_company set=|m| &mut m.production_company/>
                <MetadataField wizard=wizard label="Label" placeholder="Independent"
                    get=|m| &m.label set=|m| &mut m.label/>
                <MetadataField wizard=wizard label="ISRC Code" placeholder="QM-AAA-24-XXXXX"
                    get=|m| &m.isrc set=|m| &mut m.isrc/>
                <MetadataField wizard=wizard label="UPC" placeholder="12-digit UPC"
                    get=|m| &m.upc set=|m| &mut m.upc/>
                <div class="space-y-2">
                    <label class="text-sm text-slate-400">"Genre"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || wizard.with(|w| w.metadata.genre.clone())
                        on:change=move |ev| wizard.update(|w| w.metadata.genre = event_target_value(&ev))
                    >
                        {GENRES
                            .iter()
                            .map(|genre| view! { <option value=*genre>{*genre}</option> })
                            .collect_view()}
                    </select>
                </div>
                <MetadataField wizard=wizard label="Release Date" placeholder="" kind="date"
                    get=|m| &m.release_date set=|m| &mut m.release_date/>
                <label class="md:col-span-2 flex items-center gap-3 text-sm text-slate-400 cursor-pointer">
                    <input
                        type="checkbox"
                        class="w-4 h-4 accent-rose-600"
                        prop:checked=move || wizard.with(|w| w.metadata.explicit)
                        on:change=move |ev| wizard.update(|w| w.metadata.explicit = event_target_checked(&ev))
                    />
                    "Contains explicit content"
                </label>
                <div class="md:col-span-2 space-y-2">
                    <label class="text-sm text-slate-400">"Platform-Specific Description"</label>
                    <textarea
                        class=format!("{} min-h-[80px]", INPUT_CLASS)
                        placeholder="Vevo/Apple description guidelines apply..."
                        prop:value=move || wizard.with(|w| w.metadata.description.clone())
                        on:input=move |ev| wizard.update(|w| w.metadata.description = event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <div class="flex justify-between pt-6">
                <button
                    class="text-slate-400 hover:text-white px-6 py-3 font-bold"
                    disabled=submitting
                    on:click=move |_| wizard.update(|w| w.back())
                >
                    "Back"
                </button>
                <button
                    class="bg-rose-600 hover:bg-rose-700 disabled:opacity-50 text-white px-8 py-3 rounded-xl font-bold flex items-center gap-2 shadow-lg shadow-rose-600/20"
                    disabled=move || !wizard.with(|w| w.can_audit())
                    on:click=on_audit
                >
                    {move || if submitting() { "⏳" } else { "✦" }}
                    " Run AI Compliance Audit"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ComplianceReview(wizard: RwSignal<VideoWizard>) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());

    let on_deliver = move |_| {
        if !wizard.try_update(|w| w.begin_delivery()).unwrap_or(false) {
            return;
        }
        let services = services.get_value();
        let metadata = wizard.with_untracked(|w| w.metadata.clone());
        spawn_local(async move {
            let emit = |event: video::DeliveryEvent| wizard.update(|w| w.apply(event));
            match video::deliver(&*services.gateway, &services.clock, &metadata, emit).await {
                Ok(_) => log::info!("✅ Video delivery handed off"),
                Err(e) => log::warn!("⚠️  Video delivery stopped early: {}", e),
            }
        });
    };

    view! {
        <div class="space-y-8">
            <div class="bg-indigo-500/10 border border-indigo-500/20 p-6 rounded-2xl flex items-start gap-4">
                <span class="text-indigo-400 text-2xl shrink-0">"✦"</span>
                <div>
                    <h4 class="font-bold text-indigo-400 mb-1">"Global Video Compliance Report"</h4>
                    <div class="text-sm text-slate-300 whitespace-pre-wrap leading-relaxed">
                        {move || wizard.with(|w| w.report_summary().to_string())}
                    </div>
                </div>
            </div>

            <div class="bg-slate-950 border border-slate-800 p-6 rounded-2xl">
                <div class="flex items-center gap-3 mb-4">
                    <span class="text-slate-500">"🌐"</span>
                    <h4 class="font-bold text-sm uppercase tracking-widest text-slate-500">"Distribution Targets"</h4>
                </div>
                <div class="flex flex-wrap gap-3">
                    {DISTRIBUTION_TARGETS
                        .iter()
                        .map(|target| view! {
                            <span class="px-3 py-1 bg-slate-900 border border-slate-800 rounded-lg text-xs text-slate-400 flex items-center gap-2">
                                <span class="text-emerald-500">"✓"</span>
                                {*target}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="text-center pt-8 border-t border-slate-800">
                <div class="flex justify-center gap-4">
                    <button
                        class="text-slate-400 hover:text-white px-8 py-3 font-bold"
                        on:click=move |_| wizard.update(|w| w.back())
                    >
                        "Back to Metadata"
                    </button>
                    <button
                        class="bg-rose-600 hover:bg-rose-700 text-white px-10 py-4 rounded-2xl font-black text-lg shadow-xl shadow-rose-600/30 flex items-center gap-3"
                        on:click=on_deliver
                    >
                        "Start Global Delivery ⚡"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Delivery(wizard: RwSignal<VideoWizard>, on_complete: Callback<()>) -> impl IntoView {
    let submitting = Signal::derive(move || wizard.with(|w| w.submitting));
    let lines = Signal::derive(move || wizard.with(|w| w.delivery_log.clone()));

    view! {
        <div class="space-y-8">
            <div class="text-center">
                <div class="inline-block p-6 bg-rose-600/10 text-rose-500 rounded-full mb-6 text-5xl">
                    {move || if submitting.get() { "⏳" } else { "✓" }}
                </div>
                <h3 class="text-2xl font-bold mb-2">{move || wizard.with(|w| w.delivery_headline())}</h3>
                <p class="text-slate-500 text-sm max-w-sm mx-auto">
                    {move || if submitting.get() {
                        "Your 4K asset is being trans-coded and pushed to Apple and Vevo ingestion nodes."
                    } else {
                        "Assets have been handed off to Apple Music Video and Vevo. QC normally takes 2-5 business days."
                    }}
                </p>
            </div>

            <DeliveryLog lines=lines active=submitting/>

            <Show
                when=move || !submitting.get() && wizard.with(|w| w.package.is_some())
                fallback=|| view! { }
            >
                <div class="bg-slate-900 border border-indigo-500/20 p-6 rounded-2xl">
                    <div class="flex items-center gap-2 mb-4">
                        <span class="text-indigo-400">"</>"</span>
                        <span class="text-xs font-bold uppercase tracking-widest text-indigo-400">"Apple Transporter Metadata"</span>
                    </div>
                    <div class="bg-slate-950 p-4 rounded-xl text-[10px] text-slate-500 overflow-x-auto whitespace-pre">
                        {move || wizard.with(|w| w.package.clone().unwrap_or_default())}
                    </div>
                </div>
            </Show>

            <Show when=move || !submitting.get() fallback=|| view! { }>
                <div class="flex justify-center gap-4">
                    <button
                        class="bg-white text-slate-950 px-8 py-3 rounded-xl font-bold flex items-center gap-2 hover:bg-slate-200"
                        on:click=move |_| on_complete.call(())
                    >
                        "Go to Catalog →"
                    </button>
                </div>
            </Show>
        </div>
    }
}
