//! Audio / video release wizard.
//!
//! Type choice, asset placeholders, metadata with an AI audit, then the
//! simulated store hand-off. Completion hands control back to the dashboard.

use leptos::*;
use orbitx::release::{self, ReleaseType, UploadWizard, GENRES};

use crate::components::StepIndicator;
use crate::types::AppServices;

#[component]
pub fn UploadSection(
    /// Called once distribution has been handed off.
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let wizard = create_rw_signal(UploadWizard::new());
    let step = create_memo(move |_| wizard.with(|w| w.step.index()));

    view! {
        <div class="max-w-4xl mx-auto pb-20">
            <div class="mb-10 text-center">
                <h2 class="text-3xl font-bold mb-2">"Create New Release"</h2>
                <p class="text-slate-400">"The gateway to professional global distribution."</p>
            </div>

            <Show when=move || { step.get() > 0 } fallback=|| view! { }>
                <StepIndicator current=step steps=3/>
            </Show>

            <div class="bg-slate-900 border border-slate-800 rounded-3xl p-8 shadow-xl">
                {move || match step.get() {
                    0 => view! { <TypeStep wizard=wizard/> }.into_view(),
                    1 => view! { <AssetStep wizard=wizard/> }.into_view(),
                    2 => view! { <MetadataStep wizard=wizard/> }.into_view(),
                    _ => view! { <ConfirmStep wizard=wizard on_complete=on_complete/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TypeStep(wizard: RwSignal<UploadWizard>) -> impl IntoView {
    let choose = move |release_type: ReleaseType| {
        log::info!("🎚️ New {} release", release_type);
        wizard.update(|w| w.select_type(release_type));
    };

    view! {
        <div class="space-y-8 text-center">
            <h3 class="text-2xl font-bold">"What are you releasing today?"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <button
                    class="p-8 rounded-3xl border border-slate-800 bg-slate-950/50 hover:border-indigo-500/50 transition-all flex flex-col items-center gap-4"
                    on:click=move |_| choose(ReleaseType::Audio)
                >
                    <div class="w-20 h-20 bg-indigo-500/10 text-indigo-400 rounded-2xl flex items-center justify-center text-4xl">"♫"</div>
                    <div>
                        <h4 class="text-xl font-bold">"Audio Track"</h4>
                        <p class="text-slate-500 text-sm mt-1">"Spotify, Apple, Amazon & 220+ others"</p>
                    </div>
                </button>
                <button
                    class="p-8 rounded-3xl border border-slate-800 bg-slate-950/50 hover:border-rose-500/50 transition-all flex flex-col items-center gap-4"
                    on:click=move |_| choose(ReleaseType::Video)
                >
                    <div class="w-20 h-20 bg-rose-500/10 text-rose-400 rounded-2xl flex items-center justify-center text-4xl">"▶"</div>
                    <div>
                        <h4 class="text-xl font-bold">"Music Video"</h4>
                        <p class="text-slate-500 text-sm mt-1">"Vevo, Apple Music, Tidal, Amazon Video"</p>
                    </div>
                </button>
            </div>
        </div>
    }
}

#[component]
fn AssetStep(wizard: RwSignal<UploadWizard>) -> impl IntoView {
    let release_type = wizard.with_untracked(|w| w.draft.release_type);
    let (accent, glyph) = match release_type {
        ReleaseType::Audio => ("indigo", "♫"),
        ReleaseType::Video => ("rose", "▶"),
    };

    view! {
        <div class="space-y-8">
            <h3 class="text-xl font-bold flex items-center gap-2">
                <span class=format!("text-{}-400", accent)>{glyph}</span>
                "Step 1: Media Asset Upload"
            </h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="space-y-4">
                    <label class="block text-sm font-medium text-slate-400">{release_type.media_label()}</label>
                    <div class=format!("border-2 border-dashed border-slate-800 rounded-2xl p-8 flex flex-col items-center justify-center gap-4 bg-slate-950/50 cursor-pointer hover:border-{}-500/50", accent)>
                        <div class=format!("p-4 rounded-full bg-{a}-500/10 text-{a}-400 text-3xl", a = accent)>"⇪"</div>
                        <div class="text-center">
                            <p class="font-bold">{format!("Select {} File", release_type)}</p>
                            <p class="text-xs text-slate-500 mt-1">{release_type.media_limit()}</p>
                        </div>
                    </div>
                </div>

                <div class="space-y-4">
                    <label class="block text-sm font-medium text-slate-400">{release_type.artwork_label()}</label>
                    <div class="border-2 border-dashed border-slate-800 rounded-2xl p-8 flex flex-col items-center justify-center gap-4 hover:border-purple-500/50 bg-slate-950/50 cursor-pointer">
                        <div class="p-4 bg-purple-500/10 rounded-full text-purple-400 text-3xl">"▣"</div>
                        <div class="text-center">
                            <p class="font-bold">"Select Artwork"</p>
                            <p class="text-xs text-slate-500 mt-1">"RGB, 300 DPI, JPG/PNG"</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="flex justify-between">
                <button class="text-slate-400 hover:text-white px-6 py-3 font-bold" on:click=move |_| wizard.update(|w| w.back())>
                    "Back"
                </button>
                <button
                    class="bg-indigo-600 hover:bg-indigo-700 text-white px-8 py-3 rounded-xl font-bold flex items-center gap-2"
                    on:click=move |_| wizard.update(|w| w.next())
                >
                    "Next Step ›"
                </button>
            </div>
        </div>
    }
}

#[component]
fn MetadataStep(wizard: RwSignal<UploadWizard>) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let submitting = move || wizard.with(|w| w.submitting);
    let kind = wizard.with_untracked(|w| w.draft.release_type);

    let on_audit = move |_| {
        let Some(request) = wizard.try_update(|w| w.begin_audit()).flatten() else {
            return;
        };
        let services = services.get_value();
        spawn_local(async move {
            let reply = release::run_audit(&*services.gateway, &request).await;
            wizard.update(|w| w.finish_audit(reply));
        });
    };

    let input_class = "w-full bg-slate-950 border border-slate-800 rounded-xl px-4 py-3 focus:border-indigo-500 outline-none";

    view! {
        <div class="space-y-6">
            <h3 class="text-xl font-bold flex items-center gap-2">
                <span class="text-indigo-400">"#"</span>
                "Step 2: Metadata & Delivery Specs"
            </h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <label class="text-sm text-slate-400">{format!("{} Title", kind)}</label>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Official Title"
                        prop:value=move || wizard.with(|w| w.draft.title.clone())
                        on:input=move |ev| wizard.update(|w| w.draft.title = event_target_value(&ev))
                    />
                </div>
                <div class="space-y-2">
                    <label class="text-sm text-slate-400">"Primary Artist"</label>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Artist Name"
                        prop:value=move || wizard.with(|w| w.draft.artist.clone())
                        on:input=move |ev| wizard.update(|w| w.draft.artist = event_target_value(&ev))
                    />
                </div>
                <div class="space-y-2">
                    <label class="text-sm text-slate-400">"Primary Genre"</label>
                    <select
                        class=input_class
                        prop:value=move || wizard.with(|w| w.draft.genre.clone())
                        on:change=move |ev| wizard.update(|w| w.draft.genre = event_target_value(&ev))
                    >
                        {GENRES
                            .iter()
                            .map(|genre| view! { <option value=*genre>{*genre}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="space-y-2">
                    <label class="text-sm text-slate-400">"Release Date"</label>
                    <input
                        type="date"
                        class=input_class
                        prop:value=move || wizard.with(|w| w.draft.release_date.clone())
                        on:input=move |ev| wizard.update(|w| w.draft.release_date = event_target_value(&ev))
                    />
                </div>
                <div class="md:col-span-2 space-y-2">
                    <label class="text-sm text-slate-400">"Description / Credits"</label>
                    <textarea
                        class=format!("{} min-h-[100px]", input_class)
                        placeholder="Lyrics, producer credits, and social links..."
                        prop:value=move || wizard.with(|w| w.draft.description.clone())
                        on:input=move |ev| wizard.update(|w| w.draft.description = event_target_value(&ev))
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
                    class="bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white px-8 py-3 rounded-xl font-bold flex items-center gap-2"
                    disabled=submitting
                    on:click=on_audit
                >
                    {move || if submitting() { "⏳ Auditing Metadata..." } else { "✦ Run Metadata Audit" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ConfirmStep(wizard: RwSignal<UploadWizard>, on_complete: Callback<()>) -> impl IntoView {
    let services = store_value(expect_context::<AppServices>());
    let submitting = move || wizard.with(|w| w.submitting);
    let release_type = wizard.with_untracked(|w| w.draft.release_type);

    let on_distribute = move |_| {
        if !wizard.try_update(|w| w.begin_distribution()).unwrap_or(false) {
            return;
        }
        let services = services.get_value();
        let draft = wizard.with_untracked(|w| w.draft.clone());
        spawn_local(async move {
            release::distribute(&services.clock, &draft).await;
            wizard.update(|w| w.finish_distribution());
            on_complete.call(());
        });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center gap-4 p-6 bg-indigo-500/5 border border-indigo-500/20 rounded-2xl">
                <span class="text-indigo-400 text-2xl shrink-0">"✦"</span>
                <div>
                    <h4 class="font-bold text-indigo-400">"Gemini AI Audit Result"</h4>
                    <p class="text-xs text-slate-400 mt-1 whitespace-pre-wrap">
                        {move || wizard.with(|w| w.audit_summary().to_string())}
                    </p>
                </div>
            </div>

            <div class="text-center py-4">
                <h3 class="text-2xl font-bold">"Confirm Global Distribution"</h3>
                <p class="text-slate-400 max-w-md mx-auto mt-2">
                    {format!("Your {} will be delivered to:", release_type.as_str().to_lowercase())}
                </p>
                <div class="flex flex-wrap justify-center gap-4 mt-6">
                    {release_type
                        .targets()
                        .iter()
                        .chain(std::iter::once(&"+220 More"))
                        .map(|store| view! {
                            <span class="px-4 py-2 bg-slate-950 border border-slate-800 rounded-full text-xs font-bold">{*store}</span>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="flex justify-center gap-4 pt-6">
                <button
                    class="text-slate-400 hover:text-white px-8 py-3 font-bold"
                    disabled=submitting
                    on:click=move |_| wizard.update(|w| w.back())
                >
                    "Modify Details"
                </button>
                <button
                    class="bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 text-white px-10 py-3 rounded-xl font-bold flex items-center gap-3 shadow-lg shadow-indigo-500/20"
                    disabled=submitting
                    on:click=on_distribute
                >
                    {move || if submitting() { "⏳ Starting Distribution..." } else { "✓ Begin Distribution" }}
                </button>
            </div>
        </div>
    }
}
