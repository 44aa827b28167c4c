//! Royalties & payments.

use leptos::*;
use orbitx::config::{ADVANCE_ELIGIBLE, NEXT_PAYOUT_DATE};
use orbitx::wallet::{self, AdvanceModal, HISTORY};

use crate::types::AppServices;

#[component]
pub fn WalletView() -> impl IntoView {
    let connected = expect_context::<AppServices>().connected;
    let modal = create_rw_signal(AdvanceModal::default());
    let balance = move || connected.with(|c| wallet::format_balance(wallet::consolidated_balance(c)));

    view! {
        <div class="space-y-8 pb-20">
            <div class="flex justify-between items-end">
                <div>
                    <h2 class="text-3xl font-bold">"Royalties & Payments"</h2>
                    <p class="text-slate-400">"Manage your earnings across all distribution channels."</p>
                </div>
                <div class="text-right">
                    <p class="text-sm text-slate-500 mb-1">"Next Payout Cycle"</p>
                    <p class="font-bold text-indigo-400">{NEXT_PAYOUT_DATE}</p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-gradient-to-br from-indigo-600 to-blue-700 p-8 rounded-3xl shadow-xl shadow-indigo-500/20 text-white flex flex-col justify-between overflow-hidden relative">
                    <div class="relative z-10">
                        <div class="flex justify-between items-start">
                            <div>
                                <p class="text-indigo-100 text-sm font-medium opacity-80 uppercase tracking-wider">"Total Consolidated Balance"</p>
                                <h3 class="text-5xl font-black mt-2">{balance}</h3>
                            </div>
                            <div class="w-12 h-12 bg-white/20 rounded-full flex items-center justify-center text-xl">"👛"</div>
                        </div>

                        <div class="mt-12 flex flex-col sm:flex-row gap-4">
                            <button class="bg-white text-indigo-700 px-8 py-4 rounded-2xl font-bold hover:bg-slate-100 flex items-center justify-center gap-2 shadow-xl">
                                "🏦 Withdraw Funds"
                            </button>
                            <button
                                class="bg-indigo-500/30 border border-white/20 px-8 py-4 rounded-2xl font-bold hover:bg-indigo-500/50 flex items-center justify-center gap-2"
                                on:click=move |_| modal.update(AdvanceModal::open)
                            >
                                <span class="text-yellow-400">"⚡"</span>
                                "Get Royalty Advance"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="space-y-4">
                    <div class="bg-slate-900 border border-slate-800 p-6 rounded-3xl">
                        <div class="flex items-center gap-3 mb-4">
                            <span class="text-yellow-400">"⚡"</span>
                            <h4 class="font-bold">"Fast Payouts"</h4>
                        </div>
                        <p class="text-xs text-slate-400 mb-4">
                            "Opportunity to withdraw money faster than other platforms. Get your funds in as little as 24 hours."
                        </p>
                        <button class="w-full py-2 bg-slate-800 hover:bg-slate-700 rounded-xl text-xs font-bold">"Enable Express Pay"</button>
                    </div>
                    <div class="bg-slate-900 border border-slate-800 p-6 rounded-3xl">
                        <div class="flex items-center gap-3 mb-4">
                            <span class="text-indigo-400">"⛨"</span>
                            <h4 class="font-bold">"Advance Eligible"</h4>
                        </div>
                        <p class="text-xs text-slate-400">
                            "Based on your performance, you are eligible for an advance of up to "
                            <span class="text-white font-bold">{ADVANCE_ELIGIBLE}</span>
                            "."
                        </p>
                    </div>
                </div>
            </div>

            <Show when=move || modal.with(|m| m.open) fallback=|| view! { }>
                <AdvanceDialog modal=modal/>
            </Show>

            <div class="bg-slate-900 border border-slate-800 rounded-3xl overflow-hidden">
                <div class="p-6 border-b border-slate-800">
                    <h3 class="text-xl font-bold flex items-center gap-2">
                        <span class="text-slate-400">"⟲"</span>
                        "Unified History"
                    </h3>
                </div>
                <div class="overflow-x-auto">
                    <table class="w-full text-left">
                        <thead>
                            <tr class="bg-slate-950/50 text-slate-500 text-sm">
                                <th class="px-6 py-4 font-medium">"Date"</th>
                                <th class="px-6 py-4 font-medium">"Source"</th>
                                <th class="px-6 py-4 font-medium">"Description"</th>
                                <th class="px-6 py-4 font-medium">"Amount"</th>
                                <th class="px-6 py-4 font-medium">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-800">
                            {HISTORY
                                .iter()
                                .map(|tx| view! {
                                    <tr class="hover:bg-slate-800/50">
                                        <td class="px-6 py-4 text-slate-300 text-sm">{tx.date}</td>
                                        <td class="px-6 py-4 text-sm font-bold uppercase tracking-widest">{tx.source}</td>
                                        <td class="px-6 py-4 text-sm">{tx.description}</td>
                                        <td class="px-6 py-4 text-sm font-bold">{tx.amount}</td>
                                        <td class="px-6 py-4">
                                            <span class=format!("px-3 py-1 rounded-full text-[10px] font-bold bg-slate-800 {}", tx.status.color())>
                                                {tx.status.label()}
                                            </span>
                                        </td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AdvanceDialog(modal: RwSignal<AdvanceModal>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-slate-950/80 backdrop-blur-sm">
            <div class="bg-slate-900 border border-slate-800 p-8 rounded-3xl max-w-lg w-full shadow-2xl">
                <div class="flex justify-between items-start mb-6">
                    <div class="p-3 bg-yellow-500/10 rounded-2xl text-yellow-400 text-3xl">"⚡"</div>
                    <button class="text-slate-500 hover:text-white" on:click=move |_| modal.update(AdvanceModal::close)>"✕"</button>
                </div>
                <h3 class="text-2xl font-bold mb-2">"Apply for Royalty Advance"</h3>
                <p class="text-slate-400 text-sm mb-6 leading-relaxed">
                    "Benefit of taking advances on future earnings based on your previous song performance. We estimate your next 6 months of earnings and offer them upfront."
                </p>
                <div class="space-y-4 mb-8">
                    <div class="bg-slate-950 p-4 rounded-xl border border-slate-800">
                        <p class="text-xs text-slate-500 uppercase font-bold mb-1">"Eligible Amount"</p>
                        <p class="text-3xl font-black text-white">{ADVANCE_ELIGIBLE.replacen('$', "$ ", 1)}</p>
                    </div>
                    <div class="flex items-center gap-2 text-xs text-slate-500 italic">
                        "ⓘ Repayment is automated via future royalties."
                    </div>
                </div>
                <button
                    class="w-full py-4 bg-yellow-600 hover:bg-yellow-700 text-slate-950 font-black rounded-2xl shadow-xl shadow-yellow-600/20"
                    on:click=move |_| modal.update(AdvanceModal::request)
                >
                    "Request Advance Now"
                </button>
            </div>
        </div>
    }
}
